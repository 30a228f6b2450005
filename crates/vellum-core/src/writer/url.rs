//! URL derivation for collections, pages and single resources.

use crate::page::PageMeta;
use crate::types::{ResourcePath, ServerUrl};

/// Which page of a collection a URL should address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageType {
    /// The page being written.
    Current,
    /// The first page.
    First,
    /// The last page.
    Last,
    /// The page after the current one.
    Next,
    /// The page before the current one.
    Previous,
}

impl PageType {
    /// The page number this variant addresses.
    ///
    /// `Next` and `Previous` are only meaningful when the page reports
    /// `has_next`/`has_previous`; the writer checks before calling.
    pub fn page_number(self, meta: &PageMeta) -> usize {
        match self {
            PageType::Current => meta.page_number,
            PageType::First => 1,
            PageType::Last => meta.last_page_number,
            PageType::Next => meta.page_number + 1,
            PageType::Previous => meta.page_number.saturating_sub(1).max(1),
        }
    }
}

/// URL of a collection: `{server}/p/{name}`, or nested under the parent
/// resource for related collections served as pages.
pub fn collection_url(server: &ServerUrl, parent: Option<&ResourcePath>, name: &str) -> String {
    match parent {
        Some(path) => server.join(&["p", path.name(), path.id(), name]),
        None => server.join(&["p", name]),
    }
}

/// URL of one page of a collection.
pub fn collection_page_url(collection_url: &str, meta: &PageMeta, page_type: PageType) -> String {
    format!(
        "{}?page={}&per_page={}",
        collection_url,
        page_type.page_number(meta),
        meta.items_per_page
    )
}

/// Canonical URL of a single resource.
pub fn single_url(server: &ServerUrl, path: &ResourcePath) -> String {
    server.join(&["p", path.name(), path.id()])
}

/// URL of a binary field of a resource.
pub fn binary_url(server: &ServerUrl, path: &ResourcePath, binary_id: &str) -> String {
    server.join(&["b", path.name(), path.id(), binary_id])
}

/// URL of a related collection nested under a resource.
pub fn nested_collection_url(server: &ServerUrl, path: &ResourcePath, name: &str) -> String {
    server.join(&["p", path.name(), path.id(), name])
}
