//! vellum-hal - HAL message mappers for vellum.
//!
//! Renders pages and single resources as HAL documents: scalar fields
//! become plain properties, link-like fields live under `_links`, embedded
//! resources under `_embedded`, nested per the embedding path. An embedded
//! relation keeps both its `_links` entry and its `_embedded` copy, as HAL
//! encourages. Type labels have no HAL rendition and are dropped.

mod page;
mod resource;

pub use page::HalPageMapper;
pub use resource::HalResourceMapper;

/// The `_embedded` scope for a nested path: `["_embedded", a, "_embedded", b]`.
fn embedded_scope<'a>(segments: &[&'a str]) -> Vec<&'a str> {
    let mut scope = Vec::with_capacity(segments.len() * 2);
    for segment in segments {
        scope.push("_embedded");
        scope.push(segment);
    }
    scope
}
