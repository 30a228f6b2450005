//! Page mapper contract.

use serde_json::Number;

use crate::document::ObjectBuilder;
use crate::page::PageMeta;
use crate::request::HttpHeaders;
use crate::single_model::SingleModel;
use crate::types::FieldPath;

/// Visitor for rendering a page of resources.
///
/// Item-level calls receive the item's own builder; the lifecycle hooks
/// additionally receive the page builder so finished items can be nested
/// into the page document. As with [`ResourceMapper`], localized strings
/// arrive through the string call and binaries through the link call.
///
/// [`ResourceMapper`]: crate::mapper::ResourceMapper
#[allow(unused_variables)]
pub trait PageMapper {
    /// Called once before anything else is mapped.
    fn on_start(&self, page_doc: &mut ObjectBuilder, meta: &PageMeta, headers: &HttpHeaders) {}

    /// Called once after everything has been mapped.
    fn on_finish(&self, page_doc: &mut ObjectBuilder, meta: &PageMeta, headers: &HttpHeaders) {}

    /// Map the total number of items in the collection.
    fn map_item_total_count(&self, page_doc: &mut ObjectBuilder, count: usize) {}

    /// Map the nominal number of items on this page.
    fn map_page_count(&self, page_doc: &mut ObjectBuilder, count: usize) {}

    /// Map the collection's own URL.
    fn map_collection_url(&self, page_doc: &mut ObjectBuilder, url: &str) {}

    /// Map the URL of the current page.
    fn map_current_page_url(&self, page_doc: &mut ObjectBuilder, url: &str) {}

    /// Map the URL of the first page.
    fn map_first_page_url(&self, page_doc: &mut ObjectBuilder, url: &str) {}

    /// Map the URL of the last page.
    fn map_last_page_url(&self, page_doc: &mut ObjectBuilder, url: &str) {}

    /// Map the URL of the next page. Only called when a next page exists.
    fn map_next_page_url(&self, page_doc: &mut ObjectBuilder, url: &str) {}

    /// Map the URL of the previous page. Only called when one exists.
    fn map_previous_page_url(&self, page_doc: &mut ObjectBuilder, url: &str) {}

    /// Called before an item's fields are mapped.
    fn on_start_item(
        &self,
        page_doc: &mut ObjectBuilder,
        item_doc: &mut ObjectBuilder,
        model: &SingleModel,
        headers: &HttpHeaders,
    ) {
    }

    /// Called after an item's fields have been mapped.
    fn on_finish_item(
        &self,
        page_doc: &mut ObjectBuilder,
        item_doc: &mut ObjectBuilder,
        model: &SingleModel,
        headers: &HttpHeaders,
    ) {
    }

    /// Map a boolean field of an item.
    fn map_item_boolean_field(&self, item_doc: &mut ObjectBuilder, name: &str, value: bool) {}

    /// Map a number field of an item.
    fn map_item_number_field(&self, item_doc: &mut ObjectBuilder, name: &str, value: &Number) {}

    /// Map a string field of an item.
    fn map_item_string_field(&self, item_doc: &mut ObjectBuilder, name: &str, value: &str) {}

    /// Map a link field of an item.
    fn map_item_link(&self, item_doc: &mut ObjectBuilder, name: &str, url: &str) {}

    /// Map an item's type labels.
    fn map_item_types(&self, item_doc: &mut ObjectBuilder, types: &[String]) {}

    /// Map an item's canonical URL.
    fn map_item_self_url(&self, item_doc: &mut ObjectBuilder, url: &str) {}

    /// Map a boolean field of a resource embedded in an item.
    fn map_item_embedded_resource_boolean_field(
        &self,
        item_doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        value: bool,
    ) {
    }

    /// Map a number field of a resource embedded in an item.
    fn map_item_embedded_resource_number_field(
        &self,
        item_doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        value: &Number,
    ) {
    }

    /// Map a string field of a resource embedded in an item.
    fn map_item_embedded_resource_string_field(
        &self,
        item_doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        value: &str,
    ) {
    }

    /// Map a link field of a resource embedded in an item.
    fn map_item_embedded_resource_link(
        &self,
        item_doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        url: &str,
    ) {
    }

    /// Map the type labels of a resource embedded in an item.
    fn map_item_embedded_resource_types(
        &self,
        item_doc: &mut ObjectBuilder,
        path: &FieldPath,
        types: &[String],
    ) {
    }

    /// Map the canonical URL of a resource embedded in an item.
    ///
    /// Emitted alongside [`map_item_linked_resource_url`] for every
    /// embedded relation; the format decides which rendition it keeps.
    ///
    /// [`map_item_linked_resource_url`]: PageMapper::map_item_linked_resource_url
    fn map_item_embedded_resource_url(
        &self,
        item_doc: &mut ObjectBuilder,
        path: &FieldPath,
        url: &str,
    ) {
    }

    /// Map the URL of a linked resource or related collection of an item.
    fn map_item_linked_resource_url(
        &self,
        item_doc: &mut ObjectBuilder,
        path: &FieldPath,
        url: &str,
    ) {
    }
}
