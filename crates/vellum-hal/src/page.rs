//! Page HAL mapper.

use serde_json::Number;
use vellum_core::{FieldPath, HttpHeaders, ObjectBuilder, PageMapper, ResourceMapper, SingleModel};

use crate::HalResourceMapper;

/// Maps a page of resources to a HAL collection document.
///
/// Counts become `total` and `count`; navigation goes into `_links` with
/// the conventional `self`/`first`/`last`/`next`/`prev` rels; each finished
/// item is nested into the `_embedded.item` array. Item-level mapping
/// delegates to [`HalResourceMapper`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HalPageMapper {
    resource: HalResourceMapper,
}

impl HalPageMapper {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageMapper for HalPageMapper {
    fn map_item_total_count(&self, page_doc: &mut ObjectBuilder, count: usize) {
        page_doc.put("total", count);
    }

    fn map_page_count(&self, page_doc: &mut ObjectBuilder, count: usize) {
        page_doc.put("count", count);
    }

    fn map_collection_url(&self, page_doc: &mut ObjectBuilder, url: &str) {
        page_doc.put_nested(&["_links", "collection"], "href", url);
    }

    fn map_current_page_url(&self, page_doc: &mut ObjectBuilder, url: &str) {
        page_doc.put_nested(&["_links", "self"], "href", url);
    }

    fn map_first_page_url(&self, page_doc: &mut ObjectBuilder, url: &str) {
        page_doc.put_nested(&["_links", "first"], "href", url);
    }

    fn map_last_page_url(&self, page_doc: &mut ObjectBuilder, url: &str) {
        page_doc.put_nested(&["_links", "last"], "href", url);
    }

    fn map_next_page_url(&self, page_doc: &mut ObjectBuilder, url: &str) {
        page_doc.put_nested(&["_links", "next"], "href", url);
    }

    fn map_previous_page_url(&self, page_doc: &mut ObjectBuilder, url: &str) {
        page_doc.put_nested(&["_links", "prev"], "href", url);
    }

    fn on_finish_item(
        &self,
        page_doc: &mut ObjectBuilder,
        item_doc: &mut ObjectBuilder,
        _model: &SingleModel,
        _headers: &HttpHeaders,
    ) {
        page_doc.push_nested(&["_embedded"], "item", std::mem::take(item_doc).build());
    }

    fn map_item_boolean_field(&self, item_doc: &mut ObjectBuilder, name: &str, value: bool) {
        self.resource.map_boolean_field(item_doc, name, value);
    }

    fn map_item_number_field(&self, item_doc: &mut ObjectBuilder, name: &str, value: &Number) {
        self.resource.map_number_field(item_doc, name, value);
    }

    fn map_item_string_field(&self, item_doc: &mut ObjectBuilder, name: &str, value: &str) {
        self.resource.map_string_field(item_doc, name, value);
    }

    fn map_item_link(&self, item_doc: &mut ObjectBuilder, name: &str, url: &str) {
        self.resource.map_link(item_doc, name, url);
    }

    fn map_item_self_url(&self, item_doc: &mut ObjectBuilder, url: &str) {
        self.resource.map_self_url(item_doc, url);
    }

    fn map_item_embedded_resource_boolean_field(
        &self,
        item_doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        value: bool,
    ) {
        self.resource
            .map_embedded_resource_boolean_field(item_doc, path, name, value);
    }

    fn map_item_embedded_resource_number_field(
        &self,
        item_doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        value: &Number,
    ) {
        self.resource
            .map_embedded_resource_number_field(item_doc, path, name, value);
    }

    fn map_item_embedded_resource_string_field(
        &self,
        item_doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        value: &str,
    ) {
        self.resource
            .map_embedded_resource_string_field(item_doc, path, name, value);
    }

    fn map_item_embedded_resource_link(
        &self,
        item_doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        url: &str,
    ) {
        self.resource
            .map_embedded_resource_link(item_doc, path, name, url);
    }

    fn map_item_embedded_resource_url(
        &self,
        item_doc: &mut ObjectBuilder,
        path: &FieldPath,
        url: &str,
    ) {
        self.resource.map_embedded_resource_url(item_doc, path, url);
    }

    fn map_item_linked_resource_url(
        &self,
        item_doc: &mut ObjectBuilder,
        path: &FieldPath,
        url: &str,
    ) {
        self.resource.map_linked_resource_url(item_doc, path, url);
    }
}
