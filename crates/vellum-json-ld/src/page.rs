//! Page JSON-LD mapper.

use serde_json::Number;
use vellum_core::{
    FieldPath, HttpHeaders, ObjectBuilder, PageMapper, PageMeta, ResourceMapper, SingleModel,
};

use crate::{JsonLdResourceMapper, context_value};

/// Maps a page of resources to a JSON-LD collection document.
///
/// The page itself becomes a schema.org `Collection` with a
/// `PartialCollectionView` block for navigation; each finished item is
/// nested into the `member` array. Item-level mapping delegates to
/// [`JsonLdResourceMapper`], minus the per-item `@context`.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonLdPageMapper {
    resource: JsonLdResourceMapper,
}

impl JsonLdPageMapper {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageMapper for JsonLdPageMapper {
    fn on_start(&self, page_doc: &mut ObjectBuilder, _meta: &PageMeta, _headers: &HttpHeaders) {
        page_doc.put("@context", context_value());
        page_doc.put("@type", vec!["Collection".to_string()]);
    }

    fn map_item_total_count(&self, page_doc: &mut ObjectBuilder, count: usize) {
        page_doc.put("totalItems", count);
    }

    fn map_page_count(&self, page_doc: &mut ObjectBuilder, count: usize) {
        page_doc.put("numberOfItems", count);
    }

    fn map_collection_url(&self, page_doc: &mut ObjectBuilder, url: &str) {
        page_doc.put("@id", url);
    }

    fn map_current_page_url(&self, page_doc: &mut ObjectBuilder, url: &str) {
        page_doc.put_nested(&["view"], "@type", "PartialCollectionView");
        page_doc.put_nested(&["view"], "@id", url);
    }

    fn map_first_page_url(&self, page_doc: &mut ObjectBuilder, url: &str) {
        page_doc.put_nested(&["view"], "first", url);
    }

    fn map_last_page_url(&self, page_doc: &mut ObjectBuilder, url: &str) {
        page_doc.put_nested(&["view"], "last", url);
    }

    fn map_next_page_url(&self, page_doc: &mut ObjectBuilder, url: &str) {
        page_doc.put_nested(&["view"], "next", url);
    }

    fn map_previous_page_url(&self, page_doc: &mut ObjectBuilder, url: &str) {
        page_doc.put_nested(&["view"], "previous", url);
    }

    fn on_finish_item(
        &self,
        page_doc: &mut ObjectBuilder,
        item_doc: &mut ObjectBuilder,
        _model: &SingleModel,
        _headers: &HttpHeaders,
    ) {
        page_doc.push("member", std::mem::take(item_doc).build());
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

    fn map_item_types(&self, item_doc: &mut ObjectBuilder, types: &[String]) {
        self.resource.map_types(item_doc, types);
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

    fn map_item_embedded_resource_types(
        &self,
        item_doc: &mut ObjectBuilder,
        path: &FieldPath,
        types: &[String],
    ) {
        self.resource.map_embedded_resource_types(item_doc, path, types);
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
