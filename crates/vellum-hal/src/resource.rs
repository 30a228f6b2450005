//! Single-resource HAL mapper.

use serde_json::Number;
use vellum_core::{FieldPath, ObjectBuilder, ResourceMapper};

use crate::embedded_scope;

/// Maps one resource to a standalone HAL document.
#[derive(Clone, Copy, Debug, Default)]
pub struct HalResourceMapper;

impl HalResourceMapper {
    pub fn new() -> Self {
        Self
    }
}

impl ResourceMapper for HalResourceMapper {
    fn map_boolean_field(&self, doc: &mut ObjectBuilder, name: &str, value: bool) {
        doc.put(name, value);
    }

    fn map_number_field(&self, doc: &mut ObjectBuilder, name: &str, value: &Number) {
        doc.put(name, value.clone());
    }

    fn map_string_field(&self, doc: &mut ObjectBuilder, name: &str, value: &str) {
        doc.put(name, value);
    }

    fn map_link(&self, doc: &mut ObjectBuilder, name: &str, url: &str) {
        doc.put_nested(&["_links", name], "href", url);
    }

    fn map_self_url(&self, doc: &mut ObjectBuilder, url: &str) {
        doc.put_nested(&["_links", "self"], "href", url);
    }

    fn map_embedded_resource_boolean_field(
        &self,
        doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        value: bool,
    ) {
        doc.put_nested(&embedded_scope(&path.segments()), name, value);
    }

    fn map_embedded_resource_number_field(
        &self,
        doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        value: &Number,
    ) {
        doc.put_nested(&embedded_scope(&path.segments()), name, value.clone());
    }

    fn map_embedded_resource_string_field(
        &self,
        doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        value: &str,
    ) {
        doc.put_nested(&embedded_scope(&path.segments()), name, value);
    }

    fn map_embedded_resource_link(
        &self,
        doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        url: &str,
    ) {
        let segments = path.segments();
        let mut scope = embedded_scope(&segments);
        scope.push("_links");
        scope.push(name);
        doc.put_nested(&scope, "href", url);
    }

    fn map_embedded_resource_url(&self, doc: &mut ObjectBuilder, path: &FieldPath, url: &str) {
        let segments = path.segments();
        let mut scope = embedded_scope(&segments);
        scope.push("_links");
        scope.push("self");
        doc.put_nested(&scope, "href", url);
    }

    fn map_linked_resource_url(&self, doc: &mut ObjectBuilder, path: &FieldPath, url: &str) {
        // The link lives in the parent resource's `_links`, named after the
        // leaf relation.
        let Some((leaf, parents)) = path.split_last() else {
            return;
        };
        let mut scope = embedded_scope(&parents);
        scope.push("_links");
        scope.push(leaf);
        doc.put_nested(&scope, "href", url);
    }
}
