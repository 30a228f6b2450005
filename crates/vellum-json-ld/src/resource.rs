//! Single-resource JSON-LD mapper.

use serde_json::Number;
use vellum_core::{FieldPath, HttpHeaders, ObjectBuilder, ResourceMapper, SingleModel};

use crate::context_value;

/// Maps one resource to a standalone JSON-LD document.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonLdResourceMapper;

impl JsonLdResourceMapper {
    pub fn new() -> Self {
        Self
    }
}

impl ResourceMapper for JsonLdResourceMapper {
    fn on_start(&self, doc: &mut ObjectBuilder, _model: &SingleModel, _headers: &HttpHeaders) {
        doc.put("@context", context_value());
    }

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
        doc.put(name, url);
    }

    fn map_types(&self, doc: &mut ObjectBuilder, types: &[String]) {
        doc.put("@type", types.to_vec());
    }

    fn map_self_url(&self, doc: &mut ObjectBuilder, url: &str) {
        doc.put("@id", url);
    }

    fn map_embedded_resource_boolean_field(
        &self,
        doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        value: bool,
    ) {
        doc.put_nested(&path.segments(), name, value);
    }

    fn map_embedded_resource_number_field(
        &self,
        doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        value: &Number,
    ) {
        doc.put_nested(&path.segments(), name, value.clone());
    }

    fn map_embedded_resource_string_field(
        &self,
        doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        value: &str,
    ) {
        doc.put_nested(&path.segments(), name, value);
    }

    fn map_embedded_resource_link(
        &self,
        doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        url: &str,
    ) {
        doc.put_nested(&path.segments(), name, url);
    }

    fn map_embedded_resource_types(
        &self,
        doc: &mut ObjectBuilder,
        path: &FieldPath,
        types: &[String],
    ) {
        doc.put_nested(&path.segments(), "@type", types.to_vec());
    }

    fn map_embedded_resource_url(&self, doc: &mut ObjectBuilder, path: &FieldPath, url: &str) {
        doc.put_nested(&path.segments(), "@id", url);
    }

    fn map_linked_resource_url(&self, doc: &mut ObjectBuilder, path: &FieldPath, url: &str) {
        // The leaf segment becomes a URL-valued field of its parent.
        if let Some((leaf, parents)) = path.split_last() {
            doc.put_nested(&parents, leaf, url);
        }
    }
}
