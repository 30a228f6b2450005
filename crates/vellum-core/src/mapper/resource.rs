//! Single-resource mapper contract.

use serde_json::Number;

use crate::document::ObjectBuilder;
use crate::request::HttpHeaders;
use crate::single_model::SingleModel;
use crate::types::FieldPath;

/// Visitor for rendering one resource as a standalone document.
///
/// Localized strings arrive through [`map_string_field`] and binary fields
/// through [`map_link`], already resolved to plain values. The embedded
/// variants additionally receive the embedding path that locates the
/// nested resource inside the document.
///
/// [`map_string_field`]: ResourceMapper::map_string_field
/// [`map_link`]: ResourceMapper::map_link
#[allow(unused_variables)]
pub trait ResourceMapper {
    /// Called once before any field of the resource is mapped.
    fn on_start(&self, doc: &mut ObjectBuilder, model: &SingleModel, headers: &HttpHeaders) {}

    /// Called once after every field of the resource has been mapped.
    fn on_finish(&self, doc: &mut ObjectBuilder, model: &SingleModel, headers: &HttpHeaders) {}

    /// Map a boolean field.
    fn map_boolean_field(&self, doc: &mut ObjectBuilder, name: &str, value: bool) {}

    /// Map a number field.
    fn map_number_field(&self, doc: &mut ObjectBuilder, name: &str, value: &Number) {}

    /// Map a string field.
    fn map_string_field(&self, doc: &mut ObjectBuilder, name: &str, value: &str) {}

    /// Map a link field.
    fn map_link(&self, doc: &mut ObjectBuilder, name: &str, url: &str) {}

    /// Map the resource's type labels.
    fn map_types(&self, doc: &mut ObjectBuilder, types: &[String]) {}

    /// Map the resource's canonical URL.
    fn map_self_url(&self, doc: &mut ObjectBuilder, url: &str) {}

    /// Map a boolean field of an embedded resource.
    fn map_embedded_resource_boolean_field(
        &self,
        doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        value: bool,
    ) {
    }

    /// Map a number field of an embedded resource.
    fn map_embedded_resource_number_field(
        &self,
        doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        value: &Number,
    ) {
    }

    /// Map a string field of an embedded resource.
    fn map_embedded_resource_string_field(
        &self,
        doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        value: &str,
    ) {
    }

    /// Map a link field of an embedded resource.
    fn map_embedded_resource_link(
        &self,
        doc: &mut ObjectBuilder,
        path: &FieldPath,
        name: &str,
        url: &str,
    ) {
    }

    /// Map the type labels of an embedded resource.
    fn map_embedded_resource_types(
        &self,
        doc: &mut ObjectBuilder,
        path: &FieldPath,
        types: &[String],
    ) {
    }

    /// Map the canonical URL of an embedded resource.
    ///
    /// Emitted alongside [`map_linked_resource_url`] for every embedded
    /// relation; the format decides which rendition it keeps.
    ///
    /// [`map_linked_resource_url`]: ResourceMapper::map_linked_resource_url
    fn map_embedded_resource_url(&self, doc: &mut ObjectBuilder, path: &FieldPath, url: &str) {}

    /// Map the URL of a linked resource or related collection.
    fn map_linked_resource_url(&self, doc: &mut ObjectBuilder, path: &FieldPath, url: &str) {}
}
