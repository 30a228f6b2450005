//! Field and relation extraction for one resolved resource.

use serde_json::Number;
use tracing::debug;

use crate::representor::SharedRepresentor;
use crate::request::RequestInfo;
use crate::single_model::SingleModel;
use crate::types::{FieldPath, ResourcePath};

use super::url;

/// Streams the fields and relations of one resource whose representor and
/// path both resolved.
///
/// Construction is the proof of resolution: callers that fail to produce a
/// `FieldsWriter` skip the resource without emitting anything. Each
/// `write_*` pass is finite and one-shot, visiting fields in the
/// representor's registration order.
pub struct FieldsWriter<'a> {
    model: &'a SingleModel,
    request: &'a RequestInfo,
    representor: SharedRepresentor,
    path: ResourcePath,
    embedded_path: FieldPath,
}

impl<'a> FieldsWriter<'a> {
    pub(crate) fn new(
        model: &'a SingleModel,
        request: &'a RequestInfo,
        representor: SharedRepresentor,
        path: ResourcePath,
        embedded_path: FieldPath,
    ) -> Self {
        Self {
            model,
            request,
            representor,
            path,
            embedded_path,
        }
    }

    /// The embedding path of this resource; empty for top-level items.
    pub fn embedded_path(&self) -> &FieldPath {
        &self.embedded_path
    }

    /// The resolved path of this resource.
    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// Stream `(name, value)` for every boolean field with a value.
    pub fn write_boolean_fields(&self, mut sink: impl FnMut(&str, bool)) {
        self.representor.each_boolean_field(self.model, &mut sink);
    }

    /// Stream `(name, value)` for every localized string field, resolved
    /// against the request's language preferences.
    pub fn write_localized_string_fields(&self, mut sink: impl FnMut(&str, &str)) {
        let language = self.request.language();
        self.representor
            .each_localized_string_field(self.model, &language, &mut sink);
    }

    /// Stream `(name, value)` for every number field with a value.
    pub fn write_number_fields(&self, mut sink: impl FnMut(&str, &Number)) {
        self.representor.each_number_field(self.model, &mut sink);
    }

    /// Stream `(name, value)` for every string field with a value.
    pub fn write_string_fields(&self, mut sink: impl FnMut(&str, &str)) {
        self.representor.each_string_field(self.model, &mut sink);
    }

    /// Stream `(name, url)` for every link field.
    pub fn write_links(&self, mut sink: impl FnMut(&str, &str)) {
        self.representor.each_link(&mut sink);
    }

    /// Deliver the resource's type labels in a single call.
    pub fn write_types(&self, sink: impl FnOnce(&[String])) {
        sink(self.representor.types());
    }

    /// Stream `(name, url)` for every binary field, as binary URLs under
    /// this resource's path.
    pub fn write_binaries(&self, mut sink: impl FnMut(&str, &str)) {
        let server = self.request.server_url();
        self.representor.each_binary(&mut |name| {
            let binary_url = url::binary_url(server, &self.path, name);
            sink(name, &binary_url);
        });
    }

    /// Deliver the resource's canonical URL in a single call.
    pub fn write_self_url(&self, sink: impl FnOnce(&str)) {
        sink(&url::single_url(self.request.server_url(), &self.path));
    }

    /// Walk the embedded related resources.
    ///
    /// For every relation whose target model and path resolve, emits the
    /// linked-URL sink, then the embedded-URL sink, then the model sink,
    /// each carrying the accumulator extended with the relation key.
    /// The model sink is where the caller recurses. All sinks receive
    /// `ctx`, the caller's output state, threaded through so one pass can
    /// feed several sinks. Unresolvable targets are skipped.
    pub fn write_embedded_related_models<C>(
        &self,
        ctx: &mut C,
        path_of: &dyn Fn(&SingleModel) -> Option<ResourcePath>,
        mut model_sink: impl FnMut(&mut C, &SingleModel, &FieldPath),
        mut linked_url_sink: impl FnMut(&mut C, &str, &FieldPath),
        mut embedded_url_sink: impl FnMut(&mut C, &str, &FieldPath),
    ) {
        self.representor.each_embedded(self.model, &mut |key, target| {
            let nested_path = self.embedded_path.child(key);
            match path_of(&target) {
                Some(target_path) => {
                    let target_url = url::single_url(self.request.server_url(), &target_path);
                    linked_url_sink(ctx, &target_url, &nested_path);
                    embedded_url_sink(ctx, &target_url, &nested_path);
                    model_sink(ctx, &target, &nested_path);
                }
                None => debug!(
                    relation = key,
                    model = %target.model_type(),
                    "skipping embedded resource without representor or path"
                ),
            }
        });
    }

    /// Walk the linked related resources, emitting one URL per target that
    /// resolves. No recursion.
    pub fn write_linked_related_models(
        &self,
        path_of: &dyn Fn(&SingleModel) -> Option<ResourcePath>,
        mut sink: impl FnMut(&str, &FieldPath),
    ) {
        self.representor.each_linked(self.model, &mut |key, target| {
            let nested_path = self.embedded_path.child(key);
            match path_of(&target) {
                Some(target_path) => {
                    let target_url = url::single_url(self.request.server_url(), &target_path);
                    sink(&target_url, &nested_path);
                }
                None => debug!(
                    relation = key,
                    model = %target.model_type(),
                    "skipping linked resource without representor or path"
                ),
            }
        });
    }

    /// Walk the related collections, emitting one nested-collection URL per
    /// relation whose target resource name resolves.
    pub fn write_related_collections(
        &self,
        name_of: &dyn Fn(&str) -> Option<String>,
        mut sink: impl FnMut(&str, &FieldPath),
    ) {
        self.representor.each_related_collection(&mut |key, model_type| {
            let nested_path = self.embedded_path.child(key);
            match name_of(model_type.name()) {
                Some(name) => {
                    let collection_url =
                        url::nested_collection_url(self.request.server_url(), &self.path, &name);
                    sink(&collection_url, &nested_path);
                }
                None => debug!(
                    relation = key,
                    model = %model_type,
                    "skipping related collection without resource name"
                ),
            }
        });
    }
}
