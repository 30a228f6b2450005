//! Declarative per-type resource descriptions.
//!
//! A [`Representor`] enumerates everything extractable from a model type:
//! scalar fields by semantic kind, link and binary fields, type labels, the
//! identifier, and the three categories of related resources. One is built
//! and registered per model type at startup; the writer only ever reads
//! them through an injected [`RepresentorResolver`].
//!
//! [`RepresentorResolver`]: crate::resolve::RepresentorResolver

mod registry;
mod related;

pub use registry::RepresentorRegistry;
pub use related::{RelatedCollection, RelatedModel};

use std::any::Any;
use std::sync::Arc;

use serde_json::Number;

use crate::request::Language;
use crate::single_model::{ModelType, SingleModel};
use crate::types::{Identifier, IdentifierKind};

type Getter<T, V> = Box<dyn Fn(&T) -> Option<V> + Send + Sync>;
type LocalizedGetter<T> = Box<dyn Fn(&T, &Language) -> Option<String> + Send + Sync>;

/// Declarative description of how to represent a model type.
///
/// Built once via [`Representor::builder`]; field iteration follows the
/// registration order of the builder calls.
///
/// # Example
///
/// ```
/// use vellum_core::{Identifier, IdentifierKind, Represent, Representor};
///
/// struct Person { id: i64, name: String }
///
/// let representor = Representor::<Person>::builder(IdentifierKind::Number, |p: &Person| {
///     Identifier::Number(p.id)
/// })
/// .types(["Person"])
/// .string_field("name", |p: &Person| Some(p.name.clone()))
/// .build();
///
/// assert_eq!(representor.types(), ["Person"]);
/// ```
pub struct Representor<T> {
    types: Vec<String>,
    identifier_kind: IdentifierKind,
    identifier: Box<dyn Fn(&T) -> Identifier + Send + Sync>,
    boolean_fields: Vec<(String, Getter<T, bool>)>,
    localized_string_fields: Vec<(String, LocalizedGetter<T>)>,
    number_fields: Vec<(String, Getter<T, Number>)>,
    string_fields: Vec<(String, Getter<T, String>)>,
    links: Vec<(String, String)>,
    binaries: Vec<String>,
    embedded: Vec<RelatedModel>,
    linked: Vec<RelatedModel>,
    related_collections: Vec<RelatedCollection>,
}

impl<T: Any + Send + Sync> Representor<T> {
    /// Start building a representor for `T`.
    ///
    /// The identifier extractor is the one piece every representor must
    /// have, so the builder cannot exist without it.
    pub fn builder<F>(identifier_kind: IdentifierKind, identifier: F) -> RepresentorBuilder<T>
    where
        F: Fn(&T) -> Identifier + Send + Sync + 'static,
    {
        RepresentorBuilder {
            representor: Representor {
                types: Vec::new(),
                identifier_kind,
                identifier: Box::new(identifier),
                boolean_fields: Vec::new(),
                localized_string_fields: Vec::new(),
                number_fields: Vec::new(),
                string_fields: Vec::new(),
                links: Vec::new(),
                binaries: Vec::new(),
                embedded: Vec::new(),
                linked: Vec::new(),
                related_collections: Vec::new(),
            },
        }
    }
}

/// Builder for [`Representor`].
pub struct RepresentorBuilder<T> {
    representor: Representor<T>,
}

impl<T: Any + Send + Sync> RepresentorBuilder<T> {
    /// Set the type labels exposed through the mapper's types call.
    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.representor.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Add a boolean field.
    pub fn boolean_field(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&T) -> Option<bool> + Send + Sync + 'static,
    ) -> Self {
        self.representor.boolean_fields.push((name.into(), Box::new(f)));
        self
    }

    /// Add a localized string field, resolved against the request language.
    pub fn localized_string_field(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&T, &Language) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.representor
            .localized_string_fields
            .push((name.into(), Box::new(f)));
        self
    }

    /// Add a number field.
    pub fn number_field(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&T) -> Option<Number> + Send + Sync + 'static,
    ) -> Self {
        self.representor.number_fields.push((name.into(), Box::new(f)));
        self
    }

    /// Add a string field.
    pub fn string_field(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&T) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.representor.string_fields.push((name.into(), Box::new(f)));
        self
    }

    /// Add a link field with a fixed target URL.
    pub fn link(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.representor.links.push((name.into(), url.into()));
        self
    }

    /// Add a binary field, exposed as a URL under the resource's path.
    pub fn binary(mut self, name: impl Into<String>) -> Self {
        self.representor.binaries.push(name.into());
        self
    }

    /// Add an embedded related resource, inlined into the parent document.
    ///
    /// The relation graph is assumed acyclic; the writer recurses into
    /// embedded targets without a depth guard.
    pub fn embedded<S>(
        mut self,
        key: impl Into<String>,
        f: impl Fn(&T) -> Option<S> + Send + Sync + 'static,
    ) -> Self
    where
        S: Any + Send + Sync,
    {
        self.representor
            .embedded
            .push(RelatedModel::new::<T, S, _>(key.into(), f));
        self
    }

    /// Add a linked related resource, referenced by URL only.
    pub fn linked<S>(
        mut self,
        key: impl Into<String>,
        f: impl Fn(&T) -> Option<S> + Send + Sync + 'static,
    ) -> Self
    where
        S: Any + Send + Sync,
    {
        self.representor
            .linked
            .push(RelatedModel::new::<T, S, _>(key.into(), f));
        self
    }

    /// Add a related collection of `S` nested under this resource.
    pub fn related_collection<S: Any>(mut self, key: impl Into<String>) -> Self {
        self.representor
            .related_collections
            .push(RelatedCollection::new(key.into(), ModelType::of::<S>()));
        self
    }

    /// Finish the representor.
    pub fn build(self) -> Representor<T> {
        self.representor
    }
}

/// Object-safe view over a [`Representor`] for the type-erased writer.
///
/// Each `each_*` pass is finite, one-shot, and visits fields in
/// registration order. Extractors returning `None`, and handles that are
/// not of the representor's model type, produce no call.
pub trait Represent: Send + Sync {
    /// The model type this representor describes.
    fn model_type(&self) -> ModelType;

    /// The type labels.
    fn types(&self) -> &[String];

    /// The declared identifier kind.
    fn identifier_kind(&self) -> IdentifierKind;

    /// Extract the identifier from a model handle.
    fn identifier(&self, model: &SingleModel) -> Option<Identifier>;

    /// Visit every boolean field with a value.
    fn each_boolean_field(&self, model: &SingleModel, sink: &mut dyn FnMut(&str, bool));

    /// Visit every localized string field with a value for `language`.
    fn each_localized_string_field(
        &self,
        model: &SingleModel,
        language: &Language,
        sink: &mut dyn FnMut(&str, &str),
    );

    /// Visit every number field with a value.
    fn each_number_field(&self, model: &SingleModel, sink: &mut dyn FnMut(&str, &Number));

    /// Visit every string field with a value.
    fn each_string_field(&self, model: &SingleModel, sink: &mut dyn FnMut(&str, &str));

    /// Visit every link field.
    fn each_link(&self, sink: &mut dyn FnMut(&str, &str));

    /// Visit every binary field name.
    fn each_binary(&self, sink: &mut dyn FnMut(&str));

    /// Visit every embedded related resource that resolves to a target.
    fn each_embedded(&self, model: &SingleModel, sink: &mut dyn FnMut(&str, SingleModel));

    /// Visit every linked related resource that resolves to a target.
    fn each_linked(&self, model: &SingleModel, sink: &mut dyn FnMut(&str, SingleModel));

    /// Visit every related collection.
    fn each_related_collection(&self, sink: &mut dyn FnMut(&str, ModelType));
}

/// A shared, type-erased representor as stored in the registry.
pub type SharedRepresentor = Arc<dyn Represent>;

impl<T: Any + Send + Sync> Represent for Representor<T> {
    fn model_type(&self) -> ModelType {
        ModelType::of::<T>()
    }

    fn types(&self) -> &[String] {
        &self.types
    }

    fn identifier_kind(&self) -> IdentifierKind {
        self.identifier_kind
    }

    fn identifier(&self, model: &SingleModel) -> Option<Identifier> {
        model.downcast_ref::<T>().map(|m| (self.identifier)(m))
    }

    fn each_boolean_field(&self, model: &SingleModel, sink: &mut dyn FnMut(&str, bool)) {
        let Some(m) = model.downcast_ref::<T>() else {
            return;
        };
        for (name, getter) in &self.boolean_fields {
            if let Some(value) = getter(m) {
                sink(name, value);
            }
        }
    }

    fn each_localized_string_field(
        &self,
        model: &SingleModel,
        language: &Language,
        sink: &mut dyn FnMut(&str, &str),
    ) {
        let Some(m) = model.downcast_ref::<T>() else {
            return;
        };
        for (name, getter) in &self.localized_string_fields {
            if let Some(value) = getter(m, language) {
                sink(name, &value);
            }
        }
    }

    fn each_number_field(&self, model: &SingleModel, sink: &mut dyn FnMut(&str, &Number)) {
        let Some(m) = model.downcast_ref::<T>() else {
            return;
        };
        for (name, getter) in &self.number_fields {
            if let Some(value) = getter(m) {
                sink(name, &value);
            }
        }
    }

    fn each_string_field(&self, model: &SingleModel, sink: &mut dyn FnMut(&str, &str)) {
        let Some(m) = model.downcast_ref::<T>() else {
            return;
        };
        for (name, getter) in &self.string_fields {
            if let Some(value) = getter(m) {
                sink(name, &value);
            }
        }
    }

    fn each_link(&self, sink: &mut dyn FnMut(&str, &str)) {
        for (name, url) in &self.links {
            sink(name, url);
        }
    }

    fn each_binary(&self, sink: &mut dyn FnMut(&str)) {
        for name in &self.binaries {
            sink(name);
        }
    }

    fn each_embedded(&self, model: &SingleModel, sink: &mut dyn FnMut(&str, SingleModel)) {
        for related in &self.embedded {
            if let Some(target) = related.resolve(model.as_any()) {
                sink(related.key(), target);
            }
        }
    }

    fn each_linked(&self, model: &SingleModel, sink: &mut dyn FnMut(&str, SingleModel)) {
        for related in &self.linked {
            if let Some(target) = related.resolve(model.as_any()) {
                sink(related.key(), target);
            }
        }
    }

    fn each_related_collection(&self, sink: &mut dyn FnMut(&str, ModelType)) {
        for collection in &self.related_collections {
            sink(collection.key(), collection.model_type());
        }
    }
}
