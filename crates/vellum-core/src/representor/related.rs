//! Related-resource descriptors.

use std::any::Any;
use std::fmt;

use crate::single_model::{ModelType, SingleModel};

/// A related single resource declared on a representor.
///
/// Used for both embedded and linked relations; the category is determined
/// by which representor list the descriptor sits in.
pub struct RelatedModel {
    key: String,
    resolver: Box<dyn Fn(&dyn Any) -> Option<SingleModel> + Send + Sync>,
}

impl RelatedModel {
    pub(crate) fn new<T, S, F>(key: String, f: F) -> Self
    where
        T: Any,
        S: Any + Send + Sync,
        F: Fn(&T) -> Option<S> + Send + Sync + 'static,
    {
        Self {
            key,
            resolver: Box::new(move |model| {
                model.downcast_ref::<T>().and_then(&f).map(SingleModel::new)
            }),
        }
    }

    /// The relation's field name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolve the target model, if present.
    pub fn resolve(&self, model: &dyn Any) -> Option<SingleModel> {
        (self.resolver)(model)
    }
}

impl fmt::Debug for RelatedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RelatedModel({})", self.key)
    }
}

/// A reference to a sub-collection resource, e.g. a person's blog postings.
///
/// Only the target model type is recorded; the collection URL is derived
/// from the parent's path and the target's public resource name.
#[derive(Clone, Debug)]
pub struct RelatedCollection {
    key: String,
    model_type: ModelType,
}

impl RelatedCollection {
    pub(crate) fn new(key: String, model_type: ModelType) -> Self {
        Self { key, model_type }
    }

    /// The relation's field name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The target collection's model type.
    pub fn model_type(&self) -> ModelType {
        self.model_type
    }
}
