//! Type-erased model handles.
//!
//! The writer walks a heterogeneous resource graph: a page of one model
//! type whose relations reach into other model types. [`ModelType`] is the
//! runtime descriptor the registry and resolvers key on; [`SingleModel`]
//! pairs one erased instance with its descriptor.

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::sync::Arc;

/// Runtime descriptor for a model type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelType {
    id: TypeId,
    name: &'static str,
}

impl ModelType {
    /// The descriptor for `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The fully-qualified Rust type name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModelType({})", self.name)
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One model instance paired with its runtime type descriptor.
///
/// Cheap to clone; created per page item and per embedded related item,
/// and discarded after writing.
///
/// # Example
///
/// ```
/// use vellum_core::SingleModel;
///
/// struct Person { name: String }
///
/// let model = SingleModel::new(Person { name: "Alice".into() });
/// assert_eq!(model.downcast_ref::<Person>().unwrap().name, "Alice");
/// ```
#[derive(Clone)]
pub struct SingleModel {
    model: Arc<dyn Any + Send + Sync>,
    model_type: ModelType,
}

impl SingleModel {
    /// Wrap a model instance.
    pub fn new<T: Any + Send + Sync>(model: T) -> Self {
        Self {
            model: Arc::new(model),
            model_type: ModelType::of::<T>(),
        }
    }

    /// The runtime type descriptor of the wrapped model.
    pub fn model_type(&self) -> ModelType {
        self.model_type
    }

    /// Borrow the wrapped model if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.model.downcast_ref::<T>()
    }

    /// Borrow the wrapped model as `Any`, for erased extractors.
    pub fn as_any(&self) -> &(dyn Any + Send + Sync) {
        &*self.model
    }
}

impl fmt::Debug for SingleModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SingleModel({})", self.model_type.name)
    }
}
