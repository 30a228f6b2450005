//! Process-wide representor registry.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::error::Error;
use crate::resolve::RepresentorResolver;
use crate::single_model::ModelType;

use super::{Represent, Representor, SharedRepresentor};

/// Read-mostly mapping from model type to its representor.
///
/// Populated at startup, one registration per model type, and treated as
/// immutable thereafter. Reads are concurrent; the writer only ever reads
/// it through the resolver returned by [`RepresentorRegistry::resolver`].
#[derive(Default)]
pub struct RepresentorRegistry {
    inner: RwLock<HashMap<ModelType, SharedRepresentor>>,
}

impl RepresentorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the representor for `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if `T` already has a registered representor.
    pub fn register<T: Any + Send + Sync>(&self, representor: Representor<T>) -> Result<(), Error> {
        let model_type = ModelType::of::<T>();
        let mut inner = self.inner.write().expect("representor registry lock poisoned");

        if inner.contains_key(&model_type) {
            return Err(Error::DuplicateRepresentor {
                type_name: model_type.name(),
            });
        }

        inner.insert(model_type, Arc::new(representor));
        Ok(())
    }

    /// The representor registered for `model_type`, if any.
    pub fn get(&self, model_type: ModelType) -> Option<SharedRepresentor> {
        self.inner
            .read()
            .expect("representor registry lock poisoned")
            .get(&model_type)
            .cloned()
    }

    /// Number of registered representors.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .expect("representor registry lock poisoned")
            .len()
    }

    /// True if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A resolver closing over this registry, for injection into writers.
    pub fn resolver(self: Arc<Self>) -> RepresentorResolver {
        Arc::new(move |model_type| self.get(model_type))
    }
}

impl fmt::Debug for RepresentorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepresentorRegistry")
            .field("len", &self.len())
            .finish()
    }
}
