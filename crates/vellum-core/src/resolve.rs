//! Injected resolver seams.
//!
//! The writer never looks anything up on its own: representors, resource
//! paths and public resource names all come from these injected functions,
//! typically closing over the application's registry and router. Every
//! resolver returns `Option`; `None` is the ordinary skip signal, never an
//! error.

use std::sync::Arc;

use crate::representor::SharedRepresentor;
use crate::single_model::ModelType;
use crate::types::{Identifier, IdentifierKind, ResourcePath};

/// Looks up the representor registered for a model type.
pub type RepresentorResolver = Arc<dyn Fn(ModelType) -> Option<SharedRepresentor> + Send + Sync>;

/// Resolves the routable path of a resource from its identifier value, the
/// identifier's declared kind, and the model type.
///
/// `None` marks the resource as unroutable; the writer skips it.
pub type PathResolver =
    Arc<dyn Fn(&Identifier, IdentifierKind, ModelType) -> Option<ResourcePath> + Send + Sync>;

/// Maps a fully-qualified model type name to its public resource name,
/// used for collection URLs.
pub type ResourceNameResolver = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;
