//! vellum-core - Core types, representors and the writer engine.
//!
//! The engine renders pages and single resources of an in-memory domain
//! model into JSON-based hypermedia documents. Model types are described
//! declaratively by [`Representor`]s; concrete output formats plug in
//! through the [`PageMapper`]/[`ResourceMapper`] visitor traits; canonical
//! URLs come from injected resolver functions. A resource is written only
//! if both its representor and its path resolve; anything else is
//! silently omitted, never an error.

pub mod document;
pub mod error;
pub mod mapper;
pub mod page;
pub mod representor;
pub mod request;
pub mod resolve;
pub mod single_model;
pub mod types;
pub mod writer;

pub use document::ObjectBuilder;
pub use error::Error;
pub use mapper::{PageMapper, ResourceMapper};
pub use page::{Page, PageMeta};
pub use representor::{Represent, Representor, RepresentorRegistry, SharedRepresentor};
pub use request::{HttpHeaders, Language, RequestInfo};
pub use resolve::{PathResolver, RepresentorResolver, ResourceNameResolver};
pub use single_model::{ModelType, SingleModel};
pub use types::{FieldPath, Identifier, IdentifierKind, ResourcePath, ServerUrl};
pub use writer::{
    FieldsWriter, PageType, PageWriter, PageWriterBuilder, SingleModelWriter,
    SingleModelWriterBuilder,
};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
