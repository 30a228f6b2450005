//! Core writer types.
//!
//! These types enforce their invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod field_path;
mod identifier;
mod resource_path;
mod server_url;

pub use field_path::FieldPath;
pub use identifier::{Identifier, IdentifierKind};
pub use resource_path::ResourcePath;
pub use server_url::ServerUrl;
