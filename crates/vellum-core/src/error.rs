//! Error types for the vellum writer engine.
//!
//! Recoverable absence (an unroutable resource, a missing representor, a
//! missing relation target) is modeled as `Option` throughout the crate and
//! never reaches this module. The errors here cover construction-time
//! wiring mistakes only.

use thiserror::Error;

/// The unified error type for vellum operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input validation errors (invalid server URL, pagination bounds,
    /// resource path components).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// A representor was registered twice for the same model type.
    #[error("representor already registered for {type_name}")]
    DuplicateRepresentor {
        /// Fully-qualified name of the model type.
        type_name: &'static str,
    },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid server URL format.
    #[error("invalid server URL '{value}': {reason}")]
    ServerUrl { value: String, reason: String },

    /// Invalid pagination parameters.
    #[error("invalid pagination: {reason}")]
    Pagination { reason: String },

    /// Invalid resource path component.
    #[error("invalid resource path segment '{value}': {reason}")]
    ResourcePath { value: String, reason: String },
}
