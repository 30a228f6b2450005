//! Routable resource path type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, InvalidInputError};

/// The routable address of a single resource: a public resource name plus
/// the identifier rendered as a path segment.
///
/// Paths are produced only by the injected path resolver; the writer never
/// constructs them on its own. A resource without a path is unroutable and
/// is silently skipped.
///
/// # Example
///
/// ```
/// use vellum_core::ResourcePath;
///
/// let path = ResourcePath::new("people", "42").unwrap();
/// assert_eq!(path.as_uri(), "people/42");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourcePath {
    name: String,
    id: String,
}

impl ResourcePath {
    /// Create a new resource path, validating both segments.
    ///
    /// # Errors
    ///
    /// Returns an error if either segment is empty or contains a `/`.
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();
        let id = id.into();
        Self::validate_segment(&name)?;
        Self::validate_segment(&id)?;
        Ok(Self { name, id })
    }

    /// Returns the public resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the identifier segment.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns `{name}/{id}`, the URI fragment this path contributes.
    pub fn as_uri(&self) -> String {
        format!("{}/{}", self.name, self.id)
    }

    fn validate_segment(segment: &str) -> Result<(), Error> {
        if segment.is_empty() {
            return Err(InvalidInputError::ResourcePath {
                value: segment.to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if segment.contains('/') {
            return Err(InvalidInputError::ResourcePath {
                value: segment.to_string(),
                reason: "must not contain '/'".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.id)
    }
}
