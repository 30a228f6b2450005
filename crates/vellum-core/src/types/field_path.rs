//! Embedding-path accumulator.

use std::fmt;
use std::sync::Arc;

/// The nesting route from a top-level item down to an embedded resource.
///
/// An immutable, structurally-shared list of relation field names.
/// [`FieldPath::child`] returns an extended path without touching the
/// original, so sibling recursive branches of the writer can extend the
/// same parent path without interfering.
///
/// # Example
///
/// ```
/// use vellum_core::FieldPath;
///
/// let root = FieldPath::root();
/// let creator = root.child("creator");
/// let address = creator.child("address");
///
/// assert!(root.is_root());
/// assert_eq!(creator.segments(), ["creator"]);
/// assert_eq!(address.segments(), ["creator", "address"]);
/// assert_eq!(address.dotted(), "creator.address");
/// ```
#[derive(Clone, Default)]
pub struct FieldPath(Option<Arc<Segment>>);

struct Segment {
    name: String,
    parent: Option<Arc<Segment>>,
}

impl FieldPath {
    /// The empty path of a top-level item.
    pub fn root() -> Self {
        Self(None)
    }

    /// Returns this path extended with one more relation field name.
    pub fn child(&self, name: impl Into<String>) -> Self {
        Self(Some(Arc::new(Segment {
            name: name.into(),
            parent: self.0.clone(),
        })))
    }

    /// True for the empty path of a top-level item.
    pub fn is_root(&self) -> bool {
        self.0.is_none()
    }

    /// Number of segments in this path.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.0.as_deref();
        while let Some(segment) = current {
            depth += 1;
            current = segment.parent.as_deref();
        }
        depth
    }

    /// Segments in root-to-leaf order.
    pub fn segments(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(self.depth());
        let mut current = self.0.as_deref();
        while let Some(segment) = current {
            out.push(segment.name.as_str());
            current = segment.parent.as_deref();
        }
        out.reverse();
        out
    }

    /// The leaf segment together with the segments leading to it.
    pub fn split_last(&self) -> Option<(&str, Vec<&str>)> {
        let mut segments = self.segments();
        let last = segments.pop()?;
        Some((last, segments))
    }

    /// Dotted rendering, e.g. `"creator.address"`.
    pub fn dotted(&self) -> String {
        self.segments().join(".")
    }
}

impl fmt::Debug for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.segments()).finish()
    }
}

impl PartialEq for FieldPath {
    fn eq(&self, other: &Self) -> bool {
        self.segments() == other.segments()
    }
}

impl Eq for FieldPath {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_empty() {
        let root = FieldPath::root();
        assert!(root.is_root());
        assert_eq!(root.depth(), 0);
        assert!(root.segments().is_empty());
        assert_eq!(root.split_last(), None);
    }

    #[test]
    fn segments_in_extension_order() {
        let path = FieldPath::root().child("a").child("b");
        assert_eq!(path.segments(), ["a", "b"]);
        assert_eq!(path.dotted(), "a.b");
    }

    #[test]
    fn child_leaves_parent_untouched() {
        let parent = FieldPath::root().child("creator");
        let left = parent.child("address");
        let right = parent.child("employer");

        assert_eq!(parent.segments(), ["creator"]);
        assert_eq!(left.segments(), ["creator", "address"]);
        assert_eq!(right.segments(), ["creator", "employer"]);
    }

    #[test]
    fn split_last_separates_leaf() {
        let path = FieldPath::root().child("a").child("b").child("c");
        let (leaf, parents) = path.split_last().unwrap();
        assert_eq!(leaf, "c");
        assert_eq!(parents, ["a", "b"]);
    }

    #[test]
    fn equality_by_segments() {
        let one = FieldPath::root().child("a").child("b");
        let two = FieldPath::root().child("a").child("b");
        assert_eq!(one, two);
        assert_ne!(one, FieldPath::root().child("b").child("a"));
    }
}
