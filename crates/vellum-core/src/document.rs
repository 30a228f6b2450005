//! JSON object-tree builder.
//!
//! The opaque output sink mapper implementations write into. The writer
//! creates one builder per document (and one per item within a page) and
//! serializes the finished tree at the end of `write()`.

use serde_json::{Map, Value};

/// Builds a JSON object tree through nested-path puts and array pushes.
///
/// Intermediate objects are created on demand. Putting through a path that
/// meets a non-object value replaces that value with an object; pushing
/// onto a non-array value wraps it into an array first. Both rules let a
/// linked-resource URL written earlier be upgraded in place when the same
/// relation is also embedded.
///
/// # Example
///
/// ```
/// use vellum_core::ObjectBuilder;
///
/// let mut doc = ObjectBuilder::new();
/// doc.put("name", "Alice");
/// doc.put_nested(&["address"], "city", "Lisbon");
/// doc.push("tags", "admin");
///
/// assert_eq!(
///     doc.build().to_string(),
///     r#"{"address":{"city":"Lisbon"},"name":"Alice","tags":["admin"]}"#
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct ObjectBuilder {
    root: Map<String, Value>,
}

impl ObjectBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` in the root object.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.root.insert(key.into(), value.into());
    }

    /// Set `key` inside the object at `path`, creating objects on the way.
    pub fn put_nested(&mut self, path: &[&str], key: impl Into<String>, value: impl Into<Value>) {
        Self::object_at(&mut self.root, path).insert(key.into(), value.into());
    }

    /// Append `value` to the array at `key` in the root object.
    pub fn push(&mut self, key: &str, value: impl Into<Value>) {
        Self::push_into(&mut self.root, key, value.into());
    }

    /// Append `value` to the array at `key` inside the object at `path`.
    pub fn push_nested(&mut self, path: &[&str], key: &str, value: impl Into<Value>) {
        Self::push_into(Self::object_at(&mut self.root, path), key, value.into());
    }

    /// True if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Consume the builder into the finished JSON value.
    pub fn build(self) -> Value {
        Value::Object(self.root)
    }

    fn object_at<'a>(
        mut current: &'a mut Map<String, Value>,
        path: &[&str],
    ) -> &'a mut Map<String, Value> {
        for segment in path {
            let entry = current
                .entry((*segment).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            current = entry.as_object_mut().expect("entry was just made an object");
        }
        current
    }

    fn push_into(object: &mut Map<String, Value>, key: &str, value: Value) {
        let entry = object
            .entry(key.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if !entry.is_array() {
            let previous = entry.take();
            *entry = Value::Array(vec![previous]);
        }
        entry.as_array_mut().expect("entry was just made an array").push(value);
    }
}
