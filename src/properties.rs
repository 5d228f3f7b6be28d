//! Named properties attached to a node.
//!
//! A node can carry properties: key-value pairs, or named arguments. Keys
//! are strings and unique within a node; values are [`Value`]s.
//! Properties always belong to a single node.
//!
//! ## Why IndexMap?
//!
//! The format attaches no meaning to property order, so any key-unique
//! associative container would satisfy the data model. `IndexMap` is used
//! so that iteration — and with it serialization — is deterministic:
//! rendering the same document twice produces byte-identical output.
//! Consumers must still treat the emission order of properties as
//! unspecified.
//!
//! ## Examples
//!
//! ```rust
//! use kdl_tree::{Properties, Value};
//!
//! let mut props = Properties::new();
//! props.insert("name".to_string(), Value::from("Alice"));
//! props.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(props.len(), 2);
//! assert_eq!(props.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

/// The key-unique map of a node's properties.
///
/// Re-inserting an existing key overwrites its value and never creates a
/// duplicate entry.
///
/// # Examples
///
/// ```rust
/// use kdl_tree::{Properties, Value};
///
/// let mut props = Properties::new();
/// props.insert("port".to_string(), Value::from(80));
/// props.insert("port".to_string(), Value::from(8080));
///
/// assert_eq!(props.len(), 1);
/// assert_eq!(props.get("port").and_then(|v| v.as_i64()), Some(8080));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Properties(IndexMap<String, Value>);

impl Properties {
    /// Creates an empty property map.
    #[must_use]
    pub fn new() -> Self {
        Properties(IndexMap::new())
    }

    /// Creates an empty property map with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Properties(IndexMap::with_capacity(capacity))
    }

    /// Returns the number of properties currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks whether a property with the given key exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the value associated with the given key, or `None` if the
    /// key is missing.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Sets the given key to the given value, overwriting the existing
    /// property with the same key if present.
    ///
    /// Returns the displaced value when the key already existed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdl_tree::{Properties, Value};
    ///
    /// let mut props = Properties::new();
    /// assert!(props.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(props.insert("key".to_string(), Value::from(43)).is_some());
    /// assert_eq!(props.len(), 1);
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Removes and returns the property with the given key, preserving
    /// the order of the remaining entries.
    ///
    /// Returns `None` if the key was not associated with any property.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdl_tree::{Properties, Value};
    ///
    /// let mut props = Properties::new();
    /// props.insert("key".to_string(), Value::from(42));
    ///
    /// assert!(props.remove("key").is_some());
    /// assert!(!props.contains_key("key"));
    /// assert!(props.remove("key").is_none());
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns an iterator over the property keys.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the property values.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, Value>> for Properties {
    fn from(map: HashMap<String, Value>) -> Self {
        Properties(map.into_iter().collect())
    }
}

impl IntoIterator for Properties {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Properties {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Properties(IndexMap::from_iter(iter))
    }
}
