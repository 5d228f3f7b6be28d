//! The value model shared by node arguments and properties.
//!
//! This module provides the [`Value`] enum, the closed set of scalar types
//! a document can carry, and [`Kind`], the matching type tag.
//!
//! ## Core Types
//!
//! - [`Value`]: one of null, boolean, integer, float, or string
//! - [`Kind`]: a fieldless copy of the variant set, reported by [`Value::kind`]
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use kdl_tree::Value;
//!
//! // From primitives
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! // Using the value! macro
//! use kdl_tree::value;
//! let v = value!(3.5);
//! assert!(v.is_float());
//! ```
//!
//! ### Type Checking
//!
//! ```rust
//! use kdl_tree::{Kind, Value};
//!
//! let value = Value::from(42);
//! assert_eq!(value.kind(), Kind::Integer);
//! assert!(value.is_integer());
//! assert!(!value.is_string());
//! ```
//!
//! ### Extracting Values
//!
//! Accessors are strict: they return the stored content only when the
//! kind matches, with no coercion between variants. An integer never
//! reads back as a float and vice versa.
//!
//! ```rust
//! use kdl_tree::Value;
//!
//! let value = Value::from(42);
//! assert_eq!(value.as_i64(), Some(42));
//! assert_eq!(value.as_f64(), None);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A scalar value usable as a node argument or property value.
///
/// The supported data types form a closed set:
///
/// - `Null` (the default)
/// - `Bool` (true/false)
/// - `Integer` (64-bit signed)
/// - `Float` (64-bit IEEE)
/// - `String` (owned UTF-8 text)
///
/// The variant is its own type tag: [`Value::kind`] and the typed
/// accessors can never disagree about what is stored, and replacing the
/// content via [`Value::set`] replaces tag and content in one step.
///
/// The writer's dispatch matches exhaustively over these five variants,
/// so adding a sixth is a compile error until the rendering for it is
/// decided.
///
/// # Examples
///
/// ```rust
/// use kdl_tree::{Kind, Value};
///
/// let mut value = Value::default();
/// assert!(value.is_null());
///
/// value.set("hello");
/// assert_eq!(value.kind(), Kind::String);
/// assert_eq!(value.as_str(), Some("hello"));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

/// The type tag of a [`Value`].
///
/// # Examples
///
/// ```rust
/// use kdl_tree::{Kind, Value};
///
/// assert_eq!(Value::Null.kind(), Kind::Null);
/// assert_eq!(Value::from(1.5).kind(), Kind::Float);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Integer,
    Float,
    String,
}

impl Value {
    /// Returns the kind of the currently stored value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
        }
    }

    /// Replaces the stored content, updating the kind along with it.
    ///
    /// Accepts anything convertible into a [`Value`]; never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdl_tree::{Kind, Value};
    ///
    /// let mut value = Value::from(true);
    /// value.set(42);
    /// assert_eq!(value.kind(), Kind::Integer);
    ///
    /// value.set(Value::Null);
    /// assert!(value.is_null());
    /// ```
    #[inline]
    pub fn set<T: Into<Value>>(&mut self, content: T) {
        *self = content.into();
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Returns `true` if the value is a float.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdl_tree::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool(), Some(true));
    /// assert_eq!(Value::from(42).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer, returns it. Otherwise returns `None`.
    ///
    /// A whole-number float is still a float and reads back as `None`
    /// here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdl_tree::Value;
    ///
    /// assert_eq!(Value::from(42).as_i64(), Some(42));
    /// assert_eq!(Value::from(42.0).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is a float, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdl_tree::Value;
    ///
    /// assert_eq!(Value::from(3.5).as_f64(), Some(3.5));
    /// assert_eq!(Value::from(3).as_f64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdl_tree::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value in the format's textual syntax, exactly as the
    /// writer would emit it inside a node.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        crate::ser::write_value(&mut rendered, self);
        f.write_str(&rendered)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a scalar value (null, boolean, integer, float, or string)")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Value::Integer(value as i64))
                } else {
                    Ok(Value::Float(value as f64))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// TryFrom implementations for extracting content from a Value. These are
// as strict as the accessors: no coercion between integer and float.
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Integer(i) => Ok(i),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Float(f) => Ok(f),
            _ => Err(crate::Error::custom(format!(
                "expected float, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

// From implementations for creating a Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null() {
        let value = Value::default();
        assert_eq!(value.kind(), Kind::Null);
        assert!(value.is_null());
    }

    #[test]
    fn test_kind_follows_last_set() {
        let mut value = Value::default();

        value.set("hello");
        assert_eq!(value.kind(), Kind::String);

        value.set(-294942i64);
        assert_eq!(value.kind(), Kind::Integer);

        value.set(0.125);
        assert_eq!(value.kind(), Kind::Float);

        value.set(false);
        assert_eq!(value.kind(), Kind::Bool);

        value.set(Value::Null);
        assert_eq!(value.kind(), Kind::Null);
    }

    #[test]
    fn test_accessors_match_kind() {
        let value = Value::from("hello");
        assert_eq!(value.as_str(), Some("hello"));
        assert_eq!(value.as_bool(), None);
        assert_eq!(value.as_i64(), None);
        assert_eq!(value.as_f64(), None);
    }

    #[test]
    fn test_no_numeric_coercion() {
        let integer = Value::from(42);
        assert_eq!(integer.as_f64(), None);

        let float = Value::from(42.0);
        assert_eq!(float.as_i64(), None);
    }

    #[test]
    fn test_tryfrom_i64() {
        let value = Value::Integer(42);
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = Value::Float(42.0);
        assert!(i64::try_from(value).is_err());

        let value = Value::String("test".to_string());
        assert!(i64::try_from(value).is_err());
    }

    #[test]
    fn test_tryfrom_f64() {
        let value = Value::Float(3.5);
        let result: f64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 3.5);

        let value = Value::Integer(42);
        assert!(f64::try_from(value).is_err());
    }

    #[test]
    fn test_tryfrom_bool() {
        let value = Value::Bool(true);
        let result: bool = TryFrom::try_from(value).unwrap();
        assert!(result);

        let value = Value::Integer(1);
        assert!(bool::try_from(value).is_err());
    }

    #[test]
    fn test_tryfrom_string() {
        let value = Value::String("hello".to_string());
        let result: String = TryFrom::try_from(value).unwrap();
        assert_eq!(result, "hello");

        let value = Value::Integer(42);
        assert!(String::try_from(value).is_err());
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Integer(42));
        assert_eq!(Value::from(42i64), Value::Integer(42));
        assert_eq!(Value::from(3.5f64), Value::Float(3.5));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(
            Value::from("test".to_string()),
            Value::String("test".to_string())
        );
    }

    #[test]
    fn test_const_is_methods() {
        const fn check_null(v: &Value) -> bool {
            v.is_null()
        }

        let null_value = Value::Null;
        assert!(check_null(&null_value));
    }

    #[test]
    fn test_display_uses_writer_syntax() {
        assert_eq!(Value::Null.to_string(), "#null");
        assert_eq!(Value::Bool(true).to_string(), "#true");
        assert_eq!(Value::Integer(12345).to_string(), "12345");
        assert_eq!(Value::from("hi").to_string(), "\"hi\"");
    }
}
