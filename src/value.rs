//! Dynamic argument values.
//!
//! This module provides the [`Value`] enum which represents anything that can be
//! passed as a formatting argument, the [`Convertible`] trait for object-like
//! values that know how to convert themselves, and [`Opaque`] handles that can
//! only ever be type-queried.
//!
//! ## Creating Values
//!
//! ```rust
//! use message_formatter::{Opaque, Value};
//!
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//! let list = Value::from(vec!["one", "two"]);
//! let handle = Value::from(Opaque::new("stream"));
//!
//! assert_eq!(list.type_name(), "array");
//! assert_eq!(handle.type_name(), "resource");
//! ```
//!
//! ## Convertible Values
//!
//! A [`Convertible`] advertises which conversions it supports by returning
//! `Some` from the matching capability method. The renderer probes them in a
//! fixed order: [`as_display`](Convertible::as_display),
//! [`try_to_string`](Convertible::try_to_string), [`to_list`](Convertible::to_list),
//! [`to_int`](Convertible::to_int), [`to_float`](Convertible::to_float).
//!
//! ```rust
//! use message_formatter::{format, args, BoxError, Convertible, Value};
//!
//! #[derive(Debug)]
//! struct Money(i64);
//!
//! impl Convertible for Money {
//!     fn type_name(&self) -> &str {
//!         "Money"
//!     }
//!
//!     fn to_int(&self) -> Option<Result<i64, BoxError>> {
//!         Some(Ok(self.0))
//!     }
//! }
//!
//! let message = format("{.2}", &args![Value::convertible(Money(1000))]).unwrap();
//! assert_eq!(message, "1,000.00");
//! ```

use crate::error::BoxError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// An object-like value that exposes zero or more conversion capabilities.
///
/// Every capability defaults to `None`, meaning "not supported". A capability
/// that is supported but fails returns `Some(Err(_))`; that error reaches the
/// caller of [`format`](crate::format) unchanged.
pub trait Convertible: fmt::Debug + Send + Sync {
    /// The concrete type name reported by a type-query and by errors.
    fn type_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Primary string conversion.
    fn as_display(&self) -> Option<&dyn fmt::Display> {
        None
    }

    /// Secondary, fallible string conversion.
    fn try_to_string(&self) -> Option<Result<String, BoxError>> {
        None
    }

    /// The values of an iterable, keys discarded.
    fn to_list(&self) -> Option<Vec<Value>> {
        None
    }

    fn to_int(&self) -> Option<Result<i64, BoxError>> {
        None
    }

    fn to_float(&self) -> Option<Result<f64, BoxError>> {
        None
    }
}

/// A handle to something external, such as an open stream.
///
/// Opaque values cannot be rendered, only type-queried with `{:?}`.
///
/// # Examples
///
/// ```rust
/// use message_formatter::Opaque;
///
/// assert_eq!(Opaque::new("stream").describe(), "stream resource");
/// assert_eq!(Opaque::new("stream").closed().describe(), "closed resource");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Opaque {
    kind: String,
    closed: bool,
}

impl Opaque {
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Opaque {
            kind: kind.into(),
            closed: false,
        }
    }

    /// Marks the handle as closed.
    #[must_use]
    pub fn closed(mut self) -> Self {
        self.closed = true;
        self
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Generic type name, without the sub-kind.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        if self.is_closed() {
            "closed resource"
        } else {
            "resource"
        }
    }

    /// Type name prefixed with the sub-kind, as rendered by a type-query.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.is_closed() {
            self.type_name().to_string()
        } else {
            format!("{} {}", self.kind(), self.type_name())
        }
    }
}

/// Any value that can be passed as a formatting argument.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Convertible(Arc<dyn Convertible>),
    Opaque(Opaque),
}

impl Value {
    /// Wraps a [`Convertible`] implementation.
    pub fn convertible<C: Convertible + 'static>(value: C) -> Self {
        Value::Convertible(Arc::new(value))
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns `true` for values that make an optional section collapse:
    /// null, `false`, zero, the empty string, and the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use message_formatter::Value;
    ///
    /// assert!(Value::from("").is_empty());
    /// assert!(Value::from(0).is_empty());
    /// assert!(!Value::from("0").is_empty());
    /// assert!(!Value::from(vec![0]).is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Integer(i) => *i == 0,
            Value::Float(f) => *f == 0.0,
            Value::String(s) => s.is_empty(),
            Value::List(list) => list.is_empty(),
            Value::Convertible(_) | Value::Opaque(_) => false,
        }
    }

    /// The type name reported in errors and by `{:?}` type-queries.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "array",
            Value::Convertible(c) => c.type_name(),
            Value::Opaque(o) => o.type_name(),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Convertible(a), Value::Convertible(b)) => Arc::ptr_eq(a, b),
            (Value::Opaque(a), Value::Opaque(b)) => a == b,
            _ => false,
        }
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
            Value::List(list) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for element in list {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Convertible(c) => Err(serde::ser::Error::custom(format!(
                "cannot serialize convertible value of type {}",
                c.type_name()
            ))),
            Value::Opaque(o) => Err(serde::ser::Error::custom(format!(
                "cannot serialize {}",
                o.describe()
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any argument value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                match i64::try_from(value) {
                    Ok(i) => Ok(Value::Integer(i)),
                    Err(_) => Ok(Value::Float(value as f64)),
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

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::List(vec))
            }

            // Maps keep their values only, in order.
            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some((_, value)) = map.next_entry::<de::IgnoredAny, Value>()? {
                    vec.push(value);
                }
                Ok(Value::List(vec))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

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

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
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

impl From<Opaque> for Value {
    fn from(value: Opaque) -> Self {
        Value::Opaque(value)
    }
}

impl From<Arc<dyn Convertible>> for Value {
    fn from(value: Arc<dyn Convertible>) -> Self {
        Value::Convertible(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Plain;

    impl Convertible for Plain {}

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Integer(42));
        assert_eq!(Value::from(42u8), Value::Integer(42));
        assert_eq!(Value::from(3.5f64), Value::Float(3.5));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(Value::from('x'), Value::String("x".to_string()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(1)), Value::Integer(1));
    }

    #[test]
    fn test_from_vec() {
        assert_eq!(
            Value::from(vec![1, 2]),
            Value::List(vec![Value::Integer(1), Value::Integer(2)])
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(Value::Null.is_empty());
        assert!(Value::Bool(false).is_empty());
        assert!(Value::Integer(0).is_empty());
        assert!(Value::Float(0.0).is_empty());
        assert!(Value::from("").is_empty());
        assert!(Value::List(vec![]).is_empty());

        assert!(!Value::Bool(true).is_empty());
        assert!(!Value::Float(f64::NAN).is_empty());
        assert!(!Value::from(" ").is_empty());
        assert!(!Value::from(Opaque::new("stream")).is_empty());
        assert!(!Value::convertible(Plain).is_empty());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Bool(true).type_name(), "bool");
        assert_eq!(Value::Integer(1).type_name(), "int");
        assert_eq!(Value::Float(1.0).type_name(), "float");
        assert_eq!(Value::from("s").type_name(), "string");
        assert_eq!(Value::List(vec![]).type_name(), "array");
        assert_eq!(Value::from(Opaque::new("stream")).type_name(), "resource");
        assert_eq!(
            Value::from(Opaque::new("stream").closed()).type_name(),
            "closed resource"
        );
    }

    #[test]
    fn test_default_convertible_type_name_is_concrete() {
        let value = Value::convertible(Plain);
        assert!(value.type_name().ends_with("Plain"));
    }

    #[test]
    fn test_convertible_equality_is_identity() {
        let value = Value::convertible(Plain);
        assert_eq!(value, value.clone());
        assert_ne!(value, Value::convertible(Plain));
    }

    #[test]
    fn test_predicates() {
        assert!(Value::Null.is_null());
        assert!(!Value::from(0).is_null());
        assert!(Value::from(1).is_number());
        assert!(Value::from(1.5).is_number());
        assert!(!Value::from("1").is_number());
        assert!(Value::from(vec!["a"]).is_list());
        assert!(!Value::convertible(Plain).is_list());
    }

    #[test]
    fn test_opaque_accessors() {
        let handle = Opaque::new("stream");
        assert_eq!(handle.kind(), "stream");
        assert!(!handle.is_closed());

        let handle = handle.closed();
        assert_eq!(handle.kind(), "stream");
        assert!(handle.is_closed());
    }

    #[test]
    fn test_opaque_describe() {
        assert_eq!(Opaque::new("stream").describe(), "stream resource");
        assert_eq!(Opaque::new("socket").closed().describe(), "closed resource");
    }
}
