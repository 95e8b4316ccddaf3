//! The argument set handed to [`format`](crate::format).
//!
//! [`Arguments`] is an insertion-ordered map from a [`Key`] to a [`Value`],
//! backed by [`IndexMap`]. Keys are either non-negative indices or names, the
//! same two kinds a placeholder can refer to.
//!
//! ## Examples
//!
//! ```rust
//! use message_formatter::{Arguments, Key, Value};
//!
//! let mut arguments = Arguments::new();
//! arguments.push("positional");
//! arguments.insert("placeholder", "named");
//! arguments.insert(42, "fixed");
//!
//! assert_eq!(arguments.len(), 3);
//! assert_eq!(arguments.get(&Key::Index(0)), Some(&Value::from("positional")));
//! assert_eq!(arguments.get(&Key::from("42")), Some(&Value::from("fixed")));
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::fmt;

/// The key of an argument: a non-negative position or a name.
///
/// Textual keys are canonicalised the way integer-keyed associative arrays
/// do it: `"42"` becomes [`Key::Index`], while `"042"`, `"-1"` or `"name"`
/// stay [`Key::Name`].
///
/// # Examples
///
/// ```rust
/// use message_formatter::Key;
///
/// assert_eq!(Key::from("7"), Key::Index(7));
/// assert_eq!(Key::from("07"), Key::Name("07".to_string()));
/// assert_eq!(Key::from("user"), Key::Name("user".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Index(usize),
    Name(String),
}

impl Key {
    /// Parses a textual key, promoting canonical decimal integers to indices.
    #[must_use]
    pub fn parse(key: &str) -> Self {
        match canonical_index(key) {
            Some(index) => Key::Index(index),
            None => Key::Name(key.to_string()),
        }
    }

    /// Returns the index if this is a positional key.
    #[inline]
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }
}

fn canonical_index(key: &str) -> Option<usize> {
    let bytes = key.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    key.parse().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Index(value)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Index(value as usize)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        match usize::try_from(value) {
            Ok(index) => Key::Index(index),
            Err(_) => Key::Name(value.to_string()),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::parse(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match canonical_index(&value) {
            Some(index) => Key::Index(index),
            None => Key::Name(value),
        }
    }
}

/// An ordered set of arguments keyed by position or name.
#[derive(Debug, Clone, Default)]
pub struct Arguments(IndexMap<Key, Value>);

impl Arguments {
    /// Creates an empty argument set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use message_formatter::Arguments;
    ///
    /// let arguments = Arguments::new();
    /// assert!(arguments.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Arguments(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Arguments(IndexMap::with_capacity(capacity))
    }

    /// Inserts a value under the given key.
    ///
    /// If the set already contained this key, the old value is returned and
    /// the key keeps its original position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Appends a value at the next free index, one past the largest index
    /// currently in the set (or 0 when there is none).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use message_formatter::{Arguments, Key};
    ///
    /// let mut arguments = Arguments::new();
    /// arguments.insert(4, "four");
    /// assert_eq!(arguments.push("five"), Key::Index(5));
    /// ```
    pub fn push(&mut self, value: impl Into<Value>) -> Key {
        let next = self
            .0
            .keys()
            .filter_map(Key::as_index)
            .max()
            .map_or(0, |index| index + 1);
        self.0.insert(Key::Index(next), value.into());
        Key::Index(next)
    }

    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.0.iter()
    }
}

impl<V: Into<Value>> From<Vec<V>> for Arguments {
    fn from(values: Vec<V>) -> Self {
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| (Key::Index(index), value.into()))
            .collect()
    }
}

impl IntoIterator for Arguments {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(Key, Value)> for Arguments {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        Arguments(IndexMap::from_iter(iter))
    }
}
