//! Raw array-like data.
//!
//! [`Array`] is the plain, unwrapped form of a collection: the shape callers
//! pass in and the shape [`Collection::to_array`](crate::Collection::to_array)
//! produces. Nested values are left as-is; wrapping happens only when an
//! array is inserted into a collection.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use indexmap::IndexMap;
use tracing::warn;

use crate::key::Key;
use crate::value::Value;

/// Ordered key/value array with auto-incrementing integer keys.
#[derive(Clone, Default)]
pub struct Array {
    entries: IndexMap<Key, Value>,
    next_key: AutoKey,
}

impl Array {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the array is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets a value by key.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Appends a value under the next integer key.
    ///
    /// Once `i64::MAX` has been used as a key there is no next key; the
    /// value is dropped with a warning and the array is left unchanged.
    pub fn push(&mut self, value: impl Into<Value>) -> &mut Self {
        match self.next_key.peek() {
            Some(next) => self.insert(next, value),
            None => {
                AutoKey::warn_exhausted();
                self
            }
        }
    }

    /// Inserts or overwrites the value at `key`.
    ///
    /// Overwriting keeps the entry's position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> &mut Self {
        let key = key.into();
        self.next_key.advance(&key);
        self.entries.insert(key, value.into());
        self
    }

    /// Returns an iterator over key-value pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// Returns an iterator over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Returns an iterator over values in order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }
}

/// Auto-increment counter for integer keys.
///
/// Holds `None` once `i64::MAX` has been used, after which no auto key is
/// available until the owner is rebuilt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AutoKey(Option<i64>);

impl Default for AutoKey {
    fn default() -> Self {
        Self(Some(0))
    }
}

impl AutoKey {
    /// The key the next append would use.
    pub(crate) const fn peek(self) -> Option<i64> {
        self.0
    }

    /// Moves past an explicitly used integer key.
    pub(crate) fn advance(&mut self, key: &Key) {
        if let (Key::Int(n), Some(next)) = (key, self.0) {
            if *n >= next {
                self.0 = n.checked_add(1);
            }
        }
    }

    pub(crate) fn warn_exhausted() {
        warn!(
            target: "enumerable::collection",
            "next integer key is already occupied; value not appended"
        );
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Array {}

impl Hash for Array {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self.iter() {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{k} => {v}")?;
        }
        write!(f, "]")
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut array = Self::new();
        for value in iter {
            array.push(value);
        }
        array
    }
}

impl FromIterator<(Key, Value)> for Array {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        let mut array = Self::new();
        for (key, value) in iter {
            array.insert(key, value);
        }
        array
    }
}

impl IntoIterator for Array {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<T: Into<Value>> From<Vec<T>> for Array {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().map(Into::into).collect()
    }
}

impl From<&crate::Collection> for Array {
    fn from(collection: &crate::Collection) -> Self {
        collection.to_array()
    }
}

impl From<crate::Collection> for Array {
    fn from(collection: crate::Collection) -> Self {
        collection.to_array()
    }
}
