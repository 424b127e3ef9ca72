//! The ordered key/value collection engine.
//!
//! A [`Collection`] is an insertion-ordered map from [`Key`] to [`Value`]
//! with an explicit auto-increment counter for integer keys. Raw arrays
//! inserted through any path are wrapped into child collections, so a
//! collection forms a tree that exclusively owns its children.
//!
//! Operations are split by concern:
//! - this module: construction, insertion/removal, lookup, iteration
//! - [`transform`]: copy-returning transformations
//! - [`sort`]: ordering operations
//! - [`aggregate`]: numeric aggregation and joining
//! - [`random`]: shuffling and sampling
//! - [`source`]: coercion of "another collection" arguments

pub mod aggregate;
pub mod random;
pub mod sort;
pub mod source;
pub mod transform;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use indexmap::IndexMap;
use tracing::trace;

use crate::array::{Array, AutoKey};
use crate::error::{Error, Result};
use crate::key::Key;
use crate::value::Value;

pub use source::Arrayable;
pub use transform::Seed;

/// Ordered key/value collection.
///
/// Cloning copies the backing store; a clone never observes mutations made
/// to the original, including mutations of nested collections.
#[derive(Clone, Default)]
pub struct Collection {
    entries: IndexMap<Key, Value>,
    next_key: AutoKey,
}

impl Collection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from a raw array, wrapping nested arrays.
    #[must_use]
    pub fn from_array(array: Array) -> Self {
        let mut collection = Self::new();
        for (key, value) in array {
            collection.store(Some(key), value);
        }
        collection
    }

    /// Builds a list collection (keys `0..n`) from values.
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut collection = Self::new();
        for value in values {
            collection.store(None, value.into());
        }
        collection
    }

    /// Builds a collection from key/value pairs.
    ///
    /// Repeated keys overwrite earlier values in place.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        let mut collection = Self::new();
        for (key, value) in pairs {
            collection.store(Some(key.into()), value.into());
        }
        collection
    }

    /// The single insertion path: wraps raw arrays and maintains the
    /// auto-increment counter.
    fn store(&mut self, key: Option<Key>, value: Value) {
        let Some(key) = key.or_else(|| self.next_key.peek().map(Key::Int)) else {
            AutoKey::warn_exhausted();
            return;
        };
        self.next_key.advance(&key);
        self.entries.insert(key, value.wrapped());
    }

    /// Rebuilds the collection from entries, renumbering integer keys from 0
    /// while keeping string keys.
    fn renumbered<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        let mut collection = Self::new();
        for (key, value) in entries {
            match key {
                Key::Int(_) => collection.store(None, value),
                Key::Str(_) => collection.store(Some(key), value),
            }
        }
        collection
    }

    // =========================================================================
    // Insertion / removal
    // =========================================================================

    /// Appends the value under the next integer key when `key` is `None`,
    /// otherwise inserts or overwrites the value at `key`.
    ///
    /// Once `i64::MAX` has been used as a key there is no next integer key:
    /// appends are dropped with a warning and never overwrite that entry.
    pub fn set(&mut self, key: Option<Key>, value: impl Into<Value>) -> &mut Self {
        self.store(key, value.into());
        self
    }

    /// Inserts or overwrites the value at `key`.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> &mut Self {
        self.set(Some(key.into()), value)
    }

    /// Appends a value under the next integer key.
    pub fn append(&mut self, value: impl Into<Value>) -> &mut Self {
        self.set(None, value)
    }

    /// Appends each value under successive integer keys.
    pub fn add<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        for value in values {
            self.store(None, value.into());
        }
        self
    }

    /// Appends each value to the end, preserving argument order.
    pub fn push<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.add(values)
    }

    /// Prepends the values, preserving argument order.
    ///
    /// Integer keys of the whole collection are renumbered from 0; string
    /// keys are kept.
    pub fn unshift<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let front = values.into_iter().map(|v| (Key::Int(0), v.into()));
        let old = std::mem::take(&mut self.entries);
        *self = Self::renumbered(front.chain(old));
        self
    }

    /// Removes the entry at `key`; does nothing if it is absent.
    pub fn remove(&mut self, key: impl Into<Key>) -> &mut Self {
        self.entries.shift_remove(&key.into());
        self
    }

    /// Removes and returns the value at `key`.
    pub fn pull(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.entries.shift_remove(&key.into())
    }

    /// Removes and returns the value at `key`, or `default` if absent.
    pub fn pull_or(&mut self, key: impl Into<Key>, default: impl Into<Value>) -> Value {
        self.pull(key).unwrap_or_else(|| default.into())
    }

    /// Removes and returns the last value.
    ///
    /// The auto-increment counter is left as is.
    pub fn pop(&mut self) -> Option<Value> {
        self.entries.pop().map(|(_, value)| value)
    }

    /// Removes and returns the first value.
    ///
    /// Remaining integer keys are renumbered from 0.
    pub fn shift(&mut self) -> Option<Value> {
        let (_, value) = self.entries.shift_remove_index(0)?;
        let rest = std::mem::take(&mut self.entries);
        *self = Self::renumbered(rest);
        Some(value)
    }

    /// Removes every entry and resets the auto-increment counter.
    pub fn clear(&mut self) -> &mut Self {
        trace!(target: "enumerable::collection", entries = self.len(), "clear");
        self.entries.clear();
        self.next_key = AutoKey::default();
        self
    }

    /// Discards every entry and rebuilds from `source`.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if `source` is not an array or a
    /// collection; the receiver is left untouched.
    pub fn replace(&mut self, source: impl Into<Value>) -> Result<&mut Self> {
        let rebuilt = source::coerce(source.into(), "replace")?;
        trace!(
            target: "enumerable::collection",
            old = self.len(),
            new = rebuilt.len(),
            "replace"
        );
        *self = rebuilt;
        Ok(self)
    }

    // =========================================================================
    // Lookup / predicates
    // =========================================================================

    /// Gets the value at `key`.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.entries.get(&key.into())
    }

    /// Gets the value at `key`, or `default` if absent.
    pub fn get_or(&self, key: impl Into<Key>, default: impl Into<Value>) -> Value {
        self.get(key).cloned().unwrap_or_else(|| default.into())
    }

    /// Gets a mutable reference to the value at `key`.
    ///
    /// Values written through this reference bypass wrapping; prefer
    /// [`Collection::insert`] for raw arrays.
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        self.entries.get_mut(&key.into())
    }

    /// Returns the child collection at `key`, inserting an empty one if the
    /// key is absent.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if the stored value is not a
    /// collection.
    pub fn child_mut(&mut self, key: impl Into<Key>) -> Result<&mut Collection> {
        let key = key.into();
        if !self.entries.contains_key(&key) {
            self.store(Some(key.clone()), Value::Collection(Self::new()));
        }
        match self.entries.get_mut(&key) {
            Some(Value::Collection(child)) => Ok(child),
            Some(other) => Err(Error::invalid_argument(format!(
                "value at key {key} is {}, not a collection",
                other.value_type()
            ))),
            None => Err(Error::new(crate::ErrorKind::Internal(format!(
                "key {key} vanished after insertion"
            )))),
        }
    }

    /// Returns true if an entry exists at `key`.
    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Returns true if the collection has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Counts entries; when `recursive`, each child collection contributes
    /// its own recursive count instead of 1.
    #[must_use]
    pub fn count(&self, recursive: bool) -> usize {
        if !recursive {
            return self.len();
        }
        self.values_iter()
            .map(|v| match v {
                Value::Collection(child) => child.count(true),
                _ => 1,
            })
            .sum()
    }

    /// Returns true if some value equals `needle` (strictly or loosely).
    pub fn contains(&self, needle: impl Into<Value>, strict: bool) -> bool {
        self.position(needle, strict).is_some()
    }

    /// Returns the key of the first value equal to `needle`.
    pub fn position(&self, needle: impl Into<Value>, strict: bool) -> Option<Key> {
        let needle = needle.into();
        self.search(|v, _| {
            if strict {
                v.strict_eq(&needle)
            } else {
                v.loose_eq(&needle)
            }
        })
    }

    /// Returns the key of the first entry matching the predicate.
    pub fn search<F>(&self, mut predicate: F) -> Option<Key>
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        self.iter()
            .find(|&(k, v)| predicate(v, k))
            .map(|(k, _)| k.clone())
    }

    /// Returns every key whose entry matches the predicate, in order.
    pub fn search_all<F>(&self, mut predicate: F) -> Collection
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        Self::from_values(
            self.iter()
                .filter(|&(k, v)| predicate(v, k))
                .map(|(k, _)| k.to_value()),
        )
    }

    /// Returns the first value matching the predicate.
    pub fn first<F>(&self, mut predicate: F) -> Option<&Value>
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        self.iter().find(|&(k, v)| predicate(v, k)).map(|(_, v)| v)
    }

    /// Returns the last value matching the predicate.
    pub fn last<F>(&self, mut predicate: F) -> Option<&Value>
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        self.iter().rev().find(|&(k, v)| predicate(v, k)).map(|(_, v)| v)
    }

    /// Returns the first key.
    #[must_use]
    pub fn first_key(&self) -> Option<&Key> {
        self.entries.first().map(|(k, _)| k)
    }

    /// Returns the last key.
    #[must_use]
    pub fn last_key(&self) -> Option<&Key> {
        self.entries.last().map(|(k, _)| k)
    }

    /// Returns the first value.
    #[must_use]
    pub fn start(&self) -> Option<&Value> {
        self.entries.first().map(|(_, v)| v)
    }

    /// Returns the last value.
    #[must_use]
    pub fn end(&self) -> Option<&Value> {
        self.entries.last().map(|(_, v)| v)
    }

    /// Returns a list collection of the keys.
    #[must_use]
    pub fn keys(&self) -> Collection {
        Self::from_values(self.keys_iter().map(Key::to_value))
    }

    /// Returns a list collection of the values.
    #[must_use]
    pub fn values(&self) -> Collection {
        Self::from_values(self.values_iter().cloned())
    }

    // =========================================================================
    // Iteration / conversion
    // =========================================================================

    /// Returns an iterator over key-value pairs in order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    /// Returns an iterator over keys in order.
    pub fn keys_iter(&self) -> impl DoubleEndedIterator<Item = &Key> {
        self.entries.keys()
    }

    /// Returns an iterator over values in order.
    pub fn values_iter(&self) -> impl DoubleEndedIterator<Item = &Value> {
        self.entries.values()
    }

    /// Recursively converts into a raw array, unwrapping child collections.
    #[must_use]
    pub fn to_array(&self) -> Array {
        self.iter()
            .map(|(k, v)| {
                let v = match v {
                    Value::Collection(child) => Value::Array(child.to_array()),
                    other => other.clone(),
                };
                (k.clone(), v)
            })
            .collect()
    }
}

impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Collection {}

impl Hash for Collection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self.iter() {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl fmt::Debug for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for Collection {
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

impl FromIterator<Value> for Collection {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl FromIterator<(Key, Value)> for Collection {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl Extend<Value> for Collection {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl Extend<(Key, Value)> for Collection {
    fn extend<I: IntoIterator<Item = (Key, Value)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.store(Some(key), value);
        }
    }
}

impl From<Array> for Collection {
    fn from(array: Array) -> Self {
        Self::from_array(array)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Collection {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

impl IntoIterator for Collection {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
