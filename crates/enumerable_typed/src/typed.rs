//! Collections that validate every value they store.

use std::fmt;
use std::ops::Deref;

use enumerable_foundation::{
    Array, Arrayable, Collection, ErrorContext, Key, Opaque, Result, Value,
};
use tracing::debug;

use crate::validator::Validator;

/// A [`Collection`] whose insertion paths consult a [`Validator`].
///
/// Every mutating insertion validates all incoming values before touching
/// the store, so a rejected call leaves the collection exactly as it was.
/// Raw arrays are checked before they are wrapped. Read-only and
/// copy-returning operations come from [`Collection`] through `Deref`; their
/// results are plain collections.
#[derive(Clone)]
pub struct TypedCollection<V> {
    inner: Collection,
    validator: V,
}

impl<V: Validator> TypedCollection<V> {
    /// Creates an empty typed collection.
    pub fn new(validator: V) -> Self {
        Self {
            inner: Collection::new(),
            validator,
        }
    }

    /// Builds a list from `values`, rejecting the whole batch on the first
    /// invalid value.
    ///
    /// # Errors
    ///
    /// Returns the validator's error for the first rejected value.
    pub fn try_from_values<I, T>(validator: V, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let mut typed = Self::new(validator);
        typed.add(values)?;
        Ok(typed)
    }

    /// Builds from key/value pairs, rejecting the whole batch on the first
    /// invalid value.
    ///
    /// # Errors
    ///
    /// Returns the validator's error for the first rejected value.
    pub fn try_from_pairs<I, K, T>(validator: V, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<Key>,
        T: Into<Value>,
    {
        let pairs: Vec<(Key, Value)> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let mut typed = Self::new(validator);
        typed.check_all(pairs.iter().map(|(_, v)| v), "try_from_pairs")?;
        typed.inner = Collection::from_pairs(pairs);
        Ok(typed)
    }

    /// The validator in use.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Returns the underlying collection.
    #[must_use]
    pub fn into_inner(self) -> Collection {
        self.inner
    }

    fn check(&self, value: &Value, operation: &'static str) -> Result<()> {
        if self.validator.accepts(value) {
            return Ok(());
        }
        debug!(
            target: "enumerable::typed",
            operation,
            value_type = %value.value_type(),
            "rejected value"
        );
        Err(self
            .validator
            .error_for(value)
            .with_context(ErrorContext::new().with_operation(operation)))
    }

    fn check_all<'a, I>(&self, values: I, operation: &'static str) -> Result<()>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        values
            .into_iter()
            .try_for_each(|value| self.check(value, operation))
    }

    // =========================================================================
    // Validated insertion
    // =========================================================================

    /// Validates, then appends (`None`) or upserts at `key`.
    ///
    /// # Errors
    ///
    /// Returns the validator's error if the value is rejected.
    pub fn set(&mut self, key: Option<Key>, value: impl Into<Value>) -> Result<&mut Self> {
        let value = value.into();
        self.check(&value, "set")?;
        self.inner.set(key, value);
        Ok(self)
    }

    /// Validates, then inserts or overwrites the value at `key`.
    ///
    /// # Errors
    ///
    /// Returns the validator's error if the value is rejected.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Result<&mut Self> {
        self.set(Some(key.into()), value)
    }

    /// Validates, then appends under the next integer key.
    ///
    /// # Errors
    ///
    /// Returns the validator's error if the value is rejected.
    pub fn append(&mut self, value: impl Into<Value>) -> Result<&mut Self> {
        self.set(None, value)
    }

    /// Validates every value, then appends them all.
    ///
    /// # Errors
    ///
    /// Returns the validator's error for the first rejected value; nothing
    /// is appended in that case.
    pub fn add<I, T>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let values = self.validated(values, "add")?;
        self.inner.add(values);
        Ok(self)
    }

    /// Validates every value, then appends them in order.
    ///
    /// # Errors
    ///
    /// Returns the validator's error for the first rejected value.
    pub fn push<I, T>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let values = self.validated(values, "push")?;
        self.inner.push(values);
        Ok(self)
    }

    /// Validates every value, then prepends them in order.
    ///
    /// # Errors
    ///
    /// Returns the validator's error for the first rejected value.
    pub fn unshift<I, T>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let values = self.validated(values, "unshift")?;
        self.inner.unshift(values);
        Ok(self)
    }

    /// Validates every value of `source`, then rebuilds from it.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if `source` is not array-like, or
    /// the validator's error for the first rejected value.
    pub fn replace(&mut self, source: impl Into<Value>) -> Result<&mut Self> {
        let mut source = source.into();
        if let Some(array) = source.as_object().and_then(Opaque::to_array) {
            source = Value::Array(array);
        }
        match &source {
            Value::Array(array) => self.check_all(array.values(), "replace")?,
            Value::Collection(collection) => {
                self.check_all(collection.values_iter(), "replace")?;
            }
            _ => {}
        }
        self.inner.replace(source)?;
        Ok(self)
    }

    /// Rewrites every value with `f(value, key)` once all results validate.
    ///
    /// # Errors
    ///
    /// Returns the validator's error for the first rejected result; the
    /// collection is unchanged in that case.
    pub fn transform<F, T>(&mut self, mut f: F) -> Result<&mut Self>
    where
        F: FnMut(&Value, &Key) -> T,
        T: Into<Value>,
    {
        let results: Vec<Value> = self.inner.iter().map(|(k, v)| f(v, k).into()).collect();
        self.check_all(&results, "transform")?;
        let mut results = results.into_iter();
        self.inner
            .transform(|_, _| results.next().unwrap_or(Value::Null));
        Ok(self)
    }

    fn validated<I, T>(&self, values: I, operation: &'static str) -> Result<Vec<Value>>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.check_all(&values, operation)?;
        Ok(values)
    }

    // =========================================================================
    // Removal (never validated)
    // =========================================================================

    /// Removes the entry at `key`; does nothing if it is absent.
    pub fn remove(&mut self, key: impl Into<Key>) -> &mut Self {
        self.inner.remove(key);
        self
    }

    /// Removes and returns the value at `key`.
    pub fn pull(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.inner.pull(key)
    }

    /// Removes and returns the value at `key`, or `default` if absent.
    pub fn pull_or(&mut self, key: impl Into<Key>, default: impl Into<Value>) -> Value {
        self.inner.pull_or(key, default)
    }

    /// Removes and returns the last value.
    pub fn pop(&mut self) -> Option<Value> {
        self.inner.pop()
    }

    /// Removes and returns the first value, renumbering integer keys.
    pub fn shift(&mut self) -> Option<Value> {
        self.inner.shift()
    }

    /// Removes every entry.
    pub fn clear(&mut self) -> &mut Self {
        self.inner.clear();
        self
    }
}

impl<V> Deref for TypedCollection<V> {
    type Target = Collection;

    fn deref(&self) -> &Collection {
        &self.inner
    }
}

impl<V> AsRef<Collection> for TypedCollection<V> {
    fn as_ref(&self) -> &Collection {
        &self.inner
    }
}

impl<V> Arrayable for TypedCollection<V> {
    fn to_array(&self) -> Array {
        self.inner.to_array()
    }
}

impl<V> PartialEq<Collection> for TypedCollection<V> {
    fn eq(&self, other: &Collection) -> bool {
        self.inner == *other
    }
}

impl<V> From<TypedCollection<V>> for Collection {
    fn from(typed: TypedCollection<V>) -> Self {
        typed.inner
    }
}

impl<V> From<TypedCollection<V>> for Value {
    fn from(typed: TypedCollection<V>) -> Self {
        Value::Collection(typed.inner)
    }
}

impl<V> fmt::Debug for TypedCollection<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl<V> fmt::Display for TypedCollection<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl<'a, V> IntoIterator for &'a TypedCollection<V> {
    type Item = (&'a Key, &'a Value);
    type IntoIter = <&'a Collection as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
