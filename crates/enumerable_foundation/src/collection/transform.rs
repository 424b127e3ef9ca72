//! Copy-returning transformations.
//!
//! Every operation here leaves the receiver untouched and returns a new
//! collection, except [`Collection::transform`], which rewrites values in
//! place.

use std::ops::ControlFlow;

use crate::compare::SortMode;
use crate::error::{Error, ErrorContext, Result};
use crate::key::Key;
use crate::value::Value;

use super::{Collection, source};

/// Seeding policy for [`Collection::reduce`].
#[derive(Clone, Debug, PartialEq)]
pub enum Seed {
    /// Start the fold from this value (null included).
    Initial(Value),
    /// Start the fold from the first value; an empty collection folds to `None`.
    First,
}

impl Default for Seed {
    fn default() -> Self {
        Self::Initial(Value::Null)
    }
}

impl Collection {
    /// Applies `f` to every value, keeping keys and order.
    pub fn map<F, V>(&self, mut f: F) -> Collection
    where
        F: FnMut(&Value) -> V,
        V: Into<Value>,
    {
        Self::from_pairs(self.iter().map(|(k, v)| (k.clone(), f(v))))
    }

    /// Rewrites every value in place with `f(value, key)`, keeping keys.
    pub fn transform<F, V>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&Value, &Key) -> V,
        V: Into<Value>,
    {
        for (key, value) in &mut self.entries {
            let next = f(&*value, key).into().wrapped();
            *value = next;
        }
        self
    }

    /// Keeps the entries for which the predicate holds, with their keys.
    pub fn filter<F>(&self, mut predicate: F) -> Collection
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        Self::from_pairs(
            self.iter()
                .filter(|&(k, v)| predicate(v, k))
                .map(|(k, v)| (k.clone(), v.clone())),
        )
    }

    /// Drops the entries for which the predicate holds.
    pub fn reject<F>(&self, mut predicate: F) -> Collection
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        self.filter(|v, k| !predicate(v, k))
    }

    /// Visits entries in order until `f` breaks; returns a copy of the receiver.
    pub fn each<F>(&self, mut f: F) -> Collection
    where
        F: FnMut(&Value, &Key) -> ControlFlow<()>,
    {
        for (key, value) in self.iter() {
            if f(value, key).is_break() {
                break;
            }
        }
        self.clone()
    }

    /// Left fold over the values.
    ///
    /// Returns `None` only for [`Seed::First`] on an empty collection.
    pub fn reduce<F>(&self, mut f: F, seed: Seed) -> Option<Value>
    where
        F: FnMut(Value, &Value) -> Value,
    {
        let mut values = self.values_iter();
        let init = match seed {
            Seed::Initial(value) => value,
            Seed::First => values.next()?.clone(),
        };
        Some(values.fold(init, |acc, v| f(acc, v)))
    }

    /// Passes the whole collection to `f` and returns its result.
    pub fn pipe<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Collection) -> R,
    {
        f(self)
    }

    /// Swaps keys and values.
    ///
    /// Only integer and string values can become keys; other entries are
    /// dropped. A later duplicate value overwrites an earlier one.
    #[must_use]
    pub fn flip(&self) -> Collection {
        Self::from_pairs(
            self.iter()
                .filter(|(_, v)| matches!(v, Value::Int(_) | Value::String(_)))
                .filter_map(|(k, v)| Key::coerce(v).map(|key| (key, k.to_value()))),
        )
    }

    /// Inlines nested collections at any depth into one list of values.
    #[must_use]
    pub fn flatten(&self) -> Collection {
        fn walk(c: &Collection, out: &mut Collection) {
            for value in c.values_iter() {
                match value {
                    Value::Collection(child) => walk(child, out),
                    other => {
                        out.append(other.clone());
                    }
                }
            }
        }

        let mut out = Collection::new();
        walk(self, &mut out);
        out
    }

    /// Concatenates the values of direct child collections; other values are
    /// dropped.
    #[must_use]
    pub fn collapse(&self) -> Collection {
        Self::from_values(
            self.values_iter()
                .filter_map(Value::as_collection)
                .flat_map(|child| child.values_iter().cloned()),
        )
    }

    /// Drops values equal (under `mode`) to an earlier value; re-indexed.
    #[must_use]
    pub fn unique(&self, mode: SortMode) -> Collection {
        let mut kept: Vec<&Value> = Vec::new();
        for value in self.values_iter() {
            if !kept.iter().any(|seen| seen.compare(value, mode).is_eq()) {
                kept.push(value);
            }
        }
        Self::from_values(kept.into_iter().cloned())
    }

    /// Reverses entry order; integer keys are renumbered unless preserved.
    #[must_use]
    pub fn reverse(&self, preserve_keys: bool) -> Collection {
        let reversed = self.iter().rev().map(|(k, v)| (k.clone(), v.clone()));
        if preserve_keys {
            Self::from_pairs(reversed)
        } else {
            Self::renumbered(reversed)
        }
    }

    /// Array-slice semantics.
    ///
    /// A negative `offset` counts from the end. `length` of `None` runs to the
    /// end; a negative `length` stops that many entries from the end. Integer
    /// keys are renumbered unless `preserve_keys`; string keys are kept.
    #[must_use]
    pub fn slice(&self, offset: i64, length: Option<i64>, preserve_keys: bool) -> Collection {
        let (start, len) = slice_bounds(self.len(), offset, length);
        let window = self
            .iter()
            .skip(start)
            .take(len)
            .map(|(k, v)| (k.clone(), v.clone()));
        if preserve_keys {
            Self::from_pairs(window)
        } else {
            Self::renumbered(window)
        }
    }

    /// The first `limit` entries, or the last `|limit|` when negative.
    #[must_use]
    pub fn take(&self, limit: i64) -> Collection {
        if limit < 0 {
            self.slice(limit, Some(limit.saturating_abs()), false)
        } else {
            self.slice(0, Some(limit), false)
        }
    }

    /// Splits into consecutive chunks of at most `size` entries.
    ///
    /// Without `preserve_keys`, every chunk is a list re-indexed from 0.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if `size` is 0.
    pub fn chunk(&self, size: usize, preserve_keys: bool) -> Result<Collection> {
        if size == 0 {
            return Err(Error::invalid_argument("chunk size must be at least 1")
                .with_context(ErrorContext::new().with_operation("chunk")));
        }
        let entries: Vec<_> = self.iter().collect();
        Ok(Self::from_values(entries.chunks(size).map(|chunk| {
            let pairs = chunk.iter().map(|(k, v)| ((*k).clone(), (*v).clone()));
            if preserve_keys {
                Self::from_pairs(pairs)
            } else {
                Self::from_values(pairs.map(|(_, v)| v))
            }
        })))
    }

    /// Divides into `num` contiguous groups whose sizes differ by at most one,
    /// earlier groups taking the extra entries; empty groups are omitted.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if `num` is 0.
    pub fn split(&self, num: usize) -> Result<Collection> {
        if num == 0 {
            return Err(Error::invalid_argument("number of groups must be at least 1")
                .with_context(ErrorContext::new().with_operation("split")));
        }
        let count = self.len();
        let mut groups = Collection::new();
        let mut entries = self.iter();
        for i in 0..num {
            let size = count / num + usize::from(i < count % num);
            if size == 0 {
                continue;
            }
            let group = Self::renumbered(
                entries
                    .by_ref()
                    .take(size)
                    .map(|(k, v)| (k.clone(), v.clone())),
            );
            groups.append(group);
        }
        Ok(groups)
    }

    /// Keeps only the given keys that exist, in the requested order.
    pub fn only<I, K>(&self, keys: I) -> Collection
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        Self::from_pairs(keys.into_iter().filter_map(|key| {
            let key = key.into();
            self.entries.get(&key).map(|v| (key, v.clone()))
        }))
    }

    /// Copies the collection without the given keys.
    pub fn except<I, K>(&self, keys: I) -> Collection
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        let mut copy = self.clone();
        for key in keys {
            copy.remove(key);
        }
        copy
    }

    /// Concatenates the receiver with each source.
    ///
    /// String keys overwrite earlier entries in place; integer keys (the
    /// receiver's included) are renumbered in order.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if a source is not array-like.
    pub fn merge<I, V>(&self, sources: I) -> Result<Collection>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let sources = source::coerce_all(sources, "merge")?;
        let entries = std::iter::once(self)
            .chain(sources.iter())
            .flat_map(|c| c.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(Self::renumbered(entries))
    }

    /// Keeps the entries whose value (loosely) appears in none of the sources.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if a source is not array-like.
    pub fn diff<I, V>(&self, sources: I) -> Result<Collection>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let sources = source::coerce_all(sources, "diff")?;
        Ok(self.filter(|v, _| {
            !sources
                .iter()
                .any(|s| s.values_iter().any(|w| v.loose_eq(w)))
        }))
    }

    /// Keeps the entries whose value (loosely) appears in every source.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if a source is not array-like.
    pub fn intersect<I, V>(&self, sources: I) -> Result<Collection>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let sources = source::coerce_all(sources, "intersect")?;
        Ok(self.filter(|v, _| {
            sources
                .iter()
                .all(|s| s.values_iter().any(|w| v.loose_eq(w)))
        }))
    }

    /// Uses the receiver's values as keys for `values`.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if `values` is not array-like, if
    /// the counts differ, or if a receiver value cannot be a key.
    pub fn combine(&self, values: impl Into<Value>) -> Result<Collection> {
        let values = source::coerce(values.into(), "combine")?;
        if values.len() != self.len() {
            return Err(Error::invalid_argument(format!(
                "the number of values ({}) must equal the number of entries ({})",
                values.len(),
                self.len()
            ))
            .with_context(ErrorContext::new().with_operation("combine")));
        }
        let mut combined = Collection::new();
        for ((position, key_source), value) in self.iter().zip(values.values_iter()) {
            let key = Key::coerce(key_source).ok_or_else(|| {
                Error::invalid_argument(format!(
                    "{} cannot be used as a key",
                    key_source.value_type()
                ))
                .with_context(
                    ErrorContext::new()
                        .with_operation("combine")
                        .with_key(position),
                )
            })?;
            combined.insert(key, value.clone());
        }
        Ok(combined)
    }

    /// Extracts `column` from every record.
    ///
    /// Records are the child collections; entries that are not collections or
    /// lack `column` are skipped. When `index` is given and a record holds a
    /// key-like value there, it becomes the result key; otherwise the value is
    /// appended.
    pub fn pluck(&self, column: impl Into<Key>, index: Option<Key>) -> Collection {
        let column = column.into();
        let mut plucked = Collection::new();
        for record in self.values_iter().filter_map(Value::as_collection) {
            let Some(value) = record.entries.get(&column) else {
                continue;
            };
            let key = index
                .as_ref()
                .and_then(|index| record.entries.get(index))
                .and_then(Key::coerce);
            plucked.set(key, value.clone());
        }
        plucked
    }
}

/// Resolves slice arguments to a `(start, len)` window over `count` entries.
fn slice_bounds(count: usize, offset: i64, length: Option<i64>) -> (usize, usize) {
    let count = i64::try_from(count).unwrap_or(i64::MAX);
    let start = if offset < 0 {
        (count + offset).max(0)
    } else {
        offset.min(count)
    };
    let remaining = count - start;
    let len = match length {
        None => remaining,
        Some(l) if l < 0 => (remaining + l).max(0),
        Some(l) => l.min(remaining),
    };
    (
        usize::try_from(start).unwrap_or(0),
        usize::try_from(len).unwrap_or(0),
    )
}
