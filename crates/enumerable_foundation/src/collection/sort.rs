//! Ordering operations. All sorts are stable and return a sorted copy.

use std::cmp::Ordering;

use crate::compare::SortMode;
use crate::key::Key;
use crate::value::Value;

use super::Collection;

impl Collection {
    /// Sorts values ascending under `mode`; re-indexed.
    #[must_use]
    pub fn sort(&self, mode: SortMode) -> Collection {
        self.usort(|a, b| a.compare(b, mode))
    }

    /// Sorts values descending under `mode`; re-indexed.
    #[must_use]
    pub fn rsort(&self, mode: SortMode) -> Collection {
        self.usort(|a, b| b.compare(a, mode))
    }

    /// Sorts entries by key ascending under `mode`, keeping keys.
    #[must_use]
    pub fn ksort(&self, mode: SortMode) -> Collection {
        self.uksort(|a, b| compare_keys(a, b, mode))
    }

    /// Sorts entries by key descending under `mode`, keeping keys.
    #[must_use]
    pub fn krsort(&self, mode: SortMode) -> Collection {
        self.uksort(|a, b| compare_keys(b, a, mode))
    }

    /// Sorts values with a custom comparator; re-indexed.
    pub fn usort<F>(&self, mut cmp: F) -> Collection
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        let mut values: Vec<&Value> = self.values_iter().collect();
        values.sort_by(|a, b| cmp(*a, *b));
        Self::from_values(values.into_iter().cloned())
    }

    /// Sorts entries by value with a custom comparator, keeping keys.
    pub fn uasort<F>(&self, mut cmp: F) -> Collection
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        self.sorted_entries(|(_, a), (_, b)| cmp(a, b))
    }

    /// Sorts entries by key with a custom comparator, keeping keys.
    pub fn uksort<F>(&self, mut cmp: F) -> Collection
    where
        F: FnMut(&Key, &Key) -> Ordering,
    {
        self.sorted_entries(|(a, _), (b, _)| cmp(a, b))
    }

    fn sorted_entries<F>(&self, mut cmp: F) -> Collection
    where
        F: FnMut((&Key, &Value), (&Key, &Value)) -> Ordering,
    {
        let mut entries: Vec<(&Key, &Value)> = self.iter().collect();
        entries.sort_by(|a, b| cmp(*a, *b));
        Self::from_pairs(entries.into_iter().map(|(k, v)| (k.clone(), v.clone())))
    }
}

fn compare_keys(a: &Key, b: &Key, mode: SortMode) -> Ordering {
    a.to_value().compare(&b.to_value(), mode)
}
