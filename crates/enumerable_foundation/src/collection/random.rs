//! Shuffling and sampling.
//!
//! The plain variants draw from the thread-local generator; the `_with`
//! variants take any [`Rng`] so callers can seed them.

use rand::Rng;
use rand::seq::SliceRandom;
use rand::seq::index;
use tracing::debug;

use crate::error::{Error, ErrorContext, Result};
use crate::value::Value;

use super::Collection;

impl Collection {
    /// Returns the values in random order; re-indexed.
    #[must_use]
    pub fn shuffle(&self) -> Collection {
        self.shuffle_with(&mut rand::thread_rng())
    }

    /// Returns the values in an order drawn from `rng`; re-indexed.
    pub fn shuffle_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Collection {
        let mut values: Vec<&Value> = self.values_iter().collect();
        values.shuffle(rng);
        Self::from_values(values.into_iter().cloned())
    }

    /// Samples `n` distinct entries without modifying the collection.
    ///
    /// See [`Collection::random_with`].
    ///
    /// # Errors
    ///
    /// Returns a domain error if `n` is outside `1..=len`.
    pub fn random(&self, n: usize) -> Result<Option<Value>> {
        self.random_with(n, &mut rand::thread_rng())
    }

    /// Samples `n` distinct entries using `rng`.
    ///
    /// An empty collection yields `Ok(None)` whatever `n` is. With `n == 1`
    /// the sampled value itself is returned; otherwise a collection of the
    /// sampled values in their original order, re-indexed.
    ///
    /// # Errors
    ///
    /// Returns a domain error if `n` is outside `1..=len`.
    pub fn random_with<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Option<Value>> {
        let count = self.len();
        if count == 0 {
            return Ok(None);
        }
        if n == 0 || n > count {
            debug!(
                target: "enumerable::collection",
                requested = n,
                available = count,
                "random sample out of range"
            );
            return Err(Error::domain(n, count)
                .with_context(ErrorContext::new().with_operation("random")));
        }
        if n == 1 {
            let position = rng.gen_range(0..count);
            return Ok(self.values_iter().nth(position).cloned());
        }

        let mut picked = index::sample(rng, count, n).into_vec();
        picked.sort_unstable();
        let values: Vec<&Value> = self.values_iter().collect();
        let sample = Self::from_values(
            picked
                .into_iter()
                .filter_map(|i| values.get(i).copied().cloned()),
        );
        Ok(Some(Value::Collection(sample)))
    }
}
