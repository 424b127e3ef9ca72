//! Injectable default-collection factory for Enumerable.
//!
//! A [`Factory`] is the strategy for turning a raw [`Array`] into a
//! [`Collection`]. Code that needs one should take it as a parameter; the
//! process-wide slot behind [`register`] and [`collect`] exists for callers
//! that want a single default configured once at startup.
//!
//! ```
//! use enumerable_factory::Factory;
//!
//! let sorted = Factory::new(|array| {
//!     enumerable_foundation::Collection::from_array(array)
//!         .sort(enumerable_foundation::SortMode::Regular)
//! });
//! let c = sorted.make(vec![3, 1, 2]);
//! assert_eq!(c.first_key().and_then(|k| k.as_int()), Some(0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fmt;
use std::sync::Arc;

use enumerable_foundation::{Array, Collection, Error, ErrorContext, Result};
use once_cell::sync::OnceCell;
use tracing::debug;

type Build = dyn Fn(Array) -> Collection + Send + Sync;

/// Builds collections from raw arrays.
#[derive(Clone)]
pub struct Factory {
    build: Arc<Build>,
}

impl Factory {
    /// Creates a factory from a build function.
    pub fn new<F>(build: F) -> Self
    where
        F: Fn(Array) -> Collection + Send + Sync + 'static,
    {
        Self {
            build: Arc::new(build),
        }
    }

    /// Builds a collection from `source`.
    pub fn make(&self, source: impl Into<Array>) -> Collection {
        (self.build)(source.into())
    }
}

impl Default for Factory {
    /// The plain [`Collection::from_array`] strategy.
    fn default() -> Self {
        Self::new(Collection::from_array)
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory").finish_non_exhaustive()
    }
}

static REGISTERED: OnceCell<Factory> = OnceCell::new();

/// Installs the process-wide factory used by [`collect`].
///
/// # Errors
///
/// Returns an invalid argument error if a factory was already registered;
/// the first registration stays in effect.
pub fn register(factory: Factory) -> Result<()> {
    REGISTERED.set(factory).map_err(|_| {
        debug!(target: "enumerable::factory", "factory already registered");
        Error::invalid_argument("a collection factory is already registered")
            .with_context(ErrorContext::new().with_operation("register"))
    })?;
    debug!(target: "enumerable::factory", "factory registered");
    Ok(())
}

/// The registered factory, if any.
#[must_use]
pub fn registered() -> Option<&'static Factory> {
    REGISTERED.get()
}

/// Builds a collection with the registered factory, or the default one.
pub fn collect(source: impl Into<Array>) -> Collection {
    match registered() {
        Some(factory) => factory.make(source),
        None => Collection::from_array(source.into()),
    }
}
