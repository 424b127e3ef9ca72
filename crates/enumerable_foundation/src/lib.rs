//! Core keys, values, errors, and the ordered collection engine for Enumerable.
//!
//! This crate provides:
//! - [`Collection`] - Ordered key/value store with the full operation catalog
//! - [`Key`] - Integer-or-string entry keys with canonical normalization
//! - [`Value`] - The closed set of storable values
//! - [`Array`] - The raw, unwrapped array form used at the boundary
//! - [`Type`] - Type descriptors for validation
//! - [`Error`] - Rich error types with context
//!
//! Raw arrays are wrapped into child collections on every insertion path:
//!
//! ```
//! use enumerable_foundation::{collection, Collection, Value};
//!
//! let mut c = Collection::new();
//! c.append(vec![1, 2]).insert("name", "ada");
//! assert!(c.get(0).is_some_and(Value::is_collection));
//! assert_eq!(c.to_array().len(), 2);
//! assert_eq!(collection![3, 1, 2].max(), Some(&Value::Int(3)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::return_self_not_must_use)]

pub mod array;
pub mod collection;
pub mod compare;
pub mod error;
pub mod key;
mod macros;
pub mod types;
pub mod value;

#[cfg(feature = "serde")]
mod serde_impl;

pub use array::Array;
pub use collection::aggregate::DEFAULT_GLUE;
pub use collection::{Arrayable, Collection, Seed};
pub use compare::SortMode;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use key::Key;
pub use types::Type;
pub use value::{Number, Opaque, Value};
