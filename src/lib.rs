//! Enumerable - Ordered key/value collections
//!
//! This crate re-exports all layers of the Enumerable system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: enumerable_factory    — Injectable default-collection factory
//! Layer 1: enumerable_typed      — Validating typed collections
//! Layer 0: enumerable_foundation — Keys, values, errors, the collection engine
//! ```

pub use enumerable_factory as factory;
pub use enumerable_foundation as foundation;
pub use enumerable_typed as typed;

pub use enumerable_foundation::{Collection, Key, Value, collection};
