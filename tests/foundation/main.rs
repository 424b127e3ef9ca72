//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Key, Value, Error, and the collection engine.

mod errors;
mod keys;
mod random;
mod sorting;
mod transforms;
mod values;
