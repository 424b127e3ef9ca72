//! Coercion of "another collection" arguments.

use crate::array::Array;
use crate::error::{Error, ErrorContext, Result};
use crate::value::Value;

use super::Collection;

/// Anything that can materialize itself as a raw array.
pub trait Arrayable {
    /// Returns the raw array form of `self`.
    fn to_array(&self) -> Array;
}

impl Arrayable for Collection {
    fn to_array(&self) -> Array {
        Collection::to_array(self)
    }
}

impl Arrayable for Array {
    fn to_array(&self) -> Array {
        self.clone()
    }
}

/// Accepts raw arrays, collections and arrayable objects, rejecting every
/// other value.
pub(crate) fn coerce(value: Value, operation: &'static str) -> Result<Collection> {
    match value {
        Value::Collection(c) => Ok(c),
        Value::Array(a) => Ok(Collection::from_array(a)),
        Value::Object(ref object) => object
            .to_array()
            .map(Collection::from_array)
            .ok_or_else(|| not_array_like(&value, operation)),
        other => Err(not_array_like(&other, operation)),
    }
}

fn not_array_like(value: &Value, operation: &'static str) -> Error {
    Error::invalid_argument(format!(
        "expected an array, collection or arrayable object, got {}",
        value.value_type()
    ))
    .with_context(ErrorContext::new().with_operation(operation))
}

/// Coerces every source, failing on the first one that is not array-like.
pub(crate) fn coerce_all<I, V>(sources: I, operation: &'static str) -> Result<Vec<Collection>>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    sources
        .into_iter()
        .map(|source| coerce(source.into(), operation))
        .collect()
}
