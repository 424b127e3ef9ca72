//! Type descriptors for value validation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Type descriptor for value validation.
///
/// Used by typed collections to declare which values they accept.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// The null type (only value: null).
    Null,
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// Any numeric value: ints, floats, and numeric strings.
    Number,
    /// String type.
    String,
    /// Nested collection (or raw array) with homogeneous values.
    Collection(Box<Type>),
    /// Opaque host object.
    Object,
    /// Optional type (value or null).
    Option(Box<Type>),
    /// Any type (accepts any value).
    Any,
}

impl Type {
    /// Creates a collection type with the given element type.
    #[must_use]
    pub fn collection(element: Type) -> Self {
        Self::Collection(Box::new(element))
    }

    /// Creates an optional type.
    #[must_use]
    pub fn option(inner: Type) -> Self {
        Self::Option(Box::new(inner))
    }

    /// Returns true if this type is `Any`.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Checks if a value type is accepted by this type.
    ///
    /// This performs structural type checking:
    /// - `Any` accepts all types
    /// - `Option(T)` accepts `Null` and any type that `T` accepts
    /// - `Number` accepts `Int` and `Float`
    /// - Primitive types must match exactly
    /// - Collection types check element types recursively
    #[must_use]
    pub fn accepts(&self, value_type: &Type) -> bool {
        if matches!(self, Self::Any) {
            return true;
        }

        if let Self::Option(inner) = self {
            return matches!(value_type, Self::Null) || inner.accepts(value_type);
        }

        match (self, value_type) {
            // Float accepts Int (numeric promotion)
            (Self::Null, Self::Null)
            | (Self::Bool, Self::Bool)
            | (Self::Int | Self::Float | Self::Number, Self::Int)
            | (Self::Float | Self::Number, Self::Float)
            | (Self::Number, Self::Number)
            | (Self::String, Self::String)
            | (Self::Object, Self::Object) => true,

            // Collection(Any) describes a runtime value whose elements were not inspected.
            (Self::Collection(expected), Self::Collection(actual)) => {
                actual.is_any() || expected.accepts(actual)
            }

            _ => false,
        }
    }

    /// Checks a concrete value against this type.
    ///
    /// Unlike [`Type::accepts`], this inspects the elements of nested
    /// collections and treats numeric strings as numbers.
    #[must_use]
    pub fn accepts_value(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Any, _) => true,
            (Self::Option(inner), v) => v.is_null() || inner.accepts_value(v),
            (Self::Number, v) => v.is_numeric(),
            (Self::Collection(element), Value::Collection(c)) => {
                c.values_iter().all(|v| element.accepts_value(v))
            }
            (Self::Collection(element), Value::Array(a)) => {
                a.values().all(|v| element.accepts_value(v))
            }
            _ => self.accepts(&value.value_type()),
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Collection(t) => write!(f, "collection<{t:?}>"),
            Self::Object => write!(f, "object"),
            Self::Option(t) => write!(f, "option<{t:?}>"),
            Self::Any => write!(f, "any"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
