//! The accept/reject capability behind typed collections.

use std::fmt;

use enumerable_foundation::{Error, Type, Value};

/// Decides which values a typed collection accepts.
pub trait Validator {
    /// Returns true if `value` may be stored.
    fn accepts(&self, value: &Value) -> bool;

    /// Builds the error reported when `value` is rejected.
    fn error_for(&self, value: &Value) -> Error;
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn accepts(&self, value: &Value) -> bool {
        (**self).accepts(value)
    }

    fn error_for(&self, value: &Value) -> Error {
        (**self).error_for(value)
    }
}

/// Accepts the values described by a [`Type`].
///
/// Raw arrays and collections are checked element by element, and numeric
/// strings count as numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeValidator(pub Type);

impl TypeValidator {
    /// Creates a validator for `ty`.
    #[must_use]
    pub const fn new(ty: Type) -> Self {
        Self(ty)
    }

    /// The accepted type.
    #[must_use]
    pub const fn ty(&self) -> &Type {
        &self.0
    }
}

impl Validator for TypeValidator {
    fn accepts(&self, value: &Value) -> bool {
        self.0.accepts_value(value)
    }

    fn error_for(&self, value: &Value) -> Error {
        Error::type_mismatch(self.0.clone(), value.value_type())
    }
}

impl From<Type> for TypeValidator {
    fn from(ty: Type) -> Self {
        Self(ty)
    }
}

/// Accepts the values for which a closure returns true.
pub struct PredicateValidator<F> {
    description: String,
    predicate: F,
}

impl<F> PredicateValidator<F>
where
    F: Fn(&Value) -> bool,
{
    /// Creates a validator; `description` names the rule in error messages.
    pub fn new(description: impl Into<String>, predicate: F) -> Self {
        Self {
            description: description.into(),
            predicate,
        }
    }

    /// The rule description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<F> Validator for PredicateValidator<F>
where
    F: Fn(&Value) -> bool,
{
    fn accepts(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }

    fn error_for(&self, value: &Value) -> Error {
        Error::invalid_argument(format!(
            "{value:?} ({}) does not satisfy {}",
            value.value_type(),
            self.description
        ))
    }
}

impl<F> fmt::Debug for PredicateValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateValidator")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
