//! Validating typed collections for Enumerable.
//!
//! This crate provides:
//! - [`Validator`] - The accept/reject capability pair
//! - [`TypeValidator`] - Validation against a [`Type`](enumerable_foundation::Type)
//! - [`PredicateValidator`] - Validation with a closure
//! - [`TypedCollection`] - A collection that validates before it stores
//!
//! ```
//! use enumerable_foundation::Type;
//! use enumerable_typed::{TypeValidator, TypedCollection};
//!
//! let mut names = TypedCollection::new(TypeValidator::new(Type::String));
//! names.append("ada").unwrap();
//! assert!(names.append(42).is_err());
//! assert_eq!(names.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod typed;
pub mod validator;

pub use typed::TypedCollection;
pub use validator::{PredicateValidator, TypeValidator, Validator};
