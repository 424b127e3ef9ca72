//! Error types for Enumerable operations.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Lookup misses are never errors; they surface as `Option::None`.

use std::fmt;

use thiserror::Error;

use crate::types::Type;

/// The main error type for Enumerable operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates a domain error for a requested amount outside `[1, available]`.
    #[must_use]
    pub fn domain(requested: usize, available: usize) -> Self {
        Self::new(ErrorKind::Domain {
            requested,
            available,
        })
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Returns true if this is an invalid argument error.
    ///
    /// Type mismatches raised by typed collections count as invalid arguments.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidArgument(_) | ErrorKind::TypeMismatch { .. }
        )
    }

    /// Returns true if this is a domain error.
    #[must_use]
    pub fn is_domain(&self) -> bool {
        matches!(self.kind, ErrorKind::Domain { .. })
    }
}

/// Result alias for fallible collection operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An argument had the wrong shape (not array-like, mismatched lengths, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A requested amount fell outside the valid range.
    #[error("argument has to be between 1 and {available}, got {requested}")]
    Domain {
        /// The amount that was requested.
        requested: usize,
        /// The number of entries available.
        available: usize,
    },

    /// A value was rejected by a typed collection.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The accepted type.
        expected: Type,
        /// The type of the rejected value.
        actual: Type,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the operation that failed.
    pub operation: Option<String>,
    /// Key the operation was working on, rendered as text.
    pub key: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the failing operation.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Sets the key being processed.
    #[must_use]
    pub fn with_key(mut self, key: impl fmt::Display) -> Self {
        self.key = Some(key.to_string());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "in {operation}")?;
        }
        if let Some(key) = &self.key {
            let sep = if self.operation.is_some() { " " } else { "" };
            write!(f, "{sep}at key {key}")?;
        }
        Ok(())
    }
}
