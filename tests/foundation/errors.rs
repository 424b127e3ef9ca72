//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use enumerable_foundation::{Error, ErrorContext, ErrorKind, Type, collection};

#[test]
fn invalid_argument_display() {
    let err = Error::invalid_argument("chunk size must be at least 1");
    assert!(err.is_invalid_argument());
    assert!(!err.is_domain());
    assert_eq!(err.to_string(), "invalid argument: chunk size must be at least 1");
}

#[test]
fn domain_display() {
    let err = Error::domain(5, 3);
    assert!(err.is_domain());
    assert!(matches!(
        err.kind,
        ErrorKind::Domain {
            requested: 5,
            available: 3
        }
    ));
    assert_eq!(err.to_string(), "argument has to be between 1 and 3, got 5");
}

#[test]
fn type_mismatch_counts_as_invalid_argument() {
    let err = Error::type_mismatch(Type::Int, Type::String);
    assert!(err.is_invalid_argument());
    let msg = err.to_string();
    assert!(msg.contains("int") && msg.contains("string"));
}

#[test]
fn context_display() {
    let ctx = ErrorContext::new().with_operation("combine").with_key("a");
    assert_eq!(ctx.to_string(), "in combine at key a");
    assert_eq!(ErrorContext::new().with_key(4).to_string(), "at key 4");
    assert_eq!(ErrorContext::new().to_string(), "");
}

#[test]
fn operations_attach_context() {
    let err = collection![1].merge([42]).unwrap_err();
    let ctx = err.context.expect("merge errors carry context");
    assert_eq!(ctx.operation.as_deref(), Some("merge"));

    let err = collection![collection![1]].combine(vec![1]).unwrap_err();
    let ctx = err.context.expect("combine errors carry context");
    assert_eq!(ctx.key.as_deref(), Some("0"));
}

#[test]
fn errors_are_std_errors() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<Error>();
}
