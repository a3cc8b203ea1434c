//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use obsgen_foundation::{DeclId, Error, ErrorContext, ErrorKind, ModuleId};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_hierarchy() {
    let err = Error::invalid_hierarchy("Named", "Entity");
    assert!(matches!(err.kind, ErrorKind::InvalidHierarchy { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("Named"));
    assert!(msg.contains("Entity"));
}

#[test]
fn error_unsupported_shape() {
    let id = DeclId::new(ModuleId::fresh(), 42);
    let err = Error::unsupported_shape(id);
    assert!(matches!(err.kind, ErrorKind::UnsupportedShape { declaration } if declaration == id));
    let msg = format!("{err}");
    assert!(msg.contains("#42"));
}

#[test]
fn error_missing_counterpart() {
    let err = Error::missing_counterpart("Person", "name");
    assert!(matches!(err.kind, ErrorKind::MissingCounterpart { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("Person"));
    assert!(msg.contains("name"));
}

#[test]
fn error_internal() {
    let err = Error::internal("boom");
    assert!(matches!(err.kind, ErrorKind::Internal(_)));
    assert_eq!(format!("{err}"), "internal error: boom");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_starts_without_module() {
    let err = Error::internal("boom");
    assert!(err.context.is_none());
}

#[test]
fn frames_accumulate_innermost_first() {
    let err = Error::internal("boom")
        .in_frame("interface INamed")
        .in_frame("class Person");
    let context = err.context.unwrap();
    assert_eq!(context.stack, vec!["interface INamed", "class Person"]);
    assert!(context.module.is_none());
}

#[test]
fn with_context_replaces() {
    let err = Error::internal("boom")
        .in_frame("class Person")
        .with_context(ErrorContext::new().with_module("models"));
    let context = err.context.unwrap();
    assert_eq!(context.module.as_deref(), Some("models"));
    assert!(context.stack.is_empty());
}
