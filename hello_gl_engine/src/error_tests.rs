//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};
use crate::graphics_device::{AttributeDescriptor, StageKind};
use std::path::PathBuf;

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_compile_error_display() {
    let err = Error::CompileError {
        stage: StageKind::Fragment,
        diagnostic: "0:3(1): error: syntax error".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("Fragment shader compilation failed"));
    assert!(display.contains("0:3(1): error: syntax error"));
}

#[test]
fn test_link_error_display() {
    let err = Error::LinkError { diagnostic: "missing main".to_string() };
    assert_eq!(format!("{}", err), "Program link failed: missing main");
}

#[test]
fn test_layout_error_display_with_descriptor() {
    let err = Error::LayoutError {
        descriptor: Some(AttributeDescriptor::new(1, 3, 24, 8)),
        reason: "overlap".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("slot 1"));
    assert!(display.contains("stride 24"));
    assert!(display.contains("offset 8"));
    assert!(display.contains("overlap"));
}

#[test]
fn test_layout_error_display_without_descriptor() {
    let err = Error::LayoutError { descriptor: None, reason: "empty".to_string() };
    assert_eq!(format!("{}", err), "Invalid vertex layout: empty");
}

#[test]
fn test_resource_load_error_display() {
    let err = Error::ResourceLoadError {
        path: PathBuf::from("shaders/missing.vert"),
        reason: "No such file or directory".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("shaders/missing.vert"));
    assert!(display.contains("No such file"));
}

#[test]
fn test_backend_and_initialization_display() {
    assert_eq!(format!("{}", Error::BackendError("x".to_string())), "Backend error: x");
    assert_eq!(
        format!("{}", Error::InitializationFailed("no window".to_string())),
        "Initialization failed: no window"
    );
    assert_eq!(format!("{}", Error::InvalidState("early".to_string())), "Invalid state: early");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::LinkError { diagnostic: String::new() };
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug_names_variant() {
    let err = Error::CompileError { stage: StageKind::Vertex, diagnostic: "d".to_string() };
    assert!(format!("{:?}", err).contains("CompileError"));
    let err = Error::ResourceLoadError { path: PathBuf::from("a"), reason: "b".to_string() };
    assert!(format!("{:?}", err).contains("ResourceLoadError"));
}

#[test]
fn test_error_clone() {
    let err = Error::LayoutError {
        descriptor: Some(AttributeDescriptor::new(0, 3, 12, 0)),
        reason: "r".to_string(),
    };
    assert_eq!(format!("{}", err), format!("{}", err.clone()));
}

#[test]
fn test_layout_helper_keeps_descriptor() {
    let desc = AttributeDescriptor::new(2, 2, 32, 24);
    match Error::layout(desc, "why") {
        Error::LayoutError { descriptor, reason } => {
            assert_eq!(descriptor, Some(desc));
            assert_eq!(reason, "why");
        }
        other => panic!("unexpected {:?}", other),
    }
}

// ============================================================================
// RESULT TYPE
// ============================================================================

#[test]
fn test_result_question_mark_propagation() {
    fn inner() -> Result<u32> {
        Err(Error::LinkError { diagnostic: "inner".to_string() })
    }
    fn outer() -> Result<u32> {
        let value = inner()?;
        Ok(value + 1)
    }
    assert!(matches!(outer(), Err(Error::LinkError { .. })));
}
