//! Error types for the HelloGL engine
//!
//! This module defines the error taxonomy used throughout the engine:
//! shader compilation, program linking, vertex layout validation,
//! resource loading and device/backend failures.

use std::fmt;
use std::path::PathBuf;

use crate::graphics_device::{AttributeDescriptor, StageKind};

/// Result type for HelloGL engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// HelloGL engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A shader stage failed to compile
    CompileError {
        /// Stage that failed
        stage: StageKind,
        /// Driver info log (bounded length)
        diagnostic: String,
    },

    /// Compiled stages failed to link into a program
    LinkError {
        /// Driver info log (bounded length)
        diagnostic: String,
    },

    /// A vertex layout was rejected at construction time
    LayoutError {
        /// Offending descriptor, if the error concerns a single one
        descriptor: Option<AttributeDescriptor>,
        /// Human readable reason
        reason: String,
    },

    /// A shader or texture file could not be loaded
    ResourceLoadError {
        /// Path that was requested
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },

    /// Backend-specific error (OpenGL, context creation, allocation)
    BackendError(String),

    /// Initialization failed (window, context, device)
    InitializationFailed(String),

    /// Operation not allowed in the current frame loop state
    InvalidState(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CompileError { stage, diagnostic } => {
                write!(f, "{} shader compilation failed: {}", stage, diagnostic)
            }
            Error::LinkError { diagnostic } => write!(f, "Program link failed: {}", diagnostic),
            Error::LayoutError { descriptor: Some(desc), reason } => write!(
                f,
                "Invalid vertex layout (slot {}, {} components, stride {}, offset {}): {}",
                desc.slot, desc.component_count, desc.stride_bytes, desc.offset_bytes, reason
            ),
            Error::LayoutError { descriptor: None, reason } => {
                write!(f, "Invalid vertex layout: {}", reason)
            }
            Error::ResourceLoadError { path, reason } => {
                write!(f, "Failed to load '{}': {}", path.display(), reason)
            }
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Build a `LayoutError` tied to one descriptor
    pub(crate) fn layout(descriptor: AttributeDescriptor, reason: impl Into<String>) -> Self {
        Error::LayoutError {
            descriptor: Some(descriptor),
            reason: reason.into(),
        }
    }

    /// Build a `ResourceLoadError`
    pub(crate) fn resource_load(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        Error::ResourceLoadError {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
