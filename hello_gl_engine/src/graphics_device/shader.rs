/// Shader trait and stage kinds

use std::any::Any;
use std::fmt;

/// Pipeline role of a shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    /// Vertex processing
    Vertex,
    /// Fragment processing
    Fragment,
}

impl StageKind {
    /// Guess the stage from a file extension (`vert`/`vs`, `frag`/`fs`)
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "vert" | "vs" => Some(StageKind::Vertex),
            "frag" | "fs" => Some(StageKind::Fragment),
            _ => None,
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageKind::Vertex => write!(f, "Vertex"),
            StageKind::Fragment => write!(f, "Fragment"),
        }
    }
}

/// Compiled shader object
///
/// Implemented by backend-specific shader types (e.g., GlShader).
/// The device object is released when dropped.
pub trait Shader: Any {
    /// Stage this shader was compiled for
    fn stage(&self) -> StageKind;

    /// Device-reported compile status
    fn compiled(&self) -> bool;

    /// Full driver info log (may be empty)
    fn info_log(&self) -> String;

    /// Access to the concrete type, for backends
    fn as_any(&self) -> &dyn Any;
}
