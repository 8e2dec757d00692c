/// Shader source text tagged with its stage

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::graphics_device::StageKind;

/// Immutable shader source
///
/// The text is passed to the device as-is; the `#version` directive is part
/// of the text, and nothing is validated before compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    kind: StageKind,
    text: Arc<str>,
    origin: Option<PathBuf>,
}

impl ShaderSource {
    /// Source from an in-memory literal
    pub fn new(kind: StageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: Arc::from(text.into()),
            origin: None,
        }
    }

    /// Read source from a file
    ///
    /// A missing, unreadable or empty file is a `ResourceLoadError`.
    pub fn from_file(kind: StageKind, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::resource_load(path, e))?;
        if text.trim().is_empty() {
            return Err(Error::resource_load(path, "shader file is empty"));
        }
        crate::engine_debug!("hellogl::ShaderSource",
            "Read {} shader '{}' ({} bytes)", kind, path.display(), text.len());
        Ok(Self {
            kind,
            text: Arc::from(text),
            origin: Some(path.to_path_buf()),
        })
    }

    /// Read source from a file, deriving the stage from its extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let kind = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(StageKind::from_extension)
            .ok_or_else(|| Error::resource_load(path, "cannot infer shader stage from extension"))?;
        Self::from_file(kind, path)
    }

    /// Read source from a path relative to a crate directory
    ///
    /// Pass `env!("CARGO_MANIFEST_DIR")` so the file is found regardless of
    /// the working directory the program is started from.
    pub fn from_manifest_dir(kind: StageKind, manifest_dir: &str, relative: impl AsRef<Path>) -> Result<Self> {
        Self::from_file(kind, Path::new(manifest_dir).join(relative))
    }

    pub fn kind(&self) -> StageKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// File the source was read from, if any
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Short label for logs: the file path or "<inline>"
    pub fn label(&self) -> String {
        match &self.origin {
            Some(path) => path.display().to_string(),
            None => "<inline>".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "shader_source_tests.rs"]
mod tests;
