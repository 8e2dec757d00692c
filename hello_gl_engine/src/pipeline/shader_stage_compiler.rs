/// ShaderStageCompiler - turns shader sources into compiled stages

use crate::config::DEFAULT_DIAGNOSTIC_CAPACITY;
use crate::error::{Error, Result};
use crate::graphics_device::{GraphicsDevice, Shader, StageKind};
use crate::pipeline::ShaderSource;
use crate::{engine_debug, engine_error};

/// Cut `text` to at most `capacity` bytes without splitting a character
pub fn truncate_diagnostic(text: &str, capacity: usize) -> String {
    let text = text.trim_end();
    if text.len() <= capacity {
        return text.to_string();
    }
    let mut end = capacity;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}

/// Result of compiling one stage
///
/// Owns the device shader object (if one was allocated); dropping the
/// stage releases it. On failure the diagnostic is non-empty and bounded.
pub struct CompiledStage {
    shader: Option<Box<dyn Shader>>,
    kind: StageKind,
    success: bool,
    diagnostic: String,
}

impl CompiledStage {
    pub fn kind(&self) -> StageKind {
        self.kind
    }

    pub fn success(&self) -> bool {
        self.success
    }

    /// Empty on success
    pub fn diagnostic(&self) -> &str {
        &self.diagnostic
    }

    /// Device object, present whenever the device could allocate one
    pub fn shader(&self) -> Option<&dyn Shader> {
        self.shader.as_deref()
    }

    /// Release the device object now
    pub fn release(self) {}

    /// Convert a failed stage into `Error::CompileError` (releasing it)
    pub fn into_result(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(Error::CompileError {
                stage: self.kind,
                diagnostic: self.diagnostic.clone(),
            })
        }
    }
}

impl std::fmt::Debug for CompiledStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledStage")
            .field("kind", &self.kind)
            .field("success", &self.success)
            .field("diagnostic", &self.diagnostic)
            .field("allocated", &self.shader.is_some())
            .finish()
    }
}

/// Compiles shader sources on a device
///
/// Never fails: every outcome is encoded in the returned `CompiledStage`.
#[derive(Debug, Clone, Copy)]
pub struct ShaderStageCompiler {
    diagnostic_capacity: usize,
}

impl Default for ShaderStageCompiler {
    fn default() -> Self {
        Self::new(DEFAULT_DIAGNOSTIC_CAPACITY)
    }
}

impl ShaderStageCompiler {
    /// Compiler whose diagnostics are bounded to `diagnostic_capacity` bytes
    pub fn new(diagnostic_capacity: usize) -> Self {
        Self { diagnostic_capacity }
    }

    pub fn diagnostic_capacity(&self) -> usize {
        self.diagnostic_capacity
    }

    /// Compile `source` for the stage it is tagged with
    pub fn compile(&self, device: &mut dyn GraphicsDevice, source: &ShaderSource) -> CompiledStage {
        let kind = source.kind();
        let shader = match device.create_shader(kind, source.text()) {
            Ok(shader) => shader,
            Err(e) => {
                engine_error!("hellogl::ShaderStageCompiler",
                    "Could not allocate {} shader for {}: {}", kind, source.label(), e);
                return CompiledStage {
                    shader: None,
                    kind,
                    success: false,
                    diagnostic: truncate_diagnostic(&e.to_string(), self.diagnostic_capacity),
                };
            }
        };

        if shader.compiled() {
            engine_debug!("hellogl::ShaderStageCompiler", "{} shader {} compiled", kind, source.label());
            return CompiledStage {
                shader: Some(shader),
                kind,
                success: true,
                diagnostic: String::new(),
            };
        }

        let mut diagnostic = truncate_diagnostic(&shader.info_log(), self.diagnostic_capacity);
        if diagnostic.is_empty() {
            diagnostic = truncate_diagnostic("compilation failed without an info log", self.diagnostic_capacity);
        }
        engine_error!("hellogl::ShaderStageCompiler",
            "{} shader {} could not be made: {}", kind, source.label(), diagnostic);
        CompiledStage {
            shader: Some(shader),
            kind,
            success: false,
            diagnostic,
        }
    }
}

#[cfg(test)]
#[path = "shader_stage_compiler_tests.rs"]
mod tests;
