/// ProgramLinker - combines compiled stages into an executable program

use rustc_hash::FxHashSet;

use crate::config::DEFAULT_DIAGNOSTIC_CAPACITY;
use crate::error::{Error, Result};
use crate::graphics_device::{GraphicsDevice, Program, Shader, StageKind, UniformValue};
use crate::pipeline::{truncate_diagnostic, CompiledStage};
use crate::{engine_debug, engine_error, engine_warn};

/// Named uniform value, resolved against a program when applied
#[derive(Debug, Clone, PartialEq)]
pub struct UniformBinding {
    pub name: String,
    pub value: UniformValue,
}

impl UniformBinding {
    pub fn new(name: impl Into<String>, value: impl Into<UniformValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Result of linking a vertex and a fragment stage
///
/// Owns the device program; dropping it releases the program. The stages
/// it was linked from are not owned and may be released once linking is done.
pub struct LinkedProgram {
    program: Box<dyn Program>,
    success: bool,
    diagnostic: String,
    /// Uniform names already reported as missing
    missing_uniforms: FxHashSet<String>,
}

impl LinkedProgram {
    pub fn success(&self) -> bool {
        self.success
    }

    /// Empty on success
    pub fn diagnostic(&self) -> &str {
        &self.diagnostic
    }

    pub fn program(&self) -> &dyn Program {
        self.program.as_ref()
    }

    /// Convert a failed link into `Error::LinkError` (releasing the program)
    pub fn into_result(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(Error::LinkError {
                diagnostic: self.diagnostic.clone(),
            })
        }
    }

    /// Make this program current on `device`
    pub fn bind(&self, device: &mut dyn GraphicsDevice) -> Result<()> {
        self.ensure_linked()?;
        device.use_program(self.program.as_ref());
        Ok(())
    }

    /// Write every binding; names the program does not expose are skipped
    ///
    /// Drivers drop uniforms a shader never reads, so a missing name is
    /// reported once as a warning rather than failing the frame.
    pub fn apply(&mut self, device: &mut dyn GraphicsDevice, bindings: &[UniformBinding]) -> Result<()> {
        self.ensure_linked()?;
        for binding in bindings {
            let found = device.set_uniform(self.program.as_ref(), &binding.name, &binding.value)?;
            if !found && self.missing_uniforms.insert(binding.name.clone()) {
                engine_warn!("hellogl::LinkedProgram",
                    "Uniform '{}' is not an active uniform of this program", binding.name);
            }
        }
        Ok(())
    }

    fn ensure_linked(&self) -> Result<()> {
        if self.success {
            Ok(())
        } else {
            Err(Error::InvalidState(format!(
                "program did not link: {}", self.diagnostic
            )))
        }
    }
}

impl std::fmt::Debug for LinkedProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkedProgram")
            .field("success", &self.success)
            .field("diagnostic", &self.diagnostic)
            .finish()
    }
}

/// Links compiled stages on a device
#[derive(Debug, Clone, Copy)]
pub struct ProgramLinker {
    diagnostic_capacity: usize,
}

impl Default for ProgramLinker {
    fn default() -> Self {
        Self::new(DEFAULT_DIAGNOSTIC_CAPACITY)
    }
}

impl ProgramLinker {
    /// Linker whose diagnostics are bounded to `diagnostic_capacity` bytes
    pub fn new(diagnostic_capacity: usize) -> Self {
        Self { diagnostic_capacity }
    }

    /// Link exactly one vertex and one fragment stage
    ///
    /// Precondition failures never reach the device:
    /// - a failed stage returns its own `CompileError`
    /// - a missing or duplicated stage kind returns `LinkError`
    ///
    /// Otherwise the device links and the outcome is reported in the
    /// returned program's `success`/`diagnostic`. The stages are left to
    /// the caller to release.
    pub fn link(&self, device: &mut dyn GraphicsDevice, stages: &[&CompiledStage]) -> Result<LinkedProgram> {
        if let Some(failed) = stages.iter().find(|stage| !stage.success()) {
            engine_error!("hellogl::ProgramLinker",
                "Refusing to link: {} stage failed to compile", failed.kind());
            return Err(Error::CompileError {
                stage: failed.kind(),
                diagnostic: failed.diagnostic().to_string(),
            });
        }

        let count = |kind: StageKind| stages.iter().filter(|stage| stage.kind() == kind).count();
        let (vertex, fragment) = (count(StageKind::Vertex), count(StageKind::Fragment));
        if vertex != 1 || fragment != 1 {
            let diagnostic = format!(
                "a program needs exactly one vertex and one fragment stage (got {} vertex, {} fragment)",
                vertex, fragment
            );
            engine_error!("hellogl::ProgramLinker", "Refusing to link: {}", diagnostic);
            return Err(Error::LinkError { diagnostic });
        }

        let shaders: Vec<&dyn Shader> = stages.iter().filter_map(|stage| stage.shader()).collect();
        let program = device.create_program(&shaders)?;

        if program.linked() {
            engine_debug!("hellogl::ProgramLinker", "Program linked from {} stages", shaders.len());
            return Ok(LinkedProgram {
                program,
                success: true,
                diagnostic: String::new(),
                missing_uniforms: FxHashSet::default(),
            });
        }

        let mut diagnostic = truncate_diagnostic(&program.info_log(), self.diagnostic_capacity);
        if diagnostic.is_empty() {
            diagnostic = truncate_diagnostic("link failed without an info log", self.diagnostic_capacity);
        }
        engine_error!("hellogl::ProgramLinker", "Shader program could not be made: {}", diagnostic);
        Ok(LinkedProgram {
            program,
            success: false,
            diagnostic,
            missing_uniforms: FxHashSet::default(),
        })
    }
}

#[cfg(test)]
#[path = "program_linker_tests.rs"]
mod tests;
