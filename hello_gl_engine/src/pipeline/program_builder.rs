/// GraphicsProgramBuilder - compile, link and release in one call

use crate::config::Config;
use crate::error::Result;
use crate::graphics_device::GraphicsDevice;
use crate::pipeline::{LinkedProgram, ProgramLinker, ShaderSource, ShaderStageCompiler};

/// Builds a linked program from a vertex and a fragment source
///
/// Every stage created along the way is released before `build` returns,
/// on success and on every failure path.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphicsProgramBuilder {
    compiler: ShaderStageCompiler,
    linker: ProgramLinker,
}

impl GraphicsProgramBuilder {
    pub fn new(diagnostic_capacity: usize) -> Self {
        Self {
            compiler: ShaderStageCompiler::new(diagnostic_capacity),
            linker: ProgramLinker::new(diagnostic_capacity),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.diagnostic_capacity)
    }

    pub fn compiler(&self) -> &ShaderStageCompiler {
        &self.compiler
    }

    pub fn linker(&self) -> &ProgramLinker {
        &self.linker
    }

    /// Compile both stages and link them
    ///
    /// # Errors
    ///
    /// `CompileError` for the first stage that fails (a shader the device
    /// could not allocate counts as failed), `LinkError` if the device
    /// rejects the program, `BackendError` if the program cannot be allocated.
    pub fn build(
        &self,
        device: &mut dyn GraphicsDevice,
        vertex: &ShaderSource,
        fragment: &ShaderSource,
    ) -> Result<LinkedProgram> {
        let vertex_stage = self.compiler.compile(device, vertex).into_result()?;
        let fragment_stage = self.compiler.compile(device, fragment).into_result()?;

        let program = self.linker.link(device, &[&vertex_stage, &fragment_stage])?;

        // The program keeps its own reference to the code; the stages can go.
        vertex_stage.release();
        fragment_stage.release();

        program.into_result()
    }
}

#[cfg(test)]
#[path = "program_builder_tests.rs"]
mod tests;
