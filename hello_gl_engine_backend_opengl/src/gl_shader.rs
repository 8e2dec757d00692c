/// GlShader - OpenGL implementation of the Shader trait

use glow::HasContext;
use hello_gl_engine::hellogl::device::{Shader, StageKind};
use std::any::Any;
use std::rc::Rc;

/// Compiled (or failed) GL shader object
pub struct GlShader {
    pub(crate) shader: glow::Shader,
    pub(crate) stage: StageKind,
    pub(crate) compiled: bool,
    pub(crate) info_log: String,
    /// GL context (for cleanup)
    pub(crate) gl: Rc<glow::Context>,
}

impl Shader for GlShader {
    fn stage(&self) -> StageKind {
        self.stage
    }

    fn compiled(&self) -> bool {
        self.compiled
    }

    fn info_log(&self) -> String {
        self.info_log.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for GlShader {
    fn drop(&mut self) {
        // A shader still attached to a program is only flagged for deletion.
        unsafe {
            self.gl.delete_shader(self.shader);
        }
    }
}
