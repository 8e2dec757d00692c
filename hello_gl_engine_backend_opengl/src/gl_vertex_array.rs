/// GlVertexArray - OpenGL implementation of the VertexArray trait

use glow::HasContext;
use hello_gl_engine::hellogl::device::VertexArray;
use std::any::Any;
use std::rc::Rc;

/// GL vertex array object recording attribute pointers and the index buffer
pub struct GlVertexArray {
    pub(crate) vertex_array: glow::VertexArray,
    /// GL context (for cleanup)
    pub(crate) gl: Rc<glow::Context>,
}

impl VertexArray for GlVertexArray {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for GlVertexArray {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vertex_array);
        }
    }
}
