/// GlBuffer - OpenGL implementation of the Buffer trait

use glow::HasContext;
use hello_gl_engine::hellogl::device::{Buffer, BufferDesc, BufferUsage};
use std::any::Any;
use std::rc::Rc;

/// GL buffer object with static contents
pub struct GlBuffer {
    pub(crate) buffer: glow::Buffer,
    pub(crate) desc: BufferDesc,
    /// GL context (for cleanup)
    pub(crate) gl: Rc<glow::Context>,
}

impl Buffer for GlBuffer {
    fn usage(&self) -> BufferUsage {
        self.desc.usage
    }

    fn size(&self) -> u64 {
        self.desc.size
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for GlBuffer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.buffer);
        }
    }
}
