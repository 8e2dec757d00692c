/// GlTexture - OpenGL implementation of the Texture trait

use glow::HasContext;
use hello_gl_engine::hellogl::device::Texture;
use std::any::Any;
use std::rc::Rc;

/// 2D GL texture
pub struct GlTexture {
    pub(crate) texture: glow::Texture,
    pub(crate) width: u32,
    pub(crate) height: u32,
    /// GL context (for cleanup)
    pub(crate) gl: Rc<glow::Context>,
}

impl Texture for GlTexture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for GlTexture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.texture);
        }
    }
}
