/// GlProgram - OpenGL implementation of the Program trait

use glow::HasContext;
use hello_gl_engine::hellogl::device::Program;
use rustc_hash::FxHashMap;
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

/// Linked (or failed) GL program object
pub struct GlProgram {
    pub(crate) program: glow::Program,
    pub(crate) linked: bool,
    pub(crate) info_log: String,
    /// Uniform locations by name; `None` for names the program does not expose
    pub(crate) locations: RefCell<FxHashMap<String, Option<glow::UniformLocation>>>,
    /// GL context (for cleanup)
    pub(crate) gl: Rc<glow::Context>,
}

impl GlProgram {
    /// Location of `name`, queried once and cached
    pub(crate) fn uniform_location(&self, name: &str) -> Option<glow::UniformLocation> {
        if let Some(location) = self.locations.borrow().get(name) {
            return location.clone();
        }
        let location = unsafe { self.gl.get_uniform_location(self.program, name) };
        self.locations.borrow_mut().insert(name.to_string(), location.clone());
        location
    }
}

impl Program for GlProgram {
    fn linked(&self) -> bool {
        self.linked
    }

    fn info_log(&self) -> String {
        self.info_log.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for GlProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.program);
        }
    }
}
