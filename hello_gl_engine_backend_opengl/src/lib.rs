/*!
# HelloGL Engine - OpenGL Backend

OpenGL implementation of the HelloGL engine device traits.

This crate provides a `GraphicsDevice` backed by a core-profile OpenGL
context (glow bindings, glutin context creation, winit windowing) and an
`App` that runs one scene in a window until it is closed.

```no_run
use hello_gl_engine::hellogl::Config;
use hello_gl_engine::hellogl::device::{AttributeDescriptor, StageKind};
use hello_gl_engine::hellogl::pipeline::ShaderSource;
use hello_gl_engine::hellogl::scene::SceneDesc;
use hello_gl_engine_backend_opengl::hellogl::App;

let scene = SceneDesc::new(
    "triangle",
    ShaderSource::from_path("shaders/triangle.vert")?,
    ShaderSource::from_path("shaders/triangle.frag")?,
    vec![-0.5, -0.5, 0.0, 0.5, -0.5, 0.0, 0.0, 0.5, 0.0],
    vec![AttributeDescriptor::new(0, 3, 12, 0)],
);
App::run(Config::default(), scene)?;
# Ok::<(), hello_gl_engine::hellogl::Error>(())
```
*/

// OpenGL implementation modules
mod gl_format;
mod gl_shader;
mod gl_program;
mod gl_buffer;
mod gl_vertex_array;
mod gl_texture;
mod gl_device;
mod app;

#[cfg(feature = "gl-debug")]
mod debug;

pub mod hellogl {
    pub use crate::gl_device::GlGraphicsDevice;
    pub use crate::app::App;

    pub use crate::gl_shader::GlShader;
    pub use crate::gl_program::GlProgram;
    pub use crate::gl_buffer::GlBuffer;
    pub use crate::gl_vertex_array::GlVertexArray;
    pub use crate::gl_texture::GlTexture;

    // Driver debug output statistics
    #[cfg(feature = "gl-debug")]
    pub use crate::debug::{get_debug_stats, print_debug_stats_report, DebugStats};
}
