/// GraphicsDevice trait - device collaborator interface

use crate::error::Result;
use crate::graphics_device::{
    Buffer, BufferDesc, Program, SamplerDesc, Shader, StageKind, Texture, TextureImage,
    UniformValue, VertexArray, VertexLayout,
};

/// Polygon rasterization mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonMode {
    /// Filled triangles
    Fill,
    /// Edges only (wireframe)
    Line,
    /// Vertices only
    Point,
}

/// One triangle-list draw call against the bound program and vertex array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    /// `index_count` 32-bit indices from the bound index buffer
    Indexed { index_count: u32 },
    /// `vertex_count` consecutive vertices from the bound vertex buffer
    Arrays { vertex_count: u32 },
}

impl DrawCall {
    /// Number of elements (indices or vertices) consumed
    pub fn element_count(&self) -> u32 {
        match self {
            DrawCall::Indexed { index_count } => *index_count,
            DrawCall::Arrays { vertex_count } => *vertex_count,
        }
    }

    /// Number of triangles produced
    pub fn triangle_count(&self) -> u32 {
        self.element_count() / 3
    }
}

/// Device statistics, reset by nothing (cumulative since creation)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceStats {
    /// Draw calls issued
    pub draw_calls: u64,
    /// Triangles submitted
    pub triangles: u64,
    /// Frames presented
    pub frames: u64,
}

/// Device collaborator: resource factory and immediate-mode command sink
///
/// Implemented by backend-specific devices (e.g., GlGraphicsDevice).
/// All calls are synchronous and run on the thread owning the context.
pub trait GraphicsDevice {
    /// Create a shader object and compile `source` for `stage`
    ///
    /// Returns `Err` only if the device could not allocate the object.
    /// Compilation failures are reported by `Shader::compiled`.
    fn create_shader(&mut self, stage: StageKind, source: &str) -> Result<Box<dyn Shader>>;

    /// Create a program, attach `shaders` and link it
    ///
    /// Returns `Err` only if the device could not allocate the object.
    /// Link failures are reported by `Program::linked`.
    fn create_program(&mut self, shaders: &[&dyn Shader]) -> Result<Box<dyn Program>>;

    /// Create a buffer and upload `data` into it
    fn create_buffer(&mut self, desc: BufferDesc, data: &[u8]) -> Result<Box<dyn Buffer>>;

    /// Create a vertex array recording `layout` over `vertex_buffer`
    fn create_vertex_array(
        &mut self,
        layout: &VertexLayout,
        vertex_buffer: &dyn Buffer,
        index_buffer: Option<&dyn Buffer>,
    ) -> Result<Box<dyn VertexArray>>;

    /// Create a 2D texture from a decoded image
    fn create_texture(&mut self, image: &TextureImage, sampler: &SamplerDesc) -> Result<Box<dyn Texture>>;

    /// Make `program` current
    fn use_program(&mut self, program: &dyn Program);

    /// Write a uniform of `program` (which is made current)
    ///
    /// Returns `Ok(false)` if the program has no active uniform named `name`.
    fn set_uniform(&mut self, program: &dyn Program, name: &str, value: &UniformValue) -> Result<bool>;

    /// Bind `texture` to texture unit `unit`
    fn bind_texture(&mut self, unit: u32, texture: &dyn Texture);

    /// Make `vertex_array` current
    fn bind_vertex_array(&mut self, vertex_array: &dyn VertexArray);

    /// Issue one draw call
    fn draw(&mut self, call: DrawCall);

    /// Clear color (and depth, if depth testing is on)
    fn clear(&mut self, color: [f32; 4]);

    /// Set the viewport to the framebuffer size
    fn set_viewport(&mut self, width: u32, height: u32);

    /// Set rasterization mode for front and back faces
    fn set_polygon_mode(&mut self, mode: PolygonMode);

    /// Enable or disable depth testing
    fn set_depth_test(&mut self, enabled: bool);

    /// Present the back buffer
    fn present(&mut self) -> Result<()>;

    /// Cumulative statistics
    fn stats(&self) -> DeviceStats;
}
