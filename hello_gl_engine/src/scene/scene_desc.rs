/// Scene description - which shaders, geometry, textures and uniforms to use

use std::path::PathBuf;

use crate::graphics_device::{AttributeDescriptor, SamplerDesc, TextureImage};
use crate::pipeline::{ShaderSource, UniformBinding};

/// Time since the loop started and since the previous frame, in seconds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    pub elapsed: f32,
    pub delta: f32,
}

/// Framebuffer size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Width over height (1.0 for a degenerate viewport)
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Uniforms recomputed every frame
pub type UniformFn = Box<dyn Fn(FrameTime, Viewport) -> Vec<UniformBinding>>;

/// Where a texture's pixels come from
#[derive(Debug, Clone)]
pub enum TextureSource {
    /// Image file, optionally flipped so row 0 is the bottom row
    File { path: PathBuf, flip_vertically: bool },
    /// Already decoded pixels
    Image(TextureImage),
}

/// Texture bound to a unit and exposed to the fragment shader through a sampler uniform
#[derive(Debug, Clone)]
pub struct TextureSlot {
    pub source: TextureSource,
    pub unit: u32,
    /// Sampler uniform set to `unit` once at setup
    pub sampler_uniform: String,
    pub sampler: SamplerDesc,
}

/// Thin per-scene configuration consumed by `FrameLoop::prepare`
pub struct SceneDesc {
    pub name: String,
    pub vertex_shader: ShaderSource,
    pub fragment_shader: ShaderSource,
    /// Interleaved float vertex data
    pub vertices: Vec<f32>,
    /// Optional index list (drawn as triangles)
    pub indices: Option<Vec<u32>>,
    pub attributes: Vec<AttributeDescriptor>,
    pub textures: Vec<TextureSlot>,
    /// Uniforms written once after linking
    pub static_uniforms: Vec<UniformBinding>,
    pub dynamic_uniforms: Option<UniformFn>,
    pub depth_test: bool,
}

impl SceneDesc {
    pub fn new(
        name: impl Into<String>,
        vertex_shader: ShaderSource,
        fragment_shader: ShaderSource,
        vertices: Vec<f32>,
        attributes: Vec<AttributeDescriptor>,
    ) -> Self {
        Self {
            name: name.into(),
            vertex_shader,
            fragment_shader,
            vertices,
            indices: None,
            attributes,
            textures: Vec::new(),
            static_uniforms: Vec::new(),
            dynamic_uniforms: None,
            depth_test: false,
        }
    }

    pub fn with_indices(mut self, indices: Vec<u32>) -> Self {
        self.indices = Some(indices);
        self
    }

    pub fn with_texture(mut self, slot: TextureSlot) -> Self {
        self.textures.push(slot);
        self
    }

    pub fn with_static_uniform(mut self, binding: UniformBinding) -> Self {
        self.static_uniforms.push(binding);
        self
    }

    pub fn with_dynamic_uniforms<F>(mut self, uniforms: F) -> Self
    where
        F: Fn(FrameTime, Viewport) -> Vec<UniformBinding> + 'static,
    {
        self.dynamic_uniforms = Some(Box::new(uniforms));
        self
    }

    pub fn with_depth_test(mut self, enabled: bool) -> Self {
        self.depth_test = enabled;
        self
    }
}

impl std::fmt::Debug for SceneDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneDesc")
            .field("name", &self.name)
            .field("vertices", &self.vertices.len())
            .field("indices", &self.indices.as_ref().map(Vec::len))
            .field("attributes", &self.attributes)
            .field("textures", &self.textures.len())
            .field("depth_test", &self.depth_test)
            .finish()
    }
}
