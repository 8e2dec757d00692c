//! Tutorial scenes as SceneDesc configurations

use clap::ValueEnum;
use glam::{Mat4, Vec3, Vec4};
use hello_gl_engine::hellogl::device::{AttributeDescriptor, SamplerDesc, StageKind, WrapMode};
use hello_gl_engine::hellogl::pipeline::{ShaderSource, UniformBinding, VertexLayoutBinder};
use hello_gl_engine::hellogl::scene::{SceneDesc, TextureSlot, TextureSource};
use hello_gl_engine::hellogl::Result;
use std::path::PathBuf;

const MANIFEST_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// Scenes selectable with `--scene`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scene {
    /// Orange quad from two indexed triangles
    HelloTriangle,
    /// Per-vertex colors tinted by a uniform that changes over time
    VertexColors,
    /// One texture on a quad
    Texture,
    /// Two textures blended in the fragment shader
    MixedTextures,
    /// Rotating textured cube with model/view/projection matrices
    Transform,
}

impl Scene {
    pub fn describe(self) -> Result<SceneDesc> {
        match self {
            Scene::HelloTriangle => hello_triangle(),
            Scene::VertexColors => vertex_colors(),
            Scene::Texture => texture(),
            Scene::MixedTextures => mixed_textures(),
            Scene::Transform => transform(),
        }
    }
}

fn shader(kind: StageKind, file: &str) -> Result<ShaderSource> {
    ShaderSource::from_manifest_dir(kind, MANIFEST_DIR, PathBuf::from("shaders").join(file))
}

fn asset(file: &str) -> PathBuf {
    PathBuf::from(MANIFEST_DIR).join("assets").join(file)
}

fn layout(attributes: &[(u32, u32)]) -> Result<Vec<AttributeDescriptor>> {
    Ok(VertexLayoutBinder::interleaved(attributes)?.attributes().to_vec())
}

fn texture_slot(file: &str, unit: u32, sampler_uniform: &str) -> TextureSlot {
    TextureSlot {
        source: TextureSource::File { path: asset(file), flip_vertically: true },
        unit,
        sampler_uniform: sampler_uniform.to_string(),
        sampler: SamplerDesc::default(),
    }
}

const QUAD_INDICES: [u32; 6] = [
    0, 1, 3, // first triangle
    1, 2, 3, // second triangle
];

fn hello_triangle() -> Result<SceneDesc> {
    #[rustfmt::skip]
    let vertices = vec![
         0.5,  0.5, 0.0, // top right
         0.5, -0.5, 0.0, // bottom right
        -0.5, -0.5, 0.0, // bottom left
        -0.5,  0.5, 0.0, // top left
    ];
    Ok(SceneDesc::new(
        "hello_triangle",
        shader(StageKind::Vertex, "hello_triangle.vert")?,
        shader(StageKind::Fragment, "hello_triangle.frag")?,
        vertices,
        layout(&[(0, 3)])?,
    )
    .with_indices(QUAD_INDICES.to_vec()))
}

fn vertex_colors() -> Result<SceneDesc> {
    #[rustfmt::skip]
    let vertices = vec![
        // positions      // colors
         0.5, -0.5, 0.0,  1.0, 0.0, 0.0,
        -0.5, -0.5, 0.0,  0.0, 1.0, 0.0,
         0.0,  0.5, 0.0,  0.0, 0.0, 1.0,
    ];
    Ok(SceneDesc::new(
        "vertex_colors",
        shader(StageKind::Vertex, "vertex_colors.vert")?,
        shader(StageKind::Fragment, "vertex_colors.frag")?,
        vertices,
        layout(&[(0, 3), (1, 3)])?,
    )
    .with_dynamic_uniforms(|time, _| {
        let pulse = time.elapsed.sin() / 2.0 + 0.5;
        vec![UniformBinding::new("tint", Vec4::new(1.0, pulse, 1.0, 1.0))]
    }))
}

#[rustfmt::skip]
const TEXTURED_QUAD: [f32; 32] = [
    // positions       // colors        // texture coords
     0.5,  0.5, 0.0,   1.0, 0.0, 0.0,   1.0, 1.0,
     0.5, -0.5, 0.0,   0.0, 1.0, 0.0,   1.0, 0.0,
    -0.5, -0.5, 0.0,   0.0, 0.0, 1.0,   0.0, 0.0,
    -0.5,  0.5, 0.0,   1.0, 1.0, 0.0,   0.0, 1.0,
];

fn texture() -> Result<SceneDesc> {
    Ok(SceneDesc::new(
        "texture",
        shader(StageKind::Vertex, "textured.vert")?,
        shader(StageKind::Fragment, "textured.frag")?,
        TEXTURED_QUAD.to_vec(),
        layout(&[(0, 3), (1, 3), (2, 2)])?,
    )
    .with_indices(QUAD_INDICES.to_vec())
    .with_texture(texture_slot("container.png", 0, "texture1")))
}

fn mixed_textures() -> Result<SceneDesc> {
    let mut face = texture_slot("awesomeface.png", 1, "texture2");
    face.sampler = SamplerDesc { wrap: WrapMode::ClampToEdge, ..SamplerDesc::default() };

    Ok(SceneDesc::new(
        "mixed_textures",
        shader(StageKind::Vertex, "textured.vert")?,
        shader(StageKind::Fragment, "mixed.frag")?,
        TEXTURED_QUAD.to_vec(),
        layout(&[(0, 3), (1, 3), (2, 2)])?,
    )
    .with_indices(QUAD_INDICES.to_vec())
    .with_texture(texture_slot("container.png", 0, "texture1"))
    .with_texture(face)
    .with_static_uniform(UniformBinding::new("mixValue", 0.2f32)))
}

#[rustfmt::skip]
const CUBE: [f32; 180] = [
    -0.5, -0.5, -0.5,  0.0, 0.0,
     0.5, -0.5, -0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 0.0,

    -0.5, -0.5,  0.5,  0.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
    -0.5,  0.5,  0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,

    -0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5,  0.5,  1.0, 0.0,

     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5,  0.5,  0.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,

    -0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  1.0, 1.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,

    -0.5,  0.5, -0.5,  0.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
];

fn transform() -> Result<SceneDesc> {
    Ok(SceneDesc::new(
        "transform",
        shader(StageKind::Vertex, "transform.vert")?,
        shader(StageKind::Fragment, "transform.frag")?,
        CUBE.to_vec(),
        layout(&[(0, 3), (1, 2)])?,
    )
    .with_texture(texture_slot("container.png", 0, "texture1"))
    .with_texture(texture_slot("awesomeface.png", 1, "texture2"))
    .with_static_uniform(UniformBinding::new("view", Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0))))
    .with_dynamic_uniforms(|time, viewport| {
        let axis = Vec3::new(0.5, 1.0, 0.0).normalize();
        let model = Mat4::from_axis_angle(axis, time.elapsed * 50f32.to_radians());
        let projection = Mat4::perspective_rh_gl(45f32.to_radians(), viewport.aspect(), 0.1, 100.0);
        vec![
            UniformBinding::new("model", model),
            UniformBinding::new("projection", projection),
        ]
    })
    .with_depth_test(true))
}

#[cfg(test)]
#[path = "scenes_tests.rs"]
mod tests;
