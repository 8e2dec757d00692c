//! Unit tests for scenes.rs
//!
//! Every scene must load its shaders and carry geometry matching its layout.
//! No GPU required.

use super::*;
use hello_gl_engine::hellogl::scene::{FrameTime, Viewport};

const ALL: [Scene; 5] = [
    Scene::HelloTriangle,
    Scene::VertexColors,
    Scene::Texture,
    Scene::MixedTextures,
    Scene::Transform,
];

// ============================================================================
// DESCRIPTORS
// ============================================================================

#[test]
fn test_every_scene_describes() {
    for scene in ALL {
        let desc = scene.describe().unwrap();
        assert_eq!(desc.vertex_shader.kind(), StageKind::Vertex);
        assert_eq!(desc.fragment_shader.kind(), StageKind::Fragment);
        assert!(desc.vertex_shader.text().starts_with("#version 330 core"));
    }
}

#[test]
fn test_vertex_data_matches_layout() {
    for scene in ALL {
        let desc = scene.describe().unwrap();
        let layout = VertexLayoutBinder::describe(&desc.attributes).unwrap();
        let floats = layout.floats_per_vertex() as usize;
        assert_eq!(desc.vertices.len() % floats, 0, "{:?}", scene);

        let vertex_count = (desc.vertices.len() / floats) as u32;
        if let Some(indices) = &desc.indices {
            assert!(indices.iter().all(|&i| i < vertex_count), "{:?}", scene);
        }
    }
}

#[test]
fn test_hello_triangle_is_indexed_quad() {
    let desc = Scene::HelloTriangle.describe().unwrap();
    assert_eq!(desc.indices.as_deref(), Some(&[0, 1, 3, 1, 2, 3][..]));
    assert_eq!(desc.vertices.len(), 12);
}

#[test]
fn test_texture_assets_exist() {
    for scene in ALL {
        for slot in scene.describe().unwrap().textures {
            if let TextureSource::File { path, .. } = slot.source {
                assert!(path.exists(), "missing {}", path.display());
            }
        }
    }
}

// ============================================================================
// UNIFORMS
// ============================================================================

#[test]
fn test_transform_projection_follows_aspect() {
    let desc = Scene::Transform.describe().unwrap();
    assert!(desc.depth_test);
    let uniforms = desc.dynamic_uniforms.as_ref().unwrap();

    let time = FrameTime { elapsed: 1.0, delta: 0.016 };
    let wide = uniforms(time, Viewport { width: 1600, height: 600 });
    let square = uniforms(time, Viewport { width: 600, height: 600 });
    let projection = |bindings: &[UniformBinding]| {
        bindings.iter().find(|b| b.name == "projection").map(|b| b.value).unwrap()
    };
    assert_ne!(projection(&wide), projection(&square));
}

#[test]
fn test_vertex_colors_tint_changes_over_time() {
    let desc = Scene::VertexColors.describe().unwrap();
    let uniforms = desc.dynamic_uniforms.as_ref().unwrap();
    let viewport = Viewport { width: 800, height: 600 };

    let start = uniforms(FrameTime { elapsed: 0.0, delta: 0.0 }, viewport);
    let later = uniforms(FrameTime { elapsed: 1.5, delta: 0.0 }, viewport);
    assert_eq!(start[0].name, "tint");
    assert_ne!(start[0].value, later[0].value);
}
