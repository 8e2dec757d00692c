/// Engine enum to GL constant conversions
///
/// Pure functions; no context required.

use hello_gl_engine::hellogl::device::{
    BufferUsage, DrawCall, Filter, PixelFormat, PolygonMode, StageKind, UniformValue, WrapMode,
};

pub(crate) fn shader_stage_to_gl(stage: StageKind) -> u32 {
    match stage {
        StageKind::Vertex => glow::VERTEX_SHADER,
        StageKind::Fragment => glow::FRAGMENT_SHADER,
    }
}

/// Binding target of a buffer
pub(crate) fn buffer_usage_to_target(usage: BufferUsage) -> u32 {
    match usage {
        BufferUsage::Vertex => glow::ARRAY_BUFFER,
        BufferUsage::Index => glow::ELEMENT_ARRAY_BUFFER,
    }
}

pub(crate) fn wrap_mode_to_gl(wrap: WrapMode) -> i32 {
    (match wrap {
        WrapMode::Repeat => glow::REPEAT,
        WrapMode::MirroredRepeat => glow::MIRRORED_REPEAT,
        WrapMode::ClampToEdge => glow::CLAMP_TO_EDGE,
    }) as i32
}

/// Minification filter; with mipmaps, the filter also applies between levels
pub(crate) fn min_filter_to_gl(filter: Filter, mipmaps: bool) -> i32 {
    (match (filter, mipmaps) {
        (Filter::Nearest, false) => glow::NEAREST,
        (Filter::Linear, false) => glow::LINEAR,
        (Filter::Nearest, true) => glow::NEAREST_MIPMAP_NEAREST,
        (Filter::Linear, true) => glow::LINEAR_MIPMAP_LINEAR,
    }) as i32
}

pub(crate) fn mag_filter_to_gl(filter: Filter) -> i32 {
    (match filter {
        Filter::Nearest => glow::NEAREST,
        Filter::Linear => glow::LINEAR,
    }) as i32
}

/// (internal format, pixel format) for `tex_image_2d`
pub(crate) fn pixel_format_to_gl(format: PixelFormat) -> (i32, u32) {
    match format {
        PixelFormat::Rgb8 => (glow::RGB8 as i32, glow::RGB),
        PixelFormat::Rgba8 => (glow::RGBA8 as i32, glow::RGBA),
    }
}

pub(crate) fn polygon_mode_to_gl(mode: PolygonMode) -> u32 {
    match mode {
        PolygonMode::Fill => glow::FILL,
        PolygonMode::Line => glow::LINE,
        PolygonMode::Point => glow::POINT,
    }
}

/// Draw calls are always triangle lists
pub(crate) fn draw_call_count(call: DrawCall) -> i32 {
    call.element_count() as i32
}

/// Short type name used in uniform-related log messages
pub(crate) fn uniform_type_name(value: &UniformValue) -> &'static str {
    match value {
        UniformValue::Mat4(_) => "mat4",
        UniformValue::Vec4(_) => "vec4",
        UniformValue::Vec3(_) => "vec3",
        UniformValue::Float(_) => "float",
        UniformValue::Int(_) => "int",
    }
}

#[cfg(test)]
#[path = "gl_format_tests.rs"]
mod tests;
