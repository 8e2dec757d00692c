/// Program trait and uniform values

use std::any::Any;
use glam::{Mat4, Vec3, Vec4};

/// Linked program object
///
/// Implemented by backend-specific program types (e.g., GlProgram).
/// The device object is released when dropped.
pub trait Program: Any {
    /// Device-reported link status
    fn linked(&self) -> bool;

    /// Full driver info log (may be empty)
    fn info_log(&self) -> String;

    /// Access to the concrete type, for backends
    fn as_any(&self) -> &dyn Any;
}

/// Value written to a named uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// 4x4 float matrix (column major)
    Mat4(Mat4),
    /// vec4
    Vec4(Vec4),
    /// vec3
    Vec3(Vec3),
    /// float
    Float(f32),
    /// int (also used for sampler units)
    Int(i32),
}

impl From<Mat4> for UniformValue {
    fn from(value: Mat4) -> Self {
        UniformValue::Mat4(value)
    }
}

impl From<Vec4> for UniformValue {
    fn from(value: Vec4) -> Self {
        UniformValue::Vec4(value)
    }
}

impl From<Vec3> for UniformValue {
    fn from(value: Vec3) -> Self {
        UniformValue::Vec3(value)
    }
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        UniformValue::Float(value)
    }
}

impl From<i32> for UniformValue {
    fn from(value: i32) -> Self {
        UniformValue::Int(value)
    }
}
