//! Unit tests for shader_stage_compiler.rs

use crate::error::Error;
use crate::graphics_device::mock_graphics_device::MockGraphicsDevice;
use crate::graphics_device::StageKind;
use crate::pipeline::{truncate_diagnostic, ShaderSource, ShaderStageCompiler};

const VERTEX_SOURCE: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
   gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
";

const BROKEN_SOURCE: &str = "#version 330 core
void main()
{
   gl_Position = vec4(1.0;
";

// ============================================================================
// compile
// ============================================================================

#[test]
fn test_compile_valid_source_succeeds_with_empty_diagnostic() {
    let mut device = MockGraphicsDevice::new();
    let compiler = ShaderStageCompiler::default();
    let stage = compiler.compile(&mut device, &ShaderSource::new(StageKind::Vertex, VERTEX_SOURCE));
    assert!(stage.success());
    assert!(stage.diagnostic().is_empty());
    assert_eq!(stage.kind(), StageKind::Vertex);
    assert!(stage.shader().is_some());
}

#[test]
fn test_compile_syntax_error_fails_with_bounded_diagnostic() {
    let mut device = MockGraphicsDevice::new();
    device.log_padding = 4096;
    let compiler = ShaderStageCompiler::new(512);
    let stage = compiler.compile(&mut device, &ShaderSource::new(StageKind::Fragment, BROKEN_SOURCE));
    assert!(!stage.success());
    assert!(!stage.diagnostic().is_empty());
    assert!(stage.diagnostic().len() <= 512);
}

#[test]
fn test_failed_stage_still_owns_device_object() {
    let mut device = MockGraphicsDevice::new();
    let stage = ShaderStageCompiler::default()
        .compile(&mut device, &ShaderSource::new(StageKind::Fragment, BROKEN_SOURCE));
    assert!(stage.shader().is_some());
    assert_eq!(device.record().shaders_released, 0);
    stage.release();
    assert_eq!(device.record().shaders_released, 1);
}

#[test]
fn test_compile_allocation_failure_is_encoded_not_raised() {
    let mut device = MockGraphicsDevice::new();
    device.fail_allocations();
    let stage = ShaderStageCompiler::default()
        .compile(&mut device, &ShaderSource::new(StageKind::Vertex, VERTEX_SOURCE));
    assert!(!stage.success());
    assert!(stage.shader().is_none());
    assert!(stage.diagnostic().contains("allocation failed"));
}

#[test]
fn test_into_result_maps_failure_to_compile_error() {
    let mut device = MockGraphicsDevice::new();
    let stage = ShaderStageCompiler::default()
        .compile(&mut device, &ShaderSource::new(StageKind::Fragment, BROKEN_SOURCE));
    match stage.into_result() {
        Err(Error::CompileError { stage, diagnostic }) => {
            assert_eq!(stage, StageKind::Fragment);
            assert!(!diagnostic.is_empty());
        }
        other => panic!("expected CompileError, got {:?}", other),
    }
    assert_eq!(device.record().shaders_released, 1);
}

// ============================================================================
// truncate_diagnostic
// ============================================================================

#[test]
fn test_truncate_short_text_unchanged() {
    assert_eq!(truncate_diagnostic("error: x\n", 512), "error: x");
}

#[test]
fn test_truncate_long_text_to_capacity() {
    let text = "e".repeat(1000);
    assert_eq!(truncate_diagnostic(&text, 512).len(), 512);
}

#[test]
fn test_truncate_respects_char_boundary() {
    // 'é' is two bytes; a cut at an odd byte must back off
    let text = "é".repeat(10);
    let cut = truncate_diagnostic(&text, 5);
    assert_eq!(cut, "éé");
}
