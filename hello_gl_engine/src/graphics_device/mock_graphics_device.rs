/// Mock graphics device for unit tests (no GPU required)
///
/// Compiles and links with simple textual rules and records every call,
/// including resource releases, so tests can observe ownership behavior.

use std::any::Any;
use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::graphics_device::{
    Buffer, BufferDesc, BufferUsage, DeviceStats, DrawCall, GraphicsDevice, PolygonMode, Program,
    SamplerDesc, Shader, StageKind, Texture, TextureImage, UniformValue, VertexArray, VertexLayout,
};

// ============================================================================
// Shared record
// ============================================================================

/// Everything the mock device observed
#[derive(Debug, Default)]
pub struct MockRecord {
    pub shaders_created: u32,
    pub shaders_released: u32,
    pub programs_created: u32,
    pub programs_released: u32,
    pub buffers_created: u32,
    pub buffers_released: u32,
    pub vertex_arrays_created: u32,
    pub vertex_arrays_released: u32,
    pub textures_created: u32,
    pub textures_released: u32,
    /// Number of times the device linker ran
    pub link_attempts: u32,
    /// Command names in call order
    pub commands: Vec<String>,
    /// Uniform writes in call order
    pub uniforms: Vec<(String, UniformValue)>,
    pub draws: Vec<DrawCall>,
    /// Layouts passed to create_vertex_array
    pub layouts: Vec<VertexLayout>,
    pub viewport: Option<(u32, u32)>,
    pub polygon_mode: Option<PolygonMode>,
    pub depth_test: bool,
    pub presents: u64,
}

type SharedRecord = Arc<Mutex<MockRecord>>;

// ============================================================================
// Mock Shader
// ============================================================================

#[derive(Debug)]
pub struct MockShader {
    pub stage: StageKind,
    pub compiled: bool,
    pub log: String,
    pub uniforms: Vec<String>,
    record: SharedRecord,
}

impl Shader for MockShader {
    fn stage(&self) -> StageKind {
        self.stage
    }

    fn compiled(&self) -> bool {
        self.compiled
    }

    fn info_log(&self) -> String {
        self.log.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for MockShader {
    fn drop(&mut self) {
        if let Ok(mut record) = self.record.lock() {
            record.shaders_released += 1;
        }
    }
}

// ============================================================================
// Mock Program
// ============================================================================

#[derive(Debug)]
pub struct MockProgram {
    pub linked: bool,
    pub log: String,
    pub uniforms: Vec<String>,
    record: SharedRecord,
}

impl Program for MockProgram {
    fn linked(&self) -> bool {
        self.linked
    }

    fn info_log(&self) -> String {
        self.log.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for MockProgram {
    fn drop(&mut self) {
        if let Ok(mut record) = self.record.lock() {
            record.programs_released += 1;
        }
    }
}

// ============================================================================
// Mock Buffer / VertexArray / Texture
// ============================================================================

#[derive(Debug)]
pub struct MockBuffer {
    pub desc: BufferDesc,
    pub data: Vec<u8>,
    record: SharedRecord,
}

impl Buffer for MockBuffer {
    fn usage(&self) -> BufferUsage {
        self.desc.usage
    }

    fn size(&self) -> u64 {
        self.desc.size
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for MockBuffer {
    fn drop(&mut self) {
        if let Ok(mut record) = self.record.lock() {
            record.buffers_released += 1;
        }
    }
}

#[derive(Debug)]
pub struct MockVertexArray {
    pub has_index_buffer: bool,
    record: SharedRecord,
}

impl VertexArray for MockVertexArray {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for MockVertexArray {
    fn drop(&mut self) {
        if let Ok(mut record) = self.record.lock() {
            record.vertex_arrays_released += 1;
        }
    }
}

#[derive(Debug)]
pub struct MockTexture {
    pub width: u32,
    pub height: u32,
    record: SharedRecord,
}

impl Texture for MockTexture {
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

impl Drop for MockTexture {
    fn drop(&mut self) {
        if let Ok(mut record) = self.record.lock() {
            record.textures_released += 1;
        }
    }
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

/// Mock device that tracks resources and commands without a GPU
///
/// Compile rules: a source fails if it has no `#version` directive,
/// contains `#error`, or has unbalanced braces.
/// Link rules: fails without exactly one compiled vertex and one compiled
/// fragment shader, or when `fail_next_link` was called.
pub struct MockGraphicsDevice {
    pub record: SharedRecord,
    /// Pad every failure log to this many bytes (simulates chatty drivers)
    pub log_padding: usize,
    next_link_failure: Option<String>,
    fail_allocation: bool,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self {
            record: Arc::new(Mutex::new(MockRecord::default())),
            log_padding: 0,
            next_link_failure: None,
            fail_allocation: false,
        }
    }

    /// Make the next link report failure with `log`
    pub fn fail_next_link(&mut self, log: &str) {
        self.next_link_failure = Some(log.to_string());
    }

    /// Make every subsequent resource creation fail
    pub fn fail_allocations(&mut self) {
        self.fail_allocation = true;
    }

    /// Lock and inspect the record
    pub fn record(&self) -> std::sync::MutexGuard<'_, MockRecord> {
        self.record.lock().unwrap()
    }

    fn push_command(&self, command: &str) {
        self.record().commands.push(command.to_string());
    }

    fn pad(&self, mut log: String) -> String {
        while log.len() < self.log_padding {
            log.push_str(" ... ");
        }
        log
    }

    fn compile(source: &str) -> std::result::Result<(), String> {
        if !source.trim_start().starts_with("#version") {
            return Err("0:1(1): error: #version directive required".to_string());
        }
        if let Some(line) = source.lines().position(|l| l.trim_start().starts_with("#error")) {
            return Err(format!("0:{}(1): error: #error directive", line + 1));
        }
        let mut depth: i64 = 0;
        for (index, line) in source.lines().enumerate() {
            for c in line.chars() {
                match c {
                    '{' => depth += 1,
                    '}' => depth -= 1,
                    _ => {}
                }
                if depth < 0 {
                    return Err(format!("0:{}(1): error: syntax error, unexpected '}}'", index + 1));
                }
            }
        }
        if depth != 0 {
            return Err("0:1(1): error: syntax error, unexpected end of file".to_string());
        }
        Ok(())
    }

    fn declared_uniforms(source: &str) -> Vec<String> {
        source
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with("uniform "))
            .filter_map(|line| {
                line.trim_end_matches(';')
                    .split_whitespace()
                    .last()
                    .map(|name| name.trim_end_matches(';').to_string())
            })
            .collect()
    }

    fn check_allocation(&self, what: &str) -> Result<()> {
        if self.fail_allocation {
            crate::engine_bail!("hellogl::mock", "{} allocation failed", what);
        }
        Ok(())
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_shader(&mut self, stage: StageKind, source: &str) -> Result<Box<dyn Shader>> {
        self.check_allocation("shader")?;
        self.record().shaders_created += 1;
        let (compiled, log) = match Self::compile(source) {
            Ok(()) => (true, String::new()),
            Err(log) => (false, self.pad(log)),
        };
        Ok(Box::new(MockShader {
            stage,
            compiled,
            log,
            uniforms: Self::declared_uniforms(source),
            record: self.record.clone(),
        }))
    }

    fn create_program(&mut self, shaders: &[&dyn Shader]) -> Result<Box<dyn Program>> {
        self.check_allocation("program")?;
        {
            let mut record = self.record();
            record.programs_created += 1;
            record.link_attempts += 1;
        }

        let mut uniforms = Vec::new();
        let mut vertex = 0;
        let mut fragment = 0;
        let mut all_compiled = true;
        for shader in shaders {
            match shader.stage() {
                StageKind::Vertex => vertex += 1,
                StageKind::Fragment => fragment += 1,
            }
            all_compiled &= shader.compiled();
            if let Some(mock) = shader.as_any().downcast_ref::<MockShader>() {
                uniforms.extend(mock.uniforms.iter().cloned());
            }
        }

        let failure = if let Some(log) = self.next_link_failure.take() {
            Some(log)
        } else if vertex != 1 || fragment != 1 {
            Some(format!("error: expected 1 vertex and 1 fragment shader, got {} and {}", vertex, fragment))
        } else if !all_compiled {
            Some("error: linking with uncompiled shader".to_string())
        } else {
            None
        };

        let (linked, log) = match failure {
            Some(log) => (false, self.pad(log)),
            None => (true, String::new()),
        };
        Ok(Box::new(MockProgram {
            linked,
            log,
            uniforms,
            record: self.record.clone(),
        }))
    }

    fn create_buffer(&mut self, desc: BufferDesc, data: &[u8]) -> Result<Box<dyn Buffer>> {
        self.check_allocation("buffer")?;
        self.record().buffers_created += 1;
        Ok(Box::new(MockBuffer {
            desc,
            data: data.to_vec(),
            record: self.record.clone(),
        }))
    }

    fn create_vertex_array(
        &mut self,
        layout: &VertexLayout,
        _vertex_buffer: &dyn Buffer,
        index_buffer: Option<&dyn Buffer>,
    ) -> Result<Box<dyn VertexArray>> {
        self.check_allocation("vertex array")?;
        {
            let mut record = self.record();
            record.vertex_arrays_created += 1;
            record.layouts.push(layout.clone());
        }
        Ok(Box::new(MockVertexArray {
            has_index_buffer: index_buffer.is_some(),
            record: self.record.clone(),
        }))
    }

    fn create_texture(&mut self, image: &TextureImage, _sampler: &SamplerDesc) -> Result<Box<dyn Texture>> {
        self.check_allocation("texture")?;
        self.record().textures_created += 1;
        Ok(Box::new(MockTexture {
            width: image.width,
            height: image.height,
            record: self.record.clone(),
        }))
    }

    fn use_program(&mut self, _program: &dyn Program) {
        self.push_command("use_program");
    }

    fn set_uniform(&mut self, program: &dyn Program, name: &str, value: &UniformValue) -> Result<bool> {
        let known = program
            .as_any()
            .downcast_ref::<MockProgram>()
            .map(|p| p.uniforms.iter().any(|u| u == name))
            .unwrap_or(false);
        if known {
            self.record().uniforms.push((name.to_string(), *value));
        }
        Ok(known)
    }

    fn bind_texture(&mut self, unit: u32, _texture: &dyn Texture) {
        self.push_command(&format!("bind_texture_{}", unit));
    }

    fn bind_vertex_array(&mut self, _vertex_array: &dyn VertexArray) {
        self.push_command("bind_vertex_array");
    }

    fn draw(&mut self, call: DrawCall) {
        let mut record = self.record();
        record.commands.push("draw".to_string());
        record.draws.push(call);
    }

    fn clear(&mut self, _color: [f32; 4]) {
        self.push_command("clear");
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        self.record().viewport = Some((width, height));
    }

    fn set_polygon_mode(&mut self, mode: PolygonMode) {
        self.record().polygon_mode = Some(mode);
    }

    fn set_depth_test(&mut self, enabled: bool) {
        self.record().depth_test = enabled;
    }

    fn present(&mut self) -> Result<()> {
        let mut record = self.record();
        record.commands.push("present".to_string());
        record.presents += 1;
        Ok(())
    }

    fn stats(&self) -> DeviceStats {
        let record = self.record();
        DeviceStats {
            draw_calls: record.draws.len() as u64,
            triangles: record.draws.iter().map(|d| d.triangle_count() as u64).sum(),
            frames: record.presents,
        }
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
