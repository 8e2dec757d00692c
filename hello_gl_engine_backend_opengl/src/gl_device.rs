/// GlGraphicsDevice - OpenGL implementation of the GraphicsDevice trait
///
/// Owns the GL context and window surface. Every resource it creates holds
/// a reference to the context and deletes its GL object when dropped.

use glow::HasContext;
use glutin::config::{ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use hello_gl_engine::hellogl::device::{
    Buffer, BufferDesc, DeviceStats, DrawCall, GraphicsDevice, PolygonMode, Program, SamplerDesc,
    Shader, StageKind, Texture, TextureImage, UniformValue, VertexArray, VertexLayout,
};
use hello_gl_engine::hellogl::{Config, Error, Result};
use hello_gl_engine::{engine_bail, engine_err, engine_info, engine_warn};
use raw_window_handle::HasWindowHandle;
use rustc_hash::FxHashMap;
use std::any::Any;
use std::cell::RefCell;
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::gl_buffer::GlBuffer;
use crate::gl_format::{
    buffer_usage_to_target, draw_call_count, mag_filter_to_gl, min_filter_to_gl,
    pixel_format_to_gl, polygon_mode_to_gl, shader_stage_to_gl, uniform_type_name,
    wrap_mode_to_gl,
};
use crate::gl_program::GlProgram;
use crate::gl_shader::GlShader;
use crate::gl_texture::GlTexture;
use crate::gl_vertex_array::GlVertexArray;

const SOURCE: &str = "hellogl::opengl";

/// Downcast a device resource to this backend's concrete type
fn downcast<'a, T: 'static>(resource: &'a dyn Any, what: &str) -> Result<&'a T> {
    resource
        .downcast_ref::<T>()
        .ok_or_else(|| engine_err!(SOURCE, "{} was not created by the OpenGL device", what))
}

/// OpenGL graphics device
pub struct GlGraphicsDevice {
    gl: Rc<glow::Context>,
    // Surface is released before the context it was made current with.
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    depth_test: bool,
    stats: DeviceStats,
}

impl GlGraphicsDevice {
    /// Create the window, a core-profile context of the configured version and its surface
    ///
    /// The returned window must outlive the device.
    pub fn create(event_loop: &ActiveEventLoop, config: &Config) -> Result<(Window, Self)> {
        let window_attributes = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width, config.height));

        let template = ConfigTemplateBuilder::new().with_alpha_size(8).with_depth_size(24);
        let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attributes));

        let (window, gl_config) = display_builder
            .build(event_loop, template, |configs| {
                // find_configs fails with BadConfig before an empty set reaches the picker.
                configs
                    .reduce(|best, config| if config.num_samples() > best.num_samples() { config } else { best })
                    .expect("display offered no GL config")
            })
            .map_err(|e| Error::InitializationFailed(format!("Failed to create window: {}", e)))?;
        let window = window
            .ok_or_else(|| Error::InitializationFailed("Display builder returned no window".to_string()))?;

        let raw_window_handle = window
            .window_handle()
            .map_err(|e| Error::InitializationFailed(format!("Window has no handle: {}", e)))?
            .as_raw();

        let (major, minor) = config.gl_version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(Some(raw_window_handle));

        let gl_display = gl_config.display();
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
            .map_err(|e| Error::InitializationFailed(format!(
                "Failed to create OpenGL {}.{} core context: {}", major, minor, e
            )))?;

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .map_err(|e| Error::InitializationFailed(format!("Failed to describe surface: {}", e)))?;
        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
            .map_err(|e| Error::InitializationFailed(format!("Failed to create surface: {}", e)))?;

        let context = not_current
            .make_current(&surface)
            .map_err(|e| Error::InitializationFailed(format!("Failed to make context current: {}", e)))?;

        let interval = if config.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            engine_warn!(SOURCE, "Could not set swap interval: {}", e);
        }

        #[allow(unused_mut)]
        let mut gl = unsafe {
            glow::Context::from_loader_function_cstr(|symbol| gl_display.get_proc_address(symbol))
        };

        #[cfg(feature = "gl-debug")]
        if config.enable_debug_output {
            crate::debug::install(&mut gl);
        }

        unsafe {
            engine_info!(SOURCE, "OpenGL {} on {}",
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER));
        }

        let device = Self {
            gl: Rc::new(gl),
            surface,
            context,
            depth_test: false,
            stats: DeviceStats::default(),
        };
        Ok((window, device))
    }

    /// Raw glow context (for callers issuing their own GL calls)
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    fn resize_surface(&self, width: u32, height: u32) {
        if let (Some(width), Some(height)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            self.surface.resize(&self.context, width, height);
        }
    }
}

impl GraphicsDevice for GlGraphicsDevice {
    fn create_shader(&mut self, stage: StageKind, source: &str) -> Result<Box<dyn Shader>> {
        unsafe {
            let shader = self
                .gl
                .create_shader(shader_stage_to_gl(stage))
                .map_err(|e| engine_err!(SOURCE, "glCreateShader failed: {}", e))?;
            self.gl.shader_source(shader, source);
            self.gl.compile_shader(shader);

            let compiled = self.gl.get_shader_compile_status(shader);
            let info_log = if compiled {
                String::new()
            } else {
                self.gl.get_shader_info_log(shader)
            };

            Ok(Box::new(GlShader {
                shader,
                stage,
                compiled,
                info_log,
                gl: self.gl.clone(),
            }))
        }
    }

    fn create_program(&mut self, shaders: &[&dyn Shader]) -> Result<Box<dyn Program>> {
        let gl_shaders = shaders
            .iter()
            .map(|shader| downcast::<GlShader>(shader.as_any(), "Shader"))
            .collect::<Result<Vec<_>>>()?;

        unsafe {
            let program = self
                .gl
                .create_program()
                .map_err(|e| engine_err!(SOURCE, "glCreateProgram failed: {}", e))?;
            for shader in &gl_shaders {
                self.gl.attach_shader(program, shader.shader);
            }
            self.gl.link_program(program);

            let linked = self.gl.get_program_link_status(program);
            let info_log = if linked {
                String::new()
            } else {
                self.gl.get_program_info_log(program)
            };

            // The program keeps the linked code; detaching lets the shaders be freed.
            for shader in &gl_shaders {
                self.gl.detach_shader(program, shader.shader);
            }

            Ok(Box::new(GlProgram {
                program,
                linked,
                info_log,
                locations: RefCell::new(FxHashMap::default()),
                gl: self.gl.clone(),
            }))
        }
    }

    fn create_buffer(&mut self, desc: BufferDesc, data: &[u8]) -> Result<Box<dyn Buffer>> {
        let target = buffer_usage_to_target(desc.usage);
        unsafe {
            let buffer = self
                .gl
                .create_buffer()
                .map_err(|e| engine_err!(SOURCE, "glGenBuffers failed: {}", e))?;
            // No vertex array may be bound, or an index buffer would be recorded into it.
            self.gl.bind_vertex_array(None);
            self.gl.bind_buffer(target, Some(buffer));
            self.gl.buffer_data_u8_slice(target, data, glow::STATIC_DRAW);
            self.gl.bind_buffer(target, None);

            Ok(Box::new(GlBuffer {
                buffer,
                desc,
                gl: self.gl.clone(),
            }))
        }
    }

    fn create_vertex_array(
        &mut self,
        layout: &VertexLayout,
        vertex_buffer: &dyn Buffer,
        index_buffer: Option<&dyn Buffer>,
    ) -> Result<Box<dyn VertexArray>> {
        let vertex_buffer = downcast::<GlBuffer>(vertex_buffer.as_any(), "Vertex buffer")?;
        let index_buffer = match index_buffer {
            Some(buffer) => Some(downcast::<GlBuffer>(buffer.as_any(), "Index buffer")?),
            None => None,
        };

        unsafe {
            let vertex_array = self
                .gl
                .create_vertex_array()
                .map_err(|e| engine_err!(SOURCE, "glGenVertexArrays failed: {}", e))?;
            self.gl.bind_vertex_array(Some(vertex_array));
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer.buffer));

            for attribute in layout.attributes() {
                self.gl.vertex_attrib_pointer_f32(
                    attribute.slot,
                    attribute.component_count as i32,
                    glow::FLOAT,
                    false,
                    attribute.stride_bytes as i32,
                    attribute.offset_bytes as i32,
                );
                self.gl.enable_vertex_attrib_array(attribute.slot);
            }

            if let Some(index_buffer) = index_buffer {
                self.gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(index_buffer.buffer));
            }

            // Unbind the vertex array first so it keeps its index buffer.
            self.gl.bind_vertex_array(None);
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);

            Ok(Box::new(GlVertexArray {
                vertex_array,
                gl: self.gl.clone(),
            }))
        }
    }

    fn create_texture(&mut self, image: &TextureImage, sampler: &SamplerDesc) -> Result<Box<dyn Texture>> {
        let (internal_format, format) = pixel_format_to_gl(image.format);
        unsafe {
            let texture = self
                .gl
                .create_texture()
                .map_err(|e| engine_err!(SOURCE, "glGenTextures failed: {}", e))?;
            self.gl.bind_texture(glow::TEXTURE_2D, Some(texture));

            let wrap = wrap_mode_to_gl(sampler.wrap);
            self.gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, wrap);
            self.gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, wrap);
            self.gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER,
                min_filter_to_gl(sampler.min_filter, sampler.mipmaps));
            self.gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER,
                mag_filter_to_gl(sampler.mag_filter));

            // RGB rows are not 4-byte aligned for odd widths.
            self.gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            self.gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                internal_format,
                image.width as i32,
                image.height as i32,
                0,
                format,
                glow::UNSIGNED_BYTE,
                Some(&image.pixels),
            );
            if sampler.mipmaps {
                self.gl.generate_mipmap(glow::TEXTURE_2D);
            }
            self.gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Box::new(GlTexture {
                texture,
                width: image.width,
                height: image.height,
                gl: self.gl.clone(),
            }))
        }
    }

    fn use_program(&mut self, program: &dyn Program) {
        if let Ok(program) = downcast::<GlProgram>(program.as_any(), "Program") {
            unsafe { self.gl.use_program(Some(program.program)) }
        }
    }

    fn set_uniform(&mut self, program: &dyn Program, name: &str, value: &UniformValue) -> Result<bool> {
        let program = downcast::<GlProgram>(program.as_any(), "Program")?;
        if !program.linked {
            engine_bail!(SOURCE, "Cannot set {} uniform '{}' on an unlinked program",
                uniform_type_name(value), name);
        }
        let Some(location) = program.uniform_location(name) else {
            return Ok(false);
        };

        unsafe {
            self.gl.use_program(Some(program.program));
            match value {
                UniformValue::Mat4(m) => {
                    self.gl.uniform_matrix_4_f32_slice(Some(&location), false, &m.to_cols_array())
                }
                UniformValue::Vec4(v) => self.gl.uniform_4_f32(Some(&location), v.x, v.y, v.z, v.w),
                UniformValue::Vec3(v) => self.gl.uniform_3_f32(Some(&location), v.x, v.y, v.z),
                UniformValue::Float(f) => self.gl.uniform_1_f32(Some(&location), *f),
                UniformValue::Int(i) => self.gl.uniform_1_i32(Some(&location), *i),
            }
        }
        Ok(true)
    }

    fn bind_texture(&mut self, unit: u32, texture: &dyn Texture) {
        if let Ok(texture) = downcast::<GlTexture>(texture.as_any(), "Texture") {
            unsafe {
                self.gl.active_texture(glow::TEXTURE0 + unit);
                self.gl.bind_texture(glow::TEXTURE_2D, Some(texture.texture));
            }
        }
    }

    fn bind_vertex_array(&mut self, vertex_array: &dyn VertexArray) {
        if let Ok(vertex_array) = downcast::<GlVertexArray>(vertex_array.as_any(), "Vertex array") {
            unsafe { self.gl.bind_vertex_array(Some(vertex_array.vertex_array)) }
        }
    }

    fn draw(&mut self, call: DrawCall) {
        let count = draw_call_count(call);
        unsafe {
            match call {
                DrawCall::Indexed { .. } => {
                    self.gl.draw_elements(glow::TRIANGLES, count, glow::UNSIGNED_INT, 0)
                }
                DrawCall::Arrays { .. } => self.gl.draw_arrays(glow::TRIANGLES, 0, count),
            }
        }
        self.stats.draw_calls += 1;
        self.stats.triangles += call.triangle_count() as u64;
    }

    fn clear(&mut self, color: [f32; 4]) {
        let mut mask = glow::COLOR_BUFFER_BIT;
        if self.depth_test {
            mask |= glow::DEPTH_BUFFER_BIT;
        }
        unsafe {
            self.gl.clear_color(color[0], color[1], color[2], color[3]);
            self.gl.clear(mask);
        }
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        self.resize_surface(width, height);
        unsafe { self.gl.viewport(0, 0, width as i32, height as i32) }
    }

    fn set_polygon_mode(&mut self, mode: PolygonMode) {
        unsafe { self.gl.polygon_mode(glow::FRONT_AND_BACK, polygon_mode_to_gl(mode)) }
    }

    fn set_depth_test(&mut self, enabled: bool) {
        self.depth_test = enabled;
        unsafe {
            if enabled {
                self.gl.enable(glow::DEPTH_TEST);
            } else {
                self.gl.disable(glow::DEPTH_TEST);
            }
        }
    }

    fn present(&mut self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .map_err(|e| engine_err!(SOURCE, "Swap buffers failed: {}", e))?;
        self.stats.frames += 1;
        Ok(())
    }

    fn stats(&self) -> DeviceStats {
        self.stats
    }
}
