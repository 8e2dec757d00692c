/// FrameLoop - setup and per-frame orchestration of one scene
///
/// States: `Uninitialized -> Ready -> Rendering (loops) -> Terminated`.
/// Each iteration polls input, recomputes dynamic uniforms, rebinds the
/// program, textures and vertex array, issues one draw call and presents.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::graphics_device::{GraphicsDevice, PolygonMode, Texture, TextureImage};
use crate::pipeline::{BoundLayout, GraphicsProgramBuilder, LinkedProgram, UniformBinding, VertexLayoutBinder};
use crate::scene::{FrameTime, InputSource, Key, SceneDesc, TextureSource, UniformFn, Viewport};
use crate::{engine_debug, engine_info};

/// Frame loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    /// Nothing created yet
    Uninitialized,
    /// Program linked and layout bound, no frame drawn yet
    Ready,
    /// At least one frame drawn
    Rendering,
    /// Close requested; resources released
    Terminated,
}

/// Device resources of a prepared scene
///
/// Field order is release order: program first, then geometry, then textures.
struct PreparedScene {
    program: LinkedProgram,
    geometry: BoundLayout,
    textures: Vec<(u32, Box<dyn Texture>)>,
    dynamic_uniforms: Option<UniformFn>,
    clear_color: [f32; 4],
}

/// Drives one scene on one device
pub struct FrameLoop {
    state: FrameState,
    scene: Option<PreparedScene>,
    scene_name: String,
    viewport: Viewport,
    frames: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: FrameState::Uninitialized,
            scene: None,
            scene_name: String::new(),
            viewport: Viewport { width: 0, height: 0 },
            frames: 0,
        }
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    /// Frames drawn since `prepare`
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Build the program, upload geometry and textures, write static uniforms
    ///
    /// Moves `Uninitialized -> Ready`. On error the state is unchanged and
    /// every resource created so far has been released.
    pub fn prepare(&mut self, device: &mut dyn GraphicsDevice, scene: SceneDesc, config: &Config) -> Result<()> {
        if self.state != FrameState::Uninitialized {
            return Err(Error::InvalidState(format!(
                "prepare called in state {:?}", self.state
            )));
        }

        let builder = GraphicsProgramBuilder::from_config(config);
        let mut program = builder.build(device, &scene.vertex_shader, &scene.fragment_shader)?;

        let layout = VertexLayoutBinder::describe(&scene.attributes)?;
        let geometry = VertexLayoutBinder::upload(device, &layout, &scene.vertices, scene.indices.as_deref())?;

        let mut textures = Vec::with_capacity(scene.textures.len());
        let mut setup_uniforms = scene.static_uniforms.clone();
        for slot in &scene.textures {
            let image = match &slot.source {
                TextureSource::File { path, flip_vertically } => TextureImage::load(path, *flip_vertically)?,
                TextureSource::Image(image) => image.clone(),
            };
            let texture = device.create_texture(&image, &slot.sampler)?;
            textures.push((slot.unit, texture));
            setup_uniforms.push(UniformBinding::new(slot.sampler_uniform.clone(), slot.unit as i32));
        }

        program.bind(device)?;
        program.apply(device, &setup_uniforms)?;

        self.viewport = Viewport { width: config.width, height: config.height };
        device.set_viewport(config.width, config.height);
        device.set_polygon_mode(if config.wireframe { PolygonMode::Line } else { PolygonMode::Fill });
        device.set_depth_test(scene.depth_test);

        self.scene = Some(PreparedScene {
            program,
            geometry,
            textures,
            dynamic_uniforms: scene.dynamic_uniforms,
            clear_color: config.clear_color,
        });
        self.scene_name = scene.name;
        self.frames = 0;
        self.state = FrameState::Ready;

        engine_info!("hellogl::FrameLoop", "Scene '{}' ready", self.scene_name);
        Ok(())
    }

    /// Track a framebuffer resize
    pub fn resize(&mut self, device: &mut dyn GraphicsDevice, width: u32, height: u32) {
        self.viewport = Viewport { width, height };
        device.set_viewport(width, height);
        engine_debug!("hellogl::FrameLoop", "Viewport resized to {}x{}", width, height);
    }

    /// Run one iteration
    ///
    /// Returns the state after the iteration: `Rendering`, or `Terminated`
    /// when `input` reports a close request or Escape is held.
    pub fn frame(&mut self, device: &mut dyn GraphicsDevice, input: &dyn InputSource, time: FrameTime) -> Result<FrameState> {
        match self.state {
            FrameState::Uninitialized => {
                return Err(Error::InvalidState("frame called before prepare".to_string()));
            }
            FrameState::Terminated => {
                return Err(Error::InvalidState("frame called after termination".to_string()));
            }
            FrameState::Ready | FrameState::Rendering => {}
        }

        if input.close_requested() || input.is_key_pressed(Key::Escape) {
            self.terminate();
            return Ok(self.state);
        }

        let viewport = self.viewport;
        let scene = self
            .scene
            .as_mut()
            .ok_or_else(|| Error::InvalidState("no prepared scene".to_string()))?;

        device.clear(scene.clear_color);

        scene.program.bind(device)?;
        if let Some(uniforms) = &scene.dynamic_uniforms {
            let bindings = uniforms(time, viewport);
            scene.program.apply(device, &bindings)?;
        }
        for (unit, texture) in &scene.textures {
            device.bind_texture(*unit, texture.as_ref());
        }
        scene.geometry.bind(device);
        device.draw(scene.geometry.draw_call());

        device.present()?;

        self.frames += 1;
        self.state = FrameState::Rendering;
        Ok(self.state)
    }

    /// Release the scene and stop accepting frames
    pub fn terminate(&mut self) {
        if self.state == FrameState::Terminated {
            return;
        }
        self.scene = None;
        self.state = FrameState::Terminated;
        engine_info!("hellogl::FrameLoop",
            "Scene '{}' terminated after {} frames", self.scene_name, self.frames);
    }
}

#[cfg(test)]
#[path = "frame_loop_tests.rs"]
mod tests;
