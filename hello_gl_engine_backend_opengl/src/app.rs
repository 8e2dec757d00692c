/// App - window event loop driving one FrameLoop on a GlGraphicsDevice

use hello_gl_engine::hellogl::device::GraphicsDevice;
use hello_gl_engine::hellogl::scene::{FrameLoop, FrameState, FrameTime, InputState, Key, SceneDesc};
use hello_gl_engine::hellogl::{Config, Error, Result};
use hello_gl_engine::{engine_error, engine_info};
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::gl_device::GlGraphicsDevice;

const SOURCE: &str = "hellogl::opengl::App";

/// Map a physical key to the keys scenes react to
pub(crate) fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Escape => Some(Key::Escape),
        KeyCode::Space => Some(Key::Space),
        KeyCode::ArrowUp | KeyCode::KeyW => Some(Key::Up),
        KeyCode::ArrowDown | KeyCode::KeyS => Some(Key::Down),
        KeyCode::ArrowLeft | KeyCode::KeyA => Some(Key::Left),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(Key::Right),
        _ => None,
    }
}

/// Window, device and frame loop of a running scene
///
/// Field order is drop order: scene resources, then the context, then the window.
struct Running {
    frame_loop: FrameLoop,
    device: GlGraphicsDevice,
    window: Window,
}

/// Opens a window and renders one scene until it is closed
pub struct App {
    config: Config,
    scene: Option<SceneDesc>,
    running: Option<Running>,
    input: InputState,
    started: Instant,
    last_frame: Instant,
    error: Option<Error>,
}

impl App {
    fn new(config: Config, scene: SceneDesc) -> Self {
        let now = Instant::now();
        Self {
            config,
            scene: Some(scene),
            running: None,
            input: InputState::new(),
            started: now,
            last_frame: now,
            error: None,
        }
    }

    /// Run `scene` in a new window until Escape is pressed or the window closes
    ///
    /// Returns the first error raised while setting up or rendering.
    pub fn run(config: Config, scene: SceneDesc) -> Result<()> {
        let event_loop = EventLoop::new()
            .map_err(|e| Error::InitializationFailed(format!("Failed to create event loop: {}", e)))?;
        let mut app = App::new(config, scene);
        event_loop
            .run_app(&mut app)
            .map_err(|e| Error::BackendError(format!("Event loop failed: {}", e)))?;

        match app.error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop, scene: SceneDesc) -> Result<Running> {
        let (window, mut device) = GlGraphicsDevice::create(event_loop, &self.config)?;
        let mut frame_loop = FrameLoop::new();
        frame_loop.prepare(&mut device, scene, &self.config)?;

        // The framebuffer may be larger than the logical size on scaled displays.
        let size = window.inner_size();
        frame_loop.resize(&mut device, size.width, size.height);

        self.started = Instant::now();
        self.last_frame = self.started;
        window.request_redraw();
        Ok(Running { frame_loop, device, window })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Error) {
        engine_error!(SOURCE, "{}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
        self.running = None;
        event_loop.exit();
    }

    fn next_frame_time(&mut self) -> FrameTime {
        let now = Instant::now();
        let time = FrameTime {
            elapsed: now.duration_since(self.started).as_secs_f32(),
            delta: now.duration_since(self.last_frame).as_secs_f32(),
        };
        self.last_frame = now;
        time
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }
        let Some(scene) = self.scene.take() else {
            return;
        };

        match self.start(event_loop, scene) {
            Ok(running) => {
                self.running = Some(running);
                event_loop.set_control_flow(ControlFlow::Poll);
            }
            Err(error) => self.fail(event_loop, error),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        match &self.running {
            Some(running) if running.window.id() == window_id => {}
            _ => return,
        }

        match event {
            WindowEvent::CloseRequested => {
                self.input.request_close();
                if let Some(running) = &self.running {
                    running.window.request_redraw();
                }
            }

            WindowEvent::Resized(size) => {
                if let Some(running) = &mut self.running {
                    running.frame_loop.resize(&mut running.device, size.width, size.height);
                    running.window.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(key) = map_key(code) {
                        match event.state {
                            ElementState::Pressed => self.input.press(key),
                            ElementState::Released => self.input.release(key),
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let time = self.next_frame_time();
                let Some(running) = &mut self.running else {
                    return;
                };

                match running.frame_loop.frame(&mut running.device, &self.input, time) {
                    Ok(FrameState::Terminated) => {
                        let stats = running.device.stats();
                        engine_info!(SOURCE, "{} frames, {} draw calls, {} triangles",
                            stats.frames, stats.draw_calls, stats.triangles);
                        self.running = None;
                        event_loop.exit();
                    }
                    Ok(_) => running.window.request_redraw(),
                    Err(error) => self.fail(event_loop, error),
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.running = None;

        #[cfg(feature = "gl-debug")]
        crate::debug::print_debug_stats_report();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
