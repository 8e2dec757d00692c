/*!
# HelloGL Engine

Core traits and types for the HelloGL tutorial scenes.

This crate provides the platform-agnostic program build pipeline: shader
stage compilation, program linking with bounded diagnostics, validated
interleaved vertex layouts, and a frame loop that drives one scene.
Backend implementations (OpenGL) provide the concrete device.

## Architecture

- **GraphicsDevice**: Device collaborator trait (resources + draw calls)
- **ShaderStageCompiler**: Source text + stage kind to compiled stage
- **ProgramLinker**: Compiled stages to linked program
- **GraphicsProgramBuilder**: Compile + link + release in one call
- **VertexLayoutBinder**: Attribute descriptors to validated layout, bound to buffers
- **FrameLoop**: Scene setup and per-frame orchestration

Every device resource is released when its owner is dropped.
*/

// Internal modules
mod error;
mod engine;
mod config;
pub mod log;
pub mod graphics_device;
pub mod pipeline;
pub mod scene;

// Main hellogl namespace module
pub mod hellogl {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine facade (logging)
    pub use crate::engine::Engine;

    // Configuration
    pub use crate::config::{Config, DEFAULT_DIAGNOSTIC_CAPACITY};

    // Logging sub-module (types only, macros are exported at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Device sub-module with all device traits and descriptors
    pub mod device {
        pub use crate::graphics_device::*;
    }

    // Program build pipeline sub-module
    pub mod pipeline {
        pub use crate::pipeline::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
