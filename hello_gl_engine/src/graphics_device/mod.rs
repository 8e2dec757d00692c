/// Graphics device module - device collaborator traits and descriptors

// Module declarations
pub mod graphics_device;
pub mod shader;
pub mod program;
pub mod buffer;
pub mod vertex_layout;
pub mod texture;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use shader::*;
pub use program::*;
pub use buffer::*;
pub use vertex_layout::*;
pub use texture::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
