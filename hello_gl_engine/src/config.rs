/// Application and device configuration

/// Window, context and pipeline configuration
///
/// Every field has a default matching the classic "LearnOpenGL" setup:
/// an 800x600 window, an OpenGL 3.3 core profile context and a teal clear color.
#[derive(Debug, Clone)]
pub struct Config {
    /// Window title
    pub title: String,
    /// Initial window width in pixels
    pub width: u32,
    /// Initial window height in pixels
    pub height: u32,
    /// Requested context version (major, minor), core profile
    pub gl_version: (u8, u8),
    /// Wait for vertical blank when presenting
    pub vsync: bool,
    /// Install a driver debug message callback (if the backend supports it)
    pub enable_debug_output: bool,
    /// Color the back buffer is cleared to each frame (RGBA)
    pub clear_color: [f32; 4],
    /// Upper bound in bytes for compiler/linker diagnostics
    pub diagnostic_capacity: usize,
    /// Rasterize polygons as lines instead of filled
    pub wireframe: bool,
}

/// Default bound for driver info logs, in bytes
pub const DEFAULT_DIAGNOSTIC_CAPACITY: usize = 512;

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "LearnOpenGL".to_string(),
            width: 800,
            height: 600,
            gl_version: (3, 3),
            vsync: true,
            enable_debug_output: cfg!(debug_assertions),
            clear_color: [0.2, 0.3, 0.3, 1.0],
            diagnostic_capacity: DEFAULT_DIAGNOSTIC_CAPACITY,
            wireframe: false,
        }
    }
}

impl Config {
    /// Context version as a `#version` number (3.3 -> 330)
    pub fn glsl_version(&self) -> u32 {
        self.gl_version.0 as u32 * 100 + self.gl_version.1 as u32 * 10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.gl_version, (3, 3));
        assert_eq!(config.diagnostic_capacity, 512);
        assert!(!config.wireframe);
        assert_eq!(config.clear_color, [0.2, 0.3, 0.3, 1.0]);
    }

    #[test]
    fn test_glsl_version() {
        let mut config = Config::default();
        assert_eq!(config.glsl_version(), 330);
        config.gl_version = (4, 1);
        assert_eq!(config.glsl_version(), 410);
    }
}
