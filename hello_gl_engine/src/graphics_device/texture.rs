/// Texture trait, decoded images and sampler state

use std::any::Any;
use std::path::Path;

use crate::error::{Error, Result};

/// Pixel layout of a decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8-bit red, green, blue
    Rgb8,
    /// 8-bit red, green, blue, alpha
    Rgba8,
}

impl PixelFormat {
    /// Bytes per pixel
    pub fn channel_count(&self) -> u32 {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// Decoded image ready for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    /// Channels present in the source file (before expansion to RGB/RGBA)
    pub channel_count: u8,
    pub format: PixelFormat,
    pub pixels: Vec<u8>,
}

impl TextureImage {
    /// Decode an image file
    ///
    /// Images with an alpha channel are kept as RGBA, everything else is
    /// expanded to RGB. With `flip_vertically` the first row of `pixels`
    /// is the bottom row of the file, matching texture coordinate origin.
    pub fn load(path: impl AsRef<Path>, flip_vertically: bool) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|e| Error::resource_load(path, e))?;
        let image = if flip_vertically { image.flipv() } else { image };
        let channel_count = image.color().channel_count();

        let (width, height) = (image.width(), image.height());
        let (format, pixels) = if image.color().has_alpha() {
            (PixelFormat::Rgba8, image.into_rgba8().into_raw())
        } else {
            (PixelFormat::Rgb8, image.into_rgb8().into_raw())
        };

        crate::engine_debug!("hellogl::TextureImage",
            "Loaded '{}' ({}x{}, {} channels)", path.display(), width, height, channel_count);

        Ok(Self { width, height, channel_count, format, pixels })
    }

    /// Build an image from raw pixels (length must match the dimensions)
    pub fn from_pixels(width: u32, height: u32, format: PixelFormat, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * format.channel_count() as usize;
        if pixels.len() != expected {
            return Err(Error::resource_load(
                "<memory>",
                format!("pixel buffer is {} bytes, {}x{} {:?} needs {}",
                    pixels.len(), width, height, format, expected),
            ));
        }
        Ok(Self {
            width,
            height,
            channel_count: format.channel_count() as u8,
            format,
            pixels,
        })
    }
}

/// Texture coordinate wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    Repeat,
    MirroredRepeat,
    ClampToEdge,
}

/// Texel filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Nearest,
    Linear,
}

/// Sampler state applied at texture creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerDesc {
    pub wrap: WrapMode,
    pub min_filter: Filter,
    pub mag_filter: Filter,
    /// Generate a full mipmap chain after upload
    pub mipmaps: bool,
}

impl Default for SamplerDesc {
    fn default() -> Self {
        Self {
            wrap: WrapMode::Repeat,
            min_filter: Filter::Linear,
            mag_filter: Filter::Linear,
            mipmaps: true,
        }
    }
}

/// 2D texture resource
///
/// The device object is released when dropped.
pub trait Texture: Any {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Access to the concrete type, for backends
    fn as_any(&self) -> &dyn Any;
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
