//! Raster textures
//!
//! Procedural textures are painted on the CPU into an RGBA buffer. The
//! renderer uploads a texture when `needs_update` is set and clears the flag
//! through [`RasterTexture::mark_uploaded`].

mod gradient;

pub use gradient::{build_gradient_texture, GradientSpec};

use image::{ImageResult, Rgba, RgbaImage};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::path::Path;
use std::sync::Arc;

/// A 2D RGBA8 pixel buffer used as a surface map
#[derive(Clone, Debug, PartialEq)]
pub struct RasterTexture {
    image: RgbaImage,
    needs_update: bool,
}

/// Textures are shared between the material and whoever caches them
pub type SharedTexture = Arc<RasterTexture>;

impl RasterTexture {
    /// Wrap a painted buffer; new textures always need an upload
    pub fn new(image: RgbaImage) -> Self {
        Self {
            image,
            needs_update: true,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// RGBA of one pixel
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let Rgba(rgba) = *self.image.get_pixel(x, y);
        rgba
    }

    /// Row-major RGBA bytes
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// Called by the renderer once the pixels are on the GPU
    pub fn mark_uploaded(&mut self) {
        self.needs_update = false;
    }

    /// Encode as PNG
    pub fn save_png(&self, path: &Path) -> ImageResult<()> {
        self.image
            .save_with_format(path, image::ImageFormat::Png)
    }
}

impl Serialize for RasterTexture {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RasterTexture", 3)?;
        state.serialize_field("width", &self.width())?;
        state.serialize_field("height", &self.height())?;
        state.serialize_field("needs_update", &self.needs_update)?;
        state.end()
    }
}

/// Where a material's color map comes from
#[derive(Clone, Debug, PartialEq)]
pub enum TextureSource {
    /// Painted in-process
    Raster(SharedTexture),
    /// Loaded by the renderer from a URL or asset path
    Url(String),
}

impl Serialize for TextureSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TextureSource::Raster(texture) => texture.as_ref().serialize(serializer),
            TextureSource::Url(url) => serializer.serialize_str(url),
        }
    }
}

impl From<RasterTexture> for TextureSource {
    fn from(texture: RasterTexture) -> Self {
        TextureSource::Raster(Arc::new(texture))
    }
}
