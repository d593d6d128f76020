use crate::error::RenderError;
use fee_report_types::Size;
use std::path::Path;

/// A decoded raster image split into 8-bit RGB samples and an optional
/// 8-bit alpha plane, the layout PDF image XObjects and soft masks expect.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
    pub alpha: Option<Vec<u8>>,
}

impl ImageData {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RenderError> {
        let decoded = image::load_from_memory(bytes)?;
        let has_alpha = decoded.color().has_alpha();
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();

        let pixel_count = (width * height) as usize;
        let mut rgb = Vec::with_capacity(pixel_count * 3);
        let mut alpha = Vec::with_capacity(if has_alpha { pixel_count } else { 0 });
        for pixel in rgba.pixels() {
            rgb.extend_from_slice(&pixel.0[..3]);
            if has_alpha {
                alpha.push(pixel.0[3]);
            }
        }

        // A fully opaque alpha plane adds nothing but bytes.
        let alpha = (has_alpha && alpha.iter().any(|a| *a != u8::MAX)).then_some(alpha);

        Ok(Self { width, height, rgb, alpha })
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}
