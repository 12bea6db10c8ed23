use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use tracing::debug;

use crate::consts::RGBA_CHANNELS;
use crate::error::{OnionskinError, Result};
use crate::geometry::Size;

/// A decoded overlay picture, straight (non-premultiplied) RGBA8.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl OverlayImage {
    pub fn from_rgba(img: RgbaImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(OnionskinError::EmptyImage { width, height });
        }
        Ok(Self {
            width,
            height,
            rgba: img.into_raw(),
        })
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    pub fn byte_len(&self) -> usize {
        self.rgba.len()
    }

    /// RGBA of the pixel at `(x, y)`. Callers keep coordinates in range.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * RGBA_CHANNELS;
        [self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]]
    }
}

/// Decode an image file of any format the `image` crate recognizes.
pub fn decode_file(path: &Path) -> Result<OverlayImage> {
    let img = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    let overlay = OverlayImage::from_rgba(img.to_rgba8())?;
    debug!(
        path = %path.display(),
        width = overlay.width,
        height = overlay.height,
        "decoded overlay image"
    );
    Ok(overlay)
}

/// Decode an in-memory encoded image, sniffing the format from its header.
pub fn decode_bytes(bytes: &[u8]) -> Result<OverlayImage> {
    let img = image::load_from_memory(bytes)?;
    OverlayImage::from_rgba(img.to_rgba8())
}

/// Load a base screenshot for compositing.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    Ok(image::open(path)?.to_rgba8())
}

/// Save an RGBA image, PNG unless the extension names another format.
pub fn save_rgba(img: &RgbaImage, path: &Path) -> Result<()> {
    match ImageFormat::from_path(path) {
        Ok(format) => img.save_with_format(path, format)?,
        Err(_) => img.save_with_format(path, ImageFormat::Png)?,
    }
    Ok(())
}

/// The file picker may hand back several files; only the first is used.
pub fn first_selected(paths: &[PathBuf]) -> Option<&Path> {
    paths.first().map(PathBuf::as_path)
}
