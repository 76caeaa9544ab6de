use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::Result;

/// Decode an image file into an RGBA bitmap.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)?;
    let rgba = img.to_rgba8();
    tracing::debug!(
        path = %path.display(),
        width = rgba.width(),
        height = rgba.height(),
        "Decoded image"
    );
    Ok(rgba)
}

/// Save an RGBA bitmap as PNG.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Display name of a selected file: the last path component, whichever
/// separator style the path uses.
pub fn display_name(path: &Path) -> String {
    let raw = path.to_string_lossy();
    raw.rsplit(['\\', '/']).next().unwrap_or_default().to_string()
}
