use crate::error::{FieldToolError, Result};
use egui::ColorImage;
use std::path::Path;

/// Decodes the field background into something egui can upload.
pub fn load_field_image(path: impl AsRef<Path>) -> Result<ColorImage> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| FieldToolError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(to_color_image(&image.to_rgba8()))
}

pub fn to_color_image(rgba: &image::RgbaImage) -> ColorImage {
    let size = [rgba.width() as usize, rgba.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}
