// Widgets shared by the splash screen and the contact dialog
pub mod brand_header;

pub use brand_header::render_logo;

use crate::config::{constants, resource_path};
use crate::error::Result;
use eframe::egui;
use image::imageops::FilterType;
use log::warn;
use std::path::Path;

/// Decode an icon/image file and scale it to a `size`x`size` square.
pub fn decode_logo(path: &Path, size: u32) -> Result<egui::ColorImage> {
    let image_bytes = std::fs::read(path)?;
    let image = image::load_from_memory(&image_bytes)?;
    let rgba_image = image.resize_exact(size, size, FilterType::Lanczos3).to_rgba8();

    let dimensions = [rgba_image.width() as usize, rgba_image.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        dimensions,
        rgba_image.as_raw(),
    ))
}

/// Load the OptiBlink logo as a texture owned by the caller.
///
/// Failure is never fatal: it is logged and `None` tells the caller to draw
/// the placeholder glyph instead.
pub fn load_logo(ctx: &egui::Context, size: u32) -> Option<egui::TextureHandle> {
    let path = resource_path(constants::LOGO_FILE);

    match decode_logo(&path, size) {
        Ok(color_image) => Some(ctx.load_texture(
            "optiblink-logo",
            color_image,
            egui::TextureOptions::default(),
        )),
        Err(e) => {
            warn!("Could not load logo from {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiError;
    use tempfile::TempDir;

    #[test]
    fn test_missing_logo_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = decode_logo(&temp_dir.path().join("missing.ico"), 120);

        assert!(matches!(result, Err(UiError::Io(_))));
    }

    #[test]
    fn test_corrupt_logo_is_image_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corrupt.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(matches!(decode_logo(&path, 120), Err(UiError::Image(_))));
    }

    #[test]
    fn test_logo_is_scaled_to_requested_size() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logo.png");
        image::RgbaImage::from_pixel(16, 8, image::Rgba([142, 68, 173, 255]))
            .save(&path)
            .unwrap();

        let color_image = decode_logo(&path, 80).unwrap();

        assert_eq!(color_image.size, [80, 80]);
    }
}
