// Logo with placeholder fallback
use crate::config::constants;
use crate::style::ColorPalette;
use eframe::egui;

/// Draw the logo texture at `size`, or the placeholder glyph when it failed to load.
pub fn render_logo(
    ui: &mut egui::Ui,
    logo_texture: Option<&egui::TextureHandle>,
    size: f32,
    palette: &ColorPalette,
) {
    if let Some(texture) = logo_texture {
        ui.image(egui::ImageSource::Texture(egui::load::SizedTexture {
            id: texture.id(),
            size: egui::vec2(size, size),
        }));
    } else {
        ui.label(
            egui::RichText::new(constants::LOGO_PLACEHOLDER)
                .size(size * 0.4)
                .color(palette.brand_blue),
        );
    }
}
