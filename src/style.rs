// Theme and styling shared by the splash screen and the contact dialog
use crate::config::ThemePreference;
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppTheme {
    Light,
    Dark,
}

impl AppTheme {
    /// Detect system theme using dark-light crate
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => AppTheme::Dark,
            _ => AppTheme::Light,
        }
    }

    pub fn resolve(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::System => Self::detect(),
            ThemePreference::Light => AppTheme::Light,
            ThemePreference::Dark => AppTheme::Dark,
        }
    }
}

pub struct ColorPalette {
    // Brand colors
    pub brand_purple: egui::Color32,
    pub brand_blue: egui::Color32,

    // Backgrounds
    pub background: egui::Color32,
    pub surface: egui::Color32,
    pub trough: egui::Color32,

    // Text
    pub text_primary: egui::Color32,
    pub text_secondary: egui::Color32,
    pub text_muted: egui::Color32,

    pub border: egui::Color32,

    // Semantic colors
    pub success: egui::Color32,
    pub error: egui::Color32,
}

impl ColorPalette {
    pub fn light() -> Self {
        Self {
            brand_purple: egui::Color32::from_rgb(142, 68, 173),
            brand_blue: egui::Color32::from_rgb(52, 152, 219),
            background: egui::Color32::WHITE,
            surface: egui::Color32::WHITE,
            trough: egui::Color32::from_rgb(236, 240, 241),
            text_primary: egui::Color32::from_rgb(44, 62, 80),
            text_secondary: egui::Color32::from_rgb(52, 73, 94),
            text_muted: egui::Color32::from_rgb(127, 140, 141),
            border: egui::Color32::from_rgb(189, 195, 199),
            success: egui::Color32::from_rgb(39, 174, 96),
            error: egui::Color32::from_rgb(231, 76, 60),
        }
    }

    pub fn dark() -> Self {
        Self {
            brand_purple: egui::Color32::from_rgb(155, 89, 182),
            brand_blue: egui::Color32::from_rgb(93, 173, 226),
            background: egui::Color32::from_rgb(30, 30, 36),
            surface: egui::Color32::from_rgb(45, 45, 52),
            trough: egui::Color32::from_rgb(60, 60, 68),
            text_primary: egui::Color32::from_rgb(236, 240, 241),
            text_secondary: egui::Color32::from_rgb(189, 195, 199),
            text_muted: egui::Color32::from_rgb(149, 165, 166),
            border: egui::Color32::from_rgb(80, 80, 90),
            success: egui::Color32::from_rgb(46, 204, 113),
            error: egui::Color32::from_rgb(255, 99, 71),
        }
    }

    pub fn for_theme(theme: AppTheme) -> Self {
        match theme {
            AppTheme::Light => Self::light(),
            AppTheme::Dark => Self::dark(),
        }
    }
}

// Spacing constants (8-point grid)
pub mod spacing {
    pub const MICRO: f32 = 4.0;
    pub const SMALL: f32 = 8.0;
    pub const MEDIUM: f32 = 16.0;
    pub const LARGE: f32 = 24.0;
    pub const XLARGE: f32 = 32.0;
}

pub mod typography {
    pub const HERO_SIZE: f32 = 24.0;
    pub const HEADING_SIZE: f32 = 18.0;
    pub const BODY_LARGE_SIZE: f32 = 14.0;
    pub const BODY_REGULAR_SIZE: f32 = 13.0;
    pub const CAPTION_SIZE: f32 = 11.0;
}

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const BUTTON_MIN_WIDTH: f32 = 100.0;
    pub const BUTTON_PADDING_H: f32 = 16.0;
    pub const BUTTON_PADDING_V: f32 = 8.0;
    pub const BUTTON_ROUNDING: f32 = 4.0;

    pub const INPUT_ROUNDING: f32 = 4.0;
    pub const ICON_SIZE_SMALL: f32 = 16.0;
}

/// Configure egui style for the given theme
pub fn configure_style(ctx: &egui::Context, theme: AppTheme) {
    let mut style = (*ctx.style()).clone();
    let palette = ColorPalette::for_theme(theme);

    style.visuals.window_fill = palette.background;
    style.visuals.panel_fill = palette.background;
    style.visuals.extreme_bg_color = palette.surface;

    style.spacing.button_padding = egui::vec2(sizing::BUTTON_PADDING_H, sizing::BUTTON_PADDING_V);
    style.spacing.item_spacing = egui::vec2(spacing::SMALL, spacing::SMALL);

    style.visuals.widgets.inactive.rounding = egui::Rounding::same(sizing::BUTTON_ROUNDING);
    style.visuals.widgets.hovered.rounding = egui::Rounding::same(sizing::BUTTON_ROUNDING);
    style.visuals.widgets.active.rounding = egui::Rounding::same(sizing::BUTTON_ROUNDING);

    style.visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, palette.border);

    style.visuals.override_text_color = Some(palette.text_primary);

    ctx.set_style(style);
}

/// Outlined action button. `accent` colors the border.
pub fn action_button(
    ui: &mut egui::Ui,
    label: &str,
    accent: egui::Color32,
    palette: &ColorPalette,
) -> egui::Response {
    let button = egui::Button::new(
        egui::RichText::new(label)
            .size(typography::BODY_REGULAR_SIZE)
            .color(palette.text_primary)
            .strong(),
    )
    .fill(palette.surface)
    .stroke(egui::Stroke::new(1.5, accent))
    .min_size(egui::vec2(sizing::BUTTON_MIN_WIDTH, sizing::BUTTON_HEIGHT))
    .rounding(sizing::BUTTON_ROUNDING);

    ui.add(button)
}

/// Render an error message box
pub fn error_message(ui: &mut egui::Ui, message: &str, palette: &ColorPalette) {
    egui::Frame::none()
        .fill(palette.error.linear_multiply(0.1))
        .stroke(egui::Stroke::new(1.0, palette.error))
        .rounding(sizing::INPUT_ROUNDING)
        .inner_margin(egui::Margin::same(spacing::SMALL))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(sizing::ICON_SIZE_SMALL));
                ui.label(
                    egui::RichText::new(message)
                        .size(typography::CAPTION_SIZE)
                        .color(palette.error),
                );
            });
        });
}
