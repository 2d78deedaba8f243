// Form sections of the emergency contact dialog
use crate::contact::state::ContactForm;
use crate::style::{self, spacing, typography, ColorPalette};
use eframe::egui;

/// Which action button, if any, was pressed this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Confirm,
    Cancel,
}

pub fn render_intro(ui: &mut egui::Ui, palette: &ColorPalette) {
    ui.label(
        egui::RichText::new("Welcome to OptiBlink.\nEmergency Contact Setup")
            .size(typography::HEADING_SIZE)
            .color(palette.text_primary)
            .strong(),
    );
    ui.add_space(spacing::SMALL);
    ui.label(
        egui::RichText::new(
            "OptiBlink can send emergency alerts when needed.\n\
             Please provide your emergency contact information.",
        )
        .size(typography::BODY_REGULAR_SIZE)
        .color(palette.text_secondary),
    );
}

/// Phone number input plus channel preference. Returns the text field's response.
pub fn render_contact_fields(
    ui: &mut egui::Ui,
    form: &mut ContactForm,
    palette: &ColorPalette,
) -> egui::Response {
    ui.label(
        egui::RichText::new("Emergency Contact Number:")
            .size(typography::BODY_REGULAR_SIZE)
            .color(palette.text_primary)
            .strong(),
    );
    ui.add_space(spacing::MICRO);

    let response = ui.add(
        egui::TextEdit::singleline(&mut form.contact_input)
            .font(egui::TextStyle::Body)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        form.clear_validation_error();
    }

    ui.label(
        egui::RichText::new("Example: +91 9876543210")
            .size(typography::CAPTION_SIZE)
            .color(palette.text_muted),
    );

    if let Some(ref error) = form.validation_error {
        ui.add_space(spacing::MICRO);
        style::error_message(ui, &error.to_string(), palette);
    }

    ui.add_space(spacing::MEDIUM);
    ui.checkbox(
        &mut form.prefer_whatsapp,
        egui::RichText::new("Prefer WhatsApp Web for emergency alerts")
            .size(typography::BODY_REGULAR_SIZE)
            .color(palette.text_primary),
    );

    response
}

/// OK and Cancel, right-aligned
pub fn render_action_buttons(ui: &mut egui::Ui, palette: &ColorPalette) -> Option<FormAction> {
    let mut action = None;

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if style::action_button(ui, "OK", palette.success, palette).clicked() {
            action = Some(FormAction::Confirm);
        }
        ui.add_space(spacing::SMALL);
        if style::action_button(ui, "Cancel", palette.error, palette).clicked() {
            action = Some(FormAction::Cancel);
        }
    });

    action
}

/// Put the cursor after the pre-filled prefix
pub fn move_cursor_to_end(ctx: &egui::Context, id: egui::Id, text: &str) {
    let mut state = egui::TextEdit::load_state(ctx, id).unwrap_or_default();
    let end = egui::text::CCursor::new(text.chars().count());
    state
        .cursor
        .set_char_range(Some(egui::text::CCursorRange::one(end)));
    state.store(ctx, id);
}
