// Emergency contact dialog using egui
use crate::components::{load_logo, render_logo};
use crate::config::constants::{self, contact as layout};
use crate::contact::components::{
    move_cursor_to_end, render_action_buttons, render_contact_fields, render_intro, FormAction,
};
use crate::contact::state::{ContactForm, ContactResult, ValidationError};
use crate::error::Result;
use crate::platform;
use crate::style::{self, spacing, AppTheme, ColorPalette};
use crate::ui_thread;
use eframe::egui;
use log::{info, warn};
use std::sync::mpsc;

pub struct ContactDialogApp {
    pub form: ContactForm,
    theme: AppTheme,
    palette: ColorPalette,
    logo_texture: Option<egui::TextureHandle>,
    logo_attempted: bool,
    focus_requested: bool,
    outcome_tx: Option<mpsc::Sender<Option<ContactResult>>>,
}

impl ContactDialogApp {
    pub fn new(theme: AppTheme, outcome_tx: Option<mpsc::Sender<Option<ContactResult>>>) -> Self {
        Self {
            form: ContactForm::default(),
            theme,
            palette: ColorPalette::for_theme(theme),
            logo_texture: None,
            logo_attempted: false,
            focus_requested: false,
            outcome_tx,
        }
    }

    /// Apply a button press to the form. Returns the validation error to
    /// show the user, if the confirm was rejected.
    pub fn handle_action(&mut self, action: FormAction) -> Option<ValidationError> {
        match action {
            FormAction::Confirm => match self.form.confirm() {
                Ok(()) => None,
                Err(err) => {
                    warn!("Rejected emergency contact: {}", err);
                    Some(err)
                }
            },
            FormAction::Cancel => {
                self.form.cancel();
                None
            }
        }
    }

    /// Hand the outcome to the caller once the form has closed. Only the
    /// first call after closing sends anything.
    pub fn finish(&mut self) -> bool {
        if self.form.is_open() {
            return false;
        }

        if let Some(tx) = self.outcome_tx.take() {
            // The receiver is dropped only if the caller gave up waiting
            tx.send(self.form.clone().into_outcome()).ok();
        }
        true
    }
}

/// Blocking error box, like a native message box
fn notify_invalid_contact(err: &ValidationError) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Invalid Contact")
        .set_description(err.to_string())
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

impl eframe::App for ContactDialogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.logo_attempted {
            self.logo_texture = load_logo(ctx, layout::LOGO_SIZE);
            self.logo_attempted = true;
        }

        style::configure_style(ctx, self.theme);

        if ctx.input(|i| i.viewport().close_requested()) {
            self.form.close_requested();
        }

        let mut action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(spacing::MEDIUM);
            ui.vertical_centered(|ui| {
                render_logo(
                    ui,
                    self.logo_texture.as_ref(),
                    layout::LOGO_SIZE as f32,
                    &self.palette,
                );
                ui.add_space(spacing::MEDIUM);
                render_intro(ui, &self.palette);
            });

            ui.add_space(spacing::LARGE);
            egui::Frame::none()
                .inner_margin(egui::Margin::symmetric(spacing::XLARGE, 0.0))
                .show(ui, |ui| {
                    let input = render_contact_fields(ui, &mut self.form, &self.palette);
                    if !self.focus_requested {
                        input.request_focus();
                        move_cursor_to_end(ctx, input.id, &self.form.contact_input);
                        self.focus_requested = true;
                    }
                });

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Max), |ui| {
                ui.add_space(spacing::LARGE);
                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(spacing::XLARGE, 0.0))
                    .show(ui, |ui| {
                        action = render_action_buttons(ui, &self.palette);
                    });
            });
        });

        if let Some(action) = action {
            if let Some(err) = self.handle_action(action) {
                notify_invalid_contact(&err);
            }
        }

        if self.finish() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

pub(crate) fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(layout::WINDOW_SIZE)
            .with_resizable(false)
            .with_always_on_top()
            .with_title(layout::WINDOW_TITLE),
        centered: true,
        // Windows are opened from the library's UI thread, not main
        event_loop_builder: Some(Box::new(|builder| {
            platform::allow_event_loop_on_any_thread(builder);
        })),
        ..Default::default()
    }
}

/// Run the form's event loop. Must run on the UI thread.
fn run_dialog(theme: AppTheme) -> Result<Option<ContactResult>> {
    let (outcome_tx, outcome_rx) = mpsc::channel();

    eframe::run_native(
        constants::APP_NAME,
        native_options(),
        Box::new(move |_cc| Ok(Box::new(ContactDialogApp::new(theme, Some(outcome_tx))))),
    )?;

    // No message means the event loop ended without a terminal action
    Ok(outcome_rx.try_recv().unwrap_or(None))
}

/// Show the emergency contact form and block until it is dismissed.
///
/// Returns `Some(result)` when the user confirmed a valid number and `None`
/// when they cancelled or closed the window.
pub fn show_emergency_contact_dialog() -> Result<Option<ContactResult>> {
    show_emergency_contact_dialog_with_theme(AppTheme::Light)
}

pub fn show_emergency_contact_dialog_with_theme(
    theme: AppTheme,
) -> Result<Option<ContactResult>> {
    let outcome = ui_thread::run(move || run_dialog(theme))?;

    match &outcome {
        Some(result) => info!(
            "Emergency contact set (WhatsApp preferred: {})",
            result.prefer_whatsapp
        ),
        None => info!("Emergency contact dialog cancelled"),
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_options() {
        let options = native_options();

        assert_eq!(options.viewport.inner_size, Some(egui::vec2(450.0, 550.0)));
        assert_eq!(options.viewport.resizable, Some(false));
        assert_ne!(options.viewport.decorations, Some(false));
        assert_eq!(
            options.viewport.window_level,
            Some(egui::viewport::WindowLevel::AlwaysOnTop)
        );
        assert_eq!(
            options.viewport.title.as_deref(),
            Some("Emergency Contact Setup")
        );
        assert!(options.centered);
        assert!(options.event_loop_builder.is_some());
    }
}
