// Splash screen window using egui
use crate::components::{load_logo, render_logo};
use crate::config::constants::{self, splash as layout};
use crate::error::{Result, UiError};
use crate::platform;
use crate::splash::controller::{CompletionCallback, SplashController};
use crate::splash::state::SplashState;
use crate::style::{self, spacing, typography, AppTheme, ColorPalette};
use crate::ui_thread;
use eframe::egui;
use log::{error, info};
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

// Fallback repaint cadence in case an update's repaint request is missed
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Renders the splash surface. It only reads the shared state; the script
/// thread driving the [`SplashController`] is the single writer.
pub struct SplashApp {
    state: Arc<Mutex<SplashState>>,
    theme: AppTheme,
    palette: ColorPalette,
    logo_texture: Option<egui::TextureHandle>,
    logo_attempted: bool,
}

impl SplashApp {
    pub fn new(state: Arc<Mutex<SplashState>>, theme: AppTheme) -> Self {
        Self {
            state,
            theme,
            palette: ColorPalette::for_theme(theme),
            logo_texture: None,
            logo_attempted: false,
        }
    }

    fn snapshot(&self) -> SplashState {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl eframe::App for SplashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.logo_attempted {
            self.logo_texture = load_logo(ctx, layout::LOGO_SIZE);
            self.logo_attempted = true;
        }

        style::configure_style(ctx, self.theme);
        // The progress bar draws its track with the extreme background color
        let trough = self.palette.trough;
        ctx.style_mut(|style| style.visuals.extreme_bg_color = trough);

        let state = self.snapshot();
        let palette = &self.palette;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(spacing::LARGE);
                render_logo(
                    ui,
                    self.logo_texture.as_ref(),
                    layout::LOGO_SIZE as f32,
                    palette,
                );
                ui.add_space(spacing::SMALL);

                ui.label(
                    egui::RichText::new(constants::APP_NAME)
                        .size(typography::HERO_SIZE)
                        .color(palette.text_primary)
                        .strong(),
                );
                ui.label(
                    egui::RichText::new(layout::SUBTITLE)
                        .size(typography::BODY_LARGE_SIZE)
                        .color(palette.text_secondary),
                );

                ui.add_space(spacing::LARGE);
                ui.label(
                    egui::RichText::new("Loading Progress:")
                        .size(typography::BODY_REGULAR_SIZE)
                        .color(palette.text_primary)
                        .strong(),
                );
                ui.add_space(spacing::SMALL);
                ui.add(
                    egui::ProgressBar::new(state.fraction())
                        .desired_width(layout::PROGRESS_BAR_WIDTH)
                        .fill(palette.brand_purple),
                );

                ui.add_space(spacing::MEDIUM);
                ui.label(
                    egui::RichText::new(&state.current_label)
                        .size(typography::BODY_LARGE_SIZE)
                        .color(palette.text_primary)
                        .strong(),
                );

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                    ui.add_space(spacing::MICRO);
                    ui.label(
                        egui::RichText::new(constants::APP_VERSION_LABEL)
                            .size(typography::CAPTION_SIZE)
                            .color(palette.text_muted),
                    );
                });
            });
        });

        if state.is_visible {
            ctx.request_repaint_after(POLL_INTERVAL);
        } else {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

pub(crate) fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(layout::WINDOW_SIZE)
            .with_resizable(false)
            .with_decorations(false)
            .with_always_on_top()
            .with_title(constants::APP_NAME),
        centered: true,
        // Windows are opened from the library's UI thread, not main
        event_loop_builder: Some(Box::new(|builder| {
            platform::allow_event_loop_on_any_thread(builder);
        })),
        ..Default::default()
    }
}

/// Open the splash window and play the script. Returns once the window is
/// gone and the script has finished. Must run on the UI thread.
fn run_splash(duration_secs: f32, theme: AppTheme) -> Result<()> {
    let mut controller = SplashController::new();
    controller.create();
    let state = controller.state_handle();

    // The script thread is started from inside the creator so it can be
    // attached to the window's context; its handle comes back over this channel.
    let (script_tx, script_rx) = mpsc::channel::<JoinHandle<()>>();

    let run_result = eframe::run_native(
        constants::APP_NAME,
        native_options(),
        Box::new(move |cc| {
            controller.attach(cc.egui_ctx.clone());
            let script = std::thread::Builder::new()
                .name("splash-script".to_string())
                .spawn(move || controller.run(duration_secs, None))?;
            // The receiver outlives the event loop, so this cannot fail
            script_tx.send(script).ok();

            Ok(Box::new(SplashApp::new(state, theme)))
        }),
    );

    // Wait for the script even if the window went away early
    if let Ok(script) = script_rx.try_recv() {
        script
            .join()
            .map_err(|_| UiError::Thread("splash script thread panicked".to_string()))?;
    }

    run_result.map_err(|e| {
        error!("Splash screen failed: {}", e);
        UiError::from(e)
    })
}

/// Run `window` to completion, then call `on_complete` on this thread.
/// The callback is skipped when the window could not be shown.
fn complete_after<F>(window: F, on_complete: Option<CompletionCallback>) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    window()?;
    if let Some(callback) = on_complete {
        callback();
    }
    Ok(())
}

/// Handle to a splash playing in the background
pub struct SplashHandle {
    reply: Receiver<Result<()>>,
}

impl SplashHandle {
    /// Block until the splash is gone and its completion callback has run.
    pub fn join(self) -> Result<()> {
        ui_thread::wait(self.reply)
    }
}

/// Show the splash screen and block until the window is destroyed and
/// `on_complete` has been called on the calling thread.
pub fn show_splash(duration_secs: f32, on_complete: Option<CompletionCallback>) -> Result<()> {
    show_splash_with_theme(duration_secs, on_complete, AppTheme::Light)
}

pub fn show_splash_with_theme(
    duration_secs: f32,
    on_complete: Option<CompletionCallback>,
    theme: AppTheme,
) -> Result<()> {
    info!("Showing splash screen for {duration_secs}s");
    complete_after(
        || ui_thread::run(move || run_splash(duration_secs, theme)),
        on_complete,
    )
}

/// Start the splash on the library's UI thread and return immediately.
///
/// `on_complete` runs on the UI thread once the window is destroyed. Later
/// windows reuse the same thread, so entry points can follow each other.
pub fn show_splash_threaded(
    duration_secs: f32,
    on_complete: Option<CompletionCallback>,
) -> Result<SplashHandle> {
    show_splash_threaded_with_theme(duration_secs, on_complete, AppTheme::Light)
}

pub fn show_splash_threaded_with_theme(
    duration_secs: f32,
    on_complete: Option<CompletionCallback>,
    theme: AppTheme,
) -> Result<SplashHandle> {
    if !platform::supports_background_event_loop() {
        return Err(UiError::Gui(
            "this platform only allows windows on the main thread".to_string(),
        ));
    }

    info!("Showing splash screen for {duration_secs}s in the background");
    let reply = ui_thread::dispatch(move || {
        complete_after(|| run_splash(duration_secs, theme), on_complete)
    })?;

    Ok(SplashHandle { reply })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_window_options() {
        let options = native_options();

        assert_eq!(options.viewport.inner_size, Some(egui::vec2(500.0, 500.0)));
        assert_eq!(options.viewport.decorations, Some(false));
        assert_eq!(options.viewport.resizable, Some(false));
        assert_eq!(
            options.viewport.window_level,
            Some(egui::viewport::WindowLevel::AlwaysOnTop)
        );
        assert!(options.centered);
        assert!(options.event_loop_builder.is_some());
    }

    #[test]
    fn test_callback_runs_after_window_on_calling_thread() {
        let destroyed = Arc::new(AtomicBool::new(false));
        let seen = Arc::new(Mutex::new(None));
        let caller = std::thread::current().id();

        let window_flag = Arc::clone(&destroyed);
        let callback_flag = Arc::clone(&destroyed);
        let slot = Arc::clone(&seen);

        complete_after(
            move || {
                window_flag.store(true, Ordering::SeqCst);
                Ok(())
            },
            Some(Box::new(move || {
                *slot.lock().unwrap() = Some((
                    callback_flag.load(Ordering::SeqCst),
                    std::thread::current().id(),
                ));
            })),
        )
        .unwrap();

        assert_eq!(*seen.lock().unwrap(), Some((true, caller)));
    }

    #[test]
    fn test_callback_skipped_when_window_fails() {
        let called = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&called);

        let result = complete_after(
            || Err(UiError::Gui("no display".to_string())),
            Some(Box::new(move || flag.store(true, Ordering::SeqCst))),
        );

        assert!(result.is_err());
        assert!(!called.load(Ordering::SeqCst));
    }
}
