// Progress-update channel for the splash surface
use crate::config::constants;
use crate::splash::script::{duration_from_secs, ScriptedRun};
use crate::splash::state::SplashState;
use eframe::egui;
use log::{debug, error, info};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

/// Invoked once after the splash surface has been destroyed.
pub type CompletionCallback = Box<dyn FnOnce() + Send + 'static>;

/// Owns the splash surface's visual state and is its only writer.
///
/// The renderer gets a read handle through [`SplashController::state_handle`]
/// and an attached [`egui::Context`] is asked to repaint after every change.
/// Without a context the controller still works, which is how it is driven
/// in tests.
pub struct SplashController {
    state: Arc<Mutex<SplashState>>,
    viewport: Option<egui::Context>,
    created: bool,
}

impl Default for SplashController {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashController {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SplashState {
                is_visible: false,
                ..SplashState::default()
            })),
            viewport: None,
            created: false,
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, SplashState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Bring up the surface. Calling it again reuses the existing one.
    pub fn create(&mut self) {
        if self.created {
            debug!("Splash surface already exists, reusing it");
            return;
        }

        *self.lock_state() = SplashState::default();
        self.created = true;
        self.request_redraw();
    }

    /// Connect the controller to a live window.
    pub fn attach(&mut self, ctx: egui::Context) {
        self.viewport = Some(ctx);
    }

    pub fn is_created(&self) -> bool {
        self.created
    }

    /// Read handle for the renderer
    pub fn state_handle(&self) -> Arc<Mutex<SplashState>> {
        Arc::clone(&self.state)
    }

    pub fn snapshot(&self) -> SplashState {
        self.lock_state().clone()
    }

    /// Show `value` percent and, if given and non-empty, a new status label.
    ///
    /// Does nothing but log when the surface does not exist.
    pub fn update_progress(&mut self, value: u8, label: Option<&str>) {
        if !self.created {
            error!("Error updating progress: splash surface does not exist");
            return;
        }

        self.lock_state().apply(value, label);
        self.request_redraw();
    }

    /// Destroy the surface. Safe to call any number of times.
    pub fn close(&mut self) {
        if !self.created {
            return;
        }

        self.created = false;
        self.lock_state().is_visible = false;

        if let Some(ctx) = self.viewport.take() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            ctx.request_repaint();
        }
    }

    /// Play the scripted animation over `total_duration_secs`, hold the final
    /// state, close the surface and then call `on_complete`.
    ///
    /// Blocks the calling thread for the whole run.
    pub fn run(&mut self, total_duration_secs: f32, on_complete: Option<CompletionCallback>) {
        self.create();

        let started = Instant::now();
        for (step, pause) in ScriptedRun::new(duration_from_secs(total_duration_secs)) {
            debug!("Updating progress: {}% - {}", step.percentage, step.label);
            self.update_progress(step.percentage, Some(step.label));
            std::thread::sleep(pause);
        }

        std::thread::sleep(constants::splash::FINAL_HOLD);
        self.close();
        info!("Splash screen finished after {:.2?}", started.elapsed());

        if let Some(callback) = on_complete {
            callback();
        }
    }

    fn request_redraw(&self) {
        if let Some(ctx) = &self.viewport {
            ctx.request_repaint();
        }
    }
}
