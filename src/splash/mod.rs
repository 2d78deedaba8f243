// Splash screen module - shows the scripted startup progress window
mod app;
mod controller;
mod script;
mod state;

pub use app::{
    show_splash, show_splash_threaded, show_splash_threaded_with_theme, show_splash_with_theme,
    SplashApp, SplashHandle,
};
pub use controller::{CompletionCallback, SplashController};
pub use script::{duration_from_secs, ProgressStep, ScriptedRun, PROGRESS_SCRIPT};
pub use state::SplashState;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
