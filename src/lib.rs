// Library module for the OptiBlink startup UI
// The demo binary and the integration tests both build on this

pub mod components;
pub mod config;
pub mod contact;
pub mod error;
pub mod logging;
pub mod platform;
pub mod splash;
pub mod style;
pub mod ui_thread;

pub use contact::{show_emergency_contact_dialog, ContactResult};
pub use error::{Result, UiError};
pub use splash::{show_splash, show_splash_threaded, SplashController, SplashHandle};
