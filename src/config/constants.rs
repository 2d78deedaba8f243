//! Compile-time constants shared by the splash screen and the contact dialog.

pub const APP_NAME: &str = "OptiBlink";
pub const APP_VERSION_LABEL: &str = "v1.0";

/// Icon shipped next to the binary, or under `assets/` in a checkout
pub const LOGO_FILE: &str = "optiblink-logo.ico";

/// Shown in place of the logo when the icon cannot be loaded
pub const LOGO_PLACEHOLDER: &str = "🔍";

pub mod splash {
    use std::time::Duration;

    pub const WINDOW_SIZE: [f32; 2] = [500.0, 500.0];
    pub const LOGO_SIZE: u32 = 120;
    pub const PROGRESS_BAR_WIDTH: f32 = 400.0;

    pub const DEFAULT_DURATION_SECS: f32 = 3.0;
    /// How long 100% stays on screen before the window goes away
    pub const FINAL_HOLD: Duration = Duration::from_millis(500);

    pub const INITIAL_STATUS: &str = "Initializing...";
    pub const SUBTITLE: &str = "Eye Tracking & Blink Detection";
}

pub mod contact {
    pub const WINDOW_SIZE: [f32; 2] = [450.0, 550.0];
    pub const WINDOW_TITLE: &str = "Emergency Contact Setup";
    pub const LOGO_SIZE: u32 = 80;

    /// Trimmed input shorter than this is rejected
    pub const MIN_CONTACT_LEN: usize = 10;
    pub const DEFAULT_PREFIX: &str = "+91 ";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefix_is_shorter_than_minimum() {
        // The untouched form must never pass validation
        assert!(contact::DEFAULT_PREFIX.trim().len() < contact::MIN_CONTACT_LEN);
    }

    #[test]
    fn test_final_hold_is_half_a_second() {
        assert_eq!(splash::FINAL_HOLD.as_millis(), 500);
    }
}
