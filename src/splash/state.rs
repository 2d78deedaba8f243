// What the splash window is currently showing
use crate::config::constants;

#[derive(Debug, Clone, PartialEq)]
pub struct SplashState {
    pub current_percentage: u8,
    pub current_label: String,
    pub is_visible: bool,
}

impl Default for SplashState {
    fn default() -> Self {
        Self {
            current_percentage: 0,
            current_label: constants::splash::INITIAL_STATUS.to_string(),
            is_visible: true,
        }
    }
}

impl SplashState {
    /// Set the percentage (clamped to 100) and replace the label unless it is empty.
    pub fn apply(&mut self, value: u8, label: Option<&str>) {
        self.current_percentage = value.min(100);
        if let Some(label) = label.filter(|l| !l.is_empty()) {
            self.current_label = label.to_string();
        }
    }

    /// Progress as a 0.0..=1.0 fraction for the progress bar
    pub fn fraction(&self) -> f32 {
        f32::from(self.current_percentage) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = SplashState::default();
        assert_eq!(state.current_percentage, 0);
        assert_eq!(state.current_label, "Initializing...");
        assert!(state.is_visible);
    }

    #[test]
    fn test_empty_label_keeps_previous_text() {
        let mut state = SplashState::default();
        state.apply(40, Some("Loading AI models..."));
        state.apply(45, Some(""));
        state.apply(50, None);

        assert_eq!(state.current_percentage, 50);
        assert_eq!(state.current_label, "Loading AI models...");
    }

    #[test]
    fn test_percentage_is_clamped() {
        let mut state = SplashState::default();
        state.apply(250, None);

        assert_eq!(state.current_percentage, 100);
        assert_eq!(state.fraction(), 1.0);
    }
}
