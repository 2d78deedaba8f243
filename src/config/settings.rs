use crate::config::constants;
use crate::error::{Result, UiError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow the desktop's light/dark mode
    #[default]
    System,
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_splash_duration")]
    pub splash_duration_secs: f32,
    #[serde(default)]
    pub theme: ThemePreference,
}

fn default_splash_duration() -> f32 {
    constants::splash::DEFAULT_DURATION_SECS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            splash_duration_secs: default_splash_duration(),
            theme: ThemePreference::default(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let settings = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.splash_duration_secs.is_finite() || self.splash_duration_secs < 0.0 {
            return Err(UiError::InvalidConfiguration(format!(
                "Splash duration must be a non-negative number of seconds, got {}",
                self.splash_duration_secs
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;
