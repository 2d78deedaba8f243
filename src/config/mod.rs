pub mod constants;
pub mod paths;
pub mod settings;

use crate::error::Result;

pub use paths::{resource_path, AppPaths};
pub use settings::{Settings, ThemePreference};

pub struct Config {
    paths: AppPaths,
    settings: Settings,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::with_paths(AppPaths::new()?)
    }

    pub fn with_paths(paths: AppPaths) -> Result<Self> {
        let settings = Settings::load(&paths.settings_file)?;
        settings.validate()?;

        Ok(Config { paths, settings })
    }

    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn update_settings<F>(&mut self, updater: F) -> Result<()>
    where
        F: FnOnce(&mut Settings),
    {
        let mut updated = self.settings.clone();
        updater(&mut updated);
        updated.validate()?;
        updated.save(&self.paths.settings_file)?;
        self.settings = updated;
        Ok(())
    }
}
