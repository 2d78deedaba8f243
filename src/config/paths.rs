use crate::error::{Result, UiError};
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "optiblink";

#[derive(Clone, Debug)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub settings_file: PathBuf,
    pub log_file: PathBuf,
}

impl AppPaths {
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                UiError::InvalidConfiguration("Could not determine config directory".to_string())
            })?
            .join(APP_DIR_NAME);

        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| {
                UiError::InvalidConfiguration("Could not determine cache directory".to_string())
            })?
            .join(APP_DIR_NAME);

        Self::from_dirs(config_dir, cache_dir)
    }

    /// Build the layout under explicit directories, creating them if needed.
    pub fn from_dirs(config_dir: PathBuf, cache_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&config_dir)?;
        std::fs::create_dir_all(&cache_dir)?;

        Ok(AppPaths {
            settings_file: config_dir.join("settings.json"),
            log_file: cache_dir.join("optiblink.log"),
            config_dir,
            cache_dir,
        })
    }
}

/// Directories searched for bundled resources, most specific first.
///
/// A packaged build ships its assets beside the executable (or in the
/// bundle's `Resources` directory on macOS). A development build finds them
/// in the crate's `assets/` directory or the working directory.
pub fn resource_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir.join("assets"));
        roots.push(exe_dir.join("../Resources"));
        roots.push(exe_dir.clone());
    }

    roots.push(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"));

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd.join("assets"));
        roots.push(cwd);
    }

    roots
}

/// First existing `root/relative` among `roots`.
pub fn find_resource(relative: &Path, roots: &[PathBuf]) -> Option<PathBuf> {
    roots
        .iter()
        .map(|root| root.join(relative))
        .find(|candidate| candidate.is_file())
}

/// Resolve a resource against [`resource_roots`]. Falls back to the bare
/// relative path so callers get a readable "not found" error later.
pub fn resource_path(relative: impl AsRef<Path>) -> PathBuf {
    let relative = relative.as_ref();
    find_resource(relative, &resource_roots()).unwrap_or_else(|| relative.to_path_buf())
}
