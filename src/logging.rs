use crate::error::{Result, UiError};
use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

static LOG_FILE: Mutex<Option<fs::File>> = Mutex::new(None);

// Rotate once the log passes 10 MB
const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;
const MAX_ROTATED_LOGS: usize = 5;

/// Shift `optiblink.log` -> `optiblink.log.1` -> ... when the current file is too large.
pub fn rotate_logs_if_needed(log_file_path: &Path) -> Result<()> {
    let Ok(metadata) = fs::metadata(log_file_path) else {
        return Ok(());
    };
    if metadata.len() <= MAX_LOG_SIZE {
        return Ok(());
    }

    let log_dir = log_file_path.parent().unwrap_or_else(|| Path::new("."));
    let log_name = log_file_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let rotated = |i: usize| log_dir.join(format!("{log_name}.{i}"));

    // The oldest file falls off the end
    let oldest = rotated(MAX_ROTATED_LOGS);
    if oldest.exists() {
        fs::remove_file(&oldest).ok();
    }

    for i in (1..MAX_ROTATED_LOGS).rev() {
        let old_path = rotated(i);
        if old_path.exists() {
            fs::rename(&old_path, rotated(i + 1)).ok();
        }
    }

    fs::rename(log_file_path, rotated(1))?;
    Ok(())
}

/// Install the global logger. Writes to stderr, and to `log_file_path` too when given.
pub fn init_logging(log_file_path: Option<&Path>) -> Result<()> {
    if let Some(path) = log_file_path {
        rotate_logs_if_needed(path)?;
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        *LOG_FILE.lock().unwrap_or_else(|e| e.into_inner()) = Some(file);
    }

    // RUST_LOG wins, otherwise info
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.target(Target::Stderr);
    builder.format(|buf, record| {
        let formatted = format!(
            "[{}] {} {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.args()
        );

        writeln!(buf, "{formatted}")?;

        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(ref mut file) = *guard {
                writeln!(file, "{formatted}").ok();
                file.flush().ok();
            }
        }

        Ok(())
    });

    builder
        .try_init()
        .map_err(|e| UiError::Other(format!("Failed to initialize logging: {e}")))
}
