mod config;
pub mod database;

pub use config::{Config, TimerConfig};
pub use database::TaskStore;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the wheelwork data directory, creating it if needed.
///
/// `WHEELWORK_DATA_DIR` wins when set. Otherwise `~/.config/wheelwork/`, or
/// `~/.config/wheelwork-dev/` with `WHEELWORK_ENV=dev`.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("WHEELWORK_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("WHEELWORK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("wheelwork-dev")
            } else {
                base_dir.join("wheelwork")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
