//! Runtime configuration for the tracker.
//!
//! # Responsibility
//! - Resolve save-file and logging settings from defaults and environment.
//!
//! # Invariants
//! - Blank environment values are ignored, never treated as paths.
//! - Resolution never fails; unusable values surface later where used.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const SAVE_PATH_ENV: &str = "LAZYTASK_SAVE_PATH";
pub const LOG_LEVEL_ENV: &str = "LAZYTASK_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "LAZYTASK_LOG_DIR";
pub const DEV_MODE_ENV: &str = "LAZYTASK_DEV";

const DEFAULT_SAVE_FILE_NAME: &str = "lazytask.txt";

/// Effective tracker settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Pipe-delimited save file.
    pub save_path: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
    /// Show error kind names next to failures.
    pub dev_mode: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: std::env::temp_dir().join("lazytask").join("logs"),
            dev_mode: false,
        }
    }
}

impl TrackerConfig {
    /// Defaults overridden by `LAZYTASK_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(path) = non_blank(SAVE_PATH_ENV) {
            config.save_path = PathBuf::from(path);
        }
        if let Some(level) = non_blank(LOG_LEVEL_ENV) {
            config.log_level = level;
        }
        if let Some(dir) = non_blank(LOG_DIR_ENV) {
            config.log_dir = PathBuf::from(dir);
        }
        if let Some(flag) = non_blank(DEV_MODE_ENV) {
            config.dev_mode = parse_flag(&flag);
        }
        config
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
