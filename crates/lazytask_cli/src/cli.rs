//! Command-line flags.
//!
//! Flags override `LAZYTASK_*` environment values, which override defaults.

use clap::Parser;
use lazytask_core::TrackerConfig;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "lazytask", version, about = "A chatty personal task tracker")]
pub struct Cli {
    /// Save file holding one task per line
    #[arg(long, value_name = "PATH")]
    pub save_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Start with diagnostic mode on (show error kinds)
    #[arg(long)]
    pub dev: bool,

    /// Print one JSON object per reply instead of framed text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Applies flag overrides on top of `base`.
    pub fn apply(&self, mut base: TrackerConfig) -> TrackerConfig {
        if let Some(path) = &self.save_file {
            base.save_path = path.clone();
        }
        if let Some(level) = &self.log_level {
            base.log_level = level.clone();
        }
        if let Some(dir) = &self.log_dir {
            base.log_dir = dir.clone();
        }
        base.dev_mode |= self.dev;
        base
    }
}
