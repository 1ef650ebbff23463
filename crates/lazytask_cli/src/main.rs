//! LazyTask command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration, start logging, and run the interactive session.
//! - Keep presentation concerns out of `lazytask_core`.

mod cli;
mod render;
mod repl;
mod session;

use clap::Parser;
use lazytask_core::{init_logging, TaskManager, TrackerConfig};
use log::info;
use render::RenderOptions;
use repl::OutputMode;
use session::Session;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    let config = cli.apply(TrackerConfig::from_env());

    // Logging is best-effort; the tracker works without it.
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("lazytask: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok dev_mode={} json={}",
        config.dev_mode, cli.json
    );

    let manager = TaskManager::with_save_file(&config.save_path);
    let mut session = Session::new(
        manager,
        RenderOptions {
            show_error_kind: config.dev_mode,
        },
    );
    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match repl::run(&mut session, stdin.lock(), stdout.lock(), mode) {
        Ok(()) => {
            info!("event=cli_exit module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("lazytask: terminal I/O failed: {err}");
            ExitCode::FAILURE
        }
    }
}
