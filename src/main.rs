use anyhow::Result;
use clap::Parser;
use std::{io, path::PathBuf};
use tracing::{debug, error};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use termdialog::{
    cli::{Cli, EXIT_ERROR},
    tui, version,
};

const LOG_FILE_NAME: &str = "termdialog.log";

#[tokio::main]
async fn main() {
    // Leave the alternate screen before reporting a panic
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = tui::leave_screen(&mut io::stderr());
        error!("Application panicked: {}", panic_info);
        eprintln!("{} panicked: {}", version::APP_NAME, panic_info);
        std::process::exit(EXIT_ERROR);
    }));

    let cli = Cli::parse();

    // Load environment variables from .env file
    let dotenv = dotenvy::dotenv();

    let guard = match init_logging(cli.debug) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            std::process::exit(EXIT_ERROR);
        }
    };

    if let Err(e) = dotenv {
        debug!("No .env file found or error loading it: {}", e);
    }
    debug!("{}", version::full_version());

    let code = match cli.execute().await {
        Ok(code) => code,
        Err(e) => {
            error!("Application error: {:#}", e);
            eprintln!("Error: {:#}", e);
            EXIT_ERROR
        }
    };

    // Flush buffered log lines; process::exit skips destructors
    drop(guard);
    std::process::exit(code);
}

/// Directory and file name of the log: `TERMDIALOG_LOG_FILE` or the user cache directory
fn log_file_location() -> Option<(PathBuf, String)> {
    if let Ok(path) = std::env::var("TERMDIALOG_LOG_FILE") {
        let path = PathBuf::from(path);
        let name = path.file_name()?.to_string_lossy().into_owned();
        let dir = path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        return Some((dir, name));
    }
    dirs::cache_dir().map(|dir| (dir.join(version::APP_NAME), LOG_FILE_NAME.to_string()))
}

fn file_appender() -> Option<RollingFileAppender> {
    let (dir, name) = log_file_location()?;
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)
        .ok()
}

fn init_logging(debug: bool) -> Result<WorkerGuard> {
    let default_level = if debug { "termdialog=debug" } else { "termdialog=info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_level.into());

    // The terminal belongs to the dialog, so logs go to a file when possible
    let ((writer, guard), ansi) = match file_appender() {
        Some(appender) => (tracing_appender::non_blocking(appender), false),
        None => (tracing_appender::non_blocking(io::stderr()), true),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(ansi))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(guard)
}
