//! Tracing setup. The game owns the terminal, so interactive sessions log to a file.
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE: &str = "assembly-endgame.log";

/// Logs to `<log_dir>/assembly-endgame.log`. Keep the guard alive until exit
/// so buffered lines are flushed.
pub fn init_file(log_dir: Option<&Path>) -> Result<WorkerGuard>
{
    let dir = log_dir.map(Path::to_path_buf).unwrap_or_else(default_log_dir);
    let file_appender = open_log_file(&dir)?;
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(path = %dir.join(LOG_FILE).display(), "logging initialized");
    Ok(guard)
}

/// Logs to stderr, for the non-interactive commands.
pub fn init_stderr()
{
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(err) = result {
        tracing::debug!(%err, "keeping existing tracing subscriber");
    }
}

fn open_log_file(dir: &Path) -> Result<RollingFileAppender>
{
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(dir)
        .with_context(|| format!("failed to open log file {}", dir.join(LOG_FILE).display()))
}

fn env_filter() -> EnvFilter
{
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn default_log_dir() -> PathBuf
{
    ProjectDirs::from("", "", "assembly-endgame")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("assembly-endgame").join("logs"))
}
