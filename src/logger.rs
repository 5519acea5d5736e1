//! Logging bootstrap.
//!
//! Library code logs through the `log` facade. The binary calls [`init`]
//! once; when logging is enabled a `fern` dispatcher writes timestamped lines
//! to the log file in the data directory.

use anyhow::{Context, Result};
use log::LevelFilter;
use once_cell::sync::OnceCell;
use std::path::PathBuf;

use crate::config::{Config, LoggingConfig};

const LOG_FILE_NAME: &str = "gratitude.log";

static LOG_FILE: OnceCell<Option<PathBuf>> = OnceCell::new();

/// Install the global logger according to `config`.
///
/// Returns the log file path when file logging is active. Later calls return
/// the outcome of the first one without touching the installed logger.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    LOG_FILE
        .get_or_try_init(|| -> Result<Option<PathBuf>> {
            if !config.enabled {
                return Ok(None);
            }

            let path = get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }

            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} {} {}] {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .level(parse_level(&config.level))
                .level_for("sqlx", LevelFilter::Warn)
                .level_for("sea_orm", LevelFilter::Warn)
                .chain(
                    fern::log_file(&path)
                        .with_context(|| format!("Failed to open log file: {}", path.display()))?,
                )
                .apply()
                .context("Failed to install logger")?;

            log::info!("Logging to {} at level {}", path.display(), config.level);
            Ok(Some(path))
        })
        .cloned()
}

/// Path of the log file in the data directory
pub fn get_log_file_path() -> Result<PathBuf> {
    Ok(Config::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Map a configured level name onto a filter; unknown names mean `info`
pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}
