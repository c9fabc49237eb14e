//! Logger initialization.
//!
//! This module provides a helper to initialize the logger with custom
//! formatting for applications embedding the store.

use std::io::Write;

use colored::Colorize;
use log::LevelFilter;

/// Initializes the logger with the specified level.
///
/// Configures `env_logger` with colored, human-readable formatting. The
/// logger reads from the `RUST_LOG` environment variable by default, but the
/// provided `level` parameter will override it.
///
/// Uses `try_init()` so repeated calls (for example from tests) fail
/// gracefully instead of panicking.
///
/// # Errors
///
/// Returns `log::SetLoggerError` if a logger was already installed.
pub fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();

    // Override with the caller-provided level (takes precedence over RUST_LOG)
    builder.filter_level(level);
    builder.filter_module("sqlx", LevelFilter::Info);
    builder.filter_module("location_log", level);

    builder.format(|buf, record| {
        let level = record.level();
        let colored_level = match level {
            log::Level::Error => level.to_string().red(),
            log::Level::Warn => level.to_string().yellow(),
            log::Level::Info => level.to_string().green(),
            log::Level::Debug => level.to_string().blue(),
            log::Level::Trace => level.to_string().purple(),
        };

        writeln!(
            buf,
            "{} [{}] {}",
            record.target().cyan(),
            colored_level,
            record.args()
        )
    });

    builder.try_init()
}
