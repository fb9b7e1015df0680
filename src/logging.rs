// src/logging.rs
//! Developer diagnostics on stderr via the `log` facade.
//!
//! The level comes from `INSPECT_LOG` (`error`, `warn`, `info`, `debug`,
//! `trace`, `off`) and defaults to `warn`. It is fixed once at startup.

use std::sync::OnceLock;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub const LOG_ENV: &str = "INSPECT_LOG";

pub struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            eprintln!(
                "{} {} [{}] {}",
                timestamp,
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

pub fn level_from_env() -> LevelFilter {
    parse_level(std::env::var(LOG_ENV).ok().as_deref())
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(Level::Warn.to_level_filter())
}

/// Installs the stderr logger. Later calls are no-ops.
///
/// # Errors
/// Fails if another logger was installed first.
pub fn init() -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

    if LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = LOGGER.get_or_init(|| StderrLogger {
        level: level_from_env(),
    });
    log::set_logger(logger)?;
    log::set_max_level(logger.level);
    Ok(())
}
