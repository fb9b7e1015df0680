//! Append-only event log behind `-l/--log`.
//!
//! Each line is `[YYYY-MM-DD HH:MM:SS] <message>` in local time. Lines above the
//! configured level are dropped. Verbose notes are also echoed to stderr.

use crate::config::Config;
use crate::error::{EngineError, Result};
use chrono::Local;
use log::{Level, LevelFilter};
use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::Path;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct EventLog {
    sink: Option<LineWriter<File>>,
    level: LevelFilter,
    verbose: bool,
}

impl EventLog {
    /// A log that writes nothing and echoes nothing.
    pub fn disabled() -> Self {
        Self {
            sink: None,
            level: LevelFilter::Off,
            verbose: false,
        }
    }

    /// Opens (creating if needed) the log file named by the config, in append mode.
    ///
    /// # Errors
    /// `LogOpen` if the file cannot be opened for appending.
    pub fn from_config(config: &Config) -> Result<Self> {
        let sink = config.log_path.as_deref().map(open_append).transpose()?;
        Ok(Self {
            sink,
            level: config.log_level,
            verbose: config.verbose,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn success(&mut self, path: &Path) {
        self.write(
            Level::Info,
            &format!("Successfully retrieved information for {}", path.display()),
        );
    }

    pub fn failure(&mut self, err: &EngineError) {
        self.write(Level::Error, &err.to_string());
    }

    /// Progress note shown only with `-v`: stderr plus the log file.
    pub fn note(&mut self, level: Level, message: &str) {
        if !self.verbose {
            return;
        }
        eprintln!("{message}");
        self.write(level, message);
    }

    fn write(&mut self, level: Level, message: &str) {
        if level > self.level {
            return;
        }
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        let stamp = Local::now().format(TIMESTAMP_FORMAT);
        if let Err(e) = writeln!(sink, "[{stamp}] {message}") {
            log::warn!("event log write failed: {e}");
        }
    }
}

impl Drop for EventLog {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.as_mut()
            && let Err(e) = sink.flush()
        {
            log::warn!("event log flush failed: {e}");
        }
    }
}

fn open_append(path: &Path) -> Result<LineWriter<File>> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(LineWriter::new)
        .map_err(|source| EngineError::LogOpen {
            path: path.to_path_buf(),
            source,
        })
}
