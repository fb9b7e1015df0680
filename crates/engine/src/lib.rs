// crates/engine/src/lib.rs
pub mod classifier;
pub mod config;
pub mod error;
pub mod event_log;
pub mod formatter;
pub mod options;
pub mod processor;
pub mod walker;

use crate::config::Config;
use crate::error::Result;
use crate::event_log::EventLog;
use crate::options::Target;
use crate::walker::ScanResult;
use inspect_shared_kernel::FileRecord;

/// Outcome of one invocation, ready for presentation.
#[derive(Debug)]
pub enum Report {
    /// `-i`: exactly one record
    Single(FileRecord),
    /// `-a`: every visited entry plus the per-entry failures
    Scan(ScanResult),
}

impl Report {
    /// Renders the report in the configured format, without a trailing newline.
    ///
    /// # Errors
    /// Only JSON serialization can fail.
    pub fn render(&self, config: &Config) -> Result<String> {
        match self {
            Self::Single(record) => formatter::render(record, config),
            Self::Scan(scan) => scan.render(config),
        }
    }
}

/// Run the inspection described by `config`.
///
/// The target is classified first; a missing path or a mode mismatch fails
/// before anything is emitted.
///
/// # Errors
///
/// Returns an error for path-resolution failures, a failed status query in
/// file mode, or an unreadable top-level directory. Failures on individual
/// entries of a scan are collected in `ScanResult::errors` instead.
pub fn run(config: &Config, log: &mut EventLog) -> Result<Report> {
    classifier::validate_target(&config.target)?;

    match &config.target {
        Target::File(path) => processor::process_entry(path, config, log).map(Report::Single),
        Target::Directory(path) => walker::scan_directory(path, config, log).map(Report::Scan),
    }
}
