use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::event_log::EventLog;
use inspect_shared_kernel::FileRecord;
use log::Level;
use std::path::Path;

/// Queries the status of `path` (following symlinks) and snapshots it.
///
/// # Errors
/// `Stat` if the status query fails.
pub fn stat_record(path: &Path) -> Result<FileRecord> {
    let meta = std::fs::metadata(path).map_err(|source| EngineError::Stat {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(FileRecord::from_metadata(path, &meta))
}

/// Snapshots one entry and records the outcome in the event log.
///
/// Failures are returned, not logged: the caller decides whether they are
/// fatal and reports them once.
pub fn process_entry(path: &Path, config: &Config, log: &mut EventLog) -> Result<FileRecord> {
    let record = stat_record(path)?;
    if config.verbose {
        log.note(Level::Debug, &format!("Processing file: {}", path.display()));
    }
    log.success(path);
    Ok(record)
}
