//! Depth-first, pre-order directory walk.
//!
//! Enumeration is delegated to `ignore::WalkBuilder` with every ignore filter
//! turned off. Open directories are tracked on an explicit stack of frames,
//! so nesting depth never grows the call stack.

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::event_log::EventLog;
use crate::formatter::{self, RecordView};
use crate::options::OutputFormat;
use crate::processor;
use ignore::WalkBuilder;
use inspect_shared_kernel::FileRecord;
use log::Level;
use serde::Serialize;
use std::error::Error as _;
use std::io;
use std::path::{Path, PathBuf};

/// One emitted entry. `children` is `Some` for directories descended into
/// (recursive mode), possibly empty when the directory could not be read.
#[derive(Debug, Clone)]
pub struct ScanNode {
    pub record: FileRecord,
    pub children: Option<Vec<ScanNode>>,
}

#[derive(Debug, Default)]
pub struct ScanResult {
    pub entries: Vec<ScanNode>,
    /// Per-entry failures, in the order they were met. Already logged.
    pub errors: Vec<(PathBuf, EngineError)>,
}

impl ScanResult {
    /// Total number of records, nested ones included.
    pub fn visited(&self) -> usize {
        fn count(nodes: &[ScanNode]) -> usize {
            nodes
                .iter()
                .map(|n| 1 + n.children.as_deref().map_or(0, count))
                .sum()
        }
        count(&self.entries)
    }

    /// Records in pre-order.
    pub fn records(&self) -> Vec<&FileRecord> {
        fn collect<'a>(nodes: &'a [ScanNode], out: &mut Vec<&'a FileRecord>) {
            for node in nodes {
                out.push(&node.record);
                if let Some(children) = &node.children {
                    collect(children, out);
                }
            }
        }
        let mut out = Vec::new();
        collect(&self.entries, &mut out);
        out
    }

    /// Renders the whole scan in the configured format, without a trailing newline.
    ///
    /// # Errors
    /// Only JSON serialization can fail.
    pub fn render(&self, config: &Config) -> Result<String> {
        match config.format {
            OutputFormat::Json => {
                let items = json_items(&self.entries, config.human);
                Ok(serde_json::to_string_pretty(&items)?)
            }
            OutputFormat::Text => Ok(self
                .records()
                .into_iter()
                .map(|r| formatter::render_text(r, config.human, config.color))
                .collect::<Vec<_>>()
                .join("\n\n")),
        }
    }
}

/// A directory's record is followed by an array of its contents.
#[derive(Serialize)]
#[serde(untagged)]
enum JsonItem<'a> {
    Record(RecordView<'a>),
    Nested(Vec<JsonItem<'a>>),
}

fn json_items(nodes: &[ScanNode], human: bool) -> Vec<JsonItem<'_>> {
    let mut items = Vec::with_capacity(nodes.len());
    for node in nodes {
        items.push(JsonItem::Record(RecordView::new(&node.record, human)));
        if let Some(children) = &node.children {
            items.push(JsonItem::Nested(json_items(children, human)));
        }
    }
    items
}

/// Entries emitted so far for one open directory.
struct Frame {
    dir: PathBuf,
    nodes: Vec<ScanNode>,
}

impl Frame {
    fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            nodes: Vec::new(),
        }
    }
}

/// Pops the innermost frame and hangs its entries under the directory node
/// that opened it (always the parent frame's last node in pre-order).
fn close_frame(stack: &mut Vec<Frame>) {
    let Some(frame) = stack.pop() else {
        return;
    };
    if let Some(dir_node) = stack.last_mut().and_then(|parent| parent.nodes.last_mut()) {
        dir_node.children = Some(frame.nodes);
    }
}

/// Walks `root`, snapshotting every entry except `.` and `..`.
///
/// Per-entry failures are logged, collected in [`ScanResult::errors`] and
/// skipped; a nested directory that cannot be read contributes no entries.
///
/// # Errors
/// `ReadDir` if `root` itself cannot be opened; nothing is emitted then.
pub fn scan_directory(root: &Path, config: &Config, log: &mut EventLog) -> Result<ScanResult> {
    // Probe the root so a top-level failure aborts before any output.
    std::fs::read_dir(root).map_err(|source| EngineError::ReadDir {
        path: root.to_path_buf(),
        source,
    })?;

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(true)
        .max_depth(if config.recursive { None } else { Some(1) });
    if config.sort_entries {
        builder.sort_by_file_name(|a, b| a.cmp(b));
    }

    let mut result = ScanResult::default();
    let mut stack = vec![Frame::new(root.to_path_buf())];
    log.note(Level::Info, &format!("Scanning directory: {}", root.display()));

    for item in builder.build() {
        let entry = match item {
            Ok(entry) => entry,
            Err(err) => {
                // A link back to an ancestor still has a readable status; emit it as a leaf.
                if let Some(child) = loop_child(&err).map(Path::to_path_buf) {
                    let depth = child.strip_prefix(root).map_or(1, |rel| rel.components().count());
                    if settle(&mut stack, depth) {
                        match processor::process_entry(&child, config, log) {
                            Ok(record) => push_node(&mut stack, record),
                            Err(e) => report(&mut result, log, child, e),
                        }
                    }
                    continue;
                }
                let fallback = stack.last().map(|f| f.dir.clone()).unwrap_or_default();
                let (path, err) = walk_error(err, fallback);
                report(&mut result, log, path, err);
                continue;
            }
        };

        let depth = entry.depth();
        if depth == 0 || !settle(&mut stack, depth) {
            continue;
        }

        let path = entry.path();
        let record = match processor::process_entry(path, config, log) {
            Ok(record) => record,
            Err(err) => {
                report(&mut result, log, path.to_path_buf(), err);
                continue;
            }
        };

        let descend = config.recursive && record.is_dir();
        push_node(&mut stack, record);
        if descend {
            log.note(Level::Info, &format!("Scanning directory: {}", path.display()));
            stack.push(Frame::new(path.to_path_buf()));
        }
    }

    while stack.len() > 1 {
        close_frame(&mut stack);
    }
    result.entries = stack.pop().map(|f| f.nodes).unwrap_or_default();
    log::debug!(
        "scan of {} finished: {} records, {} errors",
        root.display(),
        result.visited(),
        result.errors.len()
    );
    Ok(result)
}

/// Closes frames deeper than `depth`. False when the entry's parent directory
/// was never emitted, so there is no frame for it to land in.
fn settle(stack: &mut Vec<Frame>, depth: usize) -> bool {
    if depth > stack.len() {
        return false;
    }
    while stack.len() > depth {
        close_frame(stack);
    }
    true
}

fn push_node(stack: &mut [Frame], record: FileRecord) {
    if let Some(frame) = stack.last_mut() {
        frame.nodes.push(ScanNode {
            record,
            children: None,
        });
    }
}

fn report(result: &mut ScanResult, log: &mut EventLog, path: PathBuf, err: EngineError) {
    log.failure(&err);
    result.errors.push((path, err));
}

fn loop_child(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::Loop { child, .. } => Some(child),
        ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithPath { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => loop_child(err),
        _ => None,
    }
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::Loop { child, .. } => Some(child),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}

/// Maps a walk failure onto the status or directory-open error it stands for.
///
/// A path that is still a directory failed to open; anything else failed its
/// status query. Errors without an io cause stay `Walk`.
fn walk_error(err: ignore::Error, fallback: PathBuf) -> (PathBuf, EngineError) {
    let path = error_path(&err).map_or(fallback, Path::to_path_buf);
    let Some(source) = err.io_error().map(os_error) else {
        return (path, EngineError::Walk(err));
    };
    let err = if path.is_dir() {
        EngineError::ReadDir {
            path: path.clone(),
            source,
        }
    } else {
        EngineError::Stat {
            path: path.clone(),
            source,
        }
    };
    (path, err)
}

/// walkdir prefixes the OS error with its own path; keep only the OS error.
fn os_error(err: &io::Error) -> io::Error {
    let raw = err
        .get_ref()
        .and_then(|inner| inner.source())
        .and_then(|cause| cause.downcast_ref::<io::Error>())
        .and_then(io::Error::raw_os_error)
        .or_else(|| err.raw_os_error());
    raw.map_or_else(
        || io::Error::new(err.kind(), err.to_string()),
        io::Error::from_raw_os_error,
    )
}
