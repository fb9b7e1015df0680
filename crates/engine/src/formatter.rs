//! Rendering of a single [`FileRecord`] as a labeled text block or a JSON object.

use crate::config::Config;
use crate::error::Result;
use crate::options::OutputFormat;
use inspect_shared_kernel::{FileKind, FileRecord, Permissions};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Write;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// JSON shape of one record: `{"filePath": .., "inode": {..}}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordView<'a> {
    file_path: Cow<'a, str>,
    inode: InodeView,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InodeView {
    number: u64,
    #[serde(rename = "type")]
    kind: FileKind,
    permissions: Permissions,
    link_count: u64,
    uid: u32,
    gid: u32,
    size: String,
    access_time: String,
    modification_time: String,
    status_change_time: String,
}

impl<'a> RecordView<'a> {
    pub fn new(record: &'a FileRecord, human: bool) -> Self {
        Self {
            file_path: record.path.to_string_lossy(),
            inode: InodeView {
                number: record.inode,
                kind: record.kind,
                permissions: record.permissions,
                link_count: record.link_count,
                uid: record.uid,
                gid: record.gid,
                size: record.size.render(human),
                access_time: record.accessed.render(human),
                modification_time: record.modified.render(human),
                status_change_time: record.changed.render(human),
            },
        }
    }
}

/// Renders one record in the configured format, without a trailing newline.
///
/// # Errors
/// Only JSON serialization can fail.
pub fn render(record: &FileRecord, config: &Config) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(render_text(record, config.human, config.color)),
        OutputFormat::Json => render_json(record, config.human),
    }
}

/// Pretty-printed JSON object; never colored so the output stays parseable.
pub fn render_json(record: &FileRecord, human: bool) -> Result<String> {
    Ok(serde_json::to_string_pretty(&RecordView::new(record, human))?)
}

pub fn render_text(record: &FileRecord, human: bool, color: bool) -> String {
    let paint = |code: &'static str| if color { code } else { "" };
    let reset = paint(RESET);

    let fields: [(&str, &str, String); 10] = [
        ("File Inode", YELLOW, record.inode.to_string()),
        ("File Type", GREEN, record.kind.to_string()),
        ("Permissions", MAGENTA, record.permissions.to_rwx()),
        ("Number of Hard Links", BLUE, record.link_count.to_string()),
        ("Owner UID", RED, record.uid.to_string()),
        ("Group GID", RED, record.gid.to_string()),
        ("File Size", YELLOW, record.size.render(human)),
        ("Last Access Time", GREEN, record.accessed.render(human)),
        ("Last Modification Time", GREEN, record.modified.render(human)),
        ("Last Status Change Time", GREEN, record.changed.render(human)),
    ];

    let mut out = format!("{}Information for {}:{reset}", paint(CYAN), record.path);
    for (label, code, value) in fields {
        // Writing to a String cannot fail.
        let _ = write!(out, "\n{label}: {}{value}{reset}", paint(code));
    }
    out
}
