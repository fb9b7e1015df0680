// crates/shared-kernel/src/value_objects/file_record.rs
use std::fs::Metadata;

use super::{FileKind, FilePath, FileSize, Permissions, Timestamp};

/// Snapshot of one filesystem entry, taken from a single status query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: FilePath,
    pub inode: u64,
    pub kind: FileKind,
    pub permissions: Permissions,
    pub link_count: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: FileSize,
    pub accessed: Timestamp,
    pub modified: Timestamp,
    pub changed: Timestamp,
}

impl FileRecord {
    #[cfg(unix)]
    pub fn from_metadata(path: impl Into<FilePath>, meta: &Metadata) -> Self {
        use std::os::unix::fs::MetadataExt;

        Self {
            path: path.into(),
            inode: meta.ino(),
            kind: FileKind::from(meta.file_type()),
            permissions: Permissions::from_mode(meta.mode()),
            link_count: meta.nlink(),
            uid: meta.uid(),
            gid: meta.gid(),
            size: FileSize::new(meta.size()),
            accessed: Timestamp::from_secs(meta.atime()),
            modified: Timestamp::from_secs(meta.mtime()),
            changed: Timestamp::from_secs(meta.ctime()),
        }
    }

    /// Without inode-level metadata only type, size and times are known.
    #[cfg(not(unix))]
    pub fn from_metadata(path: impl Into<FilePath>, meta: &Metadata) -> Self {
        let secs = |t: std::io::Result<std::time::SystemTime>| {
            t.ok()
                .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
                .and_then(|d| i64::try_from(d.as_secs()).ok())
                .map_or(Timestamp::from_secs(0), Timestamp::from_secs)
        };
        let mode = if meta.permissions().readonly() { 0o444 } else { 0o666 };

        Self {
            path: path.into(),
            inode: 0,
            kind: FileKind::from(meta.file_type()),
            permissions: Permissions::from_mode(mode),
            link_count: 1,
            uid: 0,
            gid: 0,
            size: FileSize::new(meta.len()),
            accessed: secs(meta.accessed()),
            modified: secs(meta.modified()),
            changed: secs(meta.modified()),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}
