// crates/shared-kernel/src/value_objects/file_kind.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// File type as reported by the status query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    #[serde(rename = "regular file")]
    Regular,
    #[serde(rename = "directory")]
    Directory,
    #[serde(rename = "symbolic link")]
    Symlink,
    #[serde(rename = "character device")]
    CharDevice,
    #[serde(rename = "block device")]
    BlockDevice,
    #[serde(rename = "FIFO (named pipe)")]
    Fifo,
    #[serde(rename = "socket")]
    Socket,
    #[serde(rename = "unknown")]
    Unknown,
}

impl FileKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular file",
            Self::Directory => "directory",
            Self::Symlink => "symbolic link",
            Self::CharDevice => "character device",
            Self::BlockDevice => "block device",
            Self::Fifo => "FIFO (named pipe)",
            Self::Socket => "socket",
            Self::Unknown => "unknown",
        }
    }

    pub const fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}

#[cfg(unix)]
impl From<std::fs::FileType> for FileKind {
    fn from(ft: std::fs::FileType) -> Self {
        use std::os::unix::fs::FileTypeExt;

        if ft.is_file() {
            Self::Regular
        } else if ft.is_dir() {
            Self::Directory
        } else if ft.is_symlink() {
            Self::Symlink
        } else if ft.is_char_device() {
            Self::CharDevice
        } else if ft.is_block_device() {
            Self::BlockDevice
        } else if ft.is_fifo() {
            Self::Fifo
        } else if ft.is_socket() {
            Self::Socket
        } else {
            Self::Unknown
        }
    }
}

#[cfg(not(unix))]
impl From<std::fs::FileType> for FileKind {
    fn from(ft: std::fs::FileType) -> Self {
        if ft.is_file() {
            Self::Regular
        } else if ft.is_dir() {
            Self::Directory
        } else if ft.is_symlink() {
            Self::Symlink
        } else {
            Self::Unknown
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
