use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Labeled multi-line block per record
    #[default]
    Text,
    /// One JSON object per record, an array for directory scans
    Json,
}

/// What the invocation inspects. Exactly one mode per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// `-i`: a single regular file
    File(PathBuf),
    /// `-a`: every entry of a directory
    Directory(PathBuf),
}

impl Target {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(p) | Self::Directory(p) => p,
        }
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::Directory(PathBuf::from("."))
    }
}
