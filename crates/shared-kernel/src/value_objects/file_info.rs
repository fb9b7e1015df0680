// crates/shared-kernel/src/value_objects/file_info.rs
use std::{
    borrow::Cow,
    fmt,
    ops::Deref,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Wrapper around `PathBuf` that guarantees UTF-8 displayability in higher layers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FilePath(PathBuf);

impl FilePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn to_path_buf(&self) -> PathBuf {
        self.0.clone()
    }

    pub fn display(&self) -> std::path::Display<'_> {
        self.0.display()
    }

    /// Returns a UTF-8 view suitable for logging and UI; non UTF-8 segments are lossy converted.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }
}

impl From<PathBuf> for FilePath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for FilePath {
    fn from(path: &Path) -> Self {
        Self::new(path.to_path_buf())
    }
}
impl From<&str> for FilePath {
    fn from(path: &str) -> Self {
        Self::new(PathBuf::from(path))
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
impl Deref for FilePath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileSize(u64);

impl FileSize {
    const KIB: u64 = 1 << 10;
    const MIB: u64 = 1 << 20;
    const GIB: u64 = 1 << 30;

    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Renders `"<n> bytes"`, or the unit-scaled form when `human` is set.
    pub fn render(self, human: bool) -> String {
        if human {
            self.to_human()
        } else {
            self.to_plain()
        }
    }

    pub fn to_plain(self) -> String {
        format!("{} bytes", self.0)
    }

    /// Two-decimal KB/MB/GB using base-2 thresholds; sizes under 1 KiB stay in bytes.
    pub fn to_human(self) -> String {
        let bytes = self.0;
        #[allow(clippy::cast_precision_loss)]
        let scaled = |unit: u64| bytes as f64 / unit as f64;

        if bytes >= Self::GIB {
            format!("{:.2} GB", scaled(Self::GIB))
        } else if bytes >= Self::MIB {
            format!("{:.2} MB", scaled(Self::MIB))
        } else if bytes >= Self::KIB {
            format!("{:.2} KB", scaled(Self::KIB))
        } else {
            self.to_plain()
        }
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}
impl From<FileSize> for u64 {
    fn from(size: FileSize) -> Self {
        size.bytes()
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain())
    }
}

/// Seconds since the Unix epoch, as reported by the status query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const CALENDAR_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    #[inline]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    #[inline]
    pub const fn secs(self) -> i64 {
        self.0
    }

    /// `None` when the value falls outside chrono's representable range.
    pub fn to_local(self) -> Option<DateTime<Local>> {
        DateTime::from_timestamp(self.0, 0).map(|utc| utc.with_timezone(&Local))
    }

    pub fn render(self, human: bool) -> String {
        if human {
            self.to_calendar()
        } else {
            self.0.to_string()
        }
    }

    /// Local calendar form; falls back to raw seconds when out of range.
    pub fn to_calendar(self) -> String {
        self.to_local().map_or_else(
            || self.0.to_string(),
            |dt| dt.format(Self::CALENDAR_FORMAT).to_string(),
        )
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Self::from_secs(secs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
