// crates/shared-kernel/src/value_objects/permissions.rs
use std::fmt;

use serde::{Serialize, Serializer};

/// The nine owner/group/other rwx bits of a file mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct Permissions(u32);

impl Permissions {
    const MASK: u32 = 0o777;

    /// (bit, glyph) pairs in display order.
    const BITS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];

    /// Keeps only the permission triads; type, setuid/setgid and sticky bits are dropped.
    pub const fn from_mode(mode: u32) -> Self {
        Self(mode & Self::MASK)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub fn to_rwx(self) -> String {
        Self::BITS
            .iter()
            .map(|&(bit, glyph)| if self.0 & bit == 0 { '-' } else { glyph })
            .collect()
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rwx())
    }
}

impl Serialize for Permissions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
