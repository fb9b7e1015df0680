// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod value_objects;

pub use value_objects::{FileKind, FilePath, FileRecord, FileSize, Permissions, Timestamp};
