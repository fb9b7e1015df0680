pub mod file_info;
pub mod file_kind;
pub mod file_record;
pub mod permissions;

pub use file_info::{FilePath, FileSize, Timestamp};
pub use file_kind::FileKind;
pub use file_record::FileRecord;
pub use permissions::Permissions;
