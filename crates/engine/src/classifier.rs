use crate::error::{EngineError, Result};
use crate::options::Target;
use std::path::Path;

/// Coarse type of a path, resolved through symbolic links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Does not exist, or the status query was refused.
    Missing,
    RegularFile,
    Directory,
    Other,
}

pub fn classify(path: &Path) -> PathClass {
    match std::fs::metadata(path) {
        Err(_) => PathClass::Missing,
        Ok(meta) if meta.is_file() => PathClass::RegularFile,
        Ok(meta) if meta.is_dir() => PathClass::Directory,
        Ok(_) => PathClass::Other,
    }
}

/// Checks that the target path matches its mode: `-i` needs a regular file, `-a` a directory.
///
/// # Errors
/// `PathNotFound` for missing or unstatable paths, otherwise `NotAFile` / `NotADirectory`.
pub fn validate_target(target: &Target) -> Result<()> {
    let path = target.path();
    match (target, classify(path)) {
        (_, PathClass::Missing) => Err(EngineError::PathNotFound(path.to_path_buf())),
        (Target::File(_), PathClass::RegularFile)
        | (Target::Directory(_), PathClass::Directory) => Ok(()),
        (Target::File(_), _) => Err(EngineError::NotAFile(path.to_path_buf())),
        (Target::Directory(_), _) => Err(EngineError::NotADirectory(path.to_path_buf())),
    }
}
