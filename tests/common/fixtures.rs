use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use tempfile::TempDir;

pub fn inspect() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_inspect"));
    cmd.env_remove("INSPECT_LOG");
    cmd
}

/// A scratch directory with helpers for laying out files.
#[derive(Debug)]
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// `files` top-level files plus `dirs` subdirectories holding `per_dir` files each.
    pub fn tree(files: usize, dirs: usize, per_dir: usize) -> Self {
        let fx = Self::new();
        for i in 0..files {
            fx.file(&format!("file{i}.txt"), b"data");
        }
        for d in 0..dirs {
            fx.dir(&format!("sub{d}"));
            for k in 0..per_dir {
                fx.file(&format!("sub{d}/inner{k}.txt"), b"inner");
            }
        }
        fx
    }
}

/// Stdout of a successful run parsed as JSON.
pub fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout is valid JSON")
}

/// Record objects in a (possibly nested) scan array, in document order.
pub fn flatten_records(value: &serde_json::Value) -> Vec<&serde_json::Value> {
    let mut out = Vec::new();
    if let Some(items) = value.as_array() {
        for item in items {
            if item.is_array() {
                out.extend(flatten_records(item));
            } else {
                out.push(item);
            }
        }
    }
    out
}

pub fn is_rwx(perms: &str) -> bool {
    perms.len() == 9
        && perms
            .chars()
            .enumerate()
            .all(|(i, c)| c == '-' || c == ['r', 'w', 'x'][i % 3])
}
