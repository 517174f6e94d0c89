//! Shared integration-test harness for running the `permstable` binary
//! against documents in a temporary directory.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// A host document in its own temporary directory.
pub struct HostDocument {
    _dir: TempDir,
    /// Path of the document.
    pub path: PathBuf,
}

impl HostDocument {
    /// Creates `resource-table.mdx` with `contents`.
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("resource-table.mdx");
        fs::write(&path, contents).expect("failed to write host document");
        Self { _dir: dir, path }
    }

    /// Current contents of the document.
    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).expect("failed to read host document")
    }

    /// Path as a CLI argument.
    pub fn arg(&self) -> &str {
        self.path.to_str().expect("non-UTF-8 temp path")
    }
}

/// Runs the binary with `args`, isolated from the caller's environment.
pub fn run_permstable(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_permstable"))
        .args(args)
        .env_remove("PERMSTABLE_FILE")
        .env_remove("PERMSTABLE_LOG_LEVEL")
        .env_remove("PERMSTABLE_COLOR")
        .output()
        .expect("failed to run permstable")
}
