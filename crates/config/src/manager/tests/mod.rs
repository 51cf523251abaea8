//! Tests for `ConfigManager`.
//!
//! Responsibilities:
//! - Test the load pipeline end to end against real files.
//! - Test reload policies and failure atomicity.
//! - Test reader dispatch and the format gate.
//! - Test environment overrides.
//!
//! Invariants:
//! - Environment tests use `serial_test` and `env_lock()` to prevent pollution.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Writes `content` to `dir/file` and returns the path.
pub fn write_config(dir: &Path, file: &str, content: &str) -> PathBuf {
    let path = dir.join(file);
    std::fs::write(&path, content).unwrap();
    path
}
