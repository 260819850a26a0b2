//! Common test utilities

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary working directory for config tests
pub fn create_test_dir() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().to_path_buf();
    (temp_dir, dir)
}

/// Write an intcalc.toml with the given contents
pub fn write_config(dir: &PathBuf, contents: &str) {
    fs::write(dir.join("intcalc.toml"), contents).expect("Failed to write config file");
}
