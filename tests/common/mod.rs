//! Shared helpers for gridfill integration tests.

use std::path::PathBuf;

use gridfill::Config;

/// Write an input fixture file into the given temp directory.
pub fn write_input(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// A default configuration with the given diagonal setting.
pub fn config(use_diagonals: bool) -> Config {
    let mut config = Config::default();
    config.interpolation.use_diagonals = use_diagonals;
    config
}
