//! Common test utilities for integration tests.
//!
//! This module provides small constructors and fixture helpers shared by
//! the pathver integration suites.

use std::fs;
use std::path::{Path, PathBuf};

use pathver::{Dialect, UnixPath, Version};

/// Parses any path kind, panicking on invalid input.
#[allow(dead_code)]
pub fn path(raw: &str) -> UnixPath {
    UnixPath::validate(raw).unwrap_or_else(|e| panic!("invalid test path {raw:?}: {e}"))
}

/// Parses a strict version, panicking on invalid input.
#[allow(dead_code)]
pub fn version(raw: &str) -> Version {
    Version::parse(raw).unwrap_or_else(|e| panic!("invalid test version {raw:?}: {e}"))
}

/// Parses a legacy version, panicking on invalid input.
#[allow(dead_code)]
pub fn legacy_version(raw: &str) -> Version {
    Version::parse_with(raw, Dialect::Legacy)
        .unwrap_or_else(|e| panic!("invalid legacy version {raw:?}: {e}"))
}

/// Writes a configuration file into `dir` and returns its path.
#[allow(dead_code)]
pub fn write_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}
