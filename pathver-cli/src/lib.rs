//! Library exports for pathver-cli.
//!
//! This module exports the CLI structure for use by tests and the build
//! script.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-export CLI for build script
pub use cli::Cli;
