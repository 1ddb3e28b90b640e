//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading, option resolution and output helpers.

use crate::cli::DialectArg;
use crate::error::CliError;
use pathver::config::OutputFormat;
use pathver::{Config, ConfigBuilder, Dialect, UnixPath};
use serde::Serialize;
use std::env;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the directory holding the user config.
    pub config_dir: Option<PathBuf>,

    /// Output format requested on the command line.
    pub format: Option<OutputFormat>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. Project configuration files
/// 3. User configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.config_dir {
        builder = builder.with_data_dir(dir);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// The output format: command-line flag, then configuration.
pub fn output_format(global: &GlobalOptions, config: &Config) -> OutputFormat {
    global
        .format
        .unwrap_or_else(|| config.output_format_or_default())
}

/// The version dialect: command-line flag, then configuration.
pub fn dialect(flag: Option<DialectArg>, config: &Config) -> Dialect {
    flag.map_or_else(|| config.dialect_or_default(), Dialect::from)
}

/// The current working directory as an absolute path.
pub fn current_dir_path() -> Result<UnixPath, CliError> {
    let cwd = env::current_dir()?;
    let raw = cwd.to_str().ok_or_else(|| {
        CliError::InvalidArguments(format!(
            "working directory is not valid UTF-8: {}",
            cwd.display()
        ))
    })?;
    Ok(UnixPath::absolute(raw)?)
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
