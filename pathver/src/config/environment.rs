//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHVER_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::version::Dialect;
use std::env;

/// Selects the version dialect (`strict` or `legacy`).
pub const DIALECT_ENV: &str = "PATHVER_DIALECT";

/// Selects the output format (`text` or `json`).
pub const OUTPUT_FORMAT_ENV: &str = "PATHVER_OUTPUT_FORMAT";

/// Sets the project root for `@/` paths.
pub const PROJECT_ROOT_ENV: &str = "PATHVER_PROJECT_ROOT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathver::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads the `PATHVER_*` environment variables and applies them with
    /// higher precedence than file-based configs. Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a dialect or output format value is not
    /// recognized.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(value) = Self::read(DIALECT_ENV) {
            config.dialect = Some(value.parse::<Dialect>().map_err(|message| {
                Error::Validation {
                    field: DIALECT_ENV.into(),
                    message,
                }
            })?);
        }

        if let Some(value) = Self::read(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(value.parse::<OutputFormat>().map_err(|message| {
                Error::Validation {
                    field: OUTPUT_FORMAT_ENV.into(),
                    message,
                }
            })?);
        }

        if let Some(value) = Self::read(PROJECT_ROOT_ENV) {
            config.project_root = Some(value);
        }

        Ok(())
    }

    /// Reads a variable, treating unset and empty the same.
    fn read(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }
}
