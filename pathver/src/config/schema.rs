//! Configuration schema definitions.
//!
//! This module defines the configuration structure for pathver: the version
//! dialect, the output format of the command-line tool and the project root
//! used to anchor `@/` paths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PathError;
use crate::path::UnixPath;
use crate::version::Dialect;

/// Complete configuration structure.
///
/// Every field is optional so that configuration files can be layered; see
/// [`ConfigMerger`](crate::config::ConfigMerger).
///
/// # Examples
///
/// ```
/// use pathver::config::{Config, OutputFormat};
/// use pathver::Dialect;
///
/// let config: Config = serde_yaml::from_str(
///     "dialect: legacy\noutput_format: json\nproject_root: /repo\n",
/// ).unwrap();
///
/// assert_eq!(config.dialect, Some(Dialect::Legacy));
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// assert_eq!(config.project_root.as_deref(), Some("/repo"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Version dialect used for parsing and comparison.
    pub dialect: Option<Dialect>,

    /// Output format for command results.
    pub output_format: Option<OutputFormat>,

    /// Absolute path that `@/` paths are resolved against.
    pub project_root: Option<String>,
}

impl Config {
    /// The configured dialect, or the default.
    #[must_use]
    pub fn dialect_or_default(&self) -> Dialect {
        self.dialect.unwrap_or_default()
    }

    /// The configured output format, or the default.
    #[must_use]
    pub fn output_format_or_default(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// The project root as a validated absolute path, if configured.
    ///
    /// # Errors
    ///
    /// Returns an error if `project_root` is set but is not absolute.
    pub fn project_root_path(&self) -> Result<Option<UnixPath>, PathError> {
        self.project_root
            .as_deref()
            .map(UnixPath::absolute)
            .transpose()
    }
}

/// Output format for command results.
///
/// # Examples
///
/// ```
/// use pathver::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one result per line.
    #[default]
    Text,
    /// JSON output format.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}
