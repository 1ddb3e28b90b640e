//! Configuration validation.
//!
//! This module checks field values that the YAML schema alone cannot
//! constrain.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::UnixPath;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathver::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config, false).unwrap();
///
/// let rooted = Config { project_root: Some("/repo".into()), ..Default::default() };
/// assert!(ConfigValidator::validate(&rooted, false).is_err());
/// assert!(ConfigValidator::validate(&rooted, true).is_ok());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The configuration to validate
    /// * `is_project_file` - Whether this is from a `pathver.yaml` or
    ///   `pathver.local.yaml` file (affects which fields are allowed)
    ///
    /// # Errors
    ///
    /// Returns validation errors for invalid configurations.
    pub fn validate(config: &Config, is_project_file: bool) -> Result<()> {
        if let Some(ref root) = config.project_root {
            if !is_project_file {
                return Err(Error::Validation {
                    field: "project_root".into(),
                    message: "project_root is only valid in project configuration files".into(),
                });
            }
            Self::validate_project_root(root)?;
        }

        Ok(())
    }

    /// The project root must be a non-empty absolute path.
    fn validate_project_root(root: &str) -> Result<()> {
        if root.trim().is_empty() {
            return Err(Error::Validation {
                field: "project_root".into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        UnixPath::absolute(root).map_err(|err| Error::Validation {
            field: "project_root".into(),
            message: err.to_string(),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::Dialect;

    fn with_root(root: &str) -> Config {
        Config {
            project_root: Some(root.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config_valid() {
        assert!(ConfigValidator::validate(&Config::default(), false).is_ok());
        assert!(ConfigValidator::validate(&Config::default(), true).is_ok());
    }

    #[test]
    fn test_dialect_allowed_anywhere() {
        let config = Config {
            dialect: Some(Dialect::Legacy),
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config, false).is_ok());
    }

    #[test]
    fn test_project_root_only_in_project_files() {
        let err = ConfigValidator::validate(&with_root("/repo"), false).unwrap_err();
        assert!(err.to_string().contains("project_root"));
    }

    #[test]
    fn test_project_root_must_be_absolute() {
        assert!(ConfigValidator::validate(&with_root("repo"), true).is_err());
        assert!(ConfigValidator::validate(&with_root("~/repo"), true).is_err());
        assert!(ConfigValidator::validate(&with_root("@/repo"), true).is_err());
        assert!(ConfigValidator::validate(&with_root("   "), true).is_err());
        assert!(ConfigValidator::validate(&with_root("/repo/../src"), true).is_ok());
    }
}
