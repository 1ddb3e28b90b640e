//! Layered configuration assembly.
//!
//! [`ConfigBuilder`] discovers configuration files, validates each one,
//! merges them by precedence, then applies environment variables and
//! programmatic overrides on top.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builder for the effective [`Config`].
///
/// # Examples
///
/// ```
/// use pathver::config::{Config, ConfigBuilder};
/// use pathver::Dialect;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { dialect: Some(Dialect::Legacy), ..Default::default() })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.dialect, Some(Dialect::Legacy));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads files from the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory where project file discovery starts.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Sets the directory holding the user `config.yaml`.
    #[must_use]
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = Some(dir.to_path_buf());
        self
    }

    /// Skips configuration files entirely.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips `PATHVER_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies `config` last, above every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Builds the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, if
    /// an environment variable has an unrecognized value, or if any source
    /// fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.data_dir.as_deref())?;
            for source in &sources {
                log::debug!("validating config {}", source.path.display());
                ConfigValidator::validate(&source.config, source.is_project_file())?;
            }
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        // Environment and overrides may set project_root, so allow it here
        ConfigValidator::validate(&config, true)?;

        log::debug!(
            "effective config: dialect={}, output_format={}, project_root={}",
            config.dialect_or_default(),
            config.output_format_or_default(),
            config.project_root.as_deref().unwrap_or("<unset>")
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::DIALECT_ENV;
    use crate::config::loader::{LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
    use crate::config::schema::OutputFormat;
    use crate::error::Error;
    use crate::version::Dialect;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn isolated(project: &TempDir, data: &TempDir) -> ConfigBuilder {
        ConfigBuilder::new()
            .with_working_dir(project.path())
            .with_data_dir(data.path())
            .skip_env()
    }

    #[test]
    fn test_skip_everything_gives_default() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_precedence_of_files() {
        let project = TempDir::new().unwrap();
        let data = TempDir::new().unwrap();
        fs::write(
            data.path().join(USER_CONFIG_FILE),
            "dialect: legacy\noutput_format: json\n",
        )
        .unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "dialect: strict\n").unwrap();
        fs::write(project.path().join(LOCAL_CONFIG_FILE), "project_root: /work\n").unwrap();

        let config = isolated(&project, &data).build().unwrap();
        assert_eq!(config.dialect, Some(Dialect::Strict));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
        assert_eq!(config.project_root.as_deref(), Some("/work"));
    }

    #[test]
    fn test_user_config_cannot_set_project_root() {
        let project = TempDir::new().unwrap();
        let data = TempDir::new().unwrap();
        fs::write(data.path().join(USER_CONFIG_FILE), "project_root: /work\n").unwrap();

        let err = isolated(&project, &data).build().unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "project_root"));
    }

    #[test]
    fn test_overrides_win_over_files() {
        let project = TempDir::new().unwrap();
        let data = TempDir::new().unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "dialect: legacy\n").unwrap();

        let config = isolated(&project, &data)
            .with_config(Config {
                dialect: Some(Dialect::Strict),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.dialect, Some(Dialect::Strict));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                project_root: Some("relative/root".to_string()),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_environment_beats_files() {
        let project = TempDir::new().unwrap();
        let data = TempDir::new().unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "dialect: strict\n").unwrap();

        env::set_var(DIALECT_ENV, "legacy");
        let result = ConfigBuilder::new()
            .with_working_dir(project.path())
            .with_data_dir(data.path())
            .build();
        env::remove_var(DIALECT_ENV);

        assert_eq!(result.unwrap().dialect, Some(Dialect::Legacy));
    }
}
