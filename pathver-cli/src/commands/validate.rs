//! Command to validate a pathver configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathver::config::loader::{LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE};
use pathver::config::{ConfigLoader, ConfigValidator};
use pathver::Error as LibError;
use std::path::PathBuf;

/// Validate a pathver configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Check file exists
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        // 2. Determine file type (project file vs user config.yaml)
        let filename = self
            .config_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("");
        let is_project_file = filename == PROJECT_CONFIG_FILE || filename == LOCAL_CONFIG_FILE;

        // 3. Parse the file
        let config = match ConfigLoader::load_file(&self.config_path) {
            Ok(config) => config,
            Err(LibError::Io(e)) => return Err(CliError::Io(e)),
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        // 4. Validate the configuration
        match ConfigValidator::validate(&config, is_project_file) {
            Ok(()) => {
                println!("Configuration is valid");
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}
