//! Command to compute the relative path between two absolute paths.

use crate::error::CliError;
use crate::utils::{load_configuration, output_format, print_json, GlobalOptions};
use clap::Args;
use pathver::config::OutputFormat;
use pathver::UnixPath;

/// Print the path that leads from BASE to PATH.
#[derive(Args)]
pub struct RelativeCommand {
    /// Absolute target path
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Absolute base path
    #[arg(long, value_name = "BASE")]
    pub to: String,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = UnixPath::validate(&self.path)?;
        let base = UnixPath::validate(&self.to)?;

        let relative = path.relative_to(&base)?;

        match output_format(global, &config) {
            OutputFormat::Text => {
                println!("{relative}");
                Ok(())
            }
            OutputFormat::Json => print_json(&relative),
        }
    }
}
