//! Command to append paths to a base path.

use crate::error::CliError;
use crate::utils::{load_configuration, output_format, print_json, GlobalOptions};
use clap::Args;
use pathver::config::OutputFormat;
use pathver::UnixPath;

/// Append relative paths (or single components) to a base path.
#[derive(Args)]
pub struct JoinCommand {
    /// Base path of any kind
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Relative paths appended in order
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Treat each PATH as a single component (no '/' allowed)
    #[arg(long)]
    pub components: bool,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let base = UnixPath::validate(&self.base)?;

        let joined = if self.components {
            base.appending_components(&self.paths)?
        } else {
            self.paths.iter().try_fold(base, |path, raw| {
                let relative = UnixPath::relative(raw)?;
                path.appending(&relative)
            })?
        };

        log::debug!("joined {} onto {}: {joined}", self.paths.join(", "), self.base);

        match output_format(global, &config) {
            OutputFormat::Text => {
                println!("{joined}");
                Ok(())
            }
            OutputFormat::Json => print_json(&joined),
        }
    }
}
