//! Command to print the next version.

use crate::error::CliError;
use crate::utils::{load_configuration, output_format, print_json, GlobalOptions};
use clap::Args;
use pathver::config::OutputFormat;
use pathver::Version;

/// Print the version that follows VERSION.
///
/// By default the fifth segment is incremented.
#[derive(Args)]
pub struct BumpCommand {
    /// Version to bump
    #[arg(value_name = "VERSION", allow_hyphen_values = true)]
    pub version: String,

    /// Increment the minor segment and reset the lower ones
    #[arg(long, conflicts_with = "major")]
    pub minor: bool,

    /// Increment the major segment and reset the lower ones
    #[arg(long)]
    pub major: bool,
}

impl BumpCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let version = Version::parse_with(&self.version, config.dialect_or_default())?;

        let bumped = if self.major {
            version.bump_major()
        } else if self.minor {
            version.bump_minor()
        } else {
            version.bump()
        }
        .ok_or_else(|| {
            CliError::InvalidArguments(format!("no version follows {version}"))
        })?;

        match output_format(global, &config) {
            OutputFormat::Text => {
                println!("{bumped}");
                Ok(())
            }
            OutputFormat::Json => print_json(&bumped),
        }
    }
}
