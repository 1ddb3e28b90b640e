//! Command to sort versions.

use crate::cli::DialectArg;
use crate::error::CliError;
use crate::utils::{dialect, load_configuration, output_format, print_json, GlobalOptions};
use clap::Args;
use pathver::config::OutputFormat;
use pathver::{Dialect, Version};

/// Sort versions from lowest to highest.
#[derive(Args)]
pub struct SortCommand {
    /// Versions to sort
    #[arg(value_name = "VERSION", required = true, allow_hyphen_values = true)]
    pub versions: Vec<String>,

    /// Sort from highest to lowest
    #[arg(long)]
    pub reverse: bool,

    /// Version dialect (default: from configuration)
    #[arg(long, value_enum)]
    pub dialect: Option<DialectArg>,
}

/// Parses and sorts `raw`, keeping input order among equal versions.
pub fn sort_versions(
    raw: &[String],
    dialect: Dialect,
    reverse: bool,
) -> Result<Vec<Version>, CliError> {
    let mut versions = raw
        .iter()
        .map(|v| Version::parse_with(v, dialect))
        .collect::<Result<Vec<_>, _>>()?;

    versions.sort_by(|a, b| {
        let ordering = a.cmp_with(b, dialect);
        if reverse {
            ordering.reverse()
        } else {
            ordering
        }
    });
    Ok(versions)
}

impl SortCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let dialect = dialect(self.dialect, &config);
        let versions = sort_versions(&self.versions, dialect, self.reverse)?;

        match output_format(global, &config) {
            OutputFormat::Text => {
                for version in &versions {
                    println!("{}", version.as_str());
                }
                Ok(())
            }
            OutputFormat::Json => print_json(&versions),
        }
    }
}
