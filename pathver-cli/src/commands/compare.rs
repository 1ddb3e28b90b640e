//! Command to compare two versions.

use crate::cli::{DialectArg, ExpectedOrdering};
use crate::error::CliError;
use crate::utils::{dialect, load_configuration, output_format, print_json, GlobalOptions};
use clap::Args;
use pathver::config::OutputFormat;
use pathver::Version;
use serde_json::json;
use std::cmp::Ordering;

/// Compare two versions and print `<`, `=` or `>`.
#[derive(Args)]
pub struct CompareCommand {
    /// First version
    #[arg(value_name = "A", allow_hyphen_values = true)]
    pub first: String,

    /// Second version
    #[arg(value_name = "B", allow_hyphen_values = true)]
    pub second: String,

    /// Version dialect (default: from configuration)
    #[arg(long, value_enum)]
    pub dialect: Option<DialectArg>,

    /// Fail with exit code 1 unless the comparison has this outcome
    #[arg(long = "assert", value_enum, value_name = "OUTCOME")]
    pub expected: Option<ExpectedOrdering>,
}

/// Symbol printed for an ordering.
pub fn symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

impl CompareCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let dialect = dialect(self.dialect, &config);
        let first = Version::parse_with(&self.first, dialect)?;
        let second = Version::parse_with(&self.second, dialect)?;

        let ordering = first.cmp_with(&second, dialect);

        match output_format(global, &config) {
            OutputFormat::Text => println!("{}", symbol(ordering)),
            OutputFormat::Json => print_json(&json!({
                "first": first,
                "second": second,
                "dialect": dialect,
                "ordering": symbol(ordering),
            }))?,
        }

        if let Some(expected) = self.expected {
            if expected.ordering() != ordering {
                return Err(CliError::SemanticFailure(format!(
                    "expected {} {} {}, found {} {} {}",
                    self.first,
                    symbol(expected.ordering()),
                    self.second,
                    self.first,
                    symbol(ordering),
                    self.second
                )));
            }
        }

        Ok(())
    }
}
