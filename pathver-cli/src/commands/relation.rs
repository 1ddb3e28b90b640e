//! Command to describe the relationship between two paths.

use crate::error::CliError;
use crate::utils::{load_configuration, output_format, print_json, GlobalOptions};
use clap::Args;
use pathver::config::OutputFormat;
use pathver::{PathRelationship, UnixPath};
use serde_json::json;

/// Describe whether one path is an ancestor or descendant of another.
#[derive(Args)]
pub struct RelationCommand {
    /// First path
    #[arg(value_name = "A")]
    pub first: String,

    /// Second path
    #[arg(value_name = "B")]
    pub second: String,
}

impl RelationCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let first = UnixPath::validate(&self.first)?;
        let second = UnixPath::validate(&self.second)?;

        let relationship = PathRelationship::between(&first, &second);
        let description = relationship.description(&first, &second);

        match output_format(global, &config) {
            OutputFormat::Text => {
                println!("{description}");
                Ok(())
            }
            OutputFormat::Json => print_json(&json!({
                "relationship": relationship.as_str(),
                "hierarchical": relationship.is_hierarchical(),
                "description": description,
            })),
        }
    }
}
