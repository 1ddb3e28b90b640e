//! Command to print the canonical form of paths.

use crate::error::CliError;
use crate::utils::{load_configuration, output_format, print_json, GlobalOptions};
use clap::Args;
use pathver::config::OutputFormat;
use pathver::UnixPath;
use serde::Serialize;

/// Print the canonical form of one or more paths.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Paths to normalize (absolute, relative or @/-prefixed)
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

/// Structure of a path as shown by `--format json`.
#[derive(Debug, Serialize)]
pub struct PathReport<'a> {
    /// Canonical string.
    pub path: &'a str,
    /// `absolute`, `relative` or `relative-to-root`.
    pub kind: &'static str,
    /// Path components, with a leading `/` or `@` marker.
    pub components: Vec<&'a str>,
    /// Directory part.
    pub dirname: String,
    /// Last component.
    pub basename: &'a str,
    /// Extension without the dot, if any.
    pub extension: Option<&'a str>,
}

impl<'a> PathReport<'a> {
    /// Describes `path`.
    pub fn new(path: &'a UnixPath) -> Self {
        Self {
            path: path.as_str(),
            kind: path.kind().as_str(),
            components: path.components(),
            dirname: path.dirname(),
            basename: path.basename(),
            extension: path.extension(),
        }
    }
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let paths = self
            .paths
            .iter()
            .map(|raw| UnixPath::validate(raw))
            .collect::<Result<Vec<_>, _>>()?;

        match output_format(global, &config) {
            OutputFormat::Text => {
                for path in &paths {
                    println!("{path}");
                }
                Ok(())
            }
            OutputFormat::Json => {
                let reports: Vec<PathReport<'_>> = paths.iter().map(PathReport::new).collect();
                print_json(&reports)
            }
        }
    }
}
