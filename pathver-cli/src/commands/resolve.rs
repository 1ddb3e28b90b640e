//! Command to resolve paths to absolute paths.

use crate::error::CliError;
use crate::utils::{current_dir_path, load_configuration, output_format, print_json, GlobalOptions};
use clap::Args;
use pathver::config::OutputFormat;
use pathver::UnixPath;

/// Resolve a root-relative or relative path to an absolute path.
///
/// `@/` paths are anchored at the project root and relative paths at the
/// base directory. Nothing is looked up on disk.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path to resolve
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Project root for @/ paths (default: project_root from configuration)
    #[arg(long, value_name = "ROOT")]
    pub root: Option<String>,

    /// Directory relative paths are resolved against (default: current directory)
    #[arg(long, value_name = "BASE")]
    pub base: Option<String>,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = UnixPath::validate(&self.path)?;

        let base = match self.base {
            Some(ref raw) => UnixPath::absolute(raw)?,
            None => current_dir_path()?,
        };

        let root = match self.root {
            Some(ref raw) => Some(UnixPath::absolute(raw)?),
            None => config.project_root_path()?,
        };
        let root = match root {
            Some(root) => root,
            None if path.is_relative_to_root() => {
                return Err(CliError::InvalidArguments(format!(
                    "cannot resolve '{path}': no project root (pass --root or set project_root)"
                )));
            }
            // Unused for non-root-relative paths
            None => base.clone(),
        };

        let resolved = path.resolve(&root, &base)?;
        log::debug!("resolved {path} with root {root} and base {base}");

        match output_format(global, &config) {
            OutputFormat::Text => {
                println!("{resolved}");
                Ok(())
            }
            OutputFormat::Json => print_json(&resolved),
        }
    }
}
