//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BumpCommand, CompareCommand, CompletionsCommand, JoinCommand, NormalizeCommand,
    RelationCommand, RelativeCommand, ResolveCommand, SortCommand, ValidateCommand,
    VersionCommand,
};
use clap::{Parser, Subcommand, ValueEnum};
use pathver::config::OutputFormat;
use pathver::Dialect;
use std::cmp::Ordering;
use std::path::PathBuf;

/// Command-line tool for inspecting manifest paths and versions.
#[derive(Parser)]
#[command(name = "pathver")]
#[command(version, about = "Inspect manifest paths and versions", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Directory holding the user config.yaml (default: ~/.pathver)
    #[arg(long, value_name = "PATH", global = true, env = "PATHVER_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Output format (overrides configuration)
    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the canonical form of paths
    Normalize(NormalizeCommand),

    /// Append relative paths or components to a base path
    Join(JoinCommand),

    /// Print the relative path from a base to a path
    Relative(RelativeCommand),

    /// Describe how two paths relate
    Relation(RelationCommand),

    /// Resolve a path to an absolute path
    Resolve(ResolveCommand),

    /// Parse a version and print its structure
    Version(VersionCommand),

    /// Compare two versions
    Compare(CompareCommand),

    /// Sort versions from lowest to highest
    Sort(SortCommand),

    /// Print the next version
    Bump(BumpCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

/// Output format accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Plain text
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Version dialect accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DialectArg {
    /// Split labels once; compare pre-release and build metadata
    Strict,
    /// Split labels on every separator; ignore labels when comparing
    Legacy,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Strict => Self::Strict,
            DialectArg::Legacy => Self::Legacy,
        }
    }
}

/// Expected outcome for `compare --assert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExpectedOrdering {
    /// First version is lower
    Lt,
    /// Versions are equal
    Eq,
    /// First version is higher
    Gt,
}

impl ExpectedOrdering {
    /// The `Ordering` this expectation stands for.
    pub fn ordering(self) -> Ordering {
        match self {
            Self::Lt => Ordering::Less,
            Self::Eq => Ordering::Equal,
            Self::Gt => Ordering::Greater,
        }
    }
}
