//! Main entry point for the pathver CLI.
//!
//! This is the command-line interface for the pathver library. It provides
//! commands for working with manifest paths and versions:
//! - `normalize`, `join`, `relative`, `relation`, `resolve`: path handling
//! - `version`, `compare`, `sort`, `bump`: version handling
//! - `validate`: check a configuration file

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity and route the `log` facade to it
    let logger = pathver::init_logger(cli.verbose, cli.quiet);
    logger.install();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
        format: cli.format.map(Into::into),
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Relative(cmd) => cmd.execute(&global),
        cli::Command::Relation(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Version(cmd) => cmd.execute(&global),
        cli::Command::Compare(cmd) => cmd.execute(&global),
        cli::Command::Sort(cmd) => cmd.execute(&global),
        cli::Command::Bump(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            logger.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
