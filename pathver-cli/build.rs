//! Build script for pathver-cli.
//!
//! This script generates the man page at build time using `clap_mangen`.
//! The generated man page is placed in `OUT_DIR` for inclusion in release
//! builds.
//!
//! Build scripts cannot depend on the crate being built, so a minimal
//! command structure is declared here.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("pathver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect manifest paths and versions")
        .long_about(
            "Normalize UNIX paths syntactically and parse, compare and bump structured versions",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Directory holding the user config.yaml (default: ~/.pathver)")
                .value_name("PATH")
                .global(true)
                .env("PATHVER_CONFIG_DIR"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (overrides configuration)")
                .value_name("FORMAT")
                .value_parser(["text", "json"])
                .global(true),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Print the canonical form of paths")
                .long_about("Normalize absolute, relative and @/ paths without touching the disk"),
            Command::new("join")
                .about("Append relative paths or components to a base path"),
            Command::new("relative")
                .about("Print the relative path from a base to a path")
                .long_about("Compute the path leading from --to BASE to PATH; both must be absolute"),
            Command::new("relation")
                .about("Describe how two paths relate")
                .long_about("Report whether one path is an ancestor or descendant of the other"),
            Command::new("resolve")
                .about("Resolve a path to an absolute path")
                .long_about("Anchor @/ paths at the project root and relative paths at a base"),
            Command::new("version")
                .about("Parse a version and print its structure"),
            Command::new("compare")
                .about("Compare two versions")
                .long_about("Print <, = or >; with --assert, exit 1 when the outcome differs"),
            Command::new("sort")
                .about("Sort versions from lowest to highest"),
            Command::new("bump")
                .about("Print the next version")
                .long_about("Increment the fifth segment, or the minor/major one with --minor/--major"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a pathver configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathver.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
