//! Command to parse a version and show its structure.

use crate::cli::DialectArg;
use crate::error::CliError;
use crate::utils::{dialect, load_configuration, output_format, print_json, GlobalOptions};
use clap::Args;
use pathver::config::OutputFormat;
use pathver::Version;
use serde::Serialize;

/// Parse a version and print its segments and labels.
#[derive(Args)]
pub struct VersionCommand {
    /// Version string
    #[arg(value_name = "VERSION", allow_hyphen_values = true)]
    pub version: String,

    /// Version dialect (default: from configuration)
    #[arg(long, value_enum)]
    pub dialect: Option<DialectArg>,
}

/// Structure of a version as shown by this command.
#[derive(Debug, Serialize)]
pub struct VersionReport<'a> {
    /// Original input.
    pub value: &'a str,
    /// Canonical rendering.
    pub canonical: String,
    /// First segment.
    pub major: u64,
    /// Second segment; `null` when not numeric.
    pub minor: Option<u64>,
    /// Third segment; `null` when not numeric.
    pub patch: Option<u64>,
    /// Fourth segment; `null` when not numeric.
    pub segment4: Option<u64>,
    /// Fifth segment; `null` when not numeric.
    pub segment5: Option<u64>,
    /// Pre-release label.
    pub pre_release: Option<&'a str>,
    /// Build metadata label.
    pub build_metadata: Option<&'a str>,
    /// Tokens kept from the first non-numeric segment onwards.
    pub pre_release_segments: &'a [String],
    /// Whether every segment is numeric.
    pub clean: bool,
}

impl<'a> VersionReport<'a> {
    /// Describes `version`.
    pub fn new(version: &'a Version) -> Self {
        Self {
            value: version.as_str(),
            canonical: version.to_string(),
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            segment4: version.segment4(),
            segment5: version.segment5(),
            pre_release: version.pre_release(),
            build_metadata: version.build_metadata(),
            pre_release_segments: version.pre_release_segments(),
            clean: version.is_clean(),
        }
    }
}

/// Renders an optional segment for text output.
fn segment(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl VersionCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let dialect = dialect(self.dialect, &config);
        let version = Version::parse_with(&self.version, dialect)?;
        let report = VersionReport::new(&version);

        match output_format(global, &config) {
            OutputFormat::Text => {
                println!("version: {}", report.canonical);
                println!("major: {}", report.major);
                println!("minor: {}", segment(report.minor));
                println!("patch: {}", segment(report.patch));
                println!("segment4: {}", segment(report.segment4));
                println!("segment5: {}", segment(report.segment5));
                if let Some(pre) = report.pre_release {
                    println!("pre-release: {pre}");
                }
                if let Some(build) = report.build_metadata {
                    println!("build: {build}");
                }
                if !report.pre_release_segments.is_empty() {
                    println!("tokens: {}", report.pre_release_segments.join("."));
                }
                Ok(())
            }
            OutputFormat::Json => print_json(&report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_of_legacy_version() {
        let version = Version::parse("2.0.beta.1-rc").unwrap();
        let report = VersionReport::new(&version);
        assert_eq!(report.value, "2.0.beta.1-rc");
        assert_eq!(report.minor, Some(0));
        assert_eq!(report.patch, None);
        assert_eq!(report.pre_release_segments, ["beta", "1"]);
        assert!(!report.clean);
    }

    #[test]
    fn test_segment_rendering() {
        assert_eq!(segment(Some(7)), "7");
        assert_eq!(segment(None), "-");
    }
}
