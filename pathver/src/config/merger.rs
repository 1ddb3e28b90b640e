//! Configuration merging and precedence handling.
//!
//! Sources are layered from lowest to highest precedence; every field is a
//! plain override.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathver::config::{Config, ConfigMerger};
/// use pathver::Dialect;
///
/// let low = Config { dialect: Some(Dialect::Strict), ..Default::default() };
/// let high = Config { dialect: Some(Dialect::Legacy), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.dialect, Some(Dialect::Legacy));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target if `Some`).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.dialect.is_some() {
            target.dialect = source.dialect;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.project_root.is_some() {
            target.project_root.clone_from(&source.project_root);
        }
    }
}
