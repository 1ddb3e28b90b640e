//! Property-based tests for version parsing.
//!
//! Ordering properties live next to the comparator in `ordering.rs`; this
//! module throws arbitrary input at the parser and checks the wire format.

use super::{Dialect, Version, MAX_SEGMENT_COUNT};
use crate::error::VersionErrorKind;
use proptest::prelude::*;

fn clean_version_strategy() -> impl Strategy<Value = Version> {
    (0u64..1000, 0u64..1000, 0u64..1000, 0u64..10, 0u64..10)
        .prop_map(|(a, b, c, d, e)| Version::new(a, b, c, d, e))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 5000,
        .. ProptestConfig::default()
    })]

    // The parser never panics, whatever the input
    #[test]
    fn parse_never_panics(raw in ".{0,40}") {
        let _ = Version::parse(&raw);
        let _ = Version::parse_with(&raw, Dialect::Legacy);
    }

    // Too many tokens is always rejected, never truncated
    #[test]
    fn parse_rejects_long_versions(parts in prop::collection::vec(0u64..100, MAX_SEGMENT_COUNT + 1..10)) {
        let raw = parts.iter().map(ToString::to_string).collect::<Vec<_>>().join(".");
        let err = Version::parse(&raw).unwrap_err();
        prop_assert_eq!(err.kind, VersionErrorKind::TooManySegments { count: parts.len() });
    }

    // Any successfully parsed version has at most five tokens and keeps its text
    #[test]
    fn parse_keeps_original_text(raw in "[0-9a-z.+-]{1,20}") {
        if let Ok(version) = Version::parse(&raw) {
            prop_assert_eq!(version.as_str(), raw.as_str());
            prop_assert!(version.pre_release_segments().len() < MAX_SEGMENT_COUNT);
        }
    }

    // Clean versions render canonically and re-parse to an equal value
    #[test]
    fn clean_display_round_trip(version in clean_version_strategy()) {
        let rendered = version.to_string();
        prop_assert!(rendered.matches('.').count() >= 1);
        prop_assert_eq!(Version::parse(&rendered).unwrap(), version);
    }

    // Serde encodes the string and decodes to an equal value
    #[test]
    fn json_round_trip(version in clean_version_strategy(), pre in prop::option::of("[a-z]{1,5}")) {
        let version = match pre {
            Some(pre) => version.with_pre_release(&pre),
            None => version,
        };
        let json = serde_json::to_string(&version).unwrap();
        let back: Version = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, version);
    }
}
