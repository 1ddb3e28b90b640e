//! Version string parsing.

use super::{non_empty, Dialect, Version, MAX_SEGMENT_COUNT};
use crate::error::{VersionErrorKind, VersionParseError};

/// Parses `raw` according to `dialect`.
pub(super) fn parse(raw: &str, dialect: Dialect) -> Result<Version, VersionParseError> {
    if raw.trim().is_empty() {
        return Err(VersionParseError::new(raw, VersionErrorKind::Empty));
    }

    let (core, pre_release, build_metadata) = split_labels(raw, dialect);

    let tokens = tokenize(core);
    if tokens.len() > MAX_SEGMENT_COUNT {
        return Err(VersionParseError::new(
            raw,
            VersionErrorKind::TooManySegments {
                count: tokens.len(),
            },
        ));
    }

    let Some(first) = tokens.first() else {
        return Err(VersionParseError::new(raw, VersionErrorKind::MissingMajor));
    };
    let major = first
        .parse::<u64>()
        .map_err(|_| VersionParseError::new(raw, VersionErrorKind::InvalidMajor))?;

    // A missing token is zero; a token that is not a number is absent.
    let mut slots = [Some(0u64); MAX_SEGMENT_COUNT - 1];
    for (slot, token) in slots.iter_mut().zip(&tokens[1..]) {
        *slot = token.parse::<u64>().ok();
    }

    let pre_release_segments = match slots.iter().position(Option::is_none) {
        Some(first_absent) => {
            let tail: Vec<String> = tokens[first_absent + 1..]
                .iter()
                .map(|token| (*token).to_string())
                .collect();
            log::trace!("version \"{raw}\" is not fully numeric, keeping tokens {tail:?}");
            tail
        }
        None => Vec::new(),
    };

    let [minor, patch, segment4, segment5] = slots;
    Ok(Version {
        major,
        minor,
        patch,
        segment4,
        segment5,
        pre_release: pre_release.and_then(non_empty),
        build_metadata: build_metadata.and_then(non_empty),
        pre_release_segments,
        value: raw.to_string(),
    })
}

/// Splits off the pre-release and build metadata labels.
///
/// The strict dialect splits once on `+`, then once on `-`, so labels keep
/// any further separators. The legacy dialect splits on every separator and
/// keeps only the first piece after it. Empty pieces never count in either
/// dialect, so `-1.0-alpha` has the core `1.0` and `1.0++b` (legacy) has the
/// build metadata `b`.
fn split_labels(raw: &str, dialect: Dialect) -> (&str, Option<&str>, Option<&str>) {
    match dialect {
        Dialect::Strict => {
            let (rest, build) = split_once_skipping_empty(raw, '+');
            let (core, pre) = split_once_skipping_empty(rest, '-');
            (core, pre, build)
        }
        Dialect::Legacy => {
            let mut pieces = raw.split('+').filter(|piece| !piece.is_empty());
            let rest = pieces.next().unwrap_or_default();
            let build = pieces.next();

            let mut pieces = rest.split('-').filter(|piece| !piece.is_empty());
            let core = pieces.next().unwrap_or_default();
            let pre = pieces.next();
            (core, pre, build)
        }
    }
}

/// Splits at the first `sep` that follows a non-empty piece.
///
/// Leading separators are skipped and an empty tail counts as absent.
fn split_once_skipping_empty(s: &str, sep: char) -> (&str, Option<&str>) {
    let s = s.trim_start_matches(sep);
    match s.split_once(sep) {
        Some((head, tail)) => (head, Some(tail).filter(|tail| !tail.is_empty())),
        None => (s, None),
    }
}

/// Splits a version core into maximal runs of ASCII letters and ASCII
/// digits. Every other character only separates tokens, so `1.2.3` and
/// `1_2_3` tokenize alike.
fn tokenize(core: &str) -> Vec<&str> {
    #[derive(PartialEq, Clone, Copy)]
    enum Class {
        Alpha,
        Digit,
        Other,
    }

    fn class(b: u8) -> Class {
        if b.is_ascii_alphabetic() {
            Class::Alpha
        } else if b.is_ascii_digit() {
            Class::Digit
        } else {
            Class::Other
        }
    }

    let bytes = core.as_bytes();
    let mut tokens = Vec::new();
    let mut start = 0;
    while start < bytes.len() {
        let current = class(bytes[start]);
        let mut end = start + 1;
        while end < bytes.len() && class(bytes[end]) == current {
            end += 1;
        }
        if current != Class::Other {
            tokens.push(&core[start..end]);
        }
        start = end;
    }
    tokens
}
