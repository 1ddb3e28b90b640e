//! Structured versions with a total order.
//!
//! A [`Version`] has up to five numeric segments (`major.minor.patch.s4.s5`),
//! an optional pre-release tag and optional build metadata. Versions whose
//! segments are not all numeric are kept in a "legacy" form: the slots that
//! could not be read as numbers are absent and the raw tokens from the first
//! absent slot onward are retained for comparison.
//!
//! # Examples
//!
//! ```
//! use pathver::Version;
//!
//! let v: Version = "1.2.3-alpha+001".parse().unwrap();
//! assert_eq!(v.major(), 1);
//! assert_eq!(v.minor(), Some(2));
//! assert_eq!(v.patch(), Some(3));
//! assert_eq!(v.pre_release(), Some("alpha"));
//! assert_eq!(v.build_metadata(), Some("001"));
//! assert_eq!(v.to_string(), "1.2.3-alpha+001");
//!
//! let older: Version = "1.2".parse().unwrap();
//! let newer: Version = "1.2.0.0.1".parse().unwrap();
//! assert!(older < newer);
//! ```

mod ordering;
mod parse;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VersionParseError;

/// Maximum number of alphanumeric tokens a version may contain.
pub const MAX_SEGMENT_COUNT: usize = 5;

/// Parsing and ordering flavor of a [`Version`].
///
/// # Examples
///
/// ```
/// use pathver::{Dialect, Version};
///
/// let strict = Version::parse_with("1.0-beta-2", Dialect::Strict).unwrap();
/// assert_eq!(strict.pre_release(), Some("beta-2"));
///
/// let legacy = Version::parse_with("1.0-beta-2", Dialect::Legacy).unwrap();
/// assert_eq!(legacy.pre_release(), Some("beta"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Semver-like: split once on `+` and `-`; pre-release and build
    /// metadata take part in ordering.
    #[default]
    Strict,

    /// Dependency-manager flavor: split on every `+` and `-` keeping only the
    /// first piece after the separator; ordering ignores pre-release and
    /// build metadata.
    Legacy,
}

impl Dialect {
    /// Returns the lowercase name of the dialect.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!(
                "unknown dialect '{other}', expected 'strict' or 'legacy'"
            )),
        }
    }
}

/// A parsed version.
///
/// `minor` through `segment5` are `None` when the corresponding token was
/// present but not a non-negative integer; such versions are *legacy*
/// versions and keep their raw token tail in
/// [`pre_release_segments`](Version::pre_release_segments).
///
/// Equality is structural over the segments, pre-release, build metadata and
/// token tail; the original string is not compared. Ordering follows the
/// strict dialect; see [`Version::cmp_with`] for details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    major: u64,
    minor: Option<u64>,
    patch: Option<u64>,
    segment4: Option<u64>,
    segment5: Option<u64>,
    pre_release: Option<String>,
    build_metadata: Option<String>,
    pre_release_segments: Vec<String>,
    value: String,
}

impl Version {
    /// Creates a clean version from five numeric segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::Version;
    ///
    /// let v = Version::new(2, 1, 0, 0, 0);
    /// assert_eq!(v.to_string(), "2.1");
    /// assert!(v.is_clean());
    /// ```
    #[must_use]
    pub fn new(major: u64, minor: u64, patch: u64, segment4: u64, segment5: u64) -> Self {
        let mut version = Self {
            major,
            minor: Some(minor),
            patch: Some(patch),
            segment4: Some(segment4),
            segment5: Some(segment5),
            pre_release: None,
            build_metadata: None,
            pre_release_segments: Vec::new(),
            value: String::new(),
        };
        version.value = version.to_string();
        version
    }

    /// The lowest version a resolver can select, `0.0.0.0.1`.
    #[must_use]
    pub fn lowest() -> Self {
        Self::new(0, 0, 0, 0, 1)
    }

    /// Parses a version with the strict dialect.
    ///
    /// # Errors
    ///
    /// Returns a [`VersionParseError`] if the input is empty, has no numeric
    /// major segment, or contains more than [`MAX_SEGMENT_COUNT`] tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::{Version, VersionErrorKind};
    ///
    /// assert!(Version::parse("1.2.3").is_ok());
    ///
    /// let err = Version::parse("1.2.3.4.5.6").unwrap_err();
    /// assert_eq!(err.kind, VersionErrorKind::TooManySegments { count: 6 });
    /// ```
    pub fn parse(raw: &str) -> Result<Self, VersionParseError> {
        Self::parse_with(raw, Dialect::Strict)
    }

    /// Parses a version with the given dialect.
    ///
    /// # Errors
    ///
    /// See [`Version::parse`].
    pub fn parse_with(raw: &str, dialect: Dialect) -> Result<Self, VersionParseError> {
        parse::parse(raw, dialect)
    }

    /// Returns a copy with the given pre-release tag; empty clears it.
    #[must_use]
    pub fn with_pre_release(&self, pre_release: &str) -> Self {
        let mut version = self.clone();
        version.pre_release = non_empty(pre_release);
        version.value = version.to_string();
        version
    }

    /// Returns a copy with the given build metadata; empty clears it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::Version;
    ///
    /// let v = Version::new(1, 0, 0, 0, 0).with_build_metadata("sha.5114f85");
    /// assert_eq!(v.as_str(), "1.0+sha.5114f85");
    /// ```
    #[must_use]
    pub fn with_build_metadata(&self, build_metadata: &str) -> Self {
        let mut version = self.clone();
        version.build_metadata = non_empty(build_metadata);
        version.value = version.to_string();
        version
    }

    /// Increments the fifth segment.
    ///
    /// Absent segments count as zero; pre-release, build metadata and the
    /// legacy token tail are dropped. A segment already at [`u64::MAX`]
    /// wraps to zero and carries into the one above it, so the result is
    /// always greater than `self`. Returns `None` only when the carry runs
    /// past the major segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::Version;
    ///
    /// let v: Version = "1.2.3-rc1".parse().unwrap();
    /// assert_eq!(v.bump().unwrap().to_string(), "1.2.3.0.1");
    ///
    /// let top = Version::new(1, 0, 0, 0, u64::MAX);
    /// assert_eq!(top.bump().unwrap().to_string(), "1.0.0.1");
    /// ```
    #[must_use]
    pub fn bump(&self) -> Option<Self> {
        self.incremented(MAX_SEGMENT_COUNT - 1)
    }

    /// Increments the minor segment and zeroes everything below it.
    ///
    /// Carries into the major segment like [`Version::bump`].
    #[must_use]
    pub fn bump_minor(&self) -> Option<Self> {
        self.incremented(1)
    }

    /// Increments the major segment and zeroes everything below it.
    ///
    /// Returns `None` when the major segment is already [`u64::MAX`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::Version;
    ///
    /// let v: Version = "1.4.2".parse().unwrap();
    /// assert_eq!(v.bump_major().unwrap().to_string(), "2.0");
    /// assert_eq!(v.bump_minor().unwrap().to_string(), "1.5");
    /// assert!(Version::new(u64::MAX, 0, 0, 0, 0).bump_major().is_none());
    /// ```
    #[must_use]
    pub fn bump_major(&self) -> Option<Self> {
        self.incremented(0)
    }

    /// Adds one to the segment at `slot`, zeroing the ones below it and
    /// carrying overflow upward.
    fn incremented(&self, slot: usize) -> Option<Self> {
        let mut segments = [
            self.major,
            self.minor.unwrap_or(0),
            self.patch.unwrap_or(0),
            self.segment4.unwrap_or(0),
            self.segment5.unwrap_or(0),
        ];
        for value in &mut segments[slot + 1..] {
            *value = 0;
        }

        let mut overflowed = true;
        for value in segments[..=slot].iter_mut().rev() {
            match value.checked_add(1) {
                Some(next) => {
                    *value = next;
                    overflowed = false;
                    break;
                }
                None => *value = 0,
            }
        }
        if overflowed {
            return None;
        }

        let [major, minor, patch, segment4, segment5] = segments;
        Some(Self::new(major, minor, patch, segment4, segment5))
    }

    /// The major segment.
    #[must_use]
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor segment, `None` when it was not numeric.
    #[must_use]
    pub fn minor(&self) -> Option<u64> {
        self.minor
    }

    /// The patch segment, `None` when it was not numeric.
    #[must_use]
    pub fn patch(&self) -> Option<u64> {
        self.patch
    }

    /// The fourth segment, `None` when it was not numeric.
    #[must_use]
    pub fn segment4(&self) -> Option<u64> {
        self.segment4
    }

    /// The fifth segment, `None` when it was not numeric.
    #[must_use]
    pub fn segment5(&self) -> Option<u64> {
        self.segment5
    }

    /// The pre-release tag, without the leading `-`.
    #[must_use]
    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }

    /// The build metadata, without the leading `+`.
    #[must_use]
    pub fn build_metadata(&self) -> Option<&str> {
        self.build_metadata.as_deref()
    }

    /// The raw tokens retained for a legacy version; empty when clean.
    #[must_use]
    pub fn pre_release_segments(&self) -> &[String] {
        &self.pre_release_segments
    }

    /// Returns `true` when all five segments are numeric.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.pre_release_segments.is_empty()
    }

    /// The string this version was parsed from, or its canonical rendering
    /// for constructed versions.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The optional segments in order.
    pub(crate) fn slots(&self) -> [Option<u64>; 4] {
        [self.minor, self.patch, self.segment4, self.segment5]
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

impl fmt::Display for Version {
    /// Canonical rendering.
    ///
    /// Clean versions always show `major.minor`, then only as many lower
    /// segments as needed to keep every non-zero one. Legacy versions show
    /// the leading numeric segments followed by the retained tokens.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;

        if self.is_clean() {
            let lower = self.slots().map(|slot| slot.unwrap_or(0));
            let keep = lower
                .iter()
                .rposition(|&segment| segment != 0)
                .map_or(1, |idx| idx + 1);
            for segment in &lower[..keep] {
                write!(f, ".{segment}")?;
            }
        } else {
            for segment in self.slots().iter().map_while(|slot| *slot) {
                write!(f, ".{segment}")?;
            }
            for token in &self.pre_release_segments {
                write!(f, ".{token}")?;
            }
        }

        if let Some(pre) = &self.pre_release {
            write!(f, "-{pre}")?;
        }
        if let Some(build) = &self.build_metadata {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(raw: &str) -> Version {
        Version::parse(raw).unwrap()
    }

    #[test]
    fn test_new_is_clean() {
        let version = Version::new(1, 2, 3, 4, 5);
        assert!(version.is_clean());
        assert_eq!(version.as_str(), "1.2.3.4.5");
        assert_eq!(version.segment4(), Some(4));
        assert_eq!(version.segment5(), Some(5));
    }

    #[test]
    fn test_lowest() {
        let lowest = Version::lowest();
        assert_eq!(lowest.to_string(), "0.0.0.0.1");
        assert!(v("0") < lowest);
        assert!(lowest < v("0.0.0.0.2"));
    }

    #[test]
    fn test_display_trims_trailing_zero_segments() {
        assert_eq!(v("1").to_string(), "1.0");
        assert_eq!(v("1.0.0").to_string(), "1.0");
        assert_eq!(v("1.2.3").to_string(), "1.2.3");
        assert_eq!(v("1.0.0.4").to_string(), "1.0.0.4");
        assert_eq!(v("1.0.0.0.5").to_string(), "1.0.0.0.5");
        assert_eq!(v("1.0.3.0.0").to_string(), "1.0.3");
    }

    #[test]
    fn test_display_pre_release_and_build() {
        assert_eq!(v("1.2.3-alpha+001").to_string(), "1.2.3-alpha+001");
        assert_eq!(v("2-rc.1").to_string(), "2.0-rc.1");
        assert_eq!(v("2+build").to_string(), "2.0+build");
    }

    #[test]
    fn test_display_legacy() {
        assert_eq!(v("1.2.beta.4").to_string(), "1.2.beta.4");
        assert_eq!(v("1.alpha").to_string(), "1.alpha");
        assert_eq!(v("3_b2").to_string(), "3.b.2");
    }

    #[test]
    fn test_value_keeps_original_text() {
        assert_eq!(v("1.0.0").as_str(), "1.0.0");
        assert_eq!(v("1_2_3").as_str(), "1_2_3");
        assert_eq!(v("1_2_3").to_string(), "1.2.3");
    }

    #[test]
    fn test_with_pre_release_and_build_metadata() {
        let base = Version::new(1, 0, 0, 0, 0);
        let pre = base.with_pre_release("beta");
        assert_eq!(pre.pre_release(), Some("beta"));
        assert_eq!(pre.as_str(), "1.0-beta");
        assert_eq!(pre.with_pre_release("").pre_release(), None);
        assert_eq!(base.with_build_metadata("").build_metadata(), None);
    }

    #[test]
    fn test_bump_family() {
        let version = v("1.2.3.4.5-rc+meta");
        assert_eq!(version.bump(), Some(Version::new(1, 2, 3, 4, 6)));
        assert_eq!(version.bump_minor(), Some(Version::new(1, 3, 0, 0, 0)));
        assert_eq!(version.bump_major(), Some(Version::new(2, 0, 0, 0, 0)));
    }

    #[test]
    fn test_bump_legacy_treats_absent_as_zero() {
        let version = v("1.beta");
        let bumped = version.bump().unwrap();
        assert!(bumped.is_clean());
        assert_eq!(bumped.to_string(), "1.0.0.0.1");
        assert_eq!(version.bump_minor().unwrap().to_string(), "1.1");
    }

    #[test]
    fn test_bump_carries_overflow_upward() {
        let version = Version::new(1, 0, 0, 0, u64::MAX);
        let bumped = version.bump().unwrap();
        assert_eq!(bumped, Version::new(1, 0, 0, 1, 0));
        assert!(bumped > version);

        let version = Version::new(1, u64::MAX, u64::MAX, u64::MAX, u64::MAX);
        assert_eq!(version.bump(), Some(Version::new(2, 0, 0, 0, 0)));
        assert_eq!(version.bump_minor(), Some(Version::new(2, 0, 0, 0, 0)));

        let version = Version::new(3, u64::MAX, 7, 0, 0);
        assert_eq!(version.bump_minor(), Some(Version::new(4, 0, 0, 0, 0)));
    }

    #[test]
    fn test_bump_past_largest_major_is_none() {
        let top = Version::new(u64::MAX, u64::MAX, u64::MAX, u64::MAX, u64::MAX);
        assert_eq!(top.bump(), None);
        assert_eq!(top.bump_minor(), None);
        assert_eq!(Version::new(u64::MAX, 0, 0, 0, 0).bump_major(), None);
        assert!(Version::new(u64::MAX, 0, 0, 0, 0).bump().is_some());
    }

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("strict".parse::<Dialect>(), Ok(Dialect::Strict));
        assert_eq!("LEGACY".parse::<Dialect>(), Ok(Dialect::Legacy));
        assert!("loose".parse::<Dialect>().is_err());
        assert_eq!(Dialect::default(), Dialect::Strict);
        assert_eq!(Dialect::Legacy.to_string(), "legacy");
    }

    #[test]
    fn test_conversions() {
        let parsed: Version = "1.2".parse().unwrap();
        assert_eq!(Version::try_from("1.2").unwrap(), parsed);
        assert_eq!(Version::try_from(String::from("1.2.0")).unwrap(), parsed);
        assert_eq!(String::from(parsed), "1.2");
        assert!(Version::try_from("").is_err());
    }
}
