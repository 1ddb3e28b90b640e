//! Equality, hashing and ordering for [`Version`].
//!
//! Equality and ordering are written separately. Equality is structural and
//! ignores the original string; ordering walks the numeric segments first
//! and then a fixed list of tie-breaks.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::{Dialect, Version};

impl Version {
    /// Compares two versions using the tie-breaks of `dialect`.
    ///
    /// 1. `major`, `minor`, `patch`, `segment4`, `segment5`; an absent
    ///    (non-numeric) segment sorts below every number.
    /// 2. Retained legacy tokens, element by element; a strict prefix sorts
    ///    first.
    /// 3. Strict only: pre-release. A version *with* a pre-release sorts
    ///    before the same version without one; two tags compare as strings.
    /// 4. Strict only: build metadata, with the same present-first rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use pathver::{Dialect, Version};
    ///
    /// let rc: Version = "1.0.0-rc1".parse().unwrap();
    /// let release: Version = "1.0.0".parse().unwrap();
    ///
    /// assert_eq!(rc.cmp_with(&release, Dialect::Strict), Ordering::Less);
    /// assert_eq!(rc.cmp_with(&release, Dialect::Legacy), Ordering::Equal);
    /// ```
    #[must_use]
    pub fn cmp_with(&self, other: &Self, dialect: Dialect) -> Ordering {
        let ordering = self
            .major
            .cmp(&other.major)
            .then_with(|| self.slots().cmp(&other.slots()))
            .then_with(|| self.pre_release_segments.cmp(&other.pre_release_segments));

        match dialect {
            Dialect::Legacy => ordering,
            Dialect::Strict => ordering
                .then_with(|| present_first(self.pre_release(), other.pre_release()))
                .then_with(|| present_first(self.build_metadata(), other.build_metadata())),
        }
    }
}

/// Orders labels so that a present label sorts before an absent one.
fn present_first(lhs: Option<&str>, rhs: Option<&str>) -> Ordering {
    match (lhs, rhs) {
        (Some(l), Some(r)) => l.cmp(r),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.segment4 == other.segment4
            && self.segment5 == other.segment5
            && self.pre_release == other.pre_release
            && self.build_metadata == other.build_metadata
            && self.pre_release_segments == other.pre_release_segments
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.segment4.hash(state);
        self.segment5.hash(state);
        self.pre_release.hash(state);
        self.build_metadata.hash(state);
        self.pre_release_segments.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_with(other, Dialect::Strict)
    }
}
