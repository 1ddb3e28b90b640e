//! Relativization and ancestry queries.
//!
//! Both work on the separator-delimited components of canonical strings.
//! For normalized paths this gives the same answers as a byte-prefix scan
//! that stops on separator boundaries, without the index bookkeeping.

use super::normalize::SEPARATOR;
use super::types::UnixPath;
use crate::error::PathError;

impl UnixPath {
    /// Returns the relative path that leads from `base` to `self`.
    ///
    /// The shared leading components are dropped, one `..` is emitted for
    /// every remaining component of `base`, and the rest of `self` follows.
    /// Equal paths give `.`. No filesystem access is performed, so symbolic
    /// links are not considered.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::NotAbsolute`] if either path is not absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::UnixPath;
    ///
    /// let a = UnixPath::absolute("/Users/a").unwrap();
    /// let b = UnixPath::absolute("/Users/a/b").unwrap();
    ///
    /// assert_eq!(b.relative_to(&a).unwrap().as_str(), "b");
    /// assert_eq!(a.relative_to(&b).unwrap().as_str(), "..");
    /// assert_eq!(a.relative_to(&a).unwrap().as_str(), ".");
    ///
    /// let other = UnixPath::absolute("/Users/c/d").unwrap();
    /// assert_eq!(other.relative_to(&b).unwrap().as_str(), "../../c/d");
    /// ```
    pub fn relative_to(&self, base: &UnixPath) -> Result<UnixPath, PathError> {
        for path in [self, base] {
            if !path.is_absolute() {
                return Err(PathError::NotAbsolute(path.as_str().to_string()));
            }
        }

        let to: Vec<&str> = segments(self).collect();
        let from: Vec<&str> = segments(base).collect();
        let common = to.iter().zip(&from).take_while(|(a, b)| a == b).count();

        let parts: Vec<&str> = std::iter::repeat("..")
            .take(from.len() - common)
            .chain(to[common..].iter().copied())
            .collect();

        if parts.is_empty() {
            return Ok(UnixPath::from_canonical(".".to_string()));
        }
        Ok(UnixPath::from_canonical(parts.join("/")))
    }

    /// Returns `true` if `self` is a strict ancestor of `other`.
    ///
    /// Paths of different kinds are never related. A leading run of `..`
    /// in a relative path points upwards, so `..` is not an ancestor of
    /// `../..`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::UnixPath;
    ///
    /// let usr = UnixPath::validate("/usr").unwrap();
    /// let lib = UnixPath::validate("/usr/lib").unwrap();
    /// let usr2 = UnixPath::validate("/usr2").unwrap();
    ///
    /// assert!(usr.is_ancestor_of(&lib));
    /// assert!(!usr.is_ancestor_of(&usr2));
    /// assert!(!usr.is_ancestor_of(&usr));
    /// assert!(UnixPath::root().is_ancestor_of(&usr));
    /// ```
    #[must_use]
    pub fn is_ancestor_of(&self, other: &UnixPath) -> bool {
        if self.kind() != other.kind() {
            return false;
        }

        let mut mine = segments(self);
        let mut theirs = segments(other);
        loop {
            match (mine.next(), theirs.next()) {
                (Some(a), Some(b)) if a == b => {}
                (None, Some(next)) => return next != "..",
                _ => return false,
            }
        }
    }

    /// Returns `true` if `self` is an ancestor of `other` or equal to it.
    #[must_use]
    pub fn is_ancestor_of_or_equal(&self, other: &UnixPath) -> bool {
        self == other || self.is_ancestor_of(other)
    }

    /// Returns `true` if `self` is a strict descendant of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::UnixPath;
    ///
    /// let src = UnixPath::validate("@/App/Sources").unwrap();
    /// let app = UnixPath::validate("@/App").unwrap();
    /// assert!(src.is_descendant_of(&app));
    /// assert!(!app.is_descendant_of(&src));
    /// ```
    #[must_use]
    pub fn is_descendant_of(&self, other: &UnixPath) -> bool {
        other.is_ancestor_of(self)
    }

    /// Returns `true` if `self` is a descendant of `other` or equal to it.
    #[must_use]
    pub fn is_descendant_of_or_equal(&self, other: &UnixPath) -> bool {
        self == other || self.is_descendant_of(other)
    }
}

/// Real components of a path: no root marker, no `@` prefix, no lone `.`.
fn segments(path: &UnixPath) -> impl Iterator<Item = &str> {
    path.clear_path_str()
        .split(SEPARATOR)
        .filter(|segment| !segment.is_empty() && *segment != ".")
}
