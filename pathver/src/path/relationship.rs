//! Path relationship checking.
//!
//! This module provides functionality to determine the relationship between
//! two paths, such as whether one is an ancestor or descendant of the other.

use super::types::UnixPath;

/// Relationship between two paths.
///
/// This enum describes how two paths relate to each other in the directory
/// hierarchy. Paths of different kinds are always unrelated.
///
/// # Examples
///
/// ```
/// use pathver::{PathRelationship, UnixPath};
///
/// let parent = UnixPath::validate("/home/user").unwrap();
/// let child = UnixPath::validate("/home/user/project").unwrap();
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths have the same canonical string.
    Same,

    /// Neither path is an ancestor of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::{PathRelationship, UnixPath};
    ///
    /// let a = UnixPath::validate("/a").unwrap();
    /// let ab = UnixPath::validate("/a/b").unwrap();
    /// let b = UnixPath::validate("/b").unwrap();
    ///
    /// assert_eq!(PathRelationship::between(&a, &ab), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between(&ab, &a), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(&a, &a), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between(&a, &b), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &UnixPath, path2: &UnixPath) -> Self {
        if path1 == path2 {
            Self::Same
        } else if path1.is_ancestor_of(path2) {
            Self::Ancestor
        } else if path2.is_ancestor_of(path1) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if a path is within a directory (descendant or same).
    #[must_use]
    pub fn is_within(path: &UnixPath, directory: &UnixPath) -> bool {
        matches!(
            Self::between(path, directory),
            Self::Descendant | Self::Same
        )
    }

    /// Check if a path contains another path (ancestor or same).
    #[must_use]
    pub fn contains(path: &UnixPath, other: &UnixPath) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Short lowercase label for the relationship.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ancestor => "ancestor",
            Self::Descendant => "descendant",
            Self::Same => "same",
            Self::Unrelated => "unrelated",
        }
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::{PathRelationship, UnixPath};
    ///
    /// let p1 = UnixPath::validate("/a").unwrap();
    /// let p2 = UnixPath::validate("/a/b").unwrap();
    ///
    /// let desc = PathRelationship::Ancestor.description(&p1, &p2);
    /// assert_eq!(desc, "/a is an ancestor of /a/b");
    /// ```
    #[must_use]
    pub fn description(&self, path1: &UnixPath, path2: &UnixPath) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}
