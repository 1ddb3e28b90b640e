//! Error types for the pathver library.
//!
//! This module provides the error hierarchy for all fallible operations in
//! the library, using `thiserror` for ergonomic error handling. Path and
//! version construction have their own focused error types which convert
//! into the crate-level [`Error`].

use thiserror::Error;

/// Result type alias for operations that may fail with a pathver error.
///
/// # Examples
///
/// ```
/// use pathver::{Error, Result, UnixPath};
///
/// fn parse_source_dir(raw: &str) -> Result<UnixPath> {
///     Ok(UnixPath::validate(raw)?)
/// }
///
/// assert!(parse_source_dir("Sources/App").is_ok());
/// assert!(matches!(parse_source_dir("~/Sources"), Err(Error::InvalidPath(_))));
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathver library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path failed validation.
    #[error(transparent)]
    InvalidPath(#[from] PathError),

    /// A version string could not be parsed.
    #[error(transparent)]
    InvalidVersion(#[from] VersionParseError),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred while loading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

/// Describes the way in which a path is invalid.
///
/// # Examples
///
/// ```
/// use pathver::{PathError, UnixPath};
///
/// let err = UnixPath::absolute("~/project").unwrap_err();
/// assert_eq!(err, PathError::StartsWithTilde("~/project".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path begins with `~`; home directory expansion is never performed.
    #[error("invalid absolute path '{0}'; absolute path must begin with '/'")]
    StartsWithTilde(String),

    /// An absolute path was required but the input does not begin with `/`.
    #[error("invalid absolute path '{0}'")]
    InvalidAbsolutePath(String),

    /// A relative path was required but the input begins with `/`.
    #[error("invalid relative path '{0}'; relative path should not begin with '/'")]
    InvalidRelativePath(String),

    /// A path component contains a separator.
    #[error("invalid path component '{0}'; component must not contain '/'")]
    InvalidComponent(String),

    /// An operation that needs absolute paths received another kind.
    #[error("path '{0}' is not absolute")]
    NotAbsolute(String),
}

impl PathError {
    /// Returns the offending input string.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::StartsWithTilde(s)
            | Self::InvalidAbsolutePath(s)
            | Self::InvalidRelativePath(s)
            | Self::InvalidComponent(s)
            | Self::NotAbsolute(s) => s,
        }
    }
}

/// A version string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid version \"{input}\": {kind}")]
pub struct VersionParseError {
    /// The rejected input.
    pub input: String,
    /// Why the input was rejected.
    pub kind: VersionErrorKind,
}

/// The reason a version string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VersionErrorKind {
    /// The input contained no version text at all.
    #[error("version is empty")]
    Empty,

    /// No alphanumeric segment was found for the major version.
    #[error("major version must be present")]
    MissingMajor,

    /// The leading segment is not a non-negative integer.
    #[error("major version must be a non-negative integer")]
    InvalidMajor,

    /// The input tokenized into more segments than are supported.
    #[error(
        "found {count} segments, versions with more than {} segments are not supported",
        crate::version::MAX_SEGMENT_COUNT
    )]
    TooManySegments {
        /// Number of segments found.
        count: usize,
    },
}

impl VersionParseError {
    pub(crate) fn new(input: &str, kind: VersionErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }
}
