#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathver
//!
//! Syntactic UNIX paths and structured versions for build manifests.
//!
//! Paths are normalized purely on text: the file system is never consulted,
//! symlinks are never followed and `~` is never expanded. Versions hold up to
//! five numeric segments plus optional pre-release and build labels, and
//! compare under a total order.
//!
//! ## Core Types
//!
//! - [`UnixPath`] and [`PathKind`]: Normalized absolute, relative and
//!   project-root-relative (`@/`) paths
//! - [`PathRelationship`]: Ancestry between two paths
//! - [`Version`] and [`Dialect`]: Parsed versions with a total order
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathver::{UnixPath, Version};
//!
//! let path = UnixPath::validate("/usr/./local/../bin/").unwrap();
//! assert_eq!(path.as_str(), "/usr/bin");
//!
//! let sources = UnixPath::validate("@/Sources/App").unwrap();
//! assert!(sources.is_relative_to_root());
//!
//! let older = Version::parse("1.2.3-beta").unwrap();
//! let newer = Version::parse("1.2.3").unwrap();
//! assert!(older < newer);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod version;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, PathError, Result, VersionErrorKind, VersionParseError};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{PathKind, PathRelationship, UnixPath};
pub use version::{Dialect, Version};
