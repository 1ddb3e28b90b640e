//! Syntactic UNIX paths.
//!
//! This module provides [`UnixPath`], a path value that is normalized purely
//! by looking at its string form. Nothing here ever touches the filesystem.
//!
//! # Key Concepts
//!
//! ## Kinds
//!
//! Every path is one of three kinds, read off its leading characters:
//!
//! - **Absolute** (`/usr/lib`): rooted at the filesystem root.
//! - **Relative** (`Sources/App`): relative to an unspecified directory,
//!   usually the directory containing a manifest.
//! - **Relative to root** (`@/Shared`): relative to the project root. The
//!   `@/` prefix is reserved for this purpose.
//!
//! ## Normalization
//!
//! Construction rewrites the input to a canonical string by:
//! - Dropping `.` components and doubled separators
//! - Collapsing `..` against the preceding component
//! - Removing trailing separators
//!
//! Home directory expansion is never performed, so `~` paths are rejected.
//!
//! # Examples
//!
//! ```
//! use pathver::{PathRelationship, UnixPath};
//!
//! let manifest_dir = UnixPath::validate("/repo/App").unwrap();
//! let sources = UnixPath::validate("./Sources//Core/").unwrap();
//! assert_eq!(sources.as_str(), "Sources/Core");
//!
//! let resolved = manifest_dir.appending(&sources).unwrap();
//! assert_eq!(resolved.as_str(), "/repo/App/Sources/Core");
//! assert_eq!(
//!     PathRelationship::between(&manifest_dir, &resolved),
//!     PathRelationship::Ancestor
//! );
//! assert_eq!(resolved.relative_to(&manifest_dir).unwrap(), sources);
//! ```

pub mod normalize;
mod relationship;
mod relative;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use relationship::PathRelationship;
pub use types::{PathKind, UnixPath};
