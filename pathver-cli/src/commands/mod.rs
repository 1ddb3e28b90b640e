//! CLI command implementations.
//!
//! Path commands:
//! - `normalize`: Print canonical paths
//! - `join`: Append relative paths or components to a base
//! - `relative`: Relative path between two absolute paths
//! - `relation`: Ancestor/descendant relationship of two paths
//! - `resolve`: Anchor root-relative and relative paths
//!
//! Version commands:
//! - `version`: Show the parsed structure of a version
//! - `compare`: Compare two versions
//! - `sort`: Sort versions
//! - `bump`: Print the next version
//!
//! Other:
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completions

pub mod bump;
pub mod compare;
pub mod completions;
pub mod join;
pub mod normalize;
pub mod relation;
pub mod relative;
pub mod resolve;
pub mod sort;
pub mod validate;
pub mod version;

pub use bump::BumpCommand;
pub use compare::CompareCommand;
pub use completions::CompletionsCommand;
pub use join::JoinCommand;
pub use normalize::NormalizeCommand;
pub use relation::RelationCommand;
pub use relative::RelativeCommand;
pub use resolve::ResolveCommand;
pub use sort::SortCommand;
pub use validate::ValidateCommand;
pub use version::VersionCommand;
