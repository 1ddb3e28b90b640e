//! Syntactic path normalization.
//!
//! Both normalizers make a single left-to-right pass over the separator
//! delimited segments of the input, writing into one output buffer:
//! - `.` segments and empty segments (doubled separators) are dropped
//! - `..` backs the buffer up to the previous separator when there is a
//!   real component to remove
//! - no trailing separator is ever written
//!
//! Neither function touches the filesystem, so symlinks are not taken into
//! account.

/// The path separator.
pub const SEPARATOR: char = '/';

/// Prefix that marks a path as relative to the project root.
pub const RELATIVE_TO_ROOT_PREFIX: &str = "@/";

/// Normalize an absolute path string.
///
/// The input must begin with `/`. A `..` at the root stays at the root, so
/// `/../foo` normalizes to `/foo`.
///
/// # Examples
///
/// ```
/// use pathver::path::normalize::normalize_absolute;
///
/// assert_eq!(normalize_absolute("/a/./b/../c"), "/a/c");
/// assert_eq!(normalize_absolute("//a//b/"), "/a/b");
/// assert_eq!(normalize_absolute("/../foo"), "/foo");
/// assert_eq!(normalize_absolute("/"), "/");
/// ```
#[must_use]
pub fn normalize_absolute(path: &str) -> String {
    debug_assert!(path.starts_with(SEPARATOR));

    let mut out = String::with_capacity(path.len());
    for segment in path.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => {
                // Back up to the previous separator; the root has nothing to drop.
                if let Some(idx) = out.rfind(SEPARATOR) {
                    out.truncate(idx);
                }
            }
            _ => {
                out.push(SEPARATOR);
                out.push_str(segment);
            }
        }
    }

    if out.is_empty() {
        out.push(SEPARATOR);
    }
    out
}

/// Normalize a relative path string.
///
/// A `..` segment is only collapsed against a preceding real component.
/// Leading `..` segments have no known anchor and are preserved. An empty
/// result normalizes to `.`.
///
/// # Examples
///
/// ```
/// use pathver::path::normalize::normalize_relative;
///
/// assert_eq!(normalize_relative("a/../../b"), "../b");
/// assert_eq!(normalize_relative("./a//b/."), "a/b");
/// assert_eq!(normalize_relative(""), ".");
/// assert_eq!(normalize_relative("a/.."), ".");
/// ```
#[must_use]
pub fn normalize_relative(path: &str) -> String {
    debug_assert!(!path.starts_with(SEPARATOR));

    let mut out = String::with_capacity(path.len());
    // Real components currently in `out`, after any leading `..` run.
    let mut depth = 0usize;

    for segment in path.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." if depth > 0 => {
                match out.rfind(SEPARATOR) {
                    Some(idx) => out.truncate(idx),
                    None => out.clear(),
                }
                depth -= 1;
            }
            _ => {
                if !out.is_empty() {
                    out.push(SEPARATOR);
                }
                out.push_str(segment);
                if segment != ".." {
                    depth += 1;
                }
            }
        }
    }

    if out.is_empty() {
        out.push('.');
    }
    out
}

/// Normalize the remainder of a root-relative path and re-attach the prefix.
///
/// `remainder` is the text after [`RELATIVE_TO_ROOT_PREFIX`].
#[must_use]
pub fn normalize_relative_to_root(remainder: &str) -> String {
    let mut out = String::from(RELATIVE_TO_ROOT_PREFIX);
    out.push_str(&normalize_relative(remainder));
    out
}
