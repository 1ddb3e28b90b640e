//! Core types for path handling.
//!
//! [`UnixPath`] stores exactly one canonical string. Its [`PathKind`] is read
//! off that string, so a value can never disagree with its own kind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::normalize::{
    normalize_absolute, normalize_relative, normalize_relative_to_root, RELATIVE_TO_ROOT_PREFIX,
    SEPARATOR,
};
use crate::error::PathError;

/// The three flavors of [`UnixPath`].
///
/// # Examples
///
/// ```
/// use pathver::{PathKind, UnixPath};
///
/// assert_eq!(UnixPath::validate("/usr").unwrap().kind(), PathKind::Absolute);
/// assert_eq!(UnixPath::validate("@/Sources").unwrap().kind(), PathKind::RelativeToRoot);
/// assert_eq!(UnixPath::validate("Sources").unwrap().kind(), PathKind::Relative);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// Begins with `/`.
    Absolute,

    /// Relative to an unspecified base, usually the manifest directory.
    Relative,

    /// Relative to the project root; written with the `@/` prefix.
    RelativeToRoot,
}

impl PathKind {
    /// Returns a short lowercase name for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Relative => "relative",
            Self::RelativeToRoot => "relative-to-root",
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A syntactically normalized UNIX path.
///
/// Construction normalizes the input without touching the filesystem:
/// `.` components and doubled separators are dropped and `..` is collapsed
/// against the preceding component wherever one exists. Equality, ordering
/// and hashing all work on the canonical string.
///
/// # Examples
///
/// ```
/// use pathver::UnixPath;
///
/// let path = UnixPath::validate("/a/./b/../c").unwrap();
/// assert_eq!(path.as_str(), "/a/c");
///
/// let rel = UnixPath::validate("a/../../b").unwrap();
/// assert_eq!(rel.as_str(), "../b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UnixPath {
    path: String,
}

impl UnixPath {
    /// Wraps a string that is already canonical.
    pub(crate) fn from_canonical(path: String) -> Self {
        Self { path }
    }

    /// Validates and normalizes a path of any kind.
    ///
    /// A leading `/` selects an absolute path and a leading `@/` a
    /// root-relative one; anything else is relative.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::StartsWithTilde`] when `raw` begins with `~`
    /// (home directories are never expanded), and the errors of
    /// [`UnixPath::relative_to_root`] for malformed `@/` paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::{PathError, UnixPath};
    ///
    /// assert_eq!(UnixPath::validate("//usr//lib/").unwrap().as_str(), "/usr/lib");
    /// assert_eq!(UnixPath::validate("@/a/./b").unwrap().as_str(), "@/a/b");
    /// assert_eq!(UnixPath::validate("").unwrap().as_str(), ".");
    /// assert!(matches!(
    ///     UnixPath::validate("~/src"),
    ///     Err(PathError::StartsWithTilde(_))
    /// ));
    /// ```
    pub fn validate(raw: &str) -> Result<Self, PathError> {
        if raw.starts_with('~') {
            return Err(PathError::StartsWithTilde(raw.to_string()));
        }
        if raw.starts_with(SEPARATOR) {
            return Ok(Self::from_canonical(normalize_absolute(raw)));
        }
        if raw.starts_with(RELATIVE_TO_ROOT_PREFIX) {
            return Self::relative_to_root(raw);
        }

        let normalized = normalize_relative(raw);
        // `./~x` would otherwise produce a string that no longer validates.
        if normalized.starts_with('~') {
            return Err(PathError::StartsWithTilde(raw.to_string()));
        }
        Ok(Self::from_canonical(normalized))
    }

    /// Validates and normalizes an absolute path.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::StartsWithTilde`] for `~` paths and
    /// [`PathError::InvalidAbsolutePath`] for anything else that does not
    /// begin with `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::UnixPath;
    ///
    /// assert_eq!(UnixPath::absolute("/../foo").unwrap().as_str(), "/foo");
    /// assert!(UnixPath::absolute("foo").is_err());
    /// ```
    pub fn absolute(raw: &str) -> Result<Self, PathError> {
        if raw.starts_with('~') {
            return Err(PathError::StartsWithTilde(raw.to_string()));
        }
        if !raw.starts_with(SEPARATOR) {
            return Err(PathError::InvalidAbsolutePath(raw.to_string()));
        }
        Ok(Self::from_canonical(normalize_absolute(raw)))
    }

    /// Validates and normalizes a relative path.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidRelativePath`] when `raw` begins with `/`
    /// or `~`, or when it normalizes to a root-relative `@/` path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::UnixPath;
    ///
    /// assert_eq!(UnixPath::relative("./Sources/").unwrap().as_str(), "Sources");
    /// assert!(UnixPath::relative("/Sources").is_err());
    /// ```
    pub fn relative(raw: &str) -> Result<Self, PathError> {
        if raw.starts_with(SEPARATOR) || raw.starts_with('~') {
            return Err(PathError::InvalidRelativePath(raw.to_string()));
        }
        let normalized = normalize_relative(raw);
        if normalized.starts_with(RELATIVE_TO_ROOT_PREFIX) || normalized.starts_with('~') {
            return Err(PathError::InvalidRelativePath(raw.to_string()));
        }
        Ok(Self::from_canonical(normalized))
    }

    /// Validates and normalizes a path relative to the project root.
    ///
    /// The `@/` prefix is optional on input and always present on output.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidRelativePath`] when the text after the
    /// prefix begins with `/`, and [`PathError::StartsWithTilde`] when `raw`
    /// begins with `~`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::UnixPath;
    ///
    /// assert_eq!(UnixPath::relative_to_root("Sources").unwrap().as_str(), "@/Sources");
    /// assert_eq!(UnixPath::relative_to_root("@/").unwrap().as_str(), "@/.");
    /// assert!(UnixPath::relative_to_root("@//etc").is_err());
    /// ```
    pub fn relative_to_root(raw: &str) -> Result<Self, PathError> {
        if raw.starts_with('~') {
            return Err(PathError::StartsWithTilde(raw.to_string()));
        }
        let remainder = raw.strip_prefix(RELATIVE_TO_ROOT_PREFIX).unwrap_or(raw);
        if remainder.starts_with(SEPARATOR) {
            return Err(PathError::InvalidRelativePath(raw.to_string()));
        }
        Ok(Self::from_canonical(normalize_relative_to_root(remainder)))
    }

    /// Joins `raw` onto `base` unless `raw` is already absolute.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::NotAbsolute`] if `base` is not absolute, or the
    /// validation error for `raw`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::UnixPath;
    ///
    /// let base = UnixPath::absolute("/project").unwrap();
    /// assert_eq!(UnixPath::from_base("src/../lib", &base).unwrap().as_str(), "/project/lib");
    /// assert_eq!(UnixPath::from_base("/etc", &base).unwrap().as_str(), "/etc");
    /// ```
    pub fn from_base(raw: &str, base: &UnixPath) -> Result<Self, PathError> {
        if !base.is_absolute() {
            return Err(PathError::NotAbsolute(base.path.clone()));
        }
        if raw.starts_with(SEPARATOR) {
            return Self::absolute(raw);
        }
        base.appending(&Self::relative(raw)?)
    }

    /// The root directory `/`.
    #[must_use]
    pub fn root() -> Self {
        Self::from_canonical(SEPARATOR.to_string())
    }

    /// Returns `true` if `name` can be used as a single path component.
    ///
    /// Empty names, `.`, `..` and names containing `/` are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::UnixPath;
    ///
    /// assert!(UnixPath::is_valid_component("main.rs"));
    /// assert!(!UnixPath::is_valid_component(".."));
    /// assert!(!UnixPath::is_valid_component("a/b"));
    /// ```
    #[must_use]
    pub fn is_valid_component(name: &str) -> bool {
        !name.is_empty() && name != "." && name != ".." && !name.contains(SEPARATOR)
    }

    /// The canonical string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// The kind of path, read from its leading characters.
    #[must_use]
    pub fn kind(&self) -> PathKind {
        if self.path.starts_with(SEPARATOR) {
            PathKind::Absolute
        } else if self.path.starts_with(RELATIVE_TO_ROOT_PREFIX) {
            PathKind::RelativeToRoot
        } else {
            PathKind::Relative
        }
    }

    /// Returns `true` for absolute paths.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.kind() == PathKind::Absolute
    }

    /// Returns `true` for relative paths (not root-relative ones).
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.kind() == PathKind::Relative
    }

    /// Returns `true` for paths relative to the project root.
    #[must_use]
    pub fn is_relative_to_root(&self) -> bool {
        self.kind() == PathKind::RelativeToRoot
    }

    /// Returns `true` for `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path.len() == 1 && self.path.starts_with(SEPARATOR)
    }

    /// The path string without the `@/` prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::UnixPath;
    ///
    /// assert_eq!(UnixPath::validate("@/a/b").unwrap().clear_path_str(), "a/b");
    /// assert_eq!(UnixPath::validate("/a/b").unwrap().clear_path_str(), "/a/b");
    /// ```
    #[must_use]
    pub fn clear_path_str(&self) -> &str {
        self.path
            .strip_prefix(RELATIVE_TO_ROOT_PREFIX)
            .unwrap_or(&self.path)
    }

    /// The directory part of the path.
    ///
    /// The dirname of the root is the root; the dirname of a single relative
    /// component is `.` (or `@/.` for root-relative paths).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::UnixPath;
    ///
    /// assert_eq!(UnixPath::validate("/a/b").unwrap().dirname(), "/a");
    /// assert_eq!(UnixPath::validate("/a").unwrap().dirname(), "/");
    /// assert_eq!(UnixPath::validate("a").unwrap().dirname(), ".");
    /// assert_eq!(UnixPath::validate("@/a").unwrap().dirname(), "@/.");
    /// ```
    #[must_use]
    pub fn dirname(&self) -> String {
        let clear = self.clear_path_str();
        let dir = match clear.rfind(SEPARATOR) {
            Some(0) => "/",
            Some(idx) => &clear[..idx],
            None => ".",
        };

        if self.is_relative_to_root() {
            format!("{RELATIVE_TO_ROOT_PREFIX}{dir}")
        } else {
            dir.to_string()
        }
    }

    /// The last component of the path; `/` for the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::UnixPath;
    ///
    /// assert_eq!(UnixPath::validate("/a/b.txt").unwrap().basename(), "b.txt");
    /// assert_eq!(UnixPath::root().basename(), "/");
    /// ```
    #[must_use]
    pub fn basename(&self) -> &str {
        if self.is_root() {
            return &self.path;
        }
        match self.path.rfind(SEPARATOR) {
            Some(idx) => &self.path[idx + 1..],
            None => &self.path,
        }
    }

    /// The basename with its suffix removed.
    #[must_use]
    pub fn basename_without_extension(&self) -> &str {
        let basename = self.basename();
        match self.suffix() {
            Some(suffix) => &basename[..basename.len() - suffix.len()],
            None => basename,
        }
    }

    /// The suffix of the basename, including the leading dot.
    ///
    /// A basename that starts with `.` has no suffix, nor does one that
    /// ends with `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::UnixPath;
    ///
    /// assert_eq!(UnixPath::validate("a/b.tar.gz").unwrap().suffix(), Some(".gz"));
    /// assert_eq!(UnixPath::validate(".bashrc").unwrap().suffix(), None);
    /// assert_eq!(UnixPath::validate("file.").unwrap().suffix(), None);
    /// ```
    #[must_use]
    pub fn suffix(&self) -> Option<&str> {
        let basename = self.basename();
        let idx = basename.rfind('.')?;
        if idx == 0 || idx + 1 == basename.len() {
            return None;
        }
        if basename[..idx].bytes().all(|b| b == b'.') {
            return None;
        }
        Some(&basename[idx..])
    }

    /// The suffix of the basename without the leading dot.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.suffix().map(|suffix| &suffix[1..])
    }

    /// The components of the path.
    ///
    /// Absolute paths yield a leading `/` pseudo-component and root-relative
    /// paths a leading `@`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::UnixPath;
    ///
    /// assert_eq!(UnixPath::validate("/a/b").unwrap().components(), vec!["/", "a", "b"]);
    /// assert_eq!(UnixPath::validate("@/a").unwrap().components(), vec!["@", "a"]);
    /// assert_eq!(UnixPath::validate("../a").unwrap().components(), vec!["..", "a"]);
    /// ```
    #[must_use]
    pub fn components(&self) -> Vec<&str> {
        let mut components = Vec::new();
        match self.kind() {
            PathKind::Absolute => components.push("/"),
            PathKind::RelativeToRoot => components.push("@"),
            PathKind::Relative => {}
        }
        components.extend(
            self.clear_path_str()
                .split(SEPARATOR)
                .filter(|segment| !segment.is_empty()),
        );
        components
    }

    /// The parent directory, keeping the path kind.
    ///
    /// The root is its own parent. For relative paths the parent of `.` is
    /// `..`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::UnixPath;
    ///
    /// assert_eq!(UnixPath::validate("/a/b").unwrap().parent_directory().as_str(), "/a");
    /// assert_eq!(UnixPath::root().parent_directory().as_str(), "/");
    /// assert_eq!(UnixPath::validate("a").unwrap().parent_directory().as_str(), ".");
    /// assert_eq!(UnixPath::validate(".").unwrap().parent_directory().as_str(), "..");
    /// ```
    #[must_use]
    pub fn parent_directory(&self) -> Self {
        match self.kind() {
            PathKind::Absolute => Self::from_canonical(self.dirname()),
            PathKind::Relative => Self::from_canonical(normalize_relative(&format!(
                "{}{SEPARATOR}..",
                self.path
            ))),
            PathKind::RelativeToRoot => Self::from_canonical(normalize_relative_to_root(
                &format!("{}{SEPARATOR}..", self.clear_path_str()),
            )),
        }
    }

    /// Appends a single component.
    ///
    /// An empty name and `.` leave the path unchanged and `..` moves to the
    /// parent directory.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidComponent`] if `name` contains `/`, or if
    /// it would start a relative path with `~`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::UnixPath;
    ///
    /// let root = UnixPath::root();
    /// assert_eq!(root.appending_component("usr").unwrap().as_str(), "/usr");
    ///
    /// let cur = UnixPath::validate(".").unwrap();
    /// assert_eq!(cur.appending_component("src").unwrap().as_str(), "src");
    /// assert!(cur.appending_component("a/b").is_err());
    /// ```
    pub fn appending_component(&self, name: &str) -> Result<Self, PathError> {
        if name.contains(SEPARATOR) {
            return Err(PathError::InvalidComponent(name.to_string()));
        }
        match name {
            "" | "." => Ok(self.clone()),
            ".." => Ok(self.parent_directory()),
            _ => {
                if self.path == "." && name.starts_with('~') {
                    return Err(PathError::InvalidComponent(name.to_string()));
                }
                Ok(Self::from_canonical(self.join_raw(name)))
            }
        }
    }

    /// Appends each name in turn with [`UnixPath::appending_component`].
    ///
    /// # Errors
    ///
    /// Returns the first component error encountered.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::UnixPath;
    ///
    /// let base = UnixPath::validate("/usr").unwrap();
    /// let path = base.appending_components(["local", "..", "lib"]).unwrap();
    /// assert_eq!(path.as_str(), "/usr/lib");
    /// ```
    pub fn appending_components<I, S>(&self, names: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .try_fold(self.clone(), |path, name| path.appending_component(name.as_ref()))
    }

    /// Appends a relative path.
    ///
    /// The canonical strings are joined with one separator; the result is
    /// only renormalized when `relative` begins with `.`. Any non-absolute
    /// operand is appended as plain text, so a leading `@` is just the name
    /// of a directory here.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidRelativePath`] if `relative` is absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::UnixPath;
    ///
    /// let base = UnixPath::validate("/a/b").unwrap();
    /// let rel = UnixPath::validate("../c").unwrap();
    /// assert_eq!(base.appending(&rel).unwrap().as_str(), "/a/c");
    ///
    /// let at = UnixPath::validate("@/x").unwrap();
    /// assert_eq!(base.appending(&at).unwrap().as_str(), "/a/b/@/x");
    /// ```
    pub fn appending(&self, relative: &UnixPath) -> Result<Self, PathError> {
        if relative.is_absolute() {
            return Err(PathError::InvalidRelativePath(relative.path.clone()));
        }
        if relative.path == "." {
            return Ok(self.clone());
        }

        let joined = self.join_raw(&relative.path);
        // `@/.` and `@/../x` carry dot segments behind the prefix.
        if !relative.path.starts_with('.') && !relative.is_relative_to_root() {
            return Ok(Self::from_canonical(joined));
        }

        let normalized = match self.kind() {
            PathKind::Absolute => normalize_absolute(&joined),
            PathKind::Relative => normalize_relative(&joined),
            PathKind::RelativeToRoot => normalize_relative_to_root(
                joined
                    .strip_prefix(RELATIVE_TO_ROOT_PREFIX)
                    .unwrap_or(&joined),
            ),
        };
        Ok(Self::from_canonical(normalized))
    }

    /// Resolves the path to an absolute one.
    ///
    /// Root-relative paths are anchored at `project_root` and relative paths
    /// at `manifest_dir`; absolute paths are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::NotAbsolute`] if either anchor is not absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathver::UnixPath;
    ///
    /// let root = UnixPath::absolute("/repo").unwrap();
    /// let manifest = UnixPath::absolute("/repo/App").unwrap();
    ///
    /// let shared = UnixPath::validate("@/Shared").unwrap();
    /// assert_eq!(shared.resolve(&root, &manifest).unwrap().as_str(), "/repo/Shared");
    ///
    /// let sources = UnixPath::validate("Sources").unwrap();
    /// assert_eq!(sources.resolve(&root, &manifest).unwrap().as_str(), "/repo/App/Sources");
    /// ```
    pub fn resolve(&self, project_root: &UnixPath, manifest_dir: &UnixPath) -> Result<Self, PathError> {
        for anchor in [project_root, manifest_dir] {
            if !anchor.is_absolute() {
                return Err(PathError::NotAbsolute(anchor.path.clone()));
            }
        }

        match self.kind() {
            PathKind::Absolute => Ok(self.clone()),
            PathKind::RelativeToRoot => {
                let clear = Self::from_canonical(self.clear_path_str().to_string());
                project_root.appending(&clear)
            }
            PathKind::Relative => manifest_dir.appending(self),
        }
    }

    /// Joins `tail` onto the canonical string with a single separator.
    ///
    /// `.` and `@/.` are replaced rather than extended.
    fn join_raw(&self, tail: &str) -> String {
        match self.path.as_str() {
            "/" => format!("{SEPARATOR}{tail}"),
            "." => tail.to_string(),
            "@/." => format!("{RELATIVE_TO_ROOT_PREFIX}{tail}"),
            path => format!("{path}{SEPARATOR}{tail}"),
        }
    }
}

impl fmt::Display for UnixPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for UnixPath {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl FromStr for UnixPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)
    }
}

impl TryFrom<&str> for UnixPath {
    type Error = PathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::validate(value)
    }
}

impl TryFrom<String> for UnixPath {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::validate(&value)
    }
}

impl From<UnixPath> for String {
    fn from(path: UnixPath) -> Self {
        path.path
    }
}
