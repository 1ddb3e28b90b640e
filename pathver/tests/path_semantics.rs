//! Integration tests for syntactic path handling.
//!
//! These exercise the public [`UnixPath`] API end to end: classification of
//! raw input, normalization, derived attributes, appending, relativization
//! and ancestry. No test touches the file system.

mod common;

use common::path;
use pathver::{PathError, PathKind, PathRelationship, UnixPath};

// =============================================================================
// Classification and normalization
// =============================================================================

#[test]
fn test_validate_classifies_by_prefix() {
    assert_eq!(path("/usr/bin").kind(), PathKind::Absolute);
    assert_eq!(path("usr/bin").kind(), PathKind::Relative);
    assert_eq!(path("@/usr/bin").kind(), PathKind::RelativeToRoot);
}

#[test]
fn test_validate_rejects_tilde() {
    assert_eq!(
        UnixPath::validate("~/project"),
        Err(PathError::StartsWithTilde("~/project".to_string()))
    );
    assert!(UnixPath::validate("~").is_err());
}

#[test]
fn test_absolute_normalization_table() {
    let cases = [
        ("/", "/"),
        ("//", "/"),
        ("/a//b///c/", "/a/b/c"),
        ("/a/./b/../c", "/a/c"),
        ("/../a", "/a"),
        ("/a/b/../../..", "/"),
        ("/.hidden/./x", "/.hidden/x"),
    ];
    for (raw, expected) in cases {
        assert_eq!(path(raw).as_str(), expected, "normalizing {raw}");
    }
}

#[test]
fn test_relative_normalization_table() {
    let cases = [
        ("", "."),
        (".", "."),
        ("./", "."),
        ("a/..", "."),
        ("a/../..", ".."),
        ("../../a/../b", "../../b"),
        ("./a/./b/", "a/b"),
        ("a//b", "a/b"),
    ];
    for (raw, expected) in cases {
        assert_eq!(path(raw).as_str(), expected, "normalizing {raw:?}");
    }
}

#[test]
fn test_relative_to_root_normalization() {
    assert_eq!(path("@/").as_str(), "@/.");
    assert_eq!(path("@/a/../b/").as_str(), "@/b");
    assert_eq!(path("@/../shared").as_str(), "@/../shared");
    assert_eq!(UnixPath::relative_to_root("a/b").unwrap().as_str(), "@/a/b");
}

#[test]
fn test_explicit_constructors_enforce_kind() {
    assert!(matches!(
        UnixPath::absolute("usr"),
        Err(PathError::InvalidAbsolutePath(_))
    ));
    assert!(matches!(
        UnixPath::relative("/usr"),
        Err(PathError::InvalidRelativePath(_))
    ));
    assert!(matches!(
        UnixPath::relative("@/usr"),
        Err(PathError::InvalidRelativePath(_))
    ));
}

#[test]
fn test_from_base() {
    let base = UnixPath::absolute("/repo/App").unwrap();
    assert_eq!(
        UnixPath::from_base("../Shared", &base).unwrap().as_str(),
        "/repo/Shared"
    );
    assert_eq!(UnixPath::from_base("/etc", &base).unwrap().as_str(), "/etc");
    assert!(UnixPath::from_base("x", &path("rel")).is_err());
}

#[test]
fn test_display_matches_canonical_string() {
    let p = path("/a/./b/");
    assert_eq!(p.to_string(), "/a/b");
    assert_eq!(String::from(p), "/a/b");
}

// =============================================================================
// Derived attributes
// =============================================================================

#[test]
fn test_derived_attributes_of_absolute_file() {
    let p = path("/src/lib/archive.tar.gz");
    assert_eq!(p.dirname(), "/src/lib");
    assert_eq!(p.basename(), "archive.tar.gz");
    assert_eq!(p.basename_without_extension(), "archive.tar");
    assert_eq!(p.suffix(), Some(".gz"));
    assert_eq!(p.extension(), Some("gz"));
    assert_eq!(p.components(), vec!["/", "src", "lib", "archive.tar.gz"]);
}

#[test]
fn test_dot_files_have_no_extension() {
    for raw in [".bashrc", "/home/.profile", "..", "trailing."] {
        assert_eq!(path(raw).extension(), None, "extension of {raw}");
    }
}

#[test]
fn test_parent_directory_chain() {
    let mut p = path("/a/b/c");
    let mut seen = vec![p.to_string()];
    while !p.is_root() {
        p = p.parent_directory();
        seen.push(p.to_string());
    }
    assert_eq!(seen, vec!["/a/b/c", "/a/b", "/a", "/"]);
}

#[test]
fn test_parent_of_relative_climbs_above_start() {
    assert_eq!(path("a").parent_directory().as_str(), ".");
    assert_eq!(path(".").parent_directory().as_str(), "..");
    assert_eq!(path("..").parent_directory().as_str(), "../..");
    assert_eq!(path("@/a").parent_directory().as_str(), "@/.");
}

// =============================================================================
// Appending and resolving
// =============================================================================

#[test]
fn test_appending_components() {
    let base = path("/opt");
    let joined = base
        .appending_components(["tools", ".", "bin", "..", "lib"])
        .unwrap();
    assert_eq!(joined.as_str(), "/opt/tools/lib");

    assert!(matches!(
        base.appending_component("a/b"),
        Err(PathError::InvalidComponent(_))
    ));
}

#[test]
fn test_appending_relative_path() {
    assert_eq!(
        path("/a/b").appending(&path("c/d")).unwrap().as_str(),
        "/a/b/c/d"
    );
    assert_eq!(path("/a/b").appending(&path("../c")).unwrap().as_str(), "/a/c");
    assert_eq!(path("x").appending(&path("../../y")).unwrap().as_str(), "../y");
    assert_eq!(path("@/.").appending(&path("src")).unwrap().as_str(), "@/src");
    assert!(path("/a").appending(&path("/b")).is_err());
    assert_eq!(path("/a").appending(&path("@/b")).unwrap().as_str(), "/a/@/b");
}

#[test]
fn test_resolve_against_anchors() {
    let root = UnixPath::absolute("/work/repo").unwrap();
    let manifest = UnixPath::absolute("/work/repo/Packages/Core").unwrap();

    let cases = [
        ("@/Shared/Util", "/work/repo/Shared/Util"),
        ("@/../sibling", "/work/sibling"),
        ("Sources", "/work/repo/Packages/Core/Sources"),
        ("../Other", "/work/repo/Packages/Other"),
        ("/abs/path", "/abs/path"),
    ];
    for (raw, expected) in cases {
        let resolved = path(raw).resolve(&root, &manifest).unwrap();
        assert_eq!(resolved.as_str(), expected, "resolving {raw}");
        assert!(resolved.is_absolute());
    }

    assert!(matches!(
        path("x").resolve(&path("rel"), &manifest),
        Err(PathError::NotAbsolute(_))
    ));
}

// =============================================================================
// Relativization and ancestry
// =============================================================================

#[test]
fn test_relative_to_table() {
    let cases = [
        ("/a/b/c", "/a", "b/c"),
        ("/a", "/a/b/c", "../.."),
        ("/a/x", "/a/b", "../x"),
        ("/a", "/a", "."),
        ("/", "/a/b", "../.."),
        ("/a/b", "/", "a/b"),
        ("/usr2", "/usr", "../usr2"),
    ];
    for (target, base, expected) in cases {
        let rel = path(target).relative_to(&path(base)).unwrap();
        assert_eq!(rel.as_str(), expected, "{target} relative to {base}");
        assert_eq!(
            path(base).appending(&rel).unwrap(),
            path(target),
            "round trip of {target} from {base}"
        );
    }
}

#[test]
fn test_relative_to_requires_absolute() {
    assert!(matches!(
        path("a").relative_to(&path("/a")),
        Err(PathError::NotAbsolute(_))
    ));
    assert!(path("/a").relative_to(&path("@/a")).is_err());
}

#[test]
fn test_ancestry_respects_component_boundaries() {
    assert!(path("/usr").is_ancestor_of(&path("/usr/lib")));
    assert!(!path("/usr").is_ancestor_of(&path("/usr2")));
    assert!(!path("/usr/lib").is_ancestor_of(&path("/usr")));
    assert!(path("/usr").is_ancestor_of_or_equal(&path("/usr")));
    assert!(path("/usr/lib").is_descendant_of_or_equal(&path("/usr")));
}

#[test]
fn test_ancestry_never_crosses_kinds() {
    assert!(!path("a").is_ancestor_of(&path("/a/b")));
    assert!(!path("@/a").is_ancestor_of(&path("a/b")));
    assert!(!UnixPath::root().is_ancestor_of(&path("a")));
    assert_eq!(
        PathRelationship::between(&path("/a"), &path("@/a")),
        PathRelationship::Unrelated
    );
}

#[test]
fn test_relative_ancestry_with_parent_references() {
    assert!(path(".").is_ancestor_of(&path("a")));
    assert!(!path(".").is_ancestor_of(&path("..")));
    assert!(!path("..").is_ancestor_of(&path("../..")));
    assert!(path("..").is_ancestor_of(&path("../a")));
}

#[test]
fn test_relationship_descriptions() {
    let a = path("/a");
    let ab = path("/a/b");
    let rel = PathRelationship::between(&ab, &a);
    assert_eq!(rel, PathRelationship::Descendant);
    assert!(rel.is_hierarchical());
    assert_eq!(rel.description(&ab, &a), "/a/b is a descendant of /a");
    assert!(PathRelationship::is_within(&ab, &a));
    assert!(PathRelationship::contains(&a, &ab));
}

#[test]
fn test_paths_sort_by_canonical_string() {
    let mut paths: Vec<UnixPath> = ["/b", "a", "@/c", "/a/b", "/a"]
        .into_iter()
        .map(path)
        .collect();
    paths.sort();
    let sorted: Vec<&str> = paths.iter().map(UnixPath::as_str).collect();
    assert_eq!(sorted, vec!["/a", "/a/b", "/b", "@/c", "a"]);
}
