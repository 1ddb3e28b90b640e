//! Property-based tests for path handling.
//!
//! Note: The normalize, types and relative modules already carry inline
//! property tests. This module focuses on relationships across all path
//! kinds and on longer append/relativize chains.

use super::relationship::PathRelationship;
use super::types::{PathKind, UnixPath};
use proptest::prelude::*;

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = UnixPath> {
    prop::collection::vec(path_component_strategy(), 0..8).prop_map(|parts| {
        UnixPath::root()
            .appending_components(parts)
            .expect("generated components are valid")
    })
}

fn any_path_strategy() -> impl Strategy<Value = UnixPath> {
    let segment = prop_oneof![
        3 => path_component_strategy(),
        1 => Just("..".to_string()),
        1 => Just(".".to_string()),
    ];
    (
        prop_oneof![Just(""), Just("/"), Just("@/")],
        prop::collection::vec(segment, 0..8),
    )
        .prop_map(|(prefix, parts)| {
            UnixPath::validate(&format!("{prefix}{}", parts.join("/")))
                .expect("generated paths are valid")
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 5000,
        .. ProptestConfig::default()
    })]

    // Path relationship is reflexive: path is always identical to itself
    #[test]
    fn path_relationship_reflexive(path in any_path_strategy()) {
        prop_assert_eq!(PathRelationship::between(&path, &path), PathRelationship::Same);
    }

    // Containment is transitive (if A contains B and B contains C, then A contains C)
    #[test]
    fn path_containment_transitive(base in absolute_path_strategy(), parts1 in 1..5usize, parts2 in 1..5usize) {
        let path_b = base
            .appending_components((0..parts1).map(|i| format!("sub{i}")))
            .unwrap();
        let path_c = path_b
            .appending_components((0..parts2).map(|i| format!("deep{i}")))
            .unwrap();

        prop_assert_eq!(PathRelationship::between(&base, &path_b), PathRelationship::Ancestor);
        prop_assert_eq!(PathRelationship::between(&path_b, &path_c), PathRelationship::Ancestor);
        prop_assert_eq!(PathRelationship::between(&base, &path_c), PathRelationship::Ancestor);
    }

    // Relationship symmetry: if A is ancestor of B, then B is descendant of A
    #[test]
    fn path_relationship_symmetric(path1 in any_path_strategy(), path2 in any_path_strategy()) {
        let rel_12 = PathRelationship::between(&path1, &path2);
        let rel_21 = PathRelationship::between(&path2, &path1);

        let is_symmetric = matches!(
            (rel_12, rel_21),
            (PathRelationship::Ancestor, PathRelationship::Descendant)
                | (PathRelationship::Descendant, PathRelationship::Ancestor)
                | (PathRelationship::Same, PathRelationship::Same)
                | (PathRelationship::Unrelated, PathRelationship::Unrelated)
        );

        prop_assert!(is_symmetric, "Invalid symmetry: {:?} <-> {:?}", rel_12, rel_21);
    }

    // Paths of different kinds never relate
    #[test]
    fn path_kinds_never_relate(path1 in any_path_strategy(), path2 in any_path_strategy()) {
        if path1.kind() != path2.kind() {
            prop_assert_eq!(
                PathRelationship::between(&path1, &path2),
                PathRelationship::Unrelated
            );
        }
    }

    // is_within and contains are consistent
    #[test]
    fn path_is_within_contains_consistent(path1 in any_path_strategy(), path2 in any_path_strategy()) {
        let within = PathRelationship::is_within(&path1, &path2);
        let contains = PathRelationship::contains(&path2, &path1);

        prop_assert_eq!(within, contains);
    }

    // An ancestor's relative path to its descendant never climbs
    #[test]
    fn path_descendant_relative_has_no_parent_refs(base in absolute_path_strategy(), depth in 1..5usize) {
        let child = base
            .appending_components((0..depth).map(|i| format!("level{i}")))
            .unwrap();

        let rel = child.relative_to(&base).unwrap();
        prop_assert_eq!(rel.components().len(), depth);
        prop_assert!(!rel.components().contains(&".."));

        let back = base.relative_to(&child).unwrap();
        prop_assert_eq!(back.components(), vec![".."; depth]);
    }

    // The parent of a non-root path is its nearest ancestor
    #[test]
    fn path_parent_is_ancestor(path in any_path_strategy()) {
        let parent = path.parent_directory();
        prop_assert_eq!(parent.kind(), path.kind());
        if path.kind() == PathKind::Absolute && !path.is_root() {
            prop_assert!(parent.is_ancestor_of(&path));
        }
    }

    // Serde round-trips through the canonical string
    #[test]
    fn path_json_round_trip(path in any_path_strategy()) {
        let json = serde_json::to_string(&path).unwrap();
        let back: UnixPath = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, path);
    }
}
