//! Property-based tests for the path algebra.
//!
//! Note: the codec and normalize modules carry their own small property
//! suites. This module checks the laws that tie the operations together.

use super::{common_prefix, Path, PathRelationship};
use crate::rules::Rules;
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => "[a-z0-9_-]{1,12}",
        2 => "[a-z]{1,6}\\.[a-z]{0,3}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => "\\.[a-z]{1,6}",
    ]
}

fn posix_bytes_strategy() -> impl Strategy<Value = String> {
    (
        prop::bool::ANY,
        prop::collection::vec(component_strategy(), 0..8),
        prop::bool::ANY,
    )
        .prop_map(|(absolute, parts, trailing)| {
            let mut s = String::new();
            if absolute {
                s.push('/');
            }
            s.push_str(&parts.join("/"));
            if trailing && !parts.is_empty() {
                s.push('/');
            }
            s
        })
}

fn posix_path_strategy() -> impl Strategy<Value = Path> {
    posix_bytes_strategy().prop_map(|s| Rules::POSIX.parse(&s))
}

fn windows_bytes_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(String::new()), Just("\\".to_string()), "[A-Za-z]:\\\\"],
        prop::collection::vec(component_strategy(), 0..8),
        prop::bool::ANY,
    )
        .prop_map(|(root, parts, trailing)| {
            let mut s = root;
            s.push_str(&parts.join("\\"));
            if trailing && !parts.is_empty() {
                s.push('\\');
            }
            s
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Serializing a parsed path reproduces the input when it has no
    // repeated separators
    #[test]
    fn posix_round_trip_exact(s in posix_bytes_strategy()) {
        let rules = Rules::POSIX;
        prop_assert_eq!(rules.to_bytes(&rules.parse(&s)), s.into_bytes());
    }

    #[test]
    fn windows_round_trip_exact(s in windows_bytes_strategy()) {
        let rules = Rules::WINDOWS;
        prop_assert_eq!(rules.to_bytes(&rules.parse(&s)), s.into_bytes());
    }

    // Forward slashes read under Windows rules come back as backslashes
    #[test]
    fn windows_round_trip_alternate_separator(s in windows_bytes_strategy()) {
        let rules = Rules::WINDOWS;
        let forward = s.replace('\\', "/");
        prop_assert_eq!(rules.to_bytes(&rules.parse(&forward)), s.into_bytes());
    }

    // Generated paths only use the valid alphabet
    #[test]
    fn generated_paths_are_valid(s in windows_bytes_strategy()) {
        prop_assert!(Rules::WINDOWS.valid(&Rules::WINDOWS.parse(&s)));
    }

    #[test]
    fn normalise_idempotent(path in posix_path_strategy()) {
        let once = Rules::POSIX.normalise(&path);
        let twice = Rules::POSIX.normalise(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn common_prefix_of_self(path in posix_path_strategy()) {
        prop_assert_eq!(common_prefix([&path, &path]), common_prefix([&path]));
    }

    // The common prefix is never longer than any input
    #[test]
    fn common_prefix_bounded(a in posix_path_strategy(), b in posix_path_strategy()) {
        let prefix = common_prefix([&a, &b]);
        prop_assert!(prefix.len() <= a.len());
        prop_assert!(prefix.len() <= b.len());
    }

    #[test]
    fn common_prefix_symmetric(a in posix_path_strategy(), b in posix_path_strategy()) {
        prop_assert_eq!(common_prefix([&a, &b]), common_prefix([&b, &a]));
    }

    #[test]
    fn append_empty_marks_directory(path in posix_path_strategy()) {
        let appended = path.append(&Path::empty());
        prop_assert_eq!(&appended, &path.as_directory());
        if path.has_trailing_separator() {
            prop_assert_eq!(appended, path);
        }
    }

    #[test]
    fn append_absolute_wins(a in posix_path_strategy(), b in posix_path_strategy()) {
        if b.is_absolute() {
            prop_assert_eq!(a.append(&b), b);
        }
    }

    // directory and filename split a file path in two
    #[test]
    fn directory_append_filename(path in posix_path_strategy()) {
        if !path.has_trailing_separator() && path.len() > 0 {
            prop_assert_eq!(path.directory().append(&path.filename()), path);
        }
    }

    #[test]
    fn parent_never_grows(path in posix_path_strategy()) {
        let parent = path.parent();
        prop_assert!(parent.len() <= path.len());
        prop_assert_eq!(parent.is_absolute(), path.is_absolute());
    }

    // stem + "." + extension rebuilds the filename
    #[test]
    fn split_extension_recombines(path in posix_path_strategy()) {
        let (stem, extension) = path.split_extension();
        if let Some(extension) = extension {
            let name = path.file_name_bytes().map(<[u8]>::to_vec).unwrap_or_default();
            let mut rebuilt = stem.file_name_bytes().map(<[u8]>::to_vec).unwrap_or_default();
            rebuilt.push(b'.');
            rebuilt.extend_from_slice(&extension);
            prop_assert_eq!(rebuilt, name);
            prop_assert_eq!(stem.directory(), path.directory());
        } else {
            prop_assert_eq!(stem, path);
        }
    }

    #[test]
    fn equivalence_reflexive(path in posix_path_strategy()) {
        prop_assert!(Rules::POSIX.equivalent(&path, &path));
        prop_assert!(Rules::WINDOWS.equivalent(&path, &path));
    }

    #[test]
    fn equivalence_symmetric(a in posix_path_strategy(), b in posix_path_strategy()) {
        let rules = Rules::WINDOWS;
        prop_assert_eq!(rules.equivalent(&a, &b), rules.equivalent(&b, &a));
    }

    // Path relationship is reflexive: path is always the same as itself
    #[test]
    fn path_relationship_reflexive(path in posix_path_strategy()) {
        let rel = PathRelationship::between(&Rules::POSIX, &path, &path);
        prop_assert_eq!(rel, PathRelationship::Same);
    }

    // Relationship symmetry: if A is ancestor of B, then B is descendant of A
    #[test]
    fn path_relationship_symmetric(a in posix_path_strategy(), b in posix_path_strategy()) {
        let rules = Rules::POSIX;
        let rel_ab = PathRelationship::between(&rules, &a, &b);
        let rel_ba = PathRelationship::between(&rules, &b, &a);

        let is_symmetric = matches!(
            (rel_ab, rel_ba),
            (PathRelationship::Ancestor, PathRelationship::Descendant)
                | (PathRelationship::Descendant, PathRelationship::Ancestor)
                | (PathRelationship::Same, PathRelationship::Same)
                | (PathRelationship::Unrelated, PathRelationship::Unrelated)
        );

        prop_assert!(is_symmetric, "Invalid symmetry: {:?} <-> {:?}", rel_ab, rel_ba);
    }

    // Appending relative components always yields a descendant
    #[test]
    fn append_yields_descendant(base in posix_path_strategy(), depth in 1..5usize) {
        let rules = Rules::POSIX;
        let tail: Vec<String> = (0..depth).map(|i| format!("level{i}")).collect();
        let child = base.append(&rules.parse(&tail.join("/")));

        let rel = PathRelationship::between(&rules, &child, &base);
        prop_assert_eq!(rel, PathRelationship::Descendant);
        prop_assert!(PathRelationship::is_within(&rules, &child, &base));
        prop_assert!(PathRelationship::contains(&rules, &base, &child));
    }

    #[test]
    fn search_path_join_split(paths in prop::collection::vec(posix_path_strategy(), 1..6)) {
        let rules = Rules::POSIX;
        let nonempty: Vec<Path> = paths.into_iter().filter(|p| !p.is_empty()).collect();
        prop_assume!(!nonempty.is_empty());

        let joined = rules.join_search_path(&nonempty);
        let split = rules.split_search_path(&joined);
        prop_assert_eq!(split.len(), nonempty.len());
        for (original, reparsed) in nonempty.iter().zip(&split) {
            prop_assert!(rules.equivalent(original, reparsed));
        }
    }
}
