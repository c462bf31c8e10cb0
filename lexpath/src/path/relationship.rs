//! Path relationship checking.
//!
//! This module determines whether one path lies above or below another. The
//! comparison is lexical: both paths are normalized under a rule-set, case is
//! folded as that rule-set requires, and trailing separators are ignored.
//! `..` is compared as an ordinary component.

use super::types::Path;
use crate::rules::Rules;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use lexpath::{PathRelationship, Rules};
///
/// let posix = Rules::POSIX;
/// let parent = posix.parse("/home/user");
/// let child = posix.parse("/home/user/project");
///
/// assert_eq!(
///     PathRelationship::between(&posix, &parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are equivalent once trailing separators are ignored.
    Same,

    /// Neither path is above the other, or their roots differ.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths under `rules`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{PathRelationship, Rules};
    ///
    /// let windows = Rules::WINDOWS;
    /// let rel = PathRelationship::between(
    ///     &windows,
    ///     &windows.parse("C:\\Users"),
    ///     &windows.parse("c:/users/me/"),
    /// );
    /// assert_eq!(rel, PathRelationship::Ancestor);
    ///
    /// let posix = Rules::POSIX;
    /// let rel = PathRelationship::between(&posix, &posix.parse("/a"), &posix.parse("/b"));
    /// assert_eq!(rel, PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(rules: &Rules, path1: &Path, path2: &Path) -> Self {
        let p1 = rules.normalise(path1);
        let p2 = rules.normalise(path2);

        if !rules.same_root(p1.root_token(), p2.root_token()) {
            return Self::Unrelated;
        }

        let shared = p1
            .components()
            .zip(p2.components())
            .take_while(|(a, b)| rules.same_component(a, b))
            .count();

        match (shared == p1.len(), shared == p2.len()) {
            (true, true) => Self::Same,
            (true, false) => Self::Ancestor,
            (false, true) => Self::Descendant,
            (false, false) => Self::Unrelated,
        }
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::PathRelationship;
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
    pub fn is_within(rules: &Rules, path: &Path, directory: &Path) -> bool {
        let rel = Self::between(rules, path, directory);
        matches!(rel, Self::Descendant | Self::Same)
    }

    /// Check if a path contains another path (ancestor or same).
    #[must_use]
    pub fn contains(rules: &Rules, path: &Path, other: &Path) -> bool {
        let rel = Self::between(rules, path, other);
        matches!(rel, Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{PathRelationship, Rules};
    ///
    /// let posix = Rules::POSIX;
    /// let desc = PathRelationship::Ancestor.description(
    ///     &posix,
    ///     &posix.parse("/a"),
    ///     &posix.parse("/a/b"),
    /// );
    /// assert_eq!(desc, "/a is an ancestor of /a/b");
    /// ```
    #[must_use]
    pub fn description(&self, rules: &Rules, path1: &Path, path2: &Path) -> String {
        let p1 = rules.to_string_lossy(path1);
        let p2 = rules.to_string_lossy(path2);
        match self {
            Self::Ancestor => format!("{p1} is an ancestor of {p2}"),
            Self::Descendant => format!("{p1} is a descendant of {p2}"),
            Self::Same => format!("{p1} and {p2} are the same path"),
            Self::Unrelated => format!("{p1} and {p2} are unrelated paths"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn between(a: &str, b: &str) -> PathRelationship {
        let rules = Rules::POSIX;
        PathRelationship::between(&rules, &rules.parse(a), &rules.parse(b))
    }

    #[test]
    fn test_relationship_ancestor() {
        assert_eq!(between("/a", "/a/b"), PathRelationship::Ancestor);
        assert_eq!(between("/a/b", "/a/b/c/d"), PathRelationship::Ancestor);
        assert_eq!(between("/", "/a"), PathRelationship::Ancestor);
    }

    #[test]
    fn test_relationship_descendant() {
        assert_eq!(between("/a/b", "/a"), PathRelationship::Descendant);
        assert_eq!(between("/a/b/c/d", "/a/b"), PathRelationship::Descendant);
    }

    #[test]
    fn test_relationship_same() {
        assert_eq!(between("/a", "/a"), PathRelationship::Same);
        assert_eq!(between("/a//b/c", "/a/b/c"), PathRelationship::Same);
    }

    #[test]
    fn test_relationship_unrelated() {
        assert_eq!(between("/a", "/b"), PathRelationship::Unrelated);
        assert_eq!(between("/a/b", "/a/c"), PathRelationship::Unrelated);
        assert_eq!(between("/a", "a"), PathRelationship::Unrelated);
    }

    #[test]
    fn test_relationship_with_trailing_slash() {
        assert_eq!(between("/a/", "/a"), PathRelationship::Same);
        assert_eq!(between("/a", "/a/"), PathRelationship::Same);
    }

    #[test]
    fn test_relationship_parent_refs_not_resolved() {
        assert_eq!(between("/a/b/..", "/a"), PathRelationship::Descendant);
        assert_eq!(between("/a/../b", "/b"), PathRelationship::Unrelated);
    }

    #[test]
    fn test_relationship_case_folding() {
        let windows = Rules::WINDOWS;
        let rel = PathRelationship::between(
            &windows,
            &windows.parse("C:\\DATA"),
            &windows.parse("c:\\data\\x"),
        );
        assert_eq!(rel, PathRelationship::Ancestor);

        assert_eq!(between("/DATA", "/data/x"), PathRelationship::Unrelated);
    }

    #[test]
    fn test_is_hierarchical() {
        assert!(PathRelationship::Ancestor.is_hierarchical());
        assert!(PathRelationship::Descendant.is_hierarchical());
        assert!(PathRelationship::Same.is_hierarchical());
        assert!(!PathRelationship::Unrelated.is_hierarchical());
    }

    #[test]
    fn test_is_within_and_contains() {
        let rules = Rules::POSIX;
        let a = rules.parse("/a");
        let ab = rules.parse("/a/b");
        let b = rules.parse("/b");

        assert!(PathRelationship::is_within(&rules, &ab, &a));
        assert!(PathRelationship::is_within(&rules, &a, &a));
        assert!(!PathRelationship::is_within(&rules, &a, &ab));
        assert!(!PathRelationship::is_within(&rules, &a, &b));

        assert!(PathRelationship::contains(&rules, &a, &ab));
        assert!(PathRelationship::contains(&rules, &a, &a));
        assert!(!PathRelationship::contains(&rules, &ab, &a));
    }

    #[test]
    fn test_description() {
        let rules = Rules::POSIX;
        let a = rules.parse("/a");
        let b = rules.parse("/b");

        let desc = PathRelationship::Unrelated.description(&rules, &a, &b);
        assert!(desc.contains("/a"));
        assert!(desc.contains("/b"));
        assert!(desc.contains("unrelated"));

        let desc = PathRelationship::Same.description(&rules, &a, &a);
        assert!(desc.contains("same"));
    }
}
