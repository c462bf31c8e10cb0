//! Path normalization and equivalence.
//!
//! Normalization is purely lexical:
//! - The path is re-read under the rule-set, so separators, roots and
//!   trailing separators take that rule-set's canonical shape, even for a
//!   path parsed under other rules
//! - Drive letters are uppercased
//! - A lone `.` becomes the canonical current directory
//!
//! `..` is never collapsed. Whether `a/b/..` names `a` depends on whether `b`
//! is a symlink, which only the filesystem knows.

use super::types::{Path, Root};
use crate::rules::Rules;

impl Rules {
    /// Normalize a path under this rule-set.
    ///
    /// The result is idempotent: normalizing it again changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Rules;
    ///
    /// let windows = Rules::WINDOWS;
    /// let path = windows.normalise(&windows.parse("c://Temp//x.TXT"));
    /// assert_eq!(windows.to_bytes(&path), b"C:\\Temp\\x.TXT");
    ///
    /// // `..` is preserved
    /// let posix = Rules::POSIX;
    /// let path = posix.normalise(&posix.parse("a/../b"));
    /// assert_eq!(posix.to_bytes(&path), b"a/../b");
    ///
    /// assert!(posix.normalise(&posix.parse(".")).is_current_dir());
    /// ```
    #[must_use]
    pub fn normalise(&self, path: &Path) -> Path {
        // Re-reading the serialized form re-splits components and re-detects
        // the root under these rules
        let mut normal = self.from_bytes(&self.to_bytes(path));

        if let Some(Root::Drive(letter)) = normal.root {
            normal.root = Some(Root::Drive(letter.to_ascii_uppercase()));
        }

        if normal.root.is_none() && normal.components.len() == 1 && normal.components[0] == b"." {
            return Path::current_dir();
        }

        normal
    }

    /// Returns `true` if two paths normalize to the same structure, folding
    /// case when this rule-set is case-insensitive.
    ///
    /// Equivalence is syntactic: `foo/bar/../baz` is not equivalent to
    /// `foo/baz`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Rules;
    ///
    /// let windows = Rules::WINDOWS;
    /// assert!(windows.equivalent(
    ///     &windows.parse("c://a//bc.txt"),
    ///     &windows.parse("C:\\A\\BC.TXT"),
    /// ));
    ///
    /// let posix = Rules::POSIX;
    /// assert!(!posix.equivalent(&posix.parse("foo/bar/../baz"), &posix.parse("foo/baz")));
    /// assert!(!posix.equivalent(&posix.parse("A"), &posix.parse("a")));
    /// ```
    #[must_use]
    pub fn equivalent(&self, a: &Path, b: &Path) -> bool {
        let a = self.normalise(a);
        let b = self.normalise(b);

        a.trailing_separator == b.trailing_separator
            && self.same_root(a.root, b.root)
            && a.components.len() == b.components.len()
            && a
                .components
                .iter()
                .zip(&b.components)
                .all(|(x, y)| self.same_component(x, y))
    }

    pub(crate) fn same_root(&self, a: Option<Root>, b: Option<Root>) -> bool {
        match (a, b) {
            (None, None) | (Some(Root::Separator), Some(Root::Separator)) => true,
            (Some(Root::Drive(x)), Some(Root::Drive(y))) => self.fold(x) == self.fold(y),
            _ => false,
        }
    }

    pub(crate) fn same_component(&self, a: &[u8], b: &[u8]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| self.fold(*x) == self.fold(*y))
    }
}
