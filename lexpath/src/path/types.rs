//! Core types for path handling.
//!
//! This module defines the structured path value and its root token. Both
//! are independent of any rule-set: a [`Path`] only records what was parsed,
//! and a [`crate::Rules`] decides how it is written back out.

/// The absolute-path prefix of a [`Path`].
///
/// # Examples
///
/// ```
/// use lexpath::{Root, Rules};
///
/// let unix = Rules::POSIX.from_bytes(b"/usr/bin");
/// assert_eq!(unix.root_token(), Some(Root::Separator));
///
/// let drive = Rules::WINDOWS.from_bytes(b"d:\\games");
/// assert_eq!(drive.root_token(), Some(Root::Drive(b'd')));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Root {
    /// A lone separator (`/` on POSIX, `\` on Windows).
    Separator,

    /// A drive letter followed by `:` and a separator.
    ///
    /// The letter is stored exactly as parsed.
    Drive(u8),
}

impl Root {
    /// Returns the drive letter, if this is a drive root.
    #[must_use]
    pub const fn drive_letter(self) -> Option<u8> {
        match self {
            Self::Separator => None,
            Self::Drive(letter) => Some(letter),
        }
    }
}

/// A parsed, immutable path.
///
/// A path is an optional [`Root`], a sequence of non-empty components, and a
/// flag recording whether it ended in a separator (so `foo/` is known to
/// name a directory while `foo` is of unknown kind).
///
/// Paths are produced by [`crate::Rules::from_bytes`], by
/// [`crate::Rules::path_from_components`], or by the decomposition and
/// composition operations. Every operation returns a new value.
///
/// # Examples
///
/// ```
/// use lexpath::{Path, Rules};
///
/// let path = Rules::POSIX.from_bytes(b"src/lib.rs");
/// assert!(path.is_relative());
/// assert_eq!(path.len(), 2);
/// assert!(!path.has_trailing_separator());
///
/// assert!(Path::empty().is_empty());
/// assert_eq!(Rules::POSIX.to_bytes(&Path::current_dir()), b"./");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path {
    pub(super) root: Option<Root>,
    pub(super) components: Vec<Vec<u8>>,
    pub(super) trailing_separator: bool,
}

impl Path {
    pub(super) fn from_parts(
        root: Option<Root>,
        components: Vec<Vec<u8>>,
        trailing_separator: bool,
    ) -> Self {
        debug_assert!(components.iter().all(|c| !c.is_empty()));
        Self {
            root,
            components,
            trailing_separator,
        }
    }

    /// The empty path: no root, no components, no trailing separator.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            root: None,
            components: Vec::new(),
            trailing_separator: false,
        }
    }

    /// The current directory: no root, no components, trailing separator.
    ///
    /// Serializes as `./` under POSIX and `.\` under Windows.
    #[must_use]
    pub const fn current_dir() -> Self {
        Self {
            root: None,
            components: Vec::new(),
            trailing_separator: true,
        }
    }

    /// Returns `true` for the empty path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none() && self.components.is_empty() && !self.trailing_separator
    }

    /// Returns `true` for the canonical current-directory path.
    #[must_use]
    pub fn is_current_dir(&self) -> bool {
        self.root.is_none() && self.components.is_empty() && self.trailing_separator
    }

    /// Returns `true` if this path is a root with no components.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.root.is_some() && self.components.is_empty()
    }

    /// Returns the root token, if any.
    #[must_use]
    pub const fn root_token(&self) -> Option<Root> {
        self.root
    }

    /// Returns `true` if the path ended in a separator.
    #[must_use]
    pub const fn has_trailing_separator(&self) -> bool {
        self.trailing_separator
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Iterates over the components as byte slices.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Rules;
    ///
    /// let path = Rules::POSIX.from_bytes(b"/a//b/");
    /// let parts: Vec<&[u8]> = path.components().collect();
    /// assert_eq!(parts, vec![&b"a"[..], &b"b"[..]]);
    /// ```
    pub fn components(&self) -> impl DoubleEndedIterator<Item = &[u8]> + ExactSizeIterator {
        self.components.iter().map(Vec::as_slice)
    }

    /// Returns the last component, if any, regardless of trailing separator.
    #[must_use]
    pub fn last_component(&self) -> Option<&[u8]> {
        self.components.last().map(Vec::as_slice)
    }
}
