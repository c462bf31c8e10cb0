//! Structural projections of a path.
//!
//! None of these consult a rule-set: they only look at the parsed root,
//! components and trailing-separator flag.

use super::types::Path;

/// `.` and `..` never carry an extension.
pub(super) fn is_dot_entry(component: &[u8]) -> bool {
    component == b"." || component == b".."
}

/// Positions of the dots that may start an extension: every `.` except a
/// leading one.
pub(super) fn extension_dots(component: &[u8]) -> impl Iterator<Item = usize> + '_ {
    let skip = is_dot_entry(component);
    component
        .iter()
        .enumerate()
        .skip(1)
        .filter(move |(_, b)| !skip && **b == b'.')
        .map(|(i, _)| i)
}

impl Path {
    /// Returns `true` if the path has a root.
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        self.root.is_some()
    }

    /// Returns `true` if the path has no root.
    #[must_use]
    pub const fn is_relative(&self) -> bool {
        self.root.is_none()
    }

    /// The root alone, or the empty path if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Path, Rules};
    ///
    /// let root = Rules::WINDOWS.parse("C:\\Windows\\System32").root();
    /// assert_eq!(Rules::WINDOWS.to_bytes(&root), b"C:\\");
    /// assert_eq!(Rules::WINDOWS.parse("relative").root(), Path::empty());
    /// ```
    #[must_use]
    pub fn root(&self) -> Path {
        match self.root {
            Some(root) => Path::from_parts(Some(root), Vec::new(), true),
            None => Path::empty(),
        }
    }

    /// Every component but the last, as a directory.
    ///
    /// A relative path with at most one component yields the current
    /// directory; an absolute one yields its root.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Rules;
    ///
    /// let posix = Rules::POSIX;
    /// assert_eq!(posix.to_bytes(&posix.parse("/foo/bar").directory()), b"/foo/");
    /// assert_eq!(posix.to_bytes(&posix.parse("").directory()), b"./");
    /// assert_eq!(posix.to_bytes(&posix.parse("/").directory()), b"/");
    /// ```
    #[must_use]
    pub fn directory(&self) -> Path {
        match self.components.split_last() {
            Some((_, init)) if !init.is_empty() => Path::from_parts(self.root, init.to_vec(), true),
            _ => match self.root {
                Some(root) => Path::from_parts(Some(root), Vec::new(), true),
                None => Path::current_dir(),
            },
        }
    }

    /// The directory containing this path; the same as [`Path::directory`].
    ///
    /// A root is its own parent.
    #[must_use]
    pub fn parent(&self) -> Path {
        self.directory()
    }

    /// This path marked as a directory.
    ///
    /// The empty path becomes the current directory.
    #[must_use]
    pub fn as_directory(&self) -> Path {
        Path::from_parts(self.root, self.components.clone(), true)
    }

    /// The last component, unless the path ends in a separator.
    #[must_use]
    pub fn file_name_bytes(&self) -> Option<&[u8]> {
        if self.trailing_separator {
            None
        } else {
            self.last_component()
        }
    }

    /// The last component as a relative single-component path, or the empty
    /// path if there is no filename.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Rules;
    ///
    /// let posix = Rules::POSIX;
    /// assert_eq!(posix.to_bytes(&posix.parse("/foo/bar.txt").filename()), b"bar.txt");
    /// assert!(posix.parse("/foo/").filename().is_empty());
    /// ```
    #[must_use]
    pub fn filename(&self) -> Path {
        match self.file_name_bytes() {
            Some(name) => Path::from_parts(None, vec![name.to_vec()], false),
            None => Path::empty(),
        }
    }

    /// The filename without its extension.
    #[must_use]
    pub fn basename(&self) -> Path {
        self.filename().split_extension().0
    }

    /// Splits the extension off the filename.
    ///
    /// The extension is whatever follows the last `.` that is not the first
    /// byte of the filename. It may be empty (`foo.`). Directories, paths
    /// without a filename, and names without such a dot are returned
    /// unchanged with no extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Rules;
    ///
    /// let posix = Rules::POSIX;
    /// let (stem, ext) = posix.parse("foo.a/bar.b.c").split_extension();
    /// assert_eq!(posix.to_bytes(&stem), b"foo.a/bar.b");
    /// assert_eq!(ext.as_deref(), Some(&b"c"[..]));
    ///
    /// let (stem, ext) = posix.parse(".bashrc").split_extension();
    /// assert_eq!(posix.to_bytes(&stem), b".bashrc");
    /// assert_eq!(ext, None);
    /// ```
    #[must_use]
    pub fn split_extension(&self) -> (Path, Option<Vec<u8>>) {
        let Some(name) = self.file_name_bytes() else {
            return (self.clone(), None);
        };
        let Some(dot) = extension_dots(name).last() else {
            return (self.clone(), None);
        };

        let extension = name[dot + 1..].to_vec();
        let mut stem = self.clone();
        if let Some(last) = stem.components.last_mut() {
            last.truncate(dot);
        }
        (stem, Some(extension))
    }

    /// The extension of the filename, if any.
    #[must_use]
    pub fn extension(&self) -> Option<Vec<u8>> {
        self.split_extension().1
    }
}
