//! Combining paths.
//!
//! Composition is byte-exact and independent of any rule-set: no case
//! folding, no separator rewriting.

use super::decompose::extension_dots;
use super::types::{Path, Root};

impl Path {
    /// Appends `other` to this path.
    ///
    /// An absolute `other` replaces this path entirely. Otherwise this path
    /// is treated as a directory prefix, whatever its own trailing flag, and
    /// the result takes `other`'s trailing flag. Appending the empty path
    /// marks the result as a directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Path, Rules};
    ///
    /// let posix = Rules::POSIX;
    /// let joined = posix.parse("/usr").append(&posix.parse("lib/"));
    /// assert_eq!(posix.to_bytes(&joined), b"/usr/lib/");
    ///
    /// let replaced = posix.parse("/a/").append(&posix.parse("/b"));
    /// assert_eq!(posix.to_bytes(&replaced), b"/b");
    ///
    /// let dir = posix.parse("src").append(&Path::empty());
    /// assert_eq!(posix.to_bytes(&dir), b"src/");
    /// ```
    #[must_use]
    pub fn append(&self, other: &Path) -> Path {
        if other.is_absolute() {
            return other.clone();
        }

        let mut components = Vec::with_capacity(self.components.len() + other.components.len());
        components.extend(self.components.iter().cloned());
        components.extend(other.components.iter().cloned());

        let trailing_separator = other.is_empty() || other.trailing_separator;
        Path::from_parts(self.root, components, trailing_separator)
    }

    /// Returns the relative remainder of this path below `base`.
    ///
    /// Roots must be identical and `base`'s components must be a leading run
    /// of this path's components, compared byte for byte. When nothing
    /// remains the result is the current directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Rules;
    ///
    /// let posix = Rules::POSIX;
    /// let rest = posix.parse("/srv/www/index.html").strip_prefix(&posix.parse("/srv/")).unwrap();
    /// assert_eq!(posix.to_bytes(&rest), b"www/index.html");
    /// assert!(posix.parse("/srv").strip_prefix(&posix.parse("/etc")).is_none());
    /// ```
    #[must_use]
    pub fn strip_prefix(&self, base: &Path) -> Option<Path> {
        if self.root != base.root || !self.components.starts_with(&base.components) {
            return None;
        }

        let rest = self.components[base.components.len()..].to_vec();
        if rest.is_empty() {
            Some(Path::current_dir())
        } else {
            Some(Path::from_parts(None, rest, self.trailing_separator))
        }
    }
}

/// One unit of comparison for [`common_prefix`].
///
/// Directory components compare whole; a filename compares per extension
/// segment (`baz`, `.txt`, `.gz`). A directory never equals a filename
/// segment even when the bytes agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Root(Root),
    Dir(&'a [u8]),
    Name(&'a [u8]),
}

fn segments(path: &Path) -> Vec<Segment<'_>> {
    let mut out = Vec::with_capacity(path.components.len() + 2);
    if let Some(root) = path.root {
        out.push(Segment::Root(root));
    }

    let file = path.file_name_bytes();
    let dir_count = path.components.len() - usize::from(file.is_some());
    out.extend(path.components[..dir_count].iter().map(|c| Segment::Dir(c.as_slice())));

    if let Some(name) = file {
        let mut start = 0;
        for dot in extension_dots(name) {
            out.push(Segment::Name(&name[start..dot]));
            start = dot;
        }
        out.push(Segment::Name(&name[start..]));
    }

    out
}

fn rebuild(segments: &[Segment<'_>]) -> Path {
    let mut root = None;
    let mut components = Vec::new();
    let mut name = Vec::new();

    for segment in segments {
        match *segment {
            Segment::Root(r) => root = Some(r),
            Segment::Dir(c) => components.push(c.to_vec()),
            Segment::Name(part) => name.extend_from_slice(part),
        }
    }

    if name.is_empty() {
        let trailing_separator = root.is_some() || !components.is_empty();
        Path::from_parts(root, components, trailing_separator)
    } else {
        components.push(name);
        Path::from_parts(root, components, false)
    }
}

/// The longest path that every input starts with.
///
/// Comparison is byte-exact. An empty input, or inputs whose roots differ,
/// give the empty path.
///
/// # Examples
///
/// ```
/// use lexpath::{common_prefix, Rules};
///
/// let posix = Rules::POSIX;
/// let paths = [
///     posix.parse("/foo/bar/baz.txt.gz"),
///     posix.parse("/foo/bar/baz.txt.gz.bar"),
/// ];
/// assert_eq!(posix.to_bytes(&common_prefix(&paths)), b"/foo/bar/baz.txt.gz");
///
/// let paths = [posix.parse("/foo"), posix.parse("/foo/")];
/// assert_eq!(posix.to_bytes(&common_prefix(&paths)), b"/");
/// ```
#[must_use]
pub fn common_prefix<'a, I>(paths: I) -> Path
where
    I: IntoIterator<Item = &'a Path>,
{
    let mut paths = paths.into_iter();
    let Some(first) = paths.next() else {
        return Path::empty();
    };

    let mut common = segments(first);
    for path in paths {
        if common.is_empty() {
            break;
        }
        let other = segments(path);
        let shared = common
            .iter()
            .zip(&other)
            .take_while(|(a, b)| a == b)
            .count();
        common.truncate(shared);
    }

    rebuild(&common)
}
