//! Search-path handling (`PATH`-style lists of paths).

use super::types::Path;
use crate::rules::Rules;

impl Rules {
    /// Split a search path into its entries.
    ///
    /// Every entry is parsed with [`Rules::from_bytes`]. Empty entries,
    /// including leading and trailing ones, stand for the current directory.
    /// When the rule-set defines a quote byte, separators inside a quoted
    /// span do not split and the quotes themselves are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Rules;
    ///
    /// let entries = Rules::POSIX.split_search_path(b"a::b:c");
    /// assert_eq!(entries.len(), 4);
    /// assert!(entries[1].is_current_dir());
    ///
    /// let entries = Rules::WINDOWS.split_search_path(b"\"C:\\odd;dir\";C:\\bin");
    /// assert_eq!(entries.len(), 2);
    /// assert_eq!(Rules::WINDOWS.to_bytes(&entries[0]), b"C:\\odd;dir");
    /// ```
    #[must_use]
    pub fn split_search_path(&self, bytes: &[u8]) -> Vec<Path> {
        let mut entries = Vec::new();
        let mut current = Vec::new();
        let mut quoted = false;

        for &byte in bytes {
            if self.search_path_quote == Some(byte) {
                quoted = !quoted;
            } else if byte == self.search_path_separator && !quoted {
                entries.push(self.search_entry(&current));
                current.clear();
            } else {
                current.push(byte);
            }
        }
        entries.push(self.search_entry(&current));

        log::trace!(
            "split {}-byte search path into {} entries under {} rules",
            bytes.len(),
            entries.len(),
            self.name
        );
        entries
    }

    /// Join paths into a search path; the inverse of
    /// [`Rules::split_search_path`].
    ///
    /// Entries containing the search-path separator are quoted when the
    /// rule-set has a quote byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Rules;
    ///
    /// let posix = Rules::POSIX;
    /// let joined = posix.join_search_path(&[posix.parse("/bin"), posix.parse("/usr/bin")]);
    /// assert_eq!(joined, b"/bin:/usr/bin");
    /// ```
    #[must_use]
    pub fn join_search_path<'a, I>(&self, paths: I) -> Vec<u8>
    where
        I: IntoIterator<Item = &'a Path>,
    {
        let mut out = Vec::new();
        for (i, path) in paths.into_iter().enumerate() {
            if i > 0 {
                out.push(self.search_path_separator);
            }
            let bytes = self.to_bytes(path);
            match self.search_path_quote {
                Some(quote) if bytes.contains(&self.search_path_separator) => {
                    out.push(quote);
                    out.extend_from_slice(&bytes);
                    out.push(quote);
                }
                _ => out.extend_from_slice(&bytes),
            }
        }
        out
    }

    fn search_entry(&self, segment: &[u8]) -> Path {
        if segment.is_empty() {
            Path::current_dir()
        } else {
            self.from_bytes(segment)
        }
    }
}
