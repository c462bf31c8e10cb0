//! Conversion between raw bytes and [`Path`] values.
//!
//! Parsing is total: every byte sequence yields exactly one path. Bytes a
//! rule-set forbids are carried through and reported by [`Rules::valid`]
//! instead of failing the parse.

use super::types::{Path, Root};
use crate::error::{Error, Result};
use crate::rules::Rules;

impl Rules {
    /// Parse raw bytes into a path.
    ///
    /// Repeated separators collapse; a final separator sets the trailing
    /// flag. `.` and `..` are ordinary components here.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Rules;
    ///
    /// let path = Rules::POSIX.from_bytes(b"/usr//local/");
    /// assert!(path.is_absolute());
    /// assert_eq!(path.len(), 2);
    /// assert!(path.has_trailing_separator());
    ///
    /// // Drive roots only exist under Windows rules
    /// let posix = Rules::POSIX.from_bytes(b"C:/x");
    /// assert!(posix.is_relative());
    /// let windows = Rules::WINDOWS.from_bytes(b"C:/x");
    /// assert!(windows.is_absolute());
    /// ```
    #[must_use]
    pub fn from_bytes(&self, bytes: &[u8]) -> Path {
        let (root, rest) = self.split_root(bytes);

        let trailing_separator = if rest.is_empty() {
            root.is_some()
        } else {
            rest.last().is_some_and(|b| self.is_separator(*b))
        };

        let components = rest
            .split(|b| self.is_separator(*b))
            .filter(|segment| !segment.is_empty())
            .map(<[u8]>::to_vec)
            .collect();

        Path::from_parts(root, components, trailing_separator)
    }

    /// Parse a string into a path; shorthand for [`Rules::from_bytes`].
    #[must_use]
    pub fn parse(&self, s: &str) -> Path {
        self.from_bytes(s.as_bytes())
    }

    /// Serialize a path using the canonical separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Rules;
    ///
    /// let path = Rules::WINDOWS.from_bytes(b"C:/Program Files//App/");
    /// assert_eq!(Rules::WINDOWS.to_bytes(&path), b"C:\\Program Files\\App\\");
    /// assert_eq!(Rules::POSIX.to_bytes(&Rules::POSIX.from_bytes(b"/")), b"/");
    /// ```
    #[must_use]
    pub fn to_bytes(&self, path: &Path) -> Vec<u8> {
        let sep = self.separator;
        let body: usize = path.components.iter().map(|c| c.len() + 1).sum();
        let mut out = Vec::with_capacity(body + 3);

        match path.root {
            Some(Root::Separator) => out.push(sep),
            Some(Root::Drive(letter)) => out.extend_from_slice(&[letter, b':', sep]),
            None => {}
        }

        if path.components.is_empty() {
            if path.root.is_none() && path.trailing_separator {
                out.extend_from_slice(&[b'.', sep]);
            }
            return out;
        }

        for (i, component) in path.components.iter().enumerate() {
            if i > 0 {
                out.push(sep);
            }
            out.extend_from_slice(component);
        }
        if path.trailing_separator {
            out.push(sep);
        }

        out
    }

    /// Serialize a path and decode it as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn to_string_lossy(&self, path: &Path) -> String {
        String::from_utf8_lossy(&self.to_bytes(path)).into_owned()
    }

    /// Returns `true` if the path's root and components are all acceptable
    /// under this rule-set.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Rules;
    ///
    /// assert!(Rules::WINDOWS.valid(&Rules::WINDOWS.from_bytes(b"C:\\ok\\file.txt")));
    /// assert!(!Rules::WINDOWS.valid(&Rules::WINDOWS.from_bytes(b"what?.txt")));
    /// assert!(Rules::POSIX.valid(&Rules::POSIX.from_bytes(b"what?.txt")));
    /// assert!(!Rules::POSIX.valid(&Rules::POSIX.from_bytes(b"a\0b")));
    /// ```
    #[must_use]
    pub fn valid(&self, path: &Path) -> bool {
        self.validate(path).is_ok()
    }

    /// Like [`Rules::valid`], but reports what is wrong.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoot`] if the root does not match this
    /// rule-set's root syntax, or [`Error::InvalidComponent`] naming the
    /// first component holding a reserved byte.
    pub fn validate(&self, path: &Path) -> Result<()> {
        self.check_root(path.root)?;
        for component in &path.components {
            if let Some(byte) = component.iter().find(|b| self.is_reserved(**b)) {
                return Err(Error::InvalidComponent {
                    component: String::from_utf8_lossy(component).into_owned(),
                    reason: format!("contains reserved byte 0x{byte:02x}"),
                });
            }
        }
        Ok(())
    }

    /// Build a path from caller-supplied components.
    ///
    /// Unlike parsing, this rejects structurally impossible input: empty
    /// components, components holding a separator or a null byte, and roots
    /// this rule-set cannot express. Other reserved bytes are left for
    /// [`Rules::valid`] to report.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] or [`Error::InvalidRoot`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::{Root, Rules};
    ///
    /// let path = Rules::POSIX
    ///     .path_from_components(Some(Root::Separator), ["etc", "hosts"], false)
    ///     .unwrap();
    /// assert_eq!(Rules::POSIX.to_bytes(&path), b"/etc/hosts");
    ///
    /// assert!(Rules::POSIX.path_from_components(None, ["a/b"], false).is_err());
    /// assert!(Rules::POSIX.path_from_components(Some(Root::Drive(b'C')), ["x"], false).is_err());
    /// ```
    pub fn path_from_components<I>(
        &self,
        root: Option<Root>,
        components: I,
        trailing_separator: bool,
    ) -> Result<Path>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        self.check_root(root)?;

        let mut parts = Vec::new();
        for component in components {
            let component = component.as_ref();
            if component.is_empty() {
                return Err(Error::InvalidComponent {
                    component: String::new(),
                    reason: "component is empty".to_string(),
                });
            }
            if let Some(byte) = component
                .iter()
                .find(|b| **b == 0 || self.is_separator(**b))
            {
                return Err(Error::InvalidComponent {
                    component: String::from_utf8_lossy(component).into_owned(),
                    reason: if *byte == 0 {
                        "contains a null byte".to_string()
                    } else {
                        format!("contains separator '{}'", char::from(*byte))
                    },
                });
            }
            parts.push(component.to_vec());
        }

        // A bare root always ends in its separator
        let trailing_separator = trailing_separator || (root.is_some() && parts.is_empty());
        Ok(Path::from_parts(root, parts, trailing_separator))
    }

    fn split_root<'a>(&self, bytes: &'a [u8]) -> (Option<Root>, &'a [u8]) {
        match bytes {
            [letter, b':', sep, rest @ ..]
                if self.root_syntax.allows_drive()
                    && letter.is_ascii_alphabetic()
                    && self.is_separator(*sep) =>
            {
                (Some(Root::Drive(*letter)), rest)
            }
            [sep, rest @ ..] if self.root_syntax.allows_separator() && self.is_separator(*sep) => {
                (Some(Root::Separator), rest)
            }
            _ => (None, bytes),
        }
    }

    fn check_root(&self, root: Option<Root>) -> Result<()> {
        match root {
            None => Ok(()),
            Some(Root::Separator) if self.root_syntax.allows_separator() => Ok(()),
            Some(Root::Drive(letter))
                if self.root_syntax.allows_drive() && letter.is_ascii_alphabetic() =>
            {
                Ok(())
            }
            Some(Root::Separator) => Err(Error::InvalidRoot {
                reason: format!("{} rules do not accept separator roots", self.name),
            }),
            Some(Root::Drive(letter)) => Err(Error::InvalidRoot {
                reason: format!(
                    "{} rules do not accept drive root '{}:'",
                    self.name,
                    char::from(letter)
                ),
            }),
        }
    }
}
