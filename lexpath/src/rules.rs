//! Platform rule-sets.
//!
//! A [`Rules`] value captures everything platform-specific about path
//! syntax: which bytes separate components, what a root looks like, which
//! bytes may never appear in a component, whether comparison folds case, and
//! how search paths are delimited. The two built-in rule-sets are constants;
//! custom rule-sets can be loaded through [`crate::config`].

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The shape of an absolute-path prefix accepted by a rule-set.
///
/// # Examples
///
/// ```
/// use lexpath::{RootSyntax, Rules};
///
/// assert_eq!(Rules::POSIX.root_syntax(), RootSyntax::Separator);
/// assert!(Rules::WINDOWS.root_syntax().allows_drive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootSyntax {
    /// Every path is relative.
    None,
    /// A single leading separator.
    Separator,
    /// A single leading separator, or a drive letter followed by `:` and a
    /// separator.
    SeparatorOrDrive,
}

impl RootSyntax {
    /// Returns `true` if a leading separator denotes a root.
    #[must_use]
    pub const fn allows_separator(self) -> bool {
        matches!(self, Self::Separator | Self::SeparatorOrDrive)
    }

    /// Returns `true` if `X:` followed by a separator denotes a root.
    #[must_use]
    pub const fn allows_drive(self) -> bool {
        matches!(self, Self::SeparatorOrDrive)
    }
}

impl fmt::Display for RootSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Separator => write!(f, "separator"),
            Self::SeparatorOrDrive => write!(f, "separator_or_drive"),
        }
    }
}

/// An immutable description of one platform's lexical path conventions.
///
/// Every operation that needs platform knowledge takes a `Rules` explicitly;
/// nothing is looked up from global state.
///
/// # Examples
///
/// ```
/// use lexpath::Rules;
///
/// let path = Rules::WINDOWS.from_bytes(b"c:/Users/me");
/// assert_eq!(Rules::WINDOWS.to_bytes(&path), b"c:\\Users\\me");
/// assert_eq!(Rules::POSIX.separator(), b'/');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rules {
    pub(crate) name: Cow<'static, str>,
    pub(crate) separator: u8,
    pub(crate) alternate_separator: Option<u8>,
    pub(crate) root_syntax: RootSyntax,
    pub(crate) reserved: Cow<'static, [u8]>,
    pub(crate) reserve_control: bool,
    pub(crate) case_sensitive: bool,
    pub(crate) search_path_separator: u8,
    pub(crate) search_path_quote: Option<u8>,
}

impl Rules {
    /// POSIX path syntax: `/` separated, rooted at `/`, case-sensitive.
    pub const POSIX: Rules = Rules {
        name: Cow::Borrowed("posix"),
        separator: b'/',
        alternate_separator: None,
        root_syntax: RootSyntax::Separator,
        reserved: Cow::Borrowed(b"\0/"),
        reserve_control: false,
        case_sensitive: true,
        search_path_separator: b':',
        search_path_quote: None,
    };

    /// Windows path syntax: `\` separated (with `/` accepted on input),
    /// rooted at `\` or `X:\`, case-insensitive.
    pub const WINDOWS: Rules = Rules {
        name: Cow::Borrowed("windows"),
        separator: b'\\',
        alternate_separator: Some(b'/'),
        root_syntax: RootSyntax::SeparatorOrDrive,
        reserved: Cow::Borrowed(b"/\\?*:|\"<>"),
        reserve_control: true,
        case_sensitive: false,
        search_path_separator: b';',
        search_path_quote: Some(b'"'),
    };

    /// Returns the rule-set of the platform this crate was compiled for.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Rules;
    ///
    /// let native = Rules::native();
    /// if cfg!(windows) {
    ///     assert_eq!(native, Rules::WINDOWS);
    /// } else {
    ///     assert_eq!(native, Rules::POSIX);
    /// }
    /// ```
    #[must_use]
    pub fn native() -> Self {
        if cfg!(windows) {
            Self::WINDOWS
        } else {
            Self::POSIX
        }
    }

    /// Looks up a built-in rule-set by name.
    ///
    /// Recognizes: "posix", "windows", "native" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRules`] if the name is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Rules;
    ///
    /// assert_eq!(Rules::by_name("Windows").unwrap(), Rules::WINDOWS);
    /// assert!(Rules::by_name("vms").is_err());
    /// ```
    pub fn by_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "posix" => Ok(Self::POSIX),
            "windows" => Ok(Self::WINDOWS),
            "native" => Ok(Self::native()),
            _ => Err(Error::UnknownRules {
                name: name.to_string(),
            }),
        }
    }

    /// Returns the name of this rule-set.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the canonical separator, the only one ever produced on output.
    #[must_use]
    pub const fn separator(&self) -> u8 {
        self.separator
    }

    /// Returns the separator accepted on input in addition to the canonical one.
    #[must_use]
    pub const fn alternate_separator(&self) -> Option<u8> {
        self.alternate_separator
    }

    /// Returns the accepted root syntax.
    #[must_use]
    pub const fn root_syntax(&self) -> RootSyntax {
        self.root_syntax
    }

    /// Returns the explicitly reserved bytes.
    ///
    /// Control bytes are reserved on top of these when
    /// [`Rules::reserves_control_bytes`] is set.
    #[must_use]
    pub fn reserved(&self) -> &[u8] {
        &self.reserved
    }

    /// Returns `true` if every byte below 0x20 is reserved.
    #[must_use]
    pub const fn reserves_control_bytes(&self) -> bool {
        self.reserve_control
    }

    /// Returns `true` if comparison distinguishes ASCII case.
    #[must_use]
    pub const fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Returns the byte that delimits entries of a search path.
    #[must_use]
    pub const fn search_path_separator(&self) -> u8 {
        self.search_path_separator
    }

    /// Returns the byte that quotes search-path entries, if any.
    #[must_use]
    pub const fn search_path_quote(&self) -> Option<u8> {
        self.search_path_quote
    }

    /// Returns `true` if `byte` is the canonical or the alternate separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Rules;
    ///
    /// assert!(Rules::WINDOWS.is_separator(b'/'));
    /// assert!(Rules::WINDOWS.is_separator(b'\\'));
    /// assert!(!Rules::POSIX.is_separator(b'\\'));
    /// ```
    #[must_use]
    pub fn is_separator(&self, byte: u8) -> bool {
        byte == self.separator || self.alternate_separator == Some(byte)
    }

    /// Returns `true` if `byte` may not appear inside a component.
    ///
    /// Separators and the null byte are always reserved.
    #[must_use]
    pub fn is_reserved(&self, byte: u8) -> bool {
        byte == 0
            || self.is_separator(byte)
            || (self.reserve_control && byte < 0x20)
            || self.reserved.contains(&byte)
    }

    /// Folds a byte for comparison under this rule-set's case sensitivity.
    #[must_use]
    pub fn fold(&self, byte: u8) -> u8 {
        if self.case_sensitive {
            byte
        } else {
            byte.to_ascii_uppercase()
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_constants() {
        let rules = Rules::POSIX;
        assert_eq!(rules.name(), "posix");
        assert_eq!(rules.separator(), b'/');
        assert_eq!(rules.alternate_separator(), None);
        assert_eq!(rules.root_syntax(), RootSyntax::Separator);
        assert!(rules.is_case_sensitive());
        assert_eq!(rules.search_path_separator(), b':');
        assert_eq!(rules.search_path_quote(), None);
    }

    #[test]
    fn test_windows_constants() {
        let rules = Rules::WINDOWS;
        assert_eq!(rules.name(), "windows");
        assert_eq!(rules.separator(), b'\\');
        assert_eq!(rules.alternate_separator(), Some(b'/'));
        assert!(rules.root_syntax().allows_drive());
        assert!(!rules.is_case_sensitive());
        assert_eq!(rules.search_path_separator(), b';');
    }

    #[test]
    fn test_posix_reserved() {
        assert!(Rules::POSIX.is_reserved(0));
        assert!(Rules::POSIX.is_reserved(b'/'));
        assert!(!Rules::POSIX.is_reserved(b'\\'));
        assert!(!Rules::POSIX.is_reserved(b':'));
        assert!(!Rules::POSIX.is_reserved(0x01));
    }

    #[test]
    fn test_windows_reserved() {
        for byte in b"/\\?*:|\"<>" {
            assert!(Rules::WINDOWS.is_reserved(*byte), "{byte} should be reserved");
        }
        for byte in 0u8..0x20 {
            assert!(Rules::WINDOWS.is_reserved(byte));
        }
        assert!(!Rules::WINDOWS.is_reserved(b'a'));
        assert!(!Rules::WINDOWS.is_reserved(b'.'));
        assert!(!Rules::WINDOWS.is_reserved(b' '));
    }

    #[test]
    fn test_fold() {
        assert_eq!(Rules::POSIX.fold(b'a'), b'a');
        assert_eq!(Rules::WINDOWS.fold(b'a'), b'A');
        assert_eq!(Rules::WINDOWS.fold(b'1'), b'1');
        assert_eq!(Rules::WINDOWS.fold(0xE9), 0xE9);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(Rules::by_name("posix").unwrap(), Rules::POSIX);
        assert_eq!(Rules::by_name("WINDOWS").unwrap(), Rules::WINDOWS);
        assert_eq!(Rules::by_name(" native ").unwrap(), Rules::native());

        let err = Rules::by_name("amiga").unwrap_err();
        assert!(matches!(err, Error::UnknownRules { ref name } if name == "amiga"));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Rules::POSIX), "posix");
        assert_eq!(format!("{}", RootSyntax::SeparatorOrDrive), "separator_or_drive");
    }

    #[test]
    fn test_root_syntax_flags() {
        assert!(!RootSyntax::None.allows_separator());
        assert!(!RootSyntax::None.allows_drive());
        assert!(RootSyntax::Separator.allows_separator());
        assert!(!RootSyntax::Separator.allows_drive());
        assert!(RootSyntax::SeparatorOrDrive.allows_separator());
    }
}
