//! Configuration schema definitions.
//!
//! A rules file describes a custom rule-set. Byte-valued fields are written
//! as one-character strings so that files stay readable:
//!
//! ```yaml
//! name: plan9
//! separator: "/"
//! root: separator
//! reserved: "#"
//! case_sensitive: true
//! search_path_separator: " "
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::config::validator::{ascii_byte, ConfigValidator};
use crate::error::Error;
use crate::rules::{RootSyntax, Rules};

/// Serializable description of a [`Rules`] value.
///
/// # Examples
///
/// ```
/// use lexpath::config::RulesConfig;
/// use lexpath::Rules;
///
/// let config = RulesConfig::from(&Rules::WINDOWS);
/// assert_eq!(config.separator, "\\");
/// assert_eq!(Rules::try_from(config).unwrap(), Rules::WINDOWS);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Name reported by [`Rules::name`].
    pub name: String,

    /// Canonical separator (one ASCII character).
    pub separator: String,

    /// Separator accepted on input only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_separator: Option<String>,

    /// Accepted root syntax.
    #[serde(default = "default_root")]
    pub root: RootSyntax,

    /// Characters forbidden in components, beyond separators and NUL.
    #[serde(default)]
    pub reserved: String,

    /// Whether every control byte (below 0x20) is reserved.
    #[serde(default)]
    pub reserve_control: bool,

    /// Whether comparison distinguishes ASCII case.
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,

    /// Delimiter between search-path entries.
    pub search_path_separator: String,

    /// Quote character for search-path entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_path_quote: Option<String>,
}

fn default_root() -> RootSyntax {
    RootSyntax::Separator
}

fn default_case_sensitive() -> bool {
    true
}

fn byte_string(byte: u8) -> String {
    char::from(byte).to_string()
}

impl From<&Rules> for RulesConfig {
    fn from(rules: &Rules) -> Self {
        Self {
            name: rules.name().to_string(),
            separator: byte_string(rules.separator()),
            alternate_separator: rules.alternate_separator().map(byte_string),
            root: rules.root_syntax(),
            reserved: rules.reserved().iter().map(|b| char::from(*b)).collect(),
            reserve_control: rules.reserves_control_bytes(),
            case_sensitive: rules.is_case_sensitive(),
            search_path_separator: byte_string(rules.search_path_separator()),
            search_path_quote: rules.search_path_quote().map(byte_string),
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::from(&Rules::POSIX)
    }
}

impl TryFrom<RulesConfig> for Rules {
    type Error = Error;

    fn try_from(config: RulesConfig) -> Result<Self, Self::Error> {
        ConfigValidator::validate(&config)?;

        let alternate_separator = config
            .alternate_separator
            .as_deref()
            .map(|s| ascii_byte("alternate_separator", s))
            .transpose()?;
        let search_path_quote = config
            .search_path_quote
            .as_deref()
            .map(|s| ascii_byte("search_path_quote", s))
            .transpose()?;

        Ok(Rules {
            separator: ascii_byte("separator", &config.separator)?,
            search_path_separator: ascii_byte(
                "search_path_separator",
                &config.search_path_separator,
            )?,
            alternate_separator,
            search_path_quote,
            root_syntax: config.root,
            reserved: Cow::Owned(config.reserved.into_bytes()),
            reserve_control: config.reserve_control,
            case_sensitive: config.case_sensitive,
            name: Cow::Owned(config.name),
        })
    }
}
