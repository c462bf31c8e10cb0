//! Configuration validation.
//!
//! This module checks that a [`RulesConfig`] describes a usable rule-set
//! before it is turned into a [`crate::Rules`] value.

use crate::config::schema::RulesConfig;
use crate::error::{Error, Result};

/// Parse a field that must hold exactly one non-NUL ASCII character.
pub(crate) fn ascii_byte(field: &str, value: &str) -> Result<u8> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() && *byte != 0 => Ok(*byte),
        [] => Err(Error::Validation {
            field: field.into(),
            message: "Cannot be empty".into(),
        }),
        _ => Err(Error::Validation {
            field: field.into(),
            message: format!("Must be a single ASCII character, got {value:?}"),
        }),
    }
}

/// Validates rules configuration.
///
/// # Examples
///
/// ```
/// use lexpath::config::{ConfigValidator, RulesConfig};
///
/// let config = RulesConfig::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let broken = RulesConfig {
///     search_path_separator: "/".to_string(),
///     ..RulesConfig::default()
/// };
/// assert!(ConfigValidator::validate(&broken).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete rules configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &RulesConfig) -> Result<()> {
        Self::validate_name(&config.name)?;

        let separator = Self::validate_separator("separator", &config.separator)?;
        let alternate = match config.alternate_separator.as_deref() {
            Some(value) => {
                let alternate = Self::validate_separator("alternate_separator", value)?;
                if alternate == separator {
                    return Err(Error::Validation {
                        field: "alternate_separator".into(),
                        message: "Must differ from separator".into(),
                    });
                }
                Some(alternate)
            }
            None => None,
        };
        let is_separator = |byte: u8| byte == separator || alternate == Some(byte);

        if config.root.allows_drive() && is_separator(b':') {
            return Err(Error::Validation {
                field: "root".into(),
                message: "Drive roots cannot be used when ':' is a separator".into(),
            });
        }

        let search_separator =
            ascii_byte("search_path_separator", &config.search_path_separator)?;
        if is_separator(search_separator) {
            return Err(Error::Validation {
                field: "search_path_separator".into(),
                message: "Cannot be a path separator".into(),
            });
        }

        if let Some(value) = config.search_path_quote.as_deref() {
            let quote = ascii_byte("search_path_quote", value)?;
            if quote == search_separator || is_separator(quote) {
                return Err(Error::Validation {
                    field: "search_path_quote".into(),
                    message: "Must differ from every separator".into(),
                });
            }
        }

        if !config.reserved.is_ascii() {
            return Err(Error::Validation {
                field: "reserved".into(),
                message: "Reserved characters must be ASCII".into(),
            });
        }

        Ok(())
    }

    /// Checks that the name is non-empty after trimming, contains no null
    /// bytes, and is not longer than 255 characters.
    fn validate_name(name: &str) -> Result<()> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: "name".into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if trimmed.contains('\0') {
            return Err(Error::Validation {
                field: "name".into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        if trimmed.len() > 255 {
            return Err(Error::Validation {
                field: "name".into(),
                message: "Cannot exceed 255 characters".into(),
            });
        }

        Ok(())
    }

    // Separators may not be letters, digits or '.', which would make
    // dot entries and drive letters ambiguous.
    fn validate_separator(field: &str, value: &str) -> Result<u8> {
        let byte = ascii_byte(field, value)?;
        if byte.is_ascii_alphanumeric() || byte == b'.' {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("{value:?} cannot be used as a separator"),
            });
        }
        Ok(byte)
    }
}
