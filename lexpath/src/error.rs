//! Error types for the lexpath library.
//!
//! The path algebra itself is total and never fails. Errors only arise at
//! the edges: building a path from caller-supplied components, checking a
//! parsed path against a rule-set, and loading rule-sets from configuration.

use thiserror::Error;

/// Result type alias for operations that may fail with a lexpath error.
///
/// # Examples
///
/// ```
/// use lexpath::{Error, Result};
///
/// fn example_operation() -> Result<u8> {
///     Ok(b'/')
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the lexpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path component contains a byte the rule-set forbids.
    #[error("invalid component {component:?}: {reason}")]
    InvalidComponent {
        /// The offending component, lossily decoded.
        component: String,
        /// The reason the component is invalid.
        reason: String,
    },

    /// A path root does not match the rule-set's root syntax.
    #[error("invalid root: {reason}")]
    InvalidRoot {
        /// The reason the root is invalid.
        reason: String,
    },

    /// No built-in rule-set carries the requested name.
    #[error("unknown rules '{name}' (expected posix, windows or native)")]
    UnknownRules {
        /// The name that was looked up.
        name: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A YAML rules file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A JSON rules file could not be parsed.
    #[error("configuration error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error reports a forbidden byte inside a component.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::Error;
    ///
    /// let err = Error::InvalidComponent {
    ///     component: "a\0b".to_string(),
    ///     reason: "contains a null byte".to_string(),
    /// };
    /// assert!(err.is_invalid_component());
    /// ```
    #[must_use]
    pub fn is_invalid_component(&self) -> bool {
        matches!(self, Self::InvalidComponent { .. })
    }

    /// Check if error came from reading or validating a rules configuration.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::Json(_) | Self::Validation { .. } | Self::Io(_)
        )
    }
}
