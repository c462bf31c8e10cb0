//! Environment variable handling for rule-set selection.
//!
//! Two variables are consulted:
//!
//! - `LEXPATH_RULES_FILE`: path to a rules file (YAML or JSON)
//! - `LEXPATH_RULES`: name of a built-in rule-set (`posix`, `windows`,
//!   `native`)
//!
//! A rules file takes precedence over a name. With neither set, the native
//! rule-set is used.

use std::env;
use std::path::Path;

use crate::config::loader::ConfigLoader;
use crate::error::Result;
use crate::rules::Rules;

/// Name of the variable selecting a built-in rule-set.
pub const RULES_VAR: &str = "LEXPATH_RULES";

/// Name of the variable pointing at a rules file.
pub const RULES_FILE_VAR: &str = "LEXPATH_RULES_FILE";

/// Selects a rule-set from environment variables.
///
/// # Examples
///
/// ```no_run
/// use lexpath::config::EnvironmentConfig;
///
/// let rules = EnvironmentConfig::rules_from_env().unwrap();
/// println!("using {rules} rules");
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Resolve the rule-set named by the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `LEXPATH_RULES_FILE` names a file that cannot be
    /// loaded, or if `LEXPATH_RULES` names no built-in rule-set.
    pub fn rules_from_env() -> Result<Rules> {
        let name = Self::non_empty_var(RULES_VAR);
        let file = Self::non_empty_var(RULES_FILE_VAR);
        Self::resolve(name.as_deref(), file.as_deref().map(Path::new))
    }

    /// Like [`EnvironmentConfig::rules_from_env`], but falls back to the
    /// native rule-set when the environment is unusable.
    #[must_use]
    pub fn rules_or_native() -> Rules {
        Self::rules_from_env().unwrap_or_else(|e| {
            log::warn!("ignoring rules from environment: {e}");
            Rules::native()
        })
    }

    /// Resolve a rule-set from an optional name and an optional rules file.
    ///
    /// The file wins when both are given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or the name is unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexpath::config::EnvironmentConfig;
    /// use lexpath::Rules;
    ///
    /// assert_eq!(EnvironmentConfig::resolve(Some("windows"), None).unwrap(), Rules::WINDOWS);
    /// assert_eq!(EnvironmentConfig::resolve(None, None).unwrap(), Rules::native());
    /// assert!(EnvironmentConfig::resolve(Some("beos"), None).is_err());
    /// ```
    pub fn resolve(name: Option<&str>, file: Option<&Path>) -> Result<Rules> {
        if let Some(file) = file {
            if name.is_some() {
                log::debug!("{RULES_FILE_VAR} overrides {RULES_VAR}");
            }
            return ConfigLoader::load_file(file);
        }

        match name {
            Some(name) => Rules::by_name(name),
            None => Ok(Rules::native()),
        }
    }

    fn non_empty_var(key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_defaults_to_native() {
        assert_eq!(EnvironmentConfig::resolve(None, None).unwrap(), Rules::native());
    }

    #[test]
    fn test_resolve_by_name() {
        assert_eq!(
            EnvironmentConfig::resolve(Some("posix"), None).unwrap(),
            Rules::POSIX
        );
        assert_eq!(
            EnvironmentConfig::resolve(Some("Windows"), None).unwrap(),
            Rules::WINDOWS
        );
    }

    #[test]
    fn test_resolve_unknown_name() {
        let err = EnvironmentConfig::resolve(Some("os2"), None).unwrap_err();
        assert!(matches!(err, Error::UnknownRules { .. }));
    }

    #[test]
    fn test_resolve_file_wins_over_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rules.yaml");
        fs::write(&path, "name: custom\nseparator: \"|\"\nsearch_path_separator: \",\"\n").unwrap();

        let rules = EnvironmentConfig::resolve(Some("windows"), Some(&path)).unwrap();
        assert_eq!(rules.name(), "custom");
        assert_eq!(rules.separator(), b'|');
    }

    #[test]
    fn test_resolve_missing_file() {
        let result = EnvironmentConfig::resolve(None, Some(Path::new("/nonexistent/rules.yaml")));
        assert!(result.is_err());
    }
}
