//! Rules file loading.
//!
//! Rules files are YAML by default. A file whose extension is `json` is
//! read as JSON instead.

use std::fs;
use std::path::Path;

use crate::config::schema::RulesConfig;
use crate::error::Result;
use crate::rules::Rules;

/// Loads rule-sets from files and strings.
///
/// # Examples
///
/// ```
/// use lexpath::config::ConfigLoader;
///
/// let rules = ConfigLoader::from_yaml_str(
///     "name: spaced\nseparator: \"/\"\nsearch_path_separator: \" \"\n",
/// )
/// .unwrap();
/// assert_eq!(rules.name(), "spaced");
/// assert_eq!(rules.split_search_path(b"/bin /sbin").len(), 2);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a rules file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, cannot be parsed, or
    /// describes an invalid rule-set.
    pub fn load_file(path: &Path) -> Result<Rules> {
        let config = Self::load_config(path)?;
        let rules = Rules::try_from(config)?;
        log::debug!("loaded '{}' rules from {}", rules.name(), path.display());
        Ok(rules)
    }

    /// Load a rules file without validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_config(path: &Path) -> Result<RulesConfig> {
        let contents = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(serde_yaml::from_str(&contents)?)
        }
    }

    /// Parse and validate rules from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or describes an
    /// invalid rule-set.
    pub fn from_yaml_str(yaml: &str) -> Result<Rules> {
        let config: RulesConfig = serde_yaml::from_str(yaml)?;
        Rules::try_from(config)
    }

    /// Parse and validate rules from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or describes an
    /// invalid rule-set.
    pub fn from_json_str(json: &str) -> Result<Rules> {
        let config: RulesConfig = serde_json::from_str(json)?;
        Rules::try_from(config)
    }
}
