//! Custom rule-sets loaded from configuration.
//!
//! The built-in [`crate::Rules::POSIX`] and [`crate::Rules::WINDOWS`]
//! constants cover most needs. This module lets a rule-set be described in a
//! YAML or JSON file instead:
//!
//! - [`RulesConfig`]: the serializable schema
//! - [`ConfigValidator`]: consistency checks run before conversion
//! - [`ConfigLoader`]: file and string loading
//! - [`EnvironmentConfig`]: selection through `LEXPATH_RULES` and
//!   `LEXPATH_RULES_FILE`
//!
//! # Precedence
//!
//! When resolving from the environment (highest to lowest):
//!
//! 1. A rules file named by `LEXPATH_RULES_FILE`
//! 2. A built-in rule-set named by `LEXPATH_RULES`
//! 3. The native rule-set
//!
//! # Examples
//!
//! ```
//! use lexpath::config::{ConfigLoader, RulesConfig};
//! use lexpath::Rules;
//!
//! let yaml = serde_yaml::to_string(&RulesConfig::from(&Rules::POSIX)).unwrap();
//! let rules = ConfigLoader::from_yaml_str(&yaml).unwrap();
//! assert_eq!(rules, Rules::POSIX);
//! ```

pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::RulesConfig;
pub use validator::ConfigValidator;
