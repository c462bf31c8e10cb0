#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # lexpath
//!
//! A library for lexical manipulation of filesystem paths under explicit
//! platform rules.
//!
//! Paths are byte-oriented values: they are parsed, decomposed, combined
//! and compared without ever consulting the filesystem. Every operation
//! that depends on platform syntax takes a [`Rules`] value, so POSIX and
//! Windows paths can be handled side by side on any host.
//!
//! ## Core Types
//!
//! - [`Rules`] and [`RootSyntax`]: platform rule-sets
//! - [`Path`] and [`Root`]: the path value
//! - [`PathRelationship`]: ancestor / descendant checks
//! - [`RulesConfig`] and [`ConfigLoader`]: custom rule-sets from YAML or JSON
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use lexpath::{common_prefix, Rules};
//!
//! let posix = Rules::POSIX;
//! let a = posix.parse("/usr/local/bin/tool");
//! let b = posix.parse("/usr/local/lib/libtool.so");
//!
//! assert_eq!(posix.to_bytes(&common_prefix([&a, &b])), b"/usr/local/");
//! assert_eq!(a.filename(), posix.parse("tool"));
//!
//! let windows = Rules::WINDOWS;
//! let path = windows.parse("c:/Temp/Report.TXT");
//! assert_eq!(windows.to_bytes(&path), b"c:\\Temp\\Report.TXT");
//! assert!(windows.equivalent(&path, &windows.parse("C:\\temp\\report.txt")));
//! ```
//!
//! Search paths split into their entries, with empty entries standing for
//! the current directory:
//!
//! ```
//! use lexpath::Rules;
//!
//! let entries = Rules::POSIX.split_search_path(b"/bin::/usr/bin");
//! assert_eq!(entries.len(), 3);
//! assert!(entries[1].is_current_dir());
//! ```

pub mod config;
pub mod error;
pub mod path;
pub mod rules;

// Re-export key types at crate root for convenience
pub use config::{ConfigLoader, ConfigValidator, EnvironmentConfig, RulesConfig};
pub use error::{Error, Result};
pub use path::{common_prefix, Path, PathRelationship, Root};
pub use rules::{RootSyntax, Rules};
