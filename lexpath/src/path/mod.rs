//! Lexical path handling driven by platform rule-sets.
//!
//! This module provides the [`Path`] value and the algebra over it. Nothing
//! here touches the filesystem.
//!
//! # Key Concepts
//!
//! ## Parsing and Serialization
//!
//! [`crate::Rules::from_bytes`] turns any byte sequence into a [`Path`]; it
//! never fails. [`crate::Rules::to_bytes`] writes a path back using the
//! canonical separator. Bytes a platform forbids survive parsing and are
//! reported by [`crate::Rules::valid`].
//!
//! ## Decomposition
//!
//! `root`, `directory`, `parent`, `filename`, `basename` and
//! `split_extension` are pure projections that need no rule-set.
//!
//! ## Composition
//!
//! [`Path::append`] joins paths (an absolute right-hand side wins), and
//! [`common_prefix`] finds the longest shared leading path, byte for byte.
//!
//! ## Normalization
//!
//! [`crate::Rules::normalise`] canonicalizes separators and drive letters,
//! and [`crate::Rules::equivalent`] compares normal forms with the rule-set's
//! case folding. `..` is never resolved.
//!
//! # Examples
//!
//! ```
//! use lexpath::Rules;
//!
//! let windows = Rules::WINDOWS;
//! let path = windows.parse("c:/Projects/lexpath/src/lib.rs");
//!
//! assert!(path.is_absolute());
//! assert_eq!(windows.to_bytes(&path.directory()), b"c:\\Projects\\lexpath\\src\\");
//! assert_eq!(path.extension().as_deref(), Some(&b"rs"[..]));
//! assert!(windows.equivalent(&path, &windows.parse("C:\\PROJECTS\\LEXPATH\\SRC\\LIB.RS")));
//! ```
//!
//! # Path Relationships
//!
//! ```
//! use lexpath::{PathRelationship, Rules};
//!
//! let posix = Rules::POSIX;
//! let parent = posix.parse("/home/user");
//! let child = posix.parse("/home/user/project");
//!
//! let rel = PathRelationship::between(&posix, &parent, &child);
//! assert_eq!(rel, PathRelationship::Ancestor);
//! assert!(rel.is_hierarchical());
//! ```

mod codec;
mod compose;
mod decompose;
mod normalize;
pub mod relationship;
mod search;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use compose::common_prefix;
pub use relationship::PathRelationship;
pub use types::{Path, Root};
