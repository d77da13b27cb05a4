//! Validate, parse and compare semantic-version-like identifiers.
//!
//! The grammar is a regular expression with five capture groups (major,
//! minor, patch, pre-release, build metadata). It is chosen once at startup,
//! from `SEMVER_REGEX`, `SEMVER_REGEX_FILE`, a `semver.toml` file or the
//! built-in default, and injected into a [`VersionParser`].

pub mod config;
pub mod domain;
pub mod error;
pub mod grammar;
pub mod logging;
pub mod parser;
pub mod ui;

pub use config::{Config, GrammarSource};
pub use domain::{Compatibility, ParsedVersion, PreReleaseFlags, PreReleaseType};
pub use error::{Result, SemverError};
pub use grammar::{VersionGrammar, DEFAULT_PATTERN};
pub use parser::VersionParser;
