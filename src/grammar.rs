//! Version grammar compilation
//!
//! A grammar is a regular expression with exactly five capture groups:
//!
//! | group | meaning        | example for `6.2.3-rc1.5+somemetadata` |
//! |-------|----------------|-----------------------------------------|
//! | 1     | major          | `6`                                     |
//! | 2     | minor          | `2`                                     |
//! | 3     | patch          | `3`                                     |
//! | 4     | pre-release    | `-rc1.5` (separator included)           |
//! | 5     | build metadata | `+somemetadata` (separator included)    |
//!
//! Matching is always done against the whole input, whether or not the
//! pattern carries its own `^`/`$` anchors.

use regex::Regex;
use tracing::debug;

use crate::config::GrammarSource;
use crate::error::{Result, SemverError};

/// The built-in grammar.
///
/// The metadata class really is `A-z`, so `_` and a few punctuation
/// characters are accepted after the `+`.
pub const DEFAULT_PATTERN: &str =
    r"^(\d+)\.(\d+)\.(\d+)(-[a-zA-Z0-9.]*[^.+-])?(\+[a-zA-z0-9]+)?$";

/// Number of capture groups every grammar must define.
pub const GROUP_COUNT: usize = 5;

/// An immutable, compiled version grammar.
#[derive(Debug, Clone)]
pub struct VersionGrammar {
    pattern: String,
    anchored: Regex,
}

/// Raw text of the five groups from a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionCaptures<'h> {
    pub major: Option<&'h str>,
    pub minor: Option<&'h str>,
    pub patch: Option<&'h str>,
    /// Pre-release group including its leading separator
    pub pre_release: Option<&'h str>,
    /// Build metadata group including its leading separator
    pub build: Option<&'h str>,
}

impl VersionGrammar {
    /// Compile a grammar from pattern text.
    ///
    /// # Returns
    /// * `Ok(VersionGrammar)` - The compiled grammar
    /// * `Err(SemverError::Grammar)` - If the pattern is not a valid regular expression
    /// * `Err(SemverError::GroupCount)` - If it does not have exactly five capture groups
    pub fn compile(pattern: &str) -> Result<Self> {
        let raw = Regex::new(pattern)?;

        // captures_len counts the implicit whole-match group
        let found = raw.captures_len() - 1;
        if found != GROUP_COUNT {
            return Err(SemverError::GroupCount {
                expected: GROUP_COUNT,
                found,
            });
        }

        // Wrap the parsed form rather than the source text: a trailing
        // `(?x)` comment would otherwise swallow the closing anchor.
        let hir = regex_syntax::Parser::new().parse(pattern)?;
        let anchored = Regex::new(&format!("^(?:{})$", hir))?;
        debug!(pattern, "compiled version grammar");

        Ok(VersionGrammar {
            pattern: pattern.to_string(),
            anchored,
        })
    }

    /// Compile the built-in grammar.
    pub fn builtin() -> Result<Self> {
        Self::compile(DEFAULT_PATTERN)
    }

    /// Load the pattern text from `source` and compile it.
    pub fn from_source(source: &GrammarSource) -> Result<Self> {
        debug!(source = %source.describe(), "loading version grammar");
        let pattern = source.load()?;
        Self::compile(&pattern)
    }

    /// The pattern text this grammar was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns true if the whole input matches the grammar.
    pub fn is_match(&self, input: &str) -> bool {
        self.anchored.is_match(input)
    }

    /// Match the whole input and return the text of the five groups.
    pub fn captures<'h>(&self, input: &'h str) -> Option<VersionCaptures<'h>> {
        let caps = self.anchored.captures(input)?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str());

        Some(VersionCaptures {
            major: group(1),
            minor: group(2),
            patch: group(3),
            pre_release: group(4),
            build: group(5),
        })
    }
}
