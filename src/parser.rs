//! Version validation, parsing and compatibility checks
//!
//! [`VersionParser`] owns one compiled [`VersionGrammar`] and never changes
//! it, so a single parser can be shared freely between threads.
//!
//! ```rust
//! use light_semver::{Compatibility, VersionParser};
//!
//! let parser = VersionParser::builtin().unwrap();
//!
//! assert!(parser.is_valid("1.2.1-alpha1+githash"));
//! assert!(!parser.is_valid("1.2.7-"));
//!
//! let version = parser.parse("2.0.0-beta").unwrap();
//! assert!(version.is_beta);
//!
//! assert_eq!(parser.is_compatible("1.1.1", "1.1.2"), Compatibility::Compatible);
//! assert_eq!(parser.is_compatible("", "1.0.0"), Compatibility::Indeterminate);
//! ```

use crate::config::{Config, GrammarSource};
use crate::domain::{Compatibility, ParsedVersion};
use crate::error::Result;
use crate::grammar::VersionGrammar;

/// Validates, parses and compares version strings against one grammar
#[derive(Debug, Clone)]
pub struct VersionParser {
    grammar: VersionGrammar,
}

/// A whole-input match with its numeric groups already converted.
struct Decomposed<'h> {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<&'h str>,
    build: Option<&'h str>,
}

impl VersionParser {
    /// Create a parser around an already compiled grammar
    pub fn new(grammar: VersionGrammar) -> Self {
        VersionParser { grammar }
    }

    /// Create a parser using the built-in grammar
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(VersionGrammar::builtin()?))
    }

    /// Create a parser from the grammar selected by the environment.
    ///
    /// See [`GrammarSource::from_env`]. A malformed override is an error;
    /// there is no fallback to the built-in grammar.
    pub fn from_env() -> Result<Self> {
        Self::from_source(&GrammarSource::from_env())
    }

    /// Create a parser from the grammar selected by `config` and the environment
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::from_source(&config.grammar_source())
    }

    /// Create a parser from an explicit grammar source
    pub fn from_source(source: &GrammarSource) -> Result<Self> {
        Ok(Self::new(VersionGrammar::from_source(source)?))
    }

    /// The grammar this parser matches against
    pub fn grammar(&self) -> &VersionGrammar {
        &self.grammar
    }

    /// Returns true if the whole input is a valid version.
    ///
    /// Major, minor and patch must also fit in a `u64`; an input the grammar
    /// accepts but whose numbers overflow is invalid.
    pub fn is_valid(&self, input: &str) -> bool {
        self.decompose(input).is_some()
    }

    /// Parse a version string.
    ///
    /// # Returns
    /// * `Some(ParsedVersion)` - If the input is valid
    /// * `None` - If it is not; invalid input is an ordinary outcome, not an error
    ///
    /// # Example
    /// ```ignore
    /// let v = parser.parse("1.2.1-alpha1+githash").unwrap();
    /// assert_eq!(v.identifiers, Some(vec!["alpha1".to_string()]));
    /// assert_eq!(v.metadata.as_deref(), Some("githash"));
    /// ```
    pub fn parse(&self, input: &str) -> Option<ParsedVersion> {
        let parts = self.decompose(input)?;

        let mut version = ParsedVersion::new(parts.major, parts.minor, parts.patch);
        if let Some(pre_release) = parts.pre_release {
            version = version.with_pre_release(strip_separator(pre_release));
        }
        if let Some(build) = parts.build {
            version = version.with_metadata(strip_separator(build));
        }
        Some(version)
    }

    /// Compare two version strings for compatibility.
    ///
    /// `Compatible` when both parse and agree on major version and on the
    /// alpha, beta and rc flags; `Incompatible` when both parse but differ;
    /// `Indeterminate` when either side does not parse.
    pub fn is_compatible(&self, a: &str, b: &str) -> Compatibility {
        Compatibility::between(self.parse(a).as_ref(), self.parse(b).as_ref())
    }

    fn decompose<'h>(&self, input: &'h str) -> Option<Decomposed<'h>> {
        let caps = self.grammar.captures(input)?;

        Some(Decomposed {
            major: parse_number(caps.major)?,
            minor: parse_number(caps.minor)?,
            patch: parse_number(caps.patch)?,
            pre_release: caps.pre_release.filter(|g| !g.is_empty()),
            build: caps.build.filter(|g| !g.is_empty()),
        })
    }
}

fn parse_number(group: Option<&str>) -> Option<u64> {
    let text = group?;
    // u64::from_str would also take a leading '+'
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Drop the leading separator character of an optional group.
fn strip_separator(group: &str) -> &str {
    let mut chars = group.chars();
    chars.next();
    chars.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> VersionParser {
        VersionParser::builtin().unwrap()
    }

    #[test]
    fn test_parse_full_version() {
        let v = parser().parse("1.2.1-alpha1+githash").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 1);
        assert!(v.is_alpha);
        assert!(!v.is_beta);
        assert!(!v.is_release_candidate);
        assert_eq!(v.identifiers, Some(vec!["alpha1".to_string()]));
        assert_eq!(v.metadata, Some("githash".to_string()));
    }

    #[test]
    fn test_parse_plain_release() {
        let v = parser().parse("2.3.1").unwrap();
        assert_eq!(v, ParsedVersion::new(2, 3, 1));
    }

    #[test]
    fn test_parse_invalid_is_none() {
        assert_eq!(parser().parse("1.2.7-"), None);
        assert_eq!(parser().parse(""), None);
    }

    #[test]
    fn test_leading_zeros_are_accepted() {
        let v = parser().parse("01.002.0003").unwrap();
        assert_eq!(v.core(), "1.2.3");
    }

    #[test]
    fn test_number_overflow_is_invalid() {
        let p = parser();
        let huge = "18446744073709551616.0.0";
        assert!(!p.is_valid(huge));
        assert_eq!(p.parse(huge), None);

        let max = "18446744073709551615.0.0";
        assert!(p.is_valid(max));
        assert_eq!(p.parse(max).unwrap().major, u64::MAX);
    }

    #[test]
    fn test_non_ascii_digits_are_invalid() {
        // \d is Unicode-aware in the regex crate
        let p = parser();
        assert!(!p.is_valid("\u{0661}.0.0"));
        assert_eq!(p.parse("\u{0661}.0.0"), None);
    }

    #[test]
    fn test_custom_grammar_with_non_numeric_group() {
        let grammar =
            VersionGrammar::compile(r"^([a-z]+)\.(\d+)\.(\d+)(-\w+)?(\+\w+)?$").unwrap();
        let p = VersionParser::new(grammar);
        assert!(!p.is_valid("abc.1.2"));
        assert_eq!(p.parse("abc.1.2"), None);
    }

    #[test]
    fn test_custom_separators_are_stripped() {
        let grammar =
            VersionGrammar::compile(r"^(\d+)\.(\d+)\.(\d+)(~[a-z0-9.]+)?(#[a-z0-9]+)?$").unwrap();
        let v = VersionParser::new(grammar).parse("1.0.0~rc.1#abc").unwrap();
        assert!(v.is_release_candidate);
        assert_eq!(
            v.identifiers,
            Some(vec!["rc".to_string(), "1".to_string()])
        );
        assert_eq!(v.metadata.as_deref(), Some("abc"));
    }

    #[test]
    fn test_multibyte_separator_is_stripped_whole() {
        let grammar =
            VersionGrammar::compile(r"^(\d+)\.(\d+)\.(\d+)(§[a-z]+)?(\+[a-z]+)?$").unwrap();
        let v = VersionParser::new(grammar).parse("1.0.0§beta").unwrap();
        assert_eq!(v.identifiers, Some(vec!["beta".to_string()]));
    }

    #[test]
    fn test_is_compatible_tri_state() {
        let p = parser();
        assert_eq!(p.is_compatible("1.1.1", "1.1.2"), Compatibility::Compatible);
        assert_eq!(p.is_compatible("1.0.1", "2.1.2"), Compatibility::Incompatible);
        assert_eq!(p.is_compatible("", "1.0.0"), Compatibility::Indeterminate);
        assert_eq!(p.is_compatible("1.0.0", ""), Compatibility::Indeterminate);
    }

    #[test]
    fn test_strip_separator() {
        assert_eq!(strip_separator("-alpha"), "alpha");
        assert_eq!(strip_separator("+"), "");
        assert_eq!(strip_separator(""), "");
    }

    #[test]
    fn test_parse_number_rejects_sign() {
        assert_eq!(parse_number(Some("+5")), None);
        assert_eq!(parse_number(Some("")), None);
        assert_eq!(parse_number(None), None);
        assert_eq!(parse_number(Some("42")), Some(42));
    }
}
