//! Pre-release channel detection
//!
//! A channel is recognised by a case-sensitive literal prefix on a single
//! dot-separated identifier: `alpha1` is alpha, `rc.2` has one rc identifier
//! and one identifier that is ignored, `Alpha` is nothing. No SemVer
//! precedence rules are applied.

use std::fmt;

/// Pre-release channel an identifier can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreReleaseType {
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    Beta,
    /// Release candidate
    ReleaseCandidate,
}

impl PreReleaseType {
    /// All channels, in the order identifiers are tested against them.
    pub const ALL: [PreReleaseType; 3] = [
        PreReleaseType::Alpha,
        PreReleaseType::Beta,
        PreReleaseType::ReleaseCandidate,
    ];

    /// Literal prefix that marks an identifier as belonging to this channel.
    pub fn prefix(self) -> &'static str {
        match self {
            PreReleaseType::Alpha => "alpha",
            PreReleaseType::Beta => "beta",
            PreReleaseType::ReleaseCandidate => "rc",
        }
    }

    /// Classify a single identifier by prefix.
    ///
    /// # Returns
    /// * `Some(PreReleaseType)` - The first channel whose prefix starts the identifier
    /// * `None` - If no channel prefix matches
    pub fn classify(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|channel| identifier.starts_with(channel.prefix()))
    }
}

impl fmt::Display for PreReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Which channels appear among a version's pre-release identifiers.
///
/// Flags are independent: `alpha.beta.1` sets both `alpha` and `beta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PreReleaseFlags {
    pub alpha: bool,
    pub beta: bool,
    pub release_candidate: bool,
}

impl PreReleaseFlags {
    /// Derive flags from already split identifiers.
    pub fn from_identifiers<'a, I>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut flags = PreReleaseFlags::default();
        for identifier in identifiers {
            match PreReleaseType::classify(identifier) {
                Some(PreReleaseType::Alpha) => flags.alpha = true,
                Some(PreReleaseType::Beta) => flags.beta = true,
                Some(PreReleaseType::ReleaseCandidate) => flags.release_candidate = true,
                None => {}
            }
        }
        flags
    }

    /// Returns true if the flag for `channel` is set.
    pub fn contains(&self, channel: PreReleaseType) -> bool {
        match channel {
            PreReleaseType::Alpha => self.alpha,
            PreReleaseType::Beta => self.beta,
            PreReleaseType::ReleaseCandidate => self.release_candidate,
        }
    }

    /// Returns true if any channel flag is set.
    pub fn any(&self) -> bool {
        self.alpha || self.beta || self.release_candidate
    }
}
