use crate::domain::prerelease::PreReleaseFlags;
use crate::error::{Result, SemverError};
use serde::Serialize;
use std::fmt;

/// Structured decomposition of a valid version string
///
/// Numeric components are `u64`. Absent optional parts are skipped when
/// serialized, so a plain `2.3.1` has no `identifiers` or `metadata` key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParsedVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub is_alpha: bool,
    pub is_beta: bool,
    pub is_release_candidate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

impl ParsedVersion {
    /// Create a release version with no pre-release or metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        ParsedVersion {
            major,
            minor,
            patch,
            is_alpha: false,
            is_beta: false,
            is_release_candidate: false,
            identifiers: None,
            metadata: None,
        }
    }

    /// Attach pre-release identifiers and derive the channel flags from them.
    ///
    /// `pre_release` is the identifier text without its leading separator,
    /// e.g. `"alpha.beta.1"`.
    pub fn with_pre_release(mut self, pre_release: &str) -> Self {
        let identifiers: Vec<String> = pre_release.split('.').map(str::to_string).collect();
        let flags = PreReleaseFlags::from_identifiers(identifiers.iter().map(String::as_str));

        self.is_alpha = flags.alpha;
        self.is_beta = flags.beta;
        self.is_release_candidate = flags.release_candidate;
        self.identifiers = Some(identifiers);
        self
    }

    /// Attach build metadata (without its leading separator)
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    /// The alpha/beta/rc flags as one value
    pub fn flags(&self) -> PreReleaseFlags {
        PreReleaseFlags {
            alpha: self.is_alpha,
            beta: self.is_beta,
            release_candidate: self.is_release_candidate,
        }
    }

    /// Returns true if the version carried a pre-release tag, whatever its channel
    pub fn is_prerelease(&self) -> bool {
        self.identifiers.is_some()
    }

    /// Two versions are compatible when they share the major version and the
    /// same alpha, beta and rc flags. Minor, patch, identifiers and metadata
    /// are not compared.
    pub fn is_compatible_with(&self, other: &ParsedVersion) -> bool {
        self.major == other.major && self.flags() == other.flags()
    }

    /// `major.minor.patch` without pre-release or metadata
    pub fn core(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Renders with the conventional `-` and `+` separators, whatever separators
/// the grammar that produced the value used.
impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(identifiers) = &self.identifiers {
            write!(f, "-{}", identifiers.join("."))?;
        }
        if let Some(metadata) = &self.metadata {
            write!(f, "+{}", metadata)?;
        }
        Ok(())
    }
}

/// Convert into a [`semver::Version`].
///
/// Fails when the identifiers or metadata are accepted by the grammar but
/// not by SemVer 2.0, e.g. `3.5.1+another_one`.
impl TryFrom<&ParsedVersion> for semver::Version {
    type Error = SemverError;

    fn try_from(version: &ParsedVersion) -> Result<Self> {
        let pre = match &version.identifiers {
            Some(identifiers) => semver::Prerelease::new(&identifiers.join("."))
                .map_err(|e| SemverError::conversion(format!("pre-release: {}", e)))?,
            None => semver::Prerelease::EMPTY,
        };
        let build = match &version.metadata {
            Some(metadata) => semver::BuildMetadata::new(metadata)
                .map_err(|e| SemverError::conversion(format!("build metadata: {}", e)))?,
            None => semver::BuildMetadata::EMPTY,
        };

        Ok(semver::Version {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            pre,
            build,
        })
    }
}
