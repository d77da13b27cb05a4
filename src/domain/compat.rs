use serde::Serialize;
use std::fmt;

use crate::domain::version::ParsedVersion;

/// Outcome of comparing two version strings for compatibility
///
/// `Indeterminate` means at least one side did not parse. It is kept apart
/// from `Incompatible` so a bad input is never read as a negative answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
    Compatible,
    Incompatible,
    Indeterminate,
}

impl Compatibility {
    /// Compare two parse results.
    pub fn between(a: Option<&ParsedVersion>, b: Option<&ParsedVersion>) -> Self {
        match (a, b) {
            (Some(a), Some(b)) if a.is_compatible_with(b) => Compatibility::Compatible,
            (Some(_), Some(_)) => Compatibility::Incompatible,
            _ => Compatibility::Indeterminate,
        }
    }

    /// Returns true only for `Compatible`
    pub fn is_compatible(self) -> bool {
        self == Compatibility::Compatible
    }

    /// Returns true unless the comparison was `Indeterminate`
    pub fn is_determinate(self) -> bool {
        self != Compatibility::Indeterminate
    }
}

impl From<Compatibility> for Option<bool> {
    fn from(value: Compatibility) -> Self {
        match value {
            Compatibility::Compatible => Some(true),
            Compatibility::Incompatible => Some(false),
            Compatibility::Indeterminate => None,
        }
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compatibility::Compatible => write!(f, "compatible"),
            Compatibility::Incompatible => write!(f, "incompatible"),
            Compatibility::Indeterminate => write!(f, "indeterminate"),
        }
    }
}
