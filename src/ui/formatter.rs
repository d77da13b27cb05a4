//! Pure formatting functions for CLI output.
//!
//! Everything here returns plain strings; colouring is applied by the
//! display functions in the parent module.

use crate::domain::{Compatibility, ParsedVersion};

const LABEL_WIDTH: usize = 13;

fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<width$}{}", format!("{}:", label), value, width = LABEL_WIDTH)
}

/// Verdict line for a single `valid` check.
pub fn format_validity(input: &str, valid: bool) -> String {
    if valid {
        format!("'{}' is valid", input)
    } else {
        format!("'{}' is not a valid version", input)
    }
}

/// One line per field of a parsed version.
///
/// `identifiers` and `metadata` lines only appear when the version has them.
pub fn format_parsed(version: &ParsedVersion) -> Vec<String> {
    let mut lines = vec![
        field("major", version.major),
        field("minor", version.minor),
        field("patch", version.patch),
        field("alpha", version.is_alpha),
        field("beta", version.is_beta),
        field("rc", version.is_release_candidate),
    ];

    if let Some(identifiers) = &version.identifiers {
        lines.push(field("identifiers", identifiers.join(", ")));
    }
    if let Some(metadata) = &version.metadata {
        lines.push(field("metadata", metadata));
    }

    lines
}

/// Verdict line for a `compatible` check.
pub fn format_compatibility(a: &str, b: &str, result: Compatibility) -> String {
    match result {
        Compatibility::Compatible => format!("'{}' and '{}' are compatible", a, b),
        Compatibility::Incompatible => format!("'{}' and '{}' are incompatible", a, b),
        Compatibility::Indeterminate => format!(
            "cannot compare '{}' and '{}': at least one is not a valid version",
            a, b
        ),
    }
}
