//! Terminal output for the command-line front end.

pub mod formatter;

use console::style;

use crate::domain::{Compatibility, ParsedVersion};
pub use formatter::{format_compatibility, format_parsed, format_validity};

/// Print an error message in red to stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a failure message with a red cross.
pub fn display_failure(message: &str) {
    println!("{} {}", style("✗").red(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_validity(input: &str, valid: bool) {
    let line = format_validity(input, valid);
    if valid {
        display_success(&line);
    } else {
        display_failure(&line);
    }
}

/// Print the fields of a parsed version under a bold header.
pub fn display_parsed(input: &str, version: &ParsedVersion) {
    println!("{}", style(input).bold());
    for line in format_parsed(version) {
        println!("  {}", line);
    }
}

pub fn display_compatibility(a: &str, b: &str, result: Compatibility) {
    let line = format_compatibility(a, b, result);
    match result {
        Compatibility::Compatible => display_success(&line),
        Compatibility::Incompatible => display_failure(&line),
        Compatibility::Indeterminate => display_status(&line),
    }
}

/// Print the grammar in use and where it was loaded from.
pub fn display_grammar(source: &str, pattern: &str) {
    println!("{} {}", style("Source:").bold(), source);
    println!("{} {}", style("Pattern:").bold(), pattern);
}
