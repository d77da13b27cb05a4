//! Domain values - what a parsed version is and how two of them compare

pub mod compat;
pub mod prerelease;
pub mod version;

pub use compat::Compatibility;
pub use prerelease::{PreReleaseFlags, PreReleaseType};
pub use version::ParsedVersion;
