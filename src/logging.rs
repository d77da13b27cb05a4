use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::error::{Result, SemverError};

/// Level used when neither `RUST_LOG` nor the caller asks for one.
pub const DEFAULT_LEVEL: &str = "warn";

/// Installs the fmt subscriber used by the command-line front end.
///
/// `RUST_LOG` takes precedence over `level`. Logs go to stderr so that
/// command output on stdout stays machine readable.
pub fn init_tracing(level: Option<&str>) -> Result<()> {
    let default_level = level.unwrap_or(DEFAULT_LEVEL);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(console::colors_enabled_stderr())
        .try_init()
        .map_err(|err| SemverError::config(format!("failed to initialise logging: {}", err)))?;

    Ok(())
}
