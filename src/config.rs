use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Result, SemverError};
use crate::grammar::DEFAULT_PATTERN;

/// Environment variable holding a grammar pattern directly.
pub const PATTERN_ENV: &str = "SEMVER_REGEX";

/// Environment variable holding the path of a file that contains the grammar pattern.
pub const PATTERN_FILE_ENV: &str = "SEMVER_REGEX_FILE";

/// File name looked up in the working directory when no explicit config path is given.
pub const CONFIG_FILE_NAME: &str = "semver.toml";

/// Represents the complete configuration for light-semver.
///
/// Currently only carries the grammar table; everything else about parsing is fixed.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub grammar: GrammarConfig,
}

/// The `[grammar]` table of a configuration file.
///
/// `pattern` wins over `pattern_file` when both are set.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct GrammarConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_file: Option<PathBuf>,
}

/// Where the grammar text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarSource {
    /// Pattern text given directly
    Inline(String),
    /// Pattern read in full from a UTF-8 file
    File(PathBuf),
    /// The built-in default pattern
    Builtin,
}

impl GrammarSource {
    /// Resolves the grammar source from the process environment alone.
    ///
    /// `SEMVER_REGEX` is used when set and non-empty, then `SEMVER_REGEX_FILE`,
    /// and the built-in grammar otherwise.
    pub fn from_env() -> Self {
        env_override().unwrap_or(GrammarSource::Builtin)
    }

    /// Reads the grammar text this source points at.
    ///
    /// # Returns
    /// * `Ok(String)` - The pattern text
    /// * `Err` - If the file cannot be read or holds nothing but whitespace
    pub fn load(&self) -> Result<String> {
        match self {
            GrammarSource::Inline(pattern) => Ok(pattern.clone()),
            GrammarSource::File(path) => {
                let contents = fs::read_to_string(path)?;
                let pattern = contents.trim();
                if pattern.is_empty() {
                    return Err(SemverError::config(format!(
                        "grammar file '{}' is empty",
                        path.display()
                    )));
                }
                Ok(pattern.to_string())
            }
            GrammarSource::Builtin => Ok(DEFAULT_PATTERN.to_string()),
        }
    }

    /// Short human readable name of the source, used in logs and CLI output.
    pub fn describe(&self) -> String {
        match self {
            GrammarSource::Inline(_) => "inline pattern".to_string(),
            GrammarSource::File(path) => format!("file {}", path.display()),
            GrammarSource::Builtin => "built-in grammar".to_string(),
        }
    }
}

impl Config {
    /// Resolves which grammar to use.
    ///
    /// Order of precedence:
    /// 1. `SEMVER_REGEX` environment variable
    /// 2. `SEMVER_REGEX_FILE` environment variable
    /// 3. `grammar.pattern` from the configuration file
    /// 4. `grammar.pattern_file` from the configuration file
    /// 5. The built-in grammar
    pub fn grammar_source(&self) -> GrammarSource {
        if let Some(source) = env_override() {
            return source;
        }

        match self.grammar.pattern.as_deref() {
            Some(pattern) if !pattern.trim().is_empty() => {
                return GrammarSource::Inline(pattern.to_string());
            }
            Some(_) => warn!("ignoring empty grammar.pattern in configuration"),
            None => {}
        }

        if let Some(path) = &self.grammar.pattern_file {
            return GrammarSource::File(path.clone());
        }

        GrammarSource::Builtin
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver.toml` in current directory
/// 3. `.semver.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// A relative `grammar.pattern_file` is resolved against the directory of the
/// configuration file it was read from.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if path.exists() {
            path
        } else {
            debug!("no configuration file found, using defaults");
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path)?;
    let mut config: Config = toml::from_str(&config_str)?;

    if let Some(pattern_file) = config.grammar.pattern_file.take() {
        let resolved = match path.parent() {
            Some(dir) if pattern_file.is_relative() => dir.join(pattern_file),
            _ => pattern_file,
        };
        config.grammar.pattern_file = Some(resolved);
    }

    Ok(config)
}

fn env_override() -> Option<GrammarSource> {
    if let Some(pattern) = non_empty_var(PATTERN_ENV) {
        return Some(GrammarSource::Inline(pattern));
    }
    non_empty_var(PATTERN_FILE_ENV).map(|path| GrammarSource::File(PathBuf::from(path)))
}

fn non_empty_var(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        Ok(_) => {
            warn!(variable = name, "ignoring empty grammar override");
            None
        }
        Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(_)) => {
            warn!(variable = name, "ignoring grammar override that is not valid UTF-8");
            None
        }
    }
}
