// tests/config_test.rs
use light_semver::config::{load_config, Config, GrammarSource, PATTERN_ENV, PATTERN_FILE_ENV};
use light_semver::{SemverError, VersionParser, DEFAULT_PATTERN};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const LENIENT: &str = r"^v?(\d+)\.(\d+)\.(\d+)(-[a-z0-9.]+)?(\+[a-z0-9.]+)?$";

fn clear_env() {
    env::remove_var(PATTERN_ENV);
    env::remove_var(PATTERN_FILE_ENV);
}

fn grammar_file(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
#[serial]
fn test_from_env_defaults_to_builtin() {
    clear_env();
    assert_eq!(GrammarSource::from_env(), GrammarSource::Builtin);

    let parser = VersionParser::from_env().unwrap();
    assert_eq!(parser.grammar().pattern(), DEFAULT_PATTERN);
}

#[test]
#[serial]
fn test_from_env_inline_pattern() {
    clear_env();
    env::set_var(PATTERN_ENV, LENIENT);

    assert_eq!(
        GrammarSource::from_env(),
        GrammarSource::Inline(LENIENT.to_string())
    );
    let parser = VersionParser::from_env().unwrap();
    assert!(parser.is_valid("v1.2.3"));

    clear_env();
}

#[test]
#[serial]
fn test_from_env_empty_pattern_is_ignored() {
    clear_env();
    env::set_var(PATTERN_ENV, "");

    assert_eq!(GrammarSource::from_env(), GrammarSource::Builtin);

    clear_env();
}

#[test]
#[serial]
fn test_from_env_pattern_file() {
    clear_env();
    let file = grammar_file(&format!("{}\n", LENIENT));
    env::set_var(PATTERN_FILE_ENV, file.path());

    assert_eq!(
        GrammarSource::from_env(),
        GrammarSource::File(file.path().to_path_buf())
    );
    let parser = VersionParser::from_env().unwrap();
    assert_eq!(parser.grammar().pattern(), LENIENT);
    assert!(parser.is_valid("v2.0.0-rc.1"));

    clear_env();
}

#[test]
#[serial]
fn test_inline_pattern_beats_pattern_file() {
    clear_env();
    let file = grammar_file(DEFAULT_PATTERN);
    env::set_var(PATTERN_FILE_ENV, file.path());
    env::set_var(PATTERN_ENV, LENIENT);

    assert_eq!(
        GrammarSource::from_env(),
        GrammarSource::Inline(LENIENT.to_string())
    );

    clear_env();
}

#[test]
#[serial]
fn test_malformed_override_is_fatal() {
    clear_env();
    env::set_var(PATTERN_ENV, r"^(\d+)\.(\d+");

    let result = VersionParser::from_env();
    assert!(matches!(result, Err(SemverError::Grammar(_))));

    clear_env();
}

#[test]
#[serial]
fn test_override_with_wrong_group_count_is_fatal() {
    clear_env();
    env::set_var(PATTERN_ENV, r"^(\d+)\.(\d+)\.(\d+)$");

    let result = VersionParser::from_env();
    assert!(matches!(
        result,
        Err(SemverError::GroupCount {
            expected: 5,
            found: 3
        })
    ));

    clear_env();
}

#[test]
#[serial]
fn test_missing_pattern_file_is_fatal() {
    clear_env();
    env::set_var(PATTERN_FILE_ENV, "/nonexistent/light-semver/grammar.re");

    assert!(matches!(VersionParser::from_env(), Err(SemverError::Io(_))));

    clear_env();
}

#[test]
fn test_empty_pattern_file_is_rejected() {
    let file = grammar_file("  \n");
    let source = GrammarSource::File(file.path().to_path_buf());
    assert!(matches!(source.load(), Err(SemverError::Config(_))));
}

#[test]
#[serial]
fn test_load_config_with_inline_pattern() {
    clear_env();
    let file = grammar_file(&format!("[grammar]\npattern = '{}'\n", LENIENT));

    let config = load_config(Some(file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.grammar.pattern.as_deref(), Some(LENIENT));
    assert_eq!(
        config.grammar_source(),
        GrammarSource::Inline(LENIENT.to_string())
    );

    let parser = VersionParser::from_config(&config).unwrap();
    assert!(parser.is_valid("v1.0.0"));
}

#[test]
#[serial]
fn test_load_config_resolves_relative_pattern_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("grammar.re"), LENIENT).unwrap();
    let config_path = dir.path().join("semver.toml");
    fs::write(&config_path, "[grammar]\npattern_file = \"grammar.re\"\n").unwrap();

    let config = load_config(Some(config_path.to_str().unwrap())).unwrap();
    assert_eq!(
        config.grammar.pattern_file,
        Some(dir.path().join("grammar.re"))
    );

    let parser = VersionParser::from_config(&config).unwrap();
    assert_eq!(parser.grammar().pattern(), LENIENT);
}

#[test]
#[serial]
fn test_environment_beats_config_file() {
    clear_env();
    let config = Config {
        grammar: light_semver::config::GrammarConfig {
            pattern: Some(LENIENT.to_string()),
            pattern_file: Some(PathBuf::from("ignored.re")),
        },
    };
    env::set_var(PATTERN_ENV, DEFAULT_PATTERN);

    assert_eq!(
        config.grammar_source(),
        GrammarSource::Inline(DEFAULT_PATTERN.to_string())
    );

    clear_env();
}

#[test]
#[serial]
fn test_config_pattern_beats_config_pattern_file() {
    clear_env();
    let config = Config {
        grammar: light_semver::config::GrammarConfig {
            pattern: Some(LENIENT.to_string()),
            pattern_file: Some(PathBuf::from("ignored.re")),
        },
    };

    assert_eq!(
        config.grammar_source(),
        GrammarSource::Inline(LENIENT.to_string())
    );
}

#[test]
#[serial]
fn test_default_config_uses_builtin() {
    clear_env();
    assert_eq!(Config::default().grammar_source(), GrammarSource::Builtin);
}

#[test]
fn test_malformed_config_file_is_error() {
    let file = grammar_file("[grammar\npattern = 1");
    let result = load_config(Some(file.path().to_str().unwrap()));
    assert!(matches!(result, Err(SemverError::Toml(_))));
}

#[test]
fn test_missing_config_file_is_error() {
    let result = load_config(Some("/nonexistent/light-semver/semver.toml"));
    assert!(matches!(result, Err(SemverError::Io(_))));
}
