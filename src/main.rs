use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use light_semver::config::{self, GrammarSource};
use light_semver::{logging, ui, Compatibility, VersionParser};

/// Exit code when the grammar or configuration cannot be loaded.
const EXIT_SETUP_FAILURE: i32 = 3;

#[derive(clap::Parser)]
#[command(
    name = "light-semver",
    version,
    about = "Validate, parse and compare version strings against a configurable grammar"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        global = true,
        help = "Grammar pattern, overrides environment and config file"
    )]
    pattern: Option<String>,

    #[arg(short, long, global = true, help = "Log how the grammar was resolved")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether each version is valid (exit 1 if any is not)
    Valid {
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Show the decomposition of a version (exit 1 if invalid)
    Parse {
        version: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// Check whether two versions are compatible (exit 0, 1, or 2 if indeterminate)
    Compatible { a: String, b: String },
    /// Print the grammar in use and where it came from
    Grammar,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Plain,
    Toml,
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_tracing(args.verbose.then_some("debug"))?;

    let source = match &args.pattern {
        Some(pattern) => GrammarSource::Inline(pattern.clone()),
        None => match config::load_config(args.config.as_deref()) {
            Ok(cfg) => cfg.grammar_source(),
            Err(e) => {
                ui::display_error(&format!("Error loading config: {}", e));
                std::process::exit(EXIT_SETUP_FAILURE);
            }
        },
    };

    let parser = match VersionParser::from_source(&source) {
        Ok(parser) => parser,
        Err(e) => {
            ui::display_error(&format!(
                "Cannot use grammar from {}: {}",
                source.describe(),
                e
            ));
            std::process::exit(EXIT_SETUP_FAILURE);
        }
    };

    let code = run(&args.command, &parser, &source)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn run(command: &Command, parser: &VersionParser, source: &GrammarSource) -> Result<i32> {
    match command {
        Command::Valid { versions } => {
            let mut all_valid = true;
            for version in versions {
                let valid = parser.is_valid(version);
                ui::display_validity(version, valid);
                all_valid &= valid;
            }
            Ok(if all_valid { 0 } else { 1 })
        }
        Command::Parse { version, format } => {
            let Some(parsed) = parser.parse(version) else {
                ui::display_validity(version, false);
                return Ok(1);
            };
            match format {
                OutputFormat::Plain => ui::display_parsed(version, &parsed),
                OutputFormat::Toml => print!("{}", toml::to_string(&parsed)?),
            }
            Ok(0)
        }
        Command::Compatible { a, b } => {
            let result = parser.is_compatible(a, b);
            ui::display_compatibility(a, b, result);
            Ok(match result {
                Compatibility::Compatible => 0,
                Compatibility::Incompatible => 1,
                Compatibility::Indeterminate => 2,
            })
        }
        Command::Grammar => {
            ui::display_grammar(&source.describe(), parser.grammar().pattern());
            Ok(0)
        }
    }
}
