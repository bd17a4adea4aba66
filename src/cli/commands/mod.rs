//! CLI commands module

pub mod check;
pub mod generate_man;
pub mod init;
pub mod rules;

use clap::Args;
use std::path::{Path, PathBuf};

use super::Context;
use crate::error::{ConfigError, OutputError, StyleLensError};
use crate::loader;
use crate::rules::PatternRule;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Rule definition file (defaults to `rules_file` from the configuration)
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Tagged sentences as JSON (defaults to stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format (xml, json, terminal)
    #[arg(short, long, default_value = "xml")]
    pub format: OutputFormat,

    /// Only run rules for this language code
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Word limit of the sentence length rule, 0 disables it
    #[arg(long, value_name = "N")]
    pub max_sentence_length: Option<usize>,

    /// Only run the rules with these ids
    #[arg(long, value_delimiter = ',')]
    pub only: Option<Vec<String>>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the rules command
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Rule definition file (defaults to `rules_file` from the configuration)
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Only list rules for this language code
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Output format (terminal, json)
    #[arg(short, long, default_value = "terminal")]
    pub format: ListFormat,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the generate-man command
#[derive(Args, Debug)]
pub struct GenerateManArgs {
    /// Directory the man page is written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,
}

/// Output format for check command
#[derive(Debug, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Xml,
    Json,
    Terminal,
}

/// Output format for rules command
#[derive(Debug, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum ListFormat {
    Terminal,
    Json,
}

/// Load the rule file named on the command line, or the configured one
fn load_pattern_rules(
    rules: Option<&Path>,
    ctx: &Context,
) -> Result<Vec<PatternRule>, StyleLensError> {
    let path = rules
        .or(ctx.config.rules_file.as_deref())
        .ok_or(ConfigError::MissingRulesFile)?;
    Ok(loader::load_rules(&ctx.resolve(path))?)
}

/// Print to stdout, or write to a file relative to the working directory
fn write_output(rendered: &str, output: Option<&Path>, ctx: &Context) -> Result<(), StyleLensError> {
    match output {
        Some(path) => {
            let path = ctx.resolve(path);
            std::fs::write(&path, rendered).map_err(|e| OutputError::FileWrite {
                path: path.display().to_string(),
                source: e,
            })?;
            eprintln!("Results written to: {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
