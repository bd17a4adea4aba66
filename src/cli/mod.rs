//! # CLI Module
//!
//! This module defines the command-line interface for StyleLens using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `check` | Run the rules against tagged sentences |
//! | `rules` | List the rules of a rule file |
//! | `init` | Write a default configuration file |
//!
//! ## Submodules
//!
//! - [`commands`] - Command implementations
//! - [`exit_codes`] - Standardized exit codes
//! - [`output`] - Result formatters (XML, JSON, Terminal)
//!
//! ## Global Options
//!
//! All commands support these global options:
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file
//! - `-C, --directory <DIR>` - Working directory (defaults to current directory)
//!
//! ## Examples
//!
//! ```bash
//! # Check tagger output against a grammar file
//! stylelens check --rules grammar.xml --input tagged.json
//!
//! # Same, reading stdin and printing colored results
//! tagger text.txt | stylelens check --rules grammar.xml --format terminal
//!
//! # List German rules as JSON
//! stylelens rules --rules grammar.xml --language de --format json
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::StyleLensError;
use commands::{CheckArgs, GenerateManArgs, InitArgs, RulesArgs};

/// StyleLens - Rule-based grammar and style checking of tagged text
#[derive(Parser, Debug)]
#[command(name = "stylelens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Working directory (defaults to current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check tagged sentences against the rules
    Check(CheckArgs),

    /// List the rules of a rule file
    Rules(RulesArgs),

    /// Write a default configuration file
    Init(InitArgs),

    /// Generate man page (hidden, for packaging)
    #[command(hide = true)]
    GenerateMan(GenerateManArgs),
}

/// State shared by every command: where to work and the loaded settings
#[derive(Debug, Clone)]
pub struct Context {
    pub work_dir: PathBuf,
    pub config: Config,
}

impl Context {
    /// Resolve the working directory and load the configuration
    pub fn load(directory: Option<PathBuf>, config: Option<&Path>) -> Result<Self, StyleLensError> {
        let work_dir = directory.unwrap_or_else(|| PathBuf::from("."));
        let config = match config {
            Some(path) => Config::load_from_file(&work_dir.join(path))?,
            None => Config::load_or_default(&work_dir)?,
        };
        Ok(Self { work_dir, config })
    }

    /// A path given relative to the working directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.work_dir.join(path)
    }
}

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> Result<i32, StyleLensError> {
    let Cli {
        config,
        directory,
        command,
        ..
    } = cli;
    let context = || Context::load(directory, config.as_deref());

    match command {
        Commands::Check(args) => commands::check::execute(args, &context()?),
        Commands::Rules(args) => commands::rules::execute(args, &context()?),
        Commands::Init(args) => commands::init::execute(args, &context()?),
        Commands::GenerateMan(args) => commands::generate_man::execute(args),
    }
}
