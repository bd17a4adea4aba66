//! Init command - Write a default configuration file

use colored::Colorize;
use std::fs;
use std::path::Path;

use super::InitArgs;
use crate::cli::exit_codes;
use crate::cli::Context;
use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{ConfigError, OutputError, StyleLensError};

pub fn execute(args: InitArgs, ctx: &Context) -> Result<i32, StyleLensError> {
    let config_path = ctx.resolve(Path::new(CONFIG_FILENAME));

    if config_path.exists() && !args.force {
        return Err(ConfigError::AlreadyExists {
            path: config_path.display().to_string(),
        }
        .into());
    }

    let config_content = Config::default().to_toml()?;
    fs::write(&config_path, &config_content).map_err(|e| OutputError::FileWrite {
        path: config_path.display().to_string(),
        source: e,
    })?;

    println!(
        "{} Created {}",
        "Success:".green().bold(),
        CONFIG_FILENAME.cyan()
    );

    println!("\nNext steps:");
    println!("  1. Set {} to your grammar file", "rules_file".cyan());
    println!(
        "  2. Run {} on tagger output",
        "stylelens check --input tagged.json".cyan()
    );

    Ok(exit_codes::SUCCESS)
}
