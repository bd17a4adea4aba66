//! Configuration module
//!
//! Settings are read from `.stylelens.toml` in the working directory, or from
//! a file passed with `--config`. Command-line flags override them.

pub mod loader;

pub use loader::{Config, CONFIG_FILENAME};
