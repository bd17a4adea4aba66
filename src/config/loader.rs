//! Configuration loader

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, StyleLensError};
use crate::rules::sentence_length::DEFAULT_MAX_LENGTH;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILENAME: &str = ".stylelens.toml";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Language code; only rules for this language run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Word limit of the sentence length rule, 0 disables it
    #[serde(default = "default_max_sentence_length")]
    pub max_sentence_length: usize,

    /// Rule definition file used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_file: Option<PathBuf>,

    /// Only these rule ids run when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_rules: Option<Vec<String>>,

    /// Rule ids that never run
    #[serde(default)]
    pub disabled_rules: Vec<String>,
}

fn default_max_sentence_length() -> usize {
    DEFAULT_MAX_LENGTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            max_sentence_length: DEFAULT_MAX_LENGTH,
            rules_file: None,
            enabled_rules: None,
            disabled_rules: Vec::new(),
        }
    }
}

impl Config {
    /// Load `.stylelens.toml` from `dir`, or return the defaults
    pub fn load_or_default(dir: &Path) -> Result<Self, StyleLensError> {
        let config_path = dir.join(CONFIG_FILENAME);

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            debug!(dir = %dir.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, StyleLensError> {
        let content = fs::read_to_string(path).map_err(|e| {
            StyleLensError::Config(ConfigError::FileRead {
                path: path.display().to_string(),
                source: e,
            })
        })?;

        let config: Self = toml::from_str(&content)?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, StyleLensError> {
        toml::to_string_pretty(self).map_err(Into::into)
    }

    /// Check if a rule is enabled.
    ///
    /// A disabled id always loses, even when it is also listed as enabled.
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        if self.disabled_rules.iter().any(|id| id == rule_id) {
            return false;
        }
        self.enabled_rules
            .as_ref()
            .map_or(true, |ids| ids.iter().any(|id| id == rule_id))
    }
}
