//! Configuration management for ucmd.
//!
//! Loads optional settings from a TOML file and resolves them against
//! command-line overrides. Precedence: CLI arguments, then the config file,
//! then built-in defaults.

use crate::commands::DEFAULT_DELIMITER;
use crate::console::DEFAULT_PROMPT;
use crate::error::{Result, UcmdError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Contents of the config file. Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Characters that separate tokens.
    pub delimiters: Option<String>,

    /// Prompt written before each line in interactive mode.
    pub prompt: Option<String>,

    /// Whether to echo `=> <code>` after each command.
    pub show_results: Option<bool>,
}

/// Command-line values that override the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub delimiters: Option<String>,
    pub prompt: Option<String>,
    pub show_results: bool,
}

/// Fully resolved settings used to build the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub delimiters: String,
    pub prompt: String,
    pub show_results: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITER.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            show_results: false,
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ucmd")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default (empty) configuration.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| UcmdError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            UcmdError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })?;

        if config.delimiters.as_deref() == Some("") {
            return Err(UcmdError::config(format!(
                "Configuration error in {}:\n  delimiters must not be empty",
                path.display()
            )));
        }

        Ok(config)
    }

    /// Resolves the effective settings, with `overrides` taking precedence.
    pub fn resolve(&self, overrides: &Overrides) -> Settings {
        let defaults = Settings::default();

        let delimiters = overrides
            .delimiters
            .clone()
            .filter(|d| !d.is_empty())
            .or_else(|| self.delimiters.clone())
            .unwrap_or(defaults.delimiters);

        let prompt = overrides
            .prompt
            .clone()
            .or_else(|| self.prompt.clone())
            .unwrap_or(defaults.prompt);

        let show_results = overrides.show_results || self.show_results.unwrap_or(false);

        Settings {
            delimiters,
            prompt,
            show_results,
        }
    }
}
