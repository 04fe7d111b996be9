//! Command-line argument parsing for ucmd.

use clap::Parser;
use std::path::PathBuf;
use ucmd::config::{Config, Overrides};

/// A tiny command dispatcher console.
///
/// Reads command lines from stdin (or from --exec) and dispatches each one
/// against the built-in command table.
#[derive(Parser, Debug)]
#[command(name = "ucmd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run this command line instead of reading stdin (repeatable)
    #[arg(short = 'e', long = "exec", value_name = "COMMAND")]
    pub exec: Vec<String>,

    /// Characters that separate tokens
    #[arg(short = 'd', long, value_name = "CHARS", env = "UCMD_DELIMITERS")]
    pub delimiters: Option<String>,

    /// Prompt shown in interactive mode
    #[arg(long, value_name = "TEXT")]
    pub prompt: Option<String>,

    /// Print each command's return code
    #[arg(long)]
    pub show_results: bool,

    /// List available commands and exit
    #[arg(long)]
    pub list: bool,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Returns the values that take precedence over the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            delimiters: self.delimiters.clone(),
            prompt: self.prompt.clone(),
            show_results: self.show_results,
        }
    }

    /// Returns true if command lines were given on the command line.
    pub fn has_exec(&self) -> bool {
        !self.exec.is_empty()
    }
}
