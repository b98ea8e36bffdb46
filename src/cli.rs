//! Command-line flags and how they override the config file.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "shortener", version, about = "Shorten long URLs from the terminal")]
pub struct Cli {
    /// Origin of the shortening service (overrides config)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides config)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u32>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Shorten a single URL, print the result, and exit
    #[arg(long, value_name = "URL")]
    pub once: Option<String>,
}

impl Cli {
    /// Loads the config file, applies flag overrides, and validates the result.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(config)
    }

    pub fn apply_overrides(&self, mut config: Config) -> Result<Config, ConfigError> {
        if let Some(base_url) = &self.base_url {
            config.service.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.service.timeout_seconds = timeout;
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
        config.validate()?;
        Ok(config)
    }

    /// Resolved log file for interactive mode.
    pub fn log_path(config: &Config) -> PathBuf {
        config
            .logging
            .file
            .clone()
            .unwrap_or_else(Config::default_log_path)
    }
}
