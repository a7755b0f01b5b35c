//! Configuration module for tst_words.
//!
//! This module provides a configuration system that loads settings from a
//! file (TOML, YAML, JSON) and overrides them with environment variables.
//! All configuration values are validated for correctness before use.

use std::path::{Path, PathBuf};

use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File};
use serde::{Deserialize, Serialize};

pub mod words;

pub use words::{TrimMode, WordsConfig};

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "TST";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for tst_words.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TstConfig {
    /// Word list configuration
    pub words: WordsConfig,

    /// Search defaults
    pub search: SearchConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for TstConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.words.validate()?;
        self.search.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Search defaults used by the command line tool.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchConfig {
    /// Require exact matches unless the command line says otherwise
    pub exact: bool,
}

impl SearchConfig {
    /// Decides whether a lookup is exact.
    ///
    /// `--exact` always wins and `--prefix` always disables exact matching.
    /// With neither flag the configured default applies.
    pub fn resolve_exact(&self, exact_flag: bool, prefix_flag: bool) -> bool {
        exact_flag || (!prefix_flag && self.exact)
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for tst_words.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration: defaults, then the file, then environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(TstConfig)` if the configuration was loaded and validated
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<TstConfig> {
        let mut builder = Config::builder();

        builder = builder.add_source(
            Config::try_from(&TstConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => config::FileFormat::Toml,
                Some("json") => config::FileFormat::Json,
                Some("yaml" | "yml") => config::FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            ExternalConfigError::FileParse { uri, cause } => ConfigError::ParseError(format!(
                "Error parsing config file {}: {cause}",
                uri.unwrap_or_default()
            )),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let tst_config: TstConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        tst_config.validate()?;

        tracing::debug!(?tst_config, "Configuration loaded");
        Ok(tst_config)
    }
}
