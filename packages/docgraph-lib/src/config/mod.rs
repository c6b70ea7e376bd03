pub mod schema;

pub use crate::{config::schema::SchemaConfig, defaults};
use serde::Deserialize;
use std::{
    fs::File,
    io::Error,
    path::{Path, PathBuf},
};
use strum::{AsRefStr, EnumString};
use thiserror::Error;

/// Error type returned by configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error parsing env variables from config")]
    EnvVarParseError(#[from] std::env::VarError),
    #[error("Error processing file: {0:?}")]
    ConfigFileError(#[from] Error),
    #[error("Error processing YAML file: {0:?}")]
    SerdeYamlError(#[from] serde_yaml::Error),
    #[error("Invalid log level: {0:?}")]
    InvalidLogLevel(String),
}

/// Result type returned by configuration operations.
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Set of environment variables understood by the configuration.
#[derive(Debug, EnumString, AsRefStr)]
pub enum EnvVar {
    #[strum(serialize = "DOCGRAPH_LOG_LEVEL")]
    LogLevel,
    #[strum(serialize = "DOCGRAPH_QUERY_TYPE")]
    QueryType,
}

/// Return the value of an environment variable or a default value.
pub fn env_or_default(var: EnvVar, default: String) -> String {
    std::env::var(var.as_ref()).unwrap_or(default)
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub trait Env {
    fn inject_opt_env_vars(&mut self) -> ConfigResult<()>;
}

/// Docgraph configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct DocGraphConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub schema: SchemaConfig,
}

fn default_log_level() -> String {
    defaults::LOG_LEVEL.to_string()
}

impl Default for DocGraphConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::LOG_LEVEL.to_string(),
            verbose: defaults::VERBOSE_LOGGING,
            schema: SchemaConfig::default(),
        }
    }
}

impl Env for DocGraphConfig {
    fn inject_opt_env_vars(&mut self) -> ConfigResult<()> {
        self.log_level = env_or_default(EnvVar::LogLevel, self.log_level.clone());
        self.schema.inject_opt_env_vars()?;
        Ok(())
    }
}

impl DocGraphConfig {
    /// Load a configuration from a YAML file, applying environment overrides.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let file = File::open(path)?;
        let mut config: DocGraphConfig = serde_yaml::from_reader(file)?;
        config.inject_opt_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from the given file, or fall back to defaults.
    pub fn from_opt_file(path: Option<PathBuf>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let mut config = Self::default();
                config.inject_opt_env_vars()?;
                config.validate()?;
                Ok(config)
            }
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }
        Ok(())
    }
}
