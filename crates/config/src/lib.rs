//! Configuration management for EchoBiz
//!
//! Supports loading configuration from:
//! - YAML/TOML files (`config/default.*`, then `config/<environment>.*`)
//! - Environment variables (ECHOBIZ prefix, `__` between nested keys)
//!
//! The keyword lexicon is a separate YAML file, referenced by
//! `engine.lexicon_path` and loaded by the text-processing crate.

pub mod settings;

pub use settings::{
    load_settings, load_settings_from, EngineConfig, ObservabilityConfig, RuntimeEnvironment,
    Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
