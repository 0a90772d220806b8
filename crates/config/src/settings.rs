//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use echobiz_core::{Fallbacks, Language};

use crate::ConfigError;

const ENV_PREFIX: &str = "ECHOBIZ";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Relaxed validation, warnings only
    #[default]
    Development,
    Staging,
    Production,
}

impl RuntimeEnvironment {
    /// Missing files are errors instead of warnings
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

/// Main application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Command interpretation
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Observability configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Interpreter and history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Values used when nothing usable is extracted
    #[serde(default)]
    pub fallbacks: Fallbacks,

    /// YAML lexicon; the built-in tables are used when unset
    #[serde(default)]
    pub lexicon_path: Option<String>,

    /// Capture Devanagari person names ("रमेश से")
    #[serde(default)]
    pub devanagari_names: bool,

    /// How many recent entries to show
    #[serde(default = "default_history_display_limit")]
    pub history_display_limit: usize,

    /// Language for greetings and examples
    #[serde(default)]
    pub language: Language,
}

fn default_history_display_limit() -> usize {
    5
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fallbacks: Fallbacks::default(),
            lexicon_path: None,
            devanagari_names: false,
            history_display_limit: default_history_display_limit(),
            language: Language::default(),
        }
    }
}

impl Settings {
    /// Load a single explicit file, plus environment overrides
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let config = Config::builder()
            .add_source(File::from(path))
            .add_source(env_source())
            .build()?;
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_observability()?;
        self.validate_fallbacks()?;
        self.validate_engine()?;
        Ok(())
    }

    fn validate_observability(&self) -> Result<(), ConfigError> {
        let level = self.observability.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!(
                    "Must be one of {}, got {:?}",
                    LOG_LEVELS.join(", "),
                    self.observability.log_level
                ),
            });
        }
        Ok(())
    }

    fn validate_fallbacks(&self) -> Result<(), ConfigError> {
        match self.engine.fallbacks.invalid_field() {
            Some((field, message)) => Err(ConfigError::InvalidValue {
                field: format!("engine.fallbacks.{}", field),
                message: message.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn validate_engine(&self) -> Result<(), ConfigError> {
        if self.engine.history_display_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "engine.history_display_limit".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }

        if let Some(path) = &self.engine.lexicon_path {
            if !Path::new(path).exists() {
                if self.environment.is_strict() {
                    return Err(ConfigError::InvalidValue {
                        field: "engine.lexicon_path".to_string(),
                        message: format!(
                            "{} does not exist (required in {} mode)",
                            path,
                            self.environment.as_str()
                        ),
                    });
                }
                tracing::warn!(
                    path = %path,
                    "Lexicon file not found, built-in keyword tables will be used"
                );
            }
        }

        Ok(())
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

/// Load settings from `config/` relative to the working directory
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from("config", env)
}

/// Load `<dir>/default.*`, then `<dir>/<env>.*`, then environment variables
pub fn load_settings_from<P: AsRef<Path>>(
    dir: P,
    env: Option<&str>,
) -> Result<Settings, ConfigError> {
    let dir = dir.as_ref();
    let mut builder = Config::builder();

    // Load default config
    let default = dir.join("default");
    builder = builder.add_source(File::with_name(&default.to_string_lossy()).required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        let specific = dir.join(env_name);
        builder = builder.add_source(File::with_name(&specific.to_string_lossy()).required(false));
    }

    builder = builder.add_source(env_source());

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}
