//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `ORGSYNTH_` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use orgsynth::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Generating {} users", config.generation.user_count);
//! ```

mod error;
mod generation;
mod output;

pub use error::{ConfigError, ValidationError};
pub use generation::{GenerationConfig, MAX_PROJECT_COUNT, MAX_USER_COUNT, MIN_USER_COUNT};
pub use output::OutputConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Generation parameters (run size, seed)
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Output document settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `ORGSYNTH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ORGSYNTH__GENERATION__USER_COUNT=250` -> `generation.user_count = 250`
    /// - `ORGSYNTH__OUTPUT__PATH=out.json` -> `output.path = "out.json"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types. Every value has a default, so an empty environment loads fine.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ORGSYNTH")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.generation.validate()?;
        self.output.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            output: OutputConfig::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info,orgsynth=debug".to_string()
}
