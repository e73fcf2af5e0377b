//! Configuration System
//!
//! Layered configuration for the compiler and the CLI. Sources merge in
//! increasing precedence: built-in defaults, the user's global
//! `config.toml`, the workspace `liftplan.toml`, the `LIFTPLAN_ENV` overlay
//! `liftplan.<env>.toml`, then `LIFTPLAN__SECTION__KEY` environment variables.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::types::Unit;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod merge {
    pub mod merge_policy;
}

mod sources {
    pub mod global_file;
    pub mod workspace_file;
}

pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiftplanConfig {
    /// Compiler settings
    #[serde(default)]
    pub compiler: CompilerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings consumed by the compiler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Unit of the plan; selects catalog starting weights and default increments
    #[serde(default)]
    pub unit: Unit,

    /// Length of generated program, exercise, day and week ids
    #[serde(default = "default_id_length")]
    pub id_length: usize,

    /// Length of the id in collapsed day names (`Day abc`)
    #[serde(default = "default_day_name_id_length")]
    pub day_name_id_length: usize,

    /// Program description
    #[serde(default = "default_description")]
    pub description: String,
}

pub(crate) fn default_id_length() -> usize {
    8
}

pub(crate) fn default_day_name_id_length() -> usize {
    3
}

pub(crate) fn default_description() -> String {
    "Generated from a Workout Planner".to_string()
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            unit: Unit::default(),
            id_length: default_id_length(),
            day_name_id_length: default_day_name_id_length(),
            description: default_description(),
        }
    }
}

impl CompilerConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.id_length == 0 {
            return Err("id_length must be greater than 0".to_string());
        }
        if self.day_name_id_length == 0 {
            return Err("day_name_id_length must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Compiler(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Compiler(msg) => write!(f, "Compiler: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl LiftplanConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.compiler.validate() {
            errors.push(ValidationError::Compiler(e));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            errors.push(ValidationError::Logging(format!(
                "unknown format '{}'",
                self.logging.format
            )));
        }
        if !matches!(self.logging.output.as_str(), "stdout" | "stderr" | "file") {
            errors.push(ValidationError::Logging(format!(
                "unknown output '{}'",
                self.logging.output
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ApiError> {
        toml::to_string_pretty(self)
            .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e)))
    }
}

/// Loads and validates [`LiftplanConfig`]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Merge every source for a workspace
    pub fn load(workspace_root: &Path) -> Result<LiftplanConfig, ApiError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = builder.add_source(env_source());
        Self::finish(builder.build()?)
    }

    /// One explicit file over the defaults, still overridable from the environment
    pub fn load_from_file(path: &Path) -> Result<LiftplanConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let config = merge::merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .add_source(env_source())
            .build()?;
        Self::finish(config)
    }

    /// Built-in defaults only
    pub fn defaults() -> LiftplanConfig {
        LiftplanConfig::default()
    }

    fn finish(config: Config) -> Result<LiftplanConfig, ApiError> {
        let config: LiftplanConfig = config.try_deserialize()?;
        config.validate().map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                messages.join("\n")
            ))
        })?;
        Ok(config)
    }
}

/// `LIFTPLAN__COMPILER__UNIT=kg` sets `compiler.unit`
fn env_source() -> Environment {
    Environment::with_prefix("LIFTPLAN")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
