//! Error types for the planner-to-program compiler.

use crate::types::DayData;
use thiserror::Error;

/// Compilation errors
///
/// Compilation raises exactly one kind of error. Every other irregularity
/// (failed day evaluation, unknown exercise, unrecognized directive) degrades
/// to a best-effort program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error(
        "Same property '{property}' is specified with different arguments in multiple weeks/days for exercise '{exercise}': both in {first} and {second}"
    )]
    PropertyConflict {
        property: String,
        exercise: String,
        first: DayData,
        second: DayData,
    },
}

/// Errors at the outer surfaces: configuration, file input, CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Compilation failed: {0}")]
    Compile(#[from] CompileError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
