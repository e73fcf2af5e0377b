//! CLI output: command results and error mapping to the stable CLI surface.

use crate::error::ApiError;

/// Text to print on stdout and the process exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: i32,
}

impl CommandOutput {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit_code: 0,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit_code: 1,
        }
    }
}

/// Map domain/service errors to a single line for stderr.
pub fn map_error(e: &ApiError) -> String {
    e.to_string().replace('\n', " ")
}
