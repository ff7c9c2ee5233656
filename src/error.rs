//! Error types for Santa's Tree.

use std::time::Duration;

/// Top-level error type for the app.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),

    #[error("Stage error: {0}")]
    Stage(#[from] StageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// LLM provider errors.
///
/// These never reach the user: the generator absorbs every variant into the
/// fallback bundle. They exist so the provider boundary stays honest about
/// what can go wrong.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("Request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Quiz input errors.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("Answer is empty")]
    EmptyAnswer,

    #[error("Quiz is already complete")]
    AlreadyComplete,
}

/// Stage machine errors.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("Cannot transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Missing {what} for stage {stage}")]
    MissingData { what: String, stage: String },
}

/// Result type alias for the app.
pub type Result<T> = std::result::Result<T, Error>;
