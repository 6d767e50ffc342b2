//! Error types for pomo.

use thiserror::Error;

/// Errors produced by the timer shell.
///
/// The engine itself is infallible; everything here comes from the
/// surrounding plumbing (config files, the terminal, the audio cue).
#[derive(Debug, Error)]
pub enum PomoError {
    /// Configuration could not be read, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The terminal could not be set up or drawn to.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The completion cue could not be played.
    #[error("Notification failed: {0}")]
    Notification(String),

    /// User input was rejected.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
