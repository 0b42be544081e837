//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    #[error("Blend factor must be within [0, 1), got {0}")]
    InvalidAlpha(f64),

    #[error("Weight emission cadence must be at least 1")]
    InvalidCadence,

    #[error("Escalation probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("Unknown scoring policy: {0}")]
    UnknownScoringPolicy(String),
}
