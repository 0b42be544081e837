//! Text generation port
//!
//! Defines the interface for the external text-generation service used for
//! question generation and reference answers.

use async_trait::async_trait;
use qa_domain::Engine;
use thiserror::Error;

/// Errors that can occur when talking to an external service
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// A single non-streamed generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub temperature: f32,
    pub engine: Engine,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, temperature: f32, engine: Engine) -> Self {
        Self {
            prompt: prompt.into(),
            temperature,
            engine,
        }
    }
}

/// Gateway to the text-generation service
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a prompt and get the full response text
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError>;
}
