//! [`OpenAiTextGenerator`]: reqwest client for chat completions

use super::protocol::{ChatRequest, parse_completion};
use crate::config::FileGenerationConfig;
use async_trait::async_trait;
use qa_application::{GatewayError, GenerationRequest, TextGenerator};
use std::time::Duration;
use tracing::debug;

pub struct OpenAiTextGenerator {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiTextGenerator {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Build from `[generation]`, resolving the API key from config or env.
    pub fn from_config(config: &FileGenerationConfig) -> Result<Self, GatewayError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            GatewayError::Other(format!("{} is not set", config.api_key_env))
        })?;
        Self::new(
            config.base_url.clone(),
            api_key,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl TextGenerator for OpenAiTextGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
        debug!(
            "Generating with {} (temperature {})",
            request.engine, request.temperature
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&ChatRequest::from(request))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body.chars().take(200).collect::<String>()
            )));
        }

        parse_completion(&body)
    }
}

/// Map a reqwest failure onto the port's error kinds.
pub(crate) fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else if e.is_decode() || e.is_body() {
        GatewayError::InvalidResponse(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}
