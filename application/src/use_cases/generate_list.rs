//! List generation use case
//!
//! Asks the text-generation service for a list literal and parses it,
//! retrying on any failure and falling back to a caller-supplied default.

use crate::ports::text_generator::{GatewayError, GenerationRequest, TextGenerator};
use qa_domain::{Engine, ListParseError, extract_list};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Why a single generation attempt produced no list
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ListGenerationError {
    #[error("Generation transport error: {0}")]
    Transport(#[from] GatewayError),

    #[error("Generation parse error: {0}")]
    Parse(#[from] ListParseError),
}

/// Produces string lists from a prompt, degrading to a default list
pub struct ListGenerator {
    generator: Arc<dyn TextGenerator>,
    engine: Engine,
    temperature: f32,
}

impl ListGenerator {
    pub fn new(generator: Arc<dyn TextGenerator>, engine: Engine, temperature: f32) -> Self {
        Self {
            generator,
            engine,
            temperature,
        }
    }

    /// Generate a list for `prompt`.
    ///
    /// Makes at most `max_retries` attempts. Returns `default_list` untouched
    /// when every attempt fails; never errors.
    pub async fn generate_list(
        &self,
        prompt: &str,
        default_list: Vec<String>,
        max_retries: usize,
    ) -> Vec<String> {
        for attempt in 1..=max_retries {
            match self.attempt(prompt).await {
                Ok(list) => {
                    debug!("List generated on attempt {} ({} items)", attempt, list.len());
                    return list;
                }
                Err(ListGenerationError::Transport(e)) => {
                    error!(
                        "List generation attempt {}/{} failed: {}",
                        attempt, max_retries, e
                    );
                }
                Err(ListGenerationError::Parse(e)) => {
                    info!(
                        "List generation attempt {}/{} unparseable: {}",
                        attempt, max_retries, e
                    );
                }
            }
        }

        info!(
            "List generation exhausted {} attempts, using default list ({} items)",
            max_retries,
            default_list.len()
        );
        default_list
    }

    /// One request/parse round trip
    pub async fn attempt(&self, prompt: &str) -> Result<Vec<String>, ListGenerationError> {
        let request = GenerationRequest::new(prompt, self.temperature, self.engine.clone());
        let text = self.generator.generate(&request).await?;
        let flattened = text.replace('\n', " ");
        Ok(extract_list(&flattened)?)
    }
}
