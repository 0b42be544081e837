//! Reference answer use case
//!
//! Asks the text-generation service the same question the peers get, at
//! temperature 0, to obtain the answer peers are scored against.

use crate::ports::text_generator::{GenerationRequest, TextGenerator};
use qa_domain::{Engine, Question};
use std::sync::Arc;
use tracing::{debug, warn};

/// Sampling temperature for reference answers
pub const REFERENCE_TEMPERATURE: f32 = 0.0;

pub struct ReferenceAnswerer {
    generator: Arc<dyn TextGenerator>,
}

impl ReferenceAnswerer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Fetch the reference answer, `None` when unavailable or blank.
    pub async fn answer(&self, question: &Question, engine: &Engine) -> Option<String> {
        let request = GenerationRequest::new(
            question.content(),
            REFERENCE_TEMPERATURE,
            engine.clone(),
        );

        match self.generator.generate(&request).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    warn!("Reference answer for '{}' was blank", question);
                    None
                } else {
                    debug!("Reference answer: {} chars from {}", text.len(), engine);
                    Some(text.to_string())
                }
            }
            Err(e) => {
                warn!("Reference answer for '{}' unavailable: {}", question, e);
                None
            }
        }
    }
}
