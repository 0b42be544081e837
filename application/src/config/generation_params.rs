//! Question generation parameters.

use qa_domain::Engine;
use serde::{Deserialize, Serialize};

/// Controls list generation for themes and questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Engine used for theme and question lists.
    pub engine: Engine,
    /// Sampling temperature for list requests; low so retries converge.
    pub list_temperature: f32,
    /// Attempts per list before falling back to the default list.
    pub max_retries: usize,
    /// Themes requested per theme batch.
    pub num_themes: usize,
    /// Questions requested per theme.
    pub questions_per_theme: usize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            engine: Engine::Gpt35Turbo,
            list_temperature: 0.33,
            max_retries: 5,
            num_themes: 50,
            questions_per_theme: 10,
        }
    }
}

impl GenerationParams {
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_list_temperature(mut self, temperature: f32) -> Self {
        self.list_temperature = temperature;
        self
    }

    pub fn with_max_retries(mut self, max: usize) -> Self {
        self.max_retries = max;
        self
    }

    pub fn with_num_themes(mut self, count: usize) -> Self {
        self.num_themes = count;
        self
    }

    pub fn with_questions_per_theme(mut self, count: usize) -> Self {
        self.questions_per_theme = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = GenerationParams::default();
        assert_eq!(params.engine, Engine::Gpt35Turbo);
        assert_eq!(params.list_temperature, 0.33);
        assert_eq!(params.max_retries, 5);
        assert_eq!(params.num_themes, 50);
        assert_eq!(params.questions_per_theme, 10);
    }
}
