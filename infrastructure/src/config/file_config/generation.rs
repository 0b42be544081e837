//! Text-generation configuration from TOML (`[generation]` section)

use super::super::issue::{ConfigIssue, ConfigIssueCode, Severity};
use qa_application::GenerationParams;
use qa_domain::Engine;
use serde::{Deserialize, Serialize};

/// Raw generation configuration
///
/// Covers both the list-generation knobs and the OpenAI-compatible
/// endpoint used for lists and reference answers.
///
/// # Example
///
/// ```toml
/// [generation]
/// engine = "gpt-3.5-turbo"
/// list_temperature = 0.33
/// max_retries = 5
/// num_themes = 50
/// questions_per_theme = 10
/// base_url = "https://api.openai.com/v1"
/// api_key_env = "OPENAI_API_KEY"
/// request_timeout_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub engine: String,
    pub list_temperature: f32,
    pub max_retries: usize,
    pub num_themes: usize,
    pub questions_per_theme: usize,
    /// Overrides the built-in fallback themes when set.
    pub default_themes: Option<Vec<String>>,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Direct API key (not recommended; use the env var instead).
    pub api_key: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            engine: params.engine.to_string(),
            list_temperature: params.list_temperature,
            max_retries: params.max_retries,
            num_themes: params.num_themes,
            questions_per_theme: params.questions_per_theme,
            default_themes: None,
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            request_timeout_secs: 60,
        }
    }
}

impl FileGenerationConfig {
    pub fn to_params(&self) -> GenerationParams {
        GenerationParams::default()
            .with_engine(Engine::from_name(&self.engine))
            .with_list_temperature(self.list_temperature)
            .with_max_retries(self.max_retries)
            .with_num_themes(self.num_themes)
            .with_questions_per_theme(self.questions_per_theme)
    }

    /// Resolve the API key: direct value first, then the configured env var.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.is_empty())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.max_retries == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::OutOfRange {
                    field: "generation.max_retries".to_string(),
                    value: "0".to_string(),
                },
                message: "generation.max_retries is 0: generated lists always fall back to defaults"
                    .to_string(),
            });
        }
        if !(0.0..=2.0).contains(&self.list_temperature) {
            issues.push(ConfigIssue::out_of_range(
                "generation.list_temperature",
                self.list_temperature,
                format!(
                    "generation.list_temperature must be within [0, 2], got {}",
                    self.list_temperature
                ),
            ));
        }
        if self.num_themes == 0 || self.questions_per_theme == 0 {
            issues.push(ConfigIssue::out_of_range(
                "generation.num_themes",
                format!("{}/{}", self.num_themes, self.questions_per_theme),
                "generation.num_themes and generation.questions_per_theme must be at least 1",
            ));
        }
        issues
    }
}
