//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application
//! configuration by [`FileConfig::to_validator_config`].

mod engine;
mod generation;
mod output;
mod peers;
mod scoring;
mod validator;

pub use engine::FileEngineConfig;
pub use generation::FileGenerationConfig;
pub use output::{FileTelemetryConfig, FileWeightsConfig};
pub use peers::{FilePeerEntry, FilePeersConfig};
pub use scoring::FileScoringConfig;
pub use validator::FileValidatorConfig;

use super::issue::ConfigIssue;
use qa_application::ValidatorConfig;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Loop control
    pub validator: FileValidatorConfig,
    /// Engine escalation policy
    pub engine: FileEngineConfig,
    /// List generation and the text-generation endpoint
    pub generation: FileGenerationConfig,
    /// Static peer set and per-peer timeout
    pub peers: FilePeersConfig,
    /// Per-iteration telemetry output
    pub telemetry: FileTelemetryConfig,
    /// Weight submission output
    pub weights: FileWeightsConfig,
    /// Answer scoring policy
    pub scoring: FileScoringConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.validator.validate());
        issues.extend(self.engine.parse_policy().1);
        issues.extend(self.generation.validate());
        issues.extend(self.peers.validate());
        issues.extend(self.scoring.parse_policy().1);
        issues
    }

    /// Build the application configuration.
    ///
    /// Warnings fall back to defaults; values the loop cannot run with are
    /// rejected by [`ValidatorConfig::validate`] when the loop is built.
    pub fn to_validator_config(&self) -> ValidatorConfig {
        ValidatorConfig::new(
            self.validator
                .to_params()
                .with_telemetry(self.telemetry.enabled),
            self.generation.to_params(),
            self.peers.to_params(),
            self.engine.parse_policy().0,
            self.scoring.parse_policy().0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::issue::Severity;
    use qa_domain::{Engine, ScoringPolicy};
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[validator]
alpha = 0.8
netuid = 7
weight_emit_cadence = 10
iteration_interval_secs = 4
max_iterations = 100

[engine]
default = "gpt-3.5-turbo"
escalation = "gpt-4"
escalation_probability = 0.1

[generation]
max_retries = 3
num_themes = 20

[peers]
timeout_secs = 6

[[peers.members]]
uid = 0
hotkey = "hk-0"
endpoint = "http://127.0.0.1:8091"

[telemetry]
enabled = true
path = "/tmp/telemetry.jsonl"

[scoring]
policy = "jaccard"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_empty());

        let app = config.to_validator_config();
        assert_eq!(app.validator.alpha, 0.8);
        assert_eq!(app.validator.netuid, 7);
        assert_eq!(app.validator.weight_emit_cadence, 10);
        assert_eq!(app.validator.iteration_interval, Duration::from_secs(4));
        assert_eq!(app.validator.max_iterations, Some(100));
        assert!(app.validator.telemetry_enabled);
        assert_eq!(app.generation.max_retries, 3);
        assert_eq!(app.generation.num_themes, 20);
        assert_eq!(app.generation.questions_per_theme, 10);
        assert_eq!(app.collection.peer_timeout, Duration::from_secs(6));
        assert_eq!(app.engine.escalation_engine, Engine::Gpt4);
        assert_eq!(app.engine.escalation_probability, 0.1);
        assert_eq!(app.scoring, ScoringPolicy::Jaccard);
        assert!(app.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[validator]
netuid = 3
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validator.netuid, 3);
        // Defaults should apply
        assert_eq!(config.validator.alpha, 0.9);
        assert_eq!(config.validator.weight_emit_cadence, 25);
        assert!(!config.telemetry.enabled);
        assert_eq!(config.scoring.policy, "token_f1");
    }

    #[test]
    fn test_default_config() {
        let app = FileConfig::default().to_validator_config();
        assert_eq!(app.validator.alpha, 0.9);
        assert_eq!(app.validator.netuid, 1);
        assert_eq!(app.validator.iteration_interval, Duration::from_secs(8));
        assert_eq!(app.generation.list_temperature, 0.33);
        assert_eq!(app.collection.peer_timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_validate_reports_errors_and_warnings() {
        let mut config = FileConfig::default();
        config.validator.alpha = 1.5;
        config.validator.weight_emit_cadence = 0;
        config.scoring.policy = "bleu".to_string();

        let issues = config.validate();
        let errors = issues.iter().filter(|i| i.is_error()).count();
        let warnings = issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count();

        assert_eq!(errors, 2);
        // Unknown scoring policy + no peers
        assert_eq!(warnings, 2);
        assert!(config.to_validator_config().validate().is_err());
    }
}
