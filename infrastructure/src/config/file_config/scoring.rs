//! Scoring configuration from TOML (`[scoring]` section)

use super::super::issue::{ConfigIssue, ConfigIssueCode, Severity};
use qa_domain::ScoringPolicy;
use serde::{Deserialize, Serialize};

/// Raw scoring configuration
///
/// ```toml
/// [scoring]
/// policy = "token_f1"   # "token_f1" or "jaccard"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScoringConfig {
    pub policy: String,
}

impl Default for FileScoringConfig {
    fn default() -> Self {
        Self {
            policy: ScoringPolicy::default().to_string(),
        }
    }
}

impl FileScoringConfig {
    /// Parse the policy name, warning and falling back to the default on failure.
    pub fn parse_policy(&self) -> (ScoringPolicy, Vec<ConfigIssue>) {
        match self.policy.parse::<ScoringPolicy>() {
            Ok(policy) => (policy, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "scoring.policy".to_string(),
                        value: self.policy.clone(),
                        valid_values: vec!["token_f1".to_string(), "jaccard".to_string()],
                    },
                    message: format!(
                        "scoring.policy: unknown value '{}', falling back to '{}'",
                        self.policy,
                        ScoringPolicy::default()
                    ),
                };
                (ScoringPolicy::default(), vec![issue])
            }
        }
    }
}
