//! Engine escalation policy from TOML (`[engine]` section)

use super::super::issue::ConfigIssue;
use qa_domain::{Engine, EnginePolicy};
use serde::{Deserialize, Serialize};

/// Raw engine policy
///
/// # Example
///
/// ```toml
/// [engine]
/// default = "gpt-3.5-turbo"
/// escalation = "gpt-4"
/// escalation_probability = 0.05
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEngineConfig {
    pub default: String,
    pub escalation: String,
    pub escalation_probability: f64,
}

impl Default for FileEngineConfig {
    fn default() -> Self {
        let policy = EnginePolicy::default();
        Self {
            default: policy.default_engine.to_string(),
            escalation: policy.escalation_engine.to_string(),
            escalation_probability: policy.escalation_probability,
        }
    }
}

impl FileEngineConfig {
    /// Build the policy, falling back to the default policy on a bad probability.
    pub fn parse_policy(&self) -> (EnginePolicy, Vec<ConfigIssue>) {
        match EnginePolicy::new(
            Engine::from_name(&self.default),
            Engine::from_name(&self.escalation),
            self.escalation_probability,
        ) {
            Ok(policy) => (policy, vec![]),
            Err(e) => {
                let issue = ConfigIssue::out_of_range(
                    "engine.escalation_probability",
                    self.escalation_probability,
                    format!("engine.escalation_probability: {}", e),
                );
                (EnginePolicy::default(), vec![issue])
            }
        }
    }
}
