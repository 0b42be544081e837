//! Loop configuration from TOML (`[validator]` section)

use super::super::issue::ConfigIssue;
use qa_application::ValidatorParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw validator loop configuration
///
/// # Example
///
/// ```toml
/// [validator]
/// alpha = 0.9
/// netuid = 1
/// weight_emit_cadence = 25
/// iteration_interval_secs = 8
/// max_iterations = 100          # omit to run until interrupted
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileValidatorConfig {
    pub alpha: f64,
    pub netuid: u16,
    pub weight_emit_cadence: u64,
    pub iteration_interval_secs: u64,
    pub max_iterations: Option<u64>,
}

impl Default for FileValidatorConfig {
    fn default() -> Self {
        let params = ValidatorParams::default();
        Self {
            alpha: params.alpha,
            netuid: params.netuid,
            weight_emit_cadence: params.weight_emit_cadence,
            iteration_interval_secs: params.iteration_interval.as_secs(),
            max_iterations: params.max_iterations,
        }
    }
}

impl FileValidatorConfig {
    /// Convert to loop parameters (telemetry is set from `[telemetry]`).
    pub fn to_params(&self) -> ValidatorParams {
        ValidatorParams::default()
            .with_alpha(self.alpha)
            .with_netuid(self.netuid)
            .with_weight_emit_cadence(self.weight_emit_cadence)
            .with_iteration_interval(Duration::from_secs(self.iteration_interval_secs))
            .with_max_iterations(self.max_iterations)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if !(0.0..1.0).contains(&self.alpha) {
            issues.push(ConfigIssue::out_of_range(
                "validator.alpha",
                self.alpha,
                format!("validator.alpha must be within [0, 1), got {}", self.alpha),
            ));
        }
        if self.weight_emit_cadence == 0 {
            issues.push(ConfigIssue::out_of_range(
                "validator.weight_emit_cadence",
                0,
                "validator.weight_emit_cadence must be at least 1",
            ));
        }
        issues
    }
}
