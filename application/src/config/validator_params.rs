//! Validator loop parameters.
//!
//! [`ValidatorParams`] groups the static parameters that control the
//! iteration loop in [`ValidatorLoop`](crate::use_cases::run_validator::ValidatorLoop).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Loop control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorParams {
    /// EMA blend factor: weight kept from the previous reputation.
    pub alpha: f64,
    /// Subnet identifier weights are submitted for.
    pub netuid: u16,
    /// Completed iterations between weight emissions.
    pub weight_emit_cadence: u64,
    /// Pause between iterations.
    pub iteration_interval: Duration,
    /// Stop after this many iteration attempts (`None` runs until interrupted).
    pub max_iterations: Option<u64>,
    /// Record one telemetry entry per iteration.
    pub telemetry_enabled: bool,
}

impl Default for ValidatorParams {
    fn default() -> Self {
        Self {
            alpha: 0.9,
            netuid: 1,
            weight_emit_cadence: 25,
            iteration_interval: Duration::from_secs(8),
            max_iterations: None,
            telemetry_enabled: false,
        }
    }
}

impl ValidatorParams {
    // ==================== Builder Methods ====================

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_netuid(mut self, netuid: u16) -> Self {
        self.netuid = netuid;
        self
    }

    pub fn with_weight_emit_cadence(mut self, cadence: u64) -> Self {
        self.weight_emit_cadence = cadence;
        self
    }

    pub fn with_iteration_interval(mut self, interval: Duration) -> Self {
        self.iteration_interval = interval;
        self
    }

    pub fn with_max_iterations(mut self, max: Option<u64>) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_telemetry(mut self, enabled: bool) -> Self {
        self.telemetry_enabled = enabled;
        self
    }
}

/// Peer collection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionParams {
    /// Longest a single peer stream may take before it is cut off.
    pub peer_timeout: Duration,
}

impl Default for CollectionParams {
    fn default() -> Self {
        Self {
            peer_timeout: Duration::from_secs(12),
        }
    }
}

impl CollectionParams {
    pub fn with_peer_timeout(mut self, timeout: Duration) -> Self {
        self.peer_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = ValidatorParams::default();
        assert_eq!(params.alpha, 0.9);
        assert_eq!(params.netuid, 1);
        assert_eq!(params.weight_emit_cadence, 25);
        assert_eq!(params.iteration_interval, Duration::from_secs(8));
        assert!(params.max_iterations.is_none());
        assert!(!params.telemetry_enabled);
    }

    #[test]
    fn test_builder() {
        let params = ValidatorParams::default()
            .with_alpha(0.5)
            .with_netuid(7)
            .with_weight_emit_cadence(10)
            .with_max_iterations(Some(3))
            .with_telemetry(true);

        assert_eq!(params.alpha, 0.5);
        assert_eq!(params.netuid, 7);
        assert_eq!(params.weight_emit_cadence, 10);
        assert_eq!(params.max_iterations, Some(3));
        assert!(params.telemetry_enabled);
    }

    #[test]
    fn test_collection_default() {
        assert_eq!(
            CollectionParams::default().peer_timeout,
            Duration::from_secs(12)
        );
    }
}
