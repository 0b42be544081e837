//! Types for the validator loop: errors, per-iteration reports, run summary.

use crate::ports::text_generator::GatewayError;
use crate::use_cases::collect_responses::CollectedAnswers;
use crate::use_cases::question_supply::SupplyError;
use qa_domain::{Engine, Question, ScoreRecord, WeightVector};
use thiserror::Error;

/// Errors that abort a single iteration (the loop itself carries on)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IterationError {
    #[error("Membership snapshot unavailable: {0}")]
    Membership(GatewayError),

    #[error("Question supply failed: {0}")]
    Supply(#[from] SupplyError),
}

/// Whether the iteration's answers were scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationOutcome {
    Scored,
    /// No reference answer, so reputation was left untouched.
    ScoringSkipped,
}

/// Everything one completed iteration produced
#[derive(Debug, Clone)]
pub struct IterationReport {
    pub step: u64,
    pub question: Question,
    pub engine: Engine,
    pub reference: Option<String>,
    pub answers: CollectedAnswers,
    pub record: ScoreRecord,
    pub outcome: IterationOutcome,
    /// Weights emitted after this iteration, if it hit the cadence
    pub weights: Option<WeightVector>,
}

impl IterationReport {
    pub fn is_scored(&self) -> bool {
        self.outcome == IterationOutcome::Scored
    }
}

/// Totals for one call to [`ValidatorLoop::run`](super::ValidatorLoop::run)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Iterations attempted
    pub iterations: u64,
    /// Iterations that errored or panicked
    pub failed_iterations: u64,
    /// Iterations completed without a reference answer
    pub skipped_scoring: u64,
    pub weight_emissions: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_error_display() {
        let error = IterationError::Membership(GatewayError::Timeout);
        assert_eq!(error.to_string(), "Membership snapshot unavailable: Timeout");

        let error: IterationError = SupplyError::Exhausted.into();
        assert!(matches!(error, IterationError::Supply(SupplyError::Exhausted)));
    }
}
