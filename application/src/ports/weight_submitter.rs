//! Weight submission port

use async_trait::async_trait;
use qa_domain::WeightVector;
use thiserror::Error;

/// Errors reported by the weight-submission collaborator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmissionError {
    #[error("Weights rejected: {0}")]
    Rejected(String),

    #[error("Submission transport error: {0}")]
    Transport(String),
}

/// Hands normalized weights to the chain-submission collaborator.
///
/// Callers do not retry; the next emission cadence is the retry.
#[async_trait]
pub trait WeightSubmitter: Send + Sync {
    async fn submit(&self, netuid: u16, weights: &WeightVector) -> Result<(), SubmissionError>;
}
