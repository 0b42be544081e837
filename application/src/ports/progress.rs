//! Progress notification port
//!
//! Defines the interface for reporting validator progress.

use qa_domain::{Engine, PeerAnswer, PeerUid, Question, ScoreRecord, WeightVector};

/// Callback for progress updates during validator iterations
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, log, etc.)
pub trait IterationProgress: Send + Sync {
    /// Called when a query is about to be broadcast
    fn on_iteration_start(&self, step: u64, question: &Question, engine: &Engine, peers: usize);

    /// Called when an iteration finished scoring
    fn on_iteration_complete(&self, step: u64, record: &ScoreRecord);

    // ==================== Peer Stream Callbacks ====================

    /// Called for each chunk a peer streams.
    fn on_peer_chunk(&self, _peer: PeerUid, _chunk: &str) {}

    /// Called when a peer's stream reaches a terminal state.
    fn on_peer_complete(&self, _answer: &PeerAnswer) {}

    /// Called after weights were computed and handed to the submitter.
    fn on_weights_emitted(&self, _weights: &WeightVector, _submitted: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl IterationProgress for NoProgress {
    fn on_iteration_start(
        &self,
        _step: u64,
        _question: &Question,
        _engine: &Engine,
        _peers: usize,
    ) {
    }
    fn on_iteration_complete(&self, _step: u64, _record: &ScoreRecord) {}
}
