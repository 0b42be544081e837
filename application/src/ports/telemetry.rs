//! Port for per-iteration telemetry.
//!
//! Defines the [`TelemetrySink`] trait for recording one structured record
//! per validator iteration (query, engine, every peer's answer and score).
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the
//! iteration data in a machine-readable form for offline analysis.

use chrono::{DateTime, Utc};
use qa_domain::{Engine, PeerUid, Question, ScoreRecord};
use serde::Serialize;

/// One peer's entry in an [`IterationRecord`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEntry {
    pub uid: PeerUid,
    pub response: Option<String>,
    pub score: f64,
}

/// Structured record of one iteration
#[derive(Debug, Clone, Serialize)]
pub struct IterationRecord {
    pub timestamp: DateTime<Utc>,
    /// Seconds from iteration start to record creation
    pub runtime_secs: f64,
    pub step: u64,
    pub engine: Engine,
    pub prompt: String,
    pub responses: Vec<ResponseEntry>,
}

impl IterationRecord {
    pub fn new(
        step: u64,
        engine: &Engine,
        question: &Question,
        record: &ScoreRecord,
        started: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        let runtime_secs = (now - started).num_milliseconds() as f64 / 1000.0;
        Self {
            timestamp: started,
            runtime_secs,
            step,
            engine: engine.clone(),
            prompt: question.content().to_string(),
            responses: record
                .iter()
                .map(|(uid, entry)| ResponseEntry {
                    uid,
                    response: entry.answer.clone(),
                    score: entry.score,
                })
                .collect(),
        }
    }
}

/// Port for recording iteration telemetry.
///
/// `record` is intentionally synchronous and non-fallible: a failing sink
/// must never disturb the validator loop, so implementations swallow errors.
pub trait TelemetrySink: Send + Sync {
    fn record(&self, record: &IterationRecord);

    /// Flush buffered records (called on shutdown).
    fn flush(&self) {}
}

/// No-op implementation for tests and when telemetry is disabled.
pub struct NoTelemetry;

impl TelemetrySink for NoTelemetry {
    fn record(&self, _record: &IterationRecord) {}
}
