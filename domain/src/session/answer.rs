//! Terminal state of a peer's answer stream

use crate::membership::PeerUid;
use serde::{Deserialize, Serialize};

/// How a peer's stream ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum StreamOutcome {
    /// The stream reached end-of-stream or a final payload.
    Completed,
    /// The stream could not be opened or broke mid-way.
    Failed(String),
    /// The peer did not finish within the per-peer timeout.
    TimedOut,
}

/// One peer's answer for one iteration.
///
/// Failed and timed-out peers are still recorded, with no text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerAnswer {
    pub peer: PeerUid,
    pub text: Option<String>,
    pub outcome: StreamOutcome,
}

impl PeerAnswer {
    pub fn completed(peer: PeerUid, text: impl Into<String>) -> Self {
        Self {
            peer,
            text: Some(text.into()),
            outcome: StreamOutcome::Completed,
        }
    }

    pub fn failed(peer: PeerUid, error: impl Into<String>) -> Self {
        Self {
            peer,
            text: None,
            outcome: StreamOutcome::Failed(error.into()),
        }
    }

    pub fn timed_out(peer: PeerUid) -> Self {
        Self {
            peer,
            text: None,
            outcome: StreamOutcome::TimedOut,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == StreamOutcome::Completed
    }
}
