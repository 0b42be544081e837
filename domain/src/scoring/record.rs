//! Per-iteration score record

use super::scorer::Scorer;
use crate::membership::PeerUid;
use crate::session::PeerAnswer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A peer's answer and its score for one iteration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerScore {
    pub answer: Option<String>,
    pub score: f64,
}

/// Scores of every queried peer for one iteration, keyed by uid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    entries: BTreeMap<PeerUid, PeerScore>,
}

impl ScoreRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score each answer against `reference`.
    ///
    /// Peers without text score `0.0` without consulting the scorer.
    pub fn from_answers<'a>(
        scorer: &dyn Scorer,
        reference: &str,
        answers: impl IntoIterator<Item = &'a PeerAnswer>,
    ) -> Self {
        let mut record = Self::new();
        for answer in answers {
            let score = match answer.text.as_deref() {
                Some(text) => sanitize(scorer.score(reference, text)),
                None => 0.0,
            };
            record.insert(answer.peer, answer.text.clone(), score);
        }
        record
    }

    /// Record answers without scoring them (scoring skipped this iteration).
    pub fn unscored<'a>(answers: impl IntoIterator<Item = &'a PeerAnswer>) -> Self {
        let mut record = Self::new();
        for answer in answers {
            record.insert(answer.peer, answer.text.clone(), 0.0);
        }
        record
    }

    pub fn insert(&mut self, peer: PeerUid, answer: Option<String>, score: f64) {
        self.entries.insert(
            peer,
            PeerScore {
                answer,
                score: sanitize(score),
            },
        );
    }

    pub fn get(&self, peer: PeerUid) -> Option<&PeerScore> {
        self.entries.get(&peer)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PeerUid, &PeerScore)> {
        self.entries.iter().map(|(uid, score)| (*uid, score))
    }

    /// `(uid, score)` pairs in uid order
    pub fn scores(&self) -> impl Iterator<Item = (PeerUid, f64)> + '_ {
        self.entries.iter().map(|(uid, entry)| (*uid, entry.score))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mean score across peers, `0.0` for an empty record
    pub fn mean(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.entries.values().map(|e| e.score).sum::<f64>() / self.entries.len() as f64
    }
}

fn sanitize(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
