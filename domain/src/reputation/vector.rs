//! Running per-peer reputation

use crate::core::error::DomainError;
use crate::membership::PeerUid;
use crate::scoring::ScoreRecord;
use std::collections::BTreeMap;

/// Exponential moving average of per-peer scores.
///
/// `r = alpha * r + (1 - alpha) * score` for every peer present in an
/// update. Peers start at `0.0`; peers absent from an update keep their value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReputationVector {
    alpha: f64,
    scores: BTreeMap<PeerUid, f64>,
}

impl ReputationVector {
    pub fn new(alpha: f64) -> Result<Self, DomainError> {
        if !(0.0..1.0).contains(&alpha) {
            return Err(DomainError::InvalidAlpha(alpha));
        }
        Ok(Self {
            alpha,
            scores: BTreeMap::new(),
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Blend one iteration's scores into the running values.
    pub fn update(&mut self, record: &ScoreRecord) {
        for (uid, score) in record.scores() {
            let previous = self.get(uid);
            let blended = self.alpha * previous + (1.0 - self.alpha) * score;
            if blended.is_finite() {
                self.scores.insert(uid, blended);
            }
        }
    }

    /// Current reputation of a peer, `0.0` if never scored.
    pub fn get(&self, uid: PeerUid) -> f64 {
        self.scores.get(&uid).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PeerUid, f64)> + '_ {
        self.scores.iter().map(|(uid, score)| (*uid, *score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
