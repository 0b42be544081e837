//! Weight scheduling and normalization

use super::vector::ReputationVector;
use crate::core::error::DomainError;
use crate::membership::{MembershipSnapshot, PeerUid};
use serde::{Deserialize, Serialize};

/// Decides which iterations emit weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightScheduler {
    cadence: u64,
}

impl WeightScheduler {
    pub fn new(cadence: u64) -> Result<Self, DomainError> {
        if cadence == 0 {
            return Err(DomainError::InvalidCadence);
        }
        Ok(Self { cadence })
    }

    pub fn cadence(&self) -> u64 {
        self.cadence
    }

    /// `iteration` is the number of completed iterations (1-based).
    pub fn is_due(&self, iteration: u64) -> bool {
        iteration > 0 && iteration % self.cadence == 0
    }
}

/// Normalized weights, one per snapshot peer, in snapshot order.
///
/// Weights are non-negative and sum to 1 unless the vector is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    uids: Vec<PeerUid>,
    weights: Vec<f64>,
}

impl WeightVector {
    /// L1-normalize reputation over the peers of `snapshot`.
    ///
    /// Peers outside the snapshot are dropped; snapshot peers with no
    /// reputation get `0.0`. If every value is zero the weights are uniform.
    pub fn normalize(reputation: &ReputationVector, snapshot: &MembershipSnapshot) -> Self {
        let uids = snapshot.uids();
        let raw: Vec<f64> = uids
            .iter()
            .map(|uid| {
                let value = reputation.get(*uid);
                if value.is_finite() { value.max(0.0) } else { 0.0 }
            })
            .collect();

        let total: f64 = raw.iter().sum();
        let weights = if uids.is_empty() {
            Vec::new()
        } else if total > 0.0 {
            raw.iter().map(|v| v / total).collect()
        } else {
            vec![1.0 / uids.len() as f64; uids.len()]
        };

        Self { uids, weights }
    }

    pub fn uids(&self) -> &[PeerUid] {
        &self.uids
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn get(&self, uid: PeerUid) -> Option<f64> {
        self.uids
            .iter()
            .position(|u| *u == uid)
            .map(|i| self.weights[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (PeerUid, f64)> + '_ {
        self.uids.iter().copied().zip(self.weights.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.uids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uids.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::PeerIdentity;
    use crate::scoring::ScoreRecord;

    fn snapshot(uids: &[PeerUid]) -> MembershipSnapshot {
        MembershipSnapshot::new(
            uids.iter()
                .map(|uid| PeerIdentity::new(*uid, format!("hk{uid}"), "http://localhost")),
        )
    }

    fn reputation(scores: &[(PeerUid, f64)]) -> ReputationVector {
        let mut record = ScoreRecord::new();
        for (uid, score) in scores {
            record.insert(*uid, None, *score);
        }
        let mut reputation = ReputationVector::new(0.0).unwrap();
        reputation.update(&record);
        reputation
    }

    #[test]
    fn test_scheduler_cadence() {
        let scheduler = WeightScheduler::new(25).unwrap();
        assert!(!scheduler.is_due(0));
        assert!((1..25).all(|i| !scheduler.is_due(i)));
        assert!(scheduler.is_due(25));
        assert!(!scheduler.is_due(26));
        assert!(scheduler.is_due(50));
    }

    #[test]
    fn test_zero_cadence_rejected() {
        assert_eq!(WeightScheduler::new(0), Err(DomainError::InvalidCadence));
    }

    #[test]
    fn test_normalize_to_simplex() {
        let weights =
            WeightVector::normalize(&reputation(&[(0, 0.2), (1, 0.6)]), &snapshot(&[0, 1, 2]));
        assert_eq!(weights.uids(), &[0, 1, 2]);
        assert!((weights.get(0).unwrap() - 0.25).abs() < 1e-12);
        assert!((weights.get(1).unwrap() - 0.75).abs() < 1e-12);
        assert_eq!(weights.get(2), Some(0.0));
        assert!((weights.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_peers_outside_snapshot_are_dropped() {
        let weights = WeightVector::normalize(&reputation(&[(0, 0.5), (9, 0.5)]), &snapshot(&[0]));
        assert_eq!(weights.len(), 1);
        assert_eq!(weights.get(0), Some(1.0));
        assert_eq!(weights.get(9), None);
    }

    #[test]
    fn test_follows_snapshot_order() {
        let weights = WeightVector::normalize(&reputation(&[(1, 1.0)]), &snapshot(&[2, 1]));
        assert_eq!(weights.iter().collect::<Vec<_>>(), vec![(2, 0.0), (1, 1.0)]);
    }

    #[test]
    fn test_all_zero_is_uniform() {
        let weights = WeightVector::normalize(&reputation(&[]), &snapshot(&[0, 1, 2, 3]));
        assert!(weights.weights().iter().all(|w| (*w - 0.25).abs() < 1e-12));
    }

    #[test]
    fn test_empty_snapshot() {
        let weights = WeightVector::normalize(&reputation(&[(0, 1.0)]), &snapshot(&[]));
        assert!(weights.is_empty());
        assert_eq!(weights.total(), 0.0);
    }
}
