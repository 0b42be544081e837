//! Reputation accumulation and weight emission.
//!
//! Each iteration's [`ScoreRecord`](crate::scoring::ScoreRecord) is blended
//! into a [`ReputationVector`] with an exponential moving average. On a
//! fixed cadence ([`WeightScheduler`]) the vector is normalized into a
//! [`WeightVector`] aligned to the latest membership snapshot.

pub mod vector;
pub mod weights;

pub use vector::ReputationVector;
pub use weights::{WeightScheduler, WeightVector};
