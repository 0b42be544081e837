//! Answer scoring against a reference answer.
//!
//! | Policy | Metric |
//! |--------|--------|
//! | [`TokenF1Scorer`] (default) | harmonic mean of token precision and recall |
//! | [`JaccardScorer`] | token set intersection over union |
//!
//! Every scorer is total: unscorable input scores `0.0`, nothing panics.

pub mod record;
pub mod scorer;

pub use record::{PeerScore, ScoreRecord};
pub use scorer::{JaccardScorer, Scorer, ScoringPolicy, TokenF1Scorer, tokenize};
