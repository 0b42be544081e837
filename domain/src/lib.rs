//! Domain layer for qa-validator
//!
//! This crate contains the core logic of the validator, with no I/O:
//!
//! - **Rotation**: two-level theme/question cursor ([`RotationCursor`])
//! - **Parsing**: list-literal extraction from model output ([`extract_list`])
//! - **Sessions**: peer stream chunks and answer reassembly ([`StreamChunk`], [`AnswerAssembler`])
//! - **Scoring**: answer similarity against a reference ([`Scorer`], [`ScoreRecord`])
//! - **Reputation**: EMA blending and weight normalization ([`ReputationVector`], [`WeightVector`])

pub mod core;
pub mod membership;
pub mod parsing;
pub mod prompt;
pub mod reputation;
pub mod rotation;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    engine::{Engine, EnginePolicy},
    error::DomainError,
    question::{Question, Theme},
};
pub use membership::{MembershipSnapshot, PeerIdentity, PeerUid};
pub use parsing::{ListParseError, extract_list, parse_list_literal, render_list};
pub use prompt::PromptTemplate;
pub use reputation::{ReputationVector, WeightScheduler, WeightVector};
pub use rotation::{RotationCursor, default_theme_labels, default_themes};
pub use scoring::{
    JaccardScorer, PeerScore, ScoreRecord, Scorer, ScoringPolicy, TokenF1Scorer,
};
pub use session::{AnswerAssembler, FinalPayload, PeerAnswer, StreamChunk, StreamOutcome};
