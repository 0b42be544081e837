//! Lexical similarity scorers

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Scores a peer answer against the reference answer.
///
/// Implementations must be deterministic and return a value in `[0, 1]`,
/// with `0.0` for an empty answer.
pub trait Scorer: Send + Sync {
    fn score(&self, reference: &str, answer: &str) -> f64;

    /// Short identifier used in logs and telemetry
    fn name(&self) -> &'static str;
}

/// Split text into lowercase alphanumeric tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Token-level F1 between reference and answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenF1Scorer;

impl Scorer for TokenF1Scorer {
    fn score(&self, reference: &str, answer: &str) -> f64 {
        let reference_tokens = tokenize(reference);
        let answer_tokens = tokenize(answer);
        if reference_tokens.is_empty() || answer_tokens.is_empty() {
            return 0.0;
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in &reference_tokens {
            *counts.entry(token.as_str()).or_default() += 1;
        }

        let mut overlap = 0usize;
        for token in &answer_tokens {
            if let Some(count) = counts.get_mut(token.as_str())
                && *count > 0
            {
                *count -= 1;
                overlap += 1;
            }
        }

        if overlap == 0 {
            return 0.0;
        }

        let precision = overlap as f64 / answer_tokens.len() as f64;
        let recall = overlap as f64 / reference_tokens.len() as f64;
        (2.0 * precision * recall / (precision + recall)).clamp(0.0, 1.0)
    }

    fn name(&self) -> &'static str {
        "token_f1"
    }
}

/// Jaccard similarity of token sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaccardScorer;

impl Scorer for JaccardScorer {
    fn score(&self, reference: &str, answer: &str) -> f64 {
        let reference_tokens: HashSet<String> = tokenize(reference).into_iter().collect();
        let answer_tokens: HashSet<String> = tokenize(answer).into_iter().collect();
        if reference_tokens.is_empty() || answer_tokens.is_empty() {
            return 0.0;
        }

        let intersection = reference_tokens.intersection(&answer_tokens).count();
        let union = reference_tokens.union(&answer_tokens).count();
        intersection as f64 / union as f64
    }

    fn name(&self) -> &'static str {
        "jaccard"
    }
}

/// Configurable choice of scorer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    #[default]
    TokenF1,
    Jaccard,
}

impl ScoringPolicy {
    pub fn scorer(&self) -> Box<dyn Scorer> {
        match self {
            ScoringPolicy::TokenF1 => Box::new(TokenF1Scorer),
            ScoringPolicy::Jaccard => Box::new(JaccardScorer),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringPolicy::TokenF1 => "token_f1",
            ScoringPolicy::Jaccard => "jaccard",
        }
    }
}

impl std::str::FromStr for ScoringPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "token_f1" | "f1" => Ok(ScoringPolicy::TokenF1),
            "jaccard" => Ok(ScoringPolicy::Jaccard),
            _ => Err(DomainError::UnknownScoringPolicy(s.to_string())),
        }
    }
}

impl std::fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
