//! Validator configuration container.
//!
//! [`ValidatorConfig`] groups every configuration slice the loop needs.
//! Use cases receive only the slices they use; the loop holds the whole
//! container and hands slices down when it builds them.

use crate::config::{CollectionParams, GenerationParams, ValidatorParams};
use qa_domain::{DomainError, EnginePolicy, ReputationVector, ScoringPolicy, WeightScheduler};

#[derive(Debug, Clone, Default)]
pub struct ValidatorConfig {
    pub validator: ValidatorParams,
    pub generation: GenerationParams,
    pub collection: CollectionParams,
    pub engine: EnginePolicy,
    pub scoring: ScoringPolicy,
}

impl ValidatorConfig {
    pub fn new(
        validator: ValidatorParams,
        generation: GenerationParams,
        collection: CollectionParams,
        engine: EnginePolicy,
        scoring: ScoringPolicy,
    ) -> Self {
        Self {
            validator,
            generation,
            collection,
            engine,
            scoring,
        }
    }

    /// Check values that would make the loop misbehave.
    pub fn validate(&self) -> Result<(), DomainError> {
        ReputationVector::new(self.validator.alpha)?;
        WeightScheduler::new(self.validator.weight_emit_cadence)?;
        EnginePolicy::new(
            self.engine.default_engine.clone(),
            self.engine.escalation_engine.clone(),
            self.engine.escalation_probability,
        )?;
        Ok(())
    }
}
