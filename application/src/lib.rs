//! Application layer for qa-validator
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{CollectionParams, GenerationParams, ValidatorConfig, ValidatorParams};
pub use ports::{
    membership::MembershipProvider,
    peer_network::{ChunkStream, PeerNetwork, PeerQuery},
    progress::{IterationProgress, NoProgress},
    telemetry::{IterationRecord, NoTelemetry, ResponseEntry, TelemetrySink},
    text_generator::{GatewayError, GenerationRequest, TextGenerator},
    weight_submitter::{SubmissionError, WeightSubmitter},
};
pub use use_cases::collect_responses::{CollectedAnswers, PeerResponseCollector};
pub use use_cases::generate_list::{ListGenerationError, ListGenerator};
pub use use_cases::question_supply::{RotatingQuestionSupply, SupplyError};
pub use use_cases::reference_answer::ReferenceAnswerer;
pub use use_cases::run_validator::{
    IterationError, IterationOutcome, IterationReport, RunSummary, ValidatorLoop, ValidatorPorts,
};
