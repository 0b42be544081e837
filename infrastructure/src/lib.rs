//! Infrastructure layer for qa-validator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod membership;
pub mod openai;
pub mod peers;
pub mod weights;

// Re-export commonly used types
pub use config::{ConfigError, ConfigIssue, ConfigLoader, FileConfig, Severity};
pub use logging::{JsonlTelemetrySink, JsonlWriter};
pub use membership::StaticMembership;
pub use openai::OpenAiTextGenerator;
pub use peers::{HttpPeerClient, decode_chunk_line};
pub use weights::JsonlWeightSubmitter;
