//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod membership;
pub mod peer_network;
pub mod progress;
pub mod telemetry;
pub mod text_generator;
pub mod weight_submitter;
