//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`ValidatorParams`] — loop control (blend factor, cadence, interval, limits)
//! - [`GenerationParams`] — question generation (engine, retries, batch sizes)
//! - [`CollectionParams`] — peer collection (per-peer timeout)
//! - [`ValidatorConfig`] — container handed to the validator loop

pub mod generation_params;
pub mod validator_config;
pub mod validator_params;

pub use generation_params::GenerationParams;
pub use validator_config::ValidatorConfig;
pub use validator_params::{CollectionParams, ValidatorParams};
