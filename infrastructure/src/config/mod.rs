//! Configuration file loading for qa-validator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `QA_VALIDATOR_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./validator.toml`
//! 4. Global: `$XDG_CONFIG_HOME/qa-validator/config.toml`
//! 5. Default values

mod file_config;
mod issue;
mod loader;

pub use file_config::{
    FileConfig, FileEngineConfig, FileGenerationConfig, FilePeerEntry, FilePeersConfig,
    FileScoringConfig, FileTelemetryConfig, FileValidatorConfig, FileWeightsConfig,
};
pub use issue::{ConfigIssue, ConfigIssueCode, Severity};
pub use loader::{ConfigError, ConfigLoader, ENV_PREFIX, PROJECT_CONFIG_FILE};
