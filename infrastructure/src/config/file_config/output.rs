//! Output file configuration from TOML (`[telemetry]` and `[weights]` sections)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw telemetry configuration
///
/// ```toml
/// [telemetry]
/// enabled = true
/// path = "telemetry.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTelemetryConfig {
    pub enabled: bool,
    /// Defaults to the data directory when unset.
    pub path: Option<PathBuf>,
}

impl FileTelemetryConfig {
    pub fn resolve_path(&self) -> Option<PathBuf> {
        self.path
            .clone()
            .or_else(|| data_dir().map(|d| d.join("telemetry.jsonl")))
    }
}

/// Raw weight-submission configuration
///
/// ```toml
/// [weights]
/// path = "weights.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWeightsConfig {
    /// Defaults to the data directory when unset.
    pub path: Option<PathBuf>,
}

impl FileWeightsConfig {
    pub fn resolve_path(&self) -> Option<PathBuf> {
        self.path
            .clone()
            .or_else(|| data_dir().map(|d| d.join("weights.jsonl")))
    }
}

fn data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("qa-validator"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let config = FileTelemetryConfig {
            enabled: true,
            path: Some(PathBuf::from("/tmp/t.jsonl")),
        };
        assert_eq!(config.resolve_path(), Some(PathBuf::from("/tmp/t.jsonl")));
    }

    #[test]
    fn test_default_path_under_data_dir() {
        if let Some(path) = FileWeightsConfig::default().resolve_path() {
            assert!(path.ends_with("qa-validator/weights.jsonl"));
        }
    }
}
