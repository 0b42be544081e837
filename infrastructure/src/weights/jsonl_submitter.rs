//! Records weight submissions to a JSONL file.
//!
//! Stands in for on-chain submission: each accepted vector is appended as
//! `{timestamp, netuid, uids, weights}`.

use crate::logging::JsonlWriter;
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use qa_application::{SubmissionError, WeightSubmitter};
use qa_domain::WeightVector;
use std::path::Path;
use tracing::{info, warn};

pub struct JsonlWeightSubmitter {
    writer: JsonlWriter,
}

impl JsonlWeightSubmitter {
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        match JsonlWriter::open(path) {
            Ok(writer) => Some(Self { writer }),
            Err(e) => {
                warn!("Could not open weights file {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        self.writer.path()
    }
}

#[async_trait]
impl WeightSubmitter for JsonlWeightSubmitter {
    async fn submit(&self, netuid: u16, weights: &WeightVector) -> Result<(), SubmissionError> {
        if weights.is_empty() {
            return Err(SubmissionError::Rejected("empty weight vector".to_string()));
        }

        let line = serde_json::json!({
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            "netuid": netuid,
            "uids": weights.uids(),
            "weights": weights.weights(),
        });

        self.writer
            .write_value(&line)
            .and_then(|()| self.writer.flush())
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        info!(
            "Recorded weights for {} peers (netuid {}) to {}",
            weights.len(),
            netuid,
            self.writer.path().display()
        );
        Ok(())
    }
}
