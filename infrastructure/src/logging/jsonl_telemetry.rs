//! JSONL file sink for iteration telemetry.
//!
//! Each [`IterationRecord`] is serialized as a single JSON line with a
//! `type` field added, appended via a buffered writer.

use super::jsonl_writer::JsonlWriter;
use qa_application::{IterationRecord, TelemetrySink};
use std::path::Path;
use tracing::warn;

/// Record type written on every line
const RECORD_TYPE: &str = "iteration";

pub struct JsonlTelemetrySink {
    writer: JsonlWriter,
}

impl JsonlTelemetrySink {
    /// Create a sink writing to the given path.
    ///
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        match JsonlWriter::open(path) {
            Ok(writer) => Some(Self { writer }),
            Err(e) => {
                warn!("Could not open telemetry file {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        self.writer.path()
    }
}

impl TelemetrySink for JsonlTelemetrySink {
    fn record(&self, record: &IterationRecord) {
        let mut value = match serde_json::to_value(record) {
            Ok(value) => value,
            Err(e) => {
                warn!("Could not serialize telemetry record: {}", e);
                return;
            }
        };
        if let serde_json::Value::Object(map) = &mut value {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(RECORD_TYPE.to_string()),
            );
        }

        if let Err(e) = self.writer.write_value(&value) {
            warn!("Telemetry write failed: {}", e);
        }
    }

    fn flush(&self) {
        if let Err(e) = self.writer.flush() {
            warn!("Telemetry flush failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use qa_domain::{Engine, Question, ScoreRecord};

    fn record(step: u64) -> IterationRecord {
        let mut scores = ScoreRecord::new();
        scores.insert(0, Some("Paris".to_string()), 1.0);
        scores.insert(1, None, 0.0);
        IterationRecord::new(
            step,
            &Engine::Gpt4,
            &Question::new("Capital of France?"),
            &scores,
            Utc::now(),
        )
    }

    #[test]
    fn test_writes_one_line_per_iteration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("telemetry.jsonl");
        let sink = JsonlTelemetrySink::new(&path).unwrap();

        sink.record(&record(0));
        sink.record(&record(1));
        sink.flush();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.trim().lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "iteration");
        assert_eq!(first["step"], 0);
        assert_eq!(first["engine"], "gpt-4");
        assert_eq!(first["prompt"], "Capital of France?");
        assert!(first.get("timestamp").is_some());
        assert_eq!(first["responses"][0]["uid"], 0);
        assert_eq!(first["responses"][0]["response"], "Paris");
        assert_eq!(first["responses"][1]["score"], 0.0);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["step"], 1);
    }

    #[test]
    fn test_drop_flushes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("telemetry.jsonl");
        let sink = JsonlTelemetrySink::new(&path).unwrap();

        sink.record(&record(7));
        drop(sink);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_unopenable_path_is_none() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as the telemetry file
        assert!(JsonlTelemetrySink::new(dir.path()).is_none());
    }
}
