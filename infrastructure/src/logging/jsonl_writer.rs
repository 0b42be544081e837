//! Append-only JSONL file writer.

use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlWriter {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlWriter {
    /// Open `path` for appending, creating it and its parent directories.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one value as a single line (buffered).
    pub fn write_value(&self, value: &Value) -> io::Result<()> {
        let line = serde_json::to_string(value)?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("JSONL writer lock poisoned"))?;
        writeln!(writer, "{}", line)
    }

    pub fn flush(&self) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("JSONL writer lock poisoned"))?;
        writer.flush()
    }
}

impl Drop for JsonlWriter {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.jsonl");

        let writer = JsonlWriter::open(&path).unwrap();
        writer.write_value(&serde_json::json!({"n": 1})).unwrap();
        drop(writer);

        let writer = JsonlWriter::open(&path).unwrap();
        writer.write_value(&serde_json::json!({"n": 2})).unwrap();
        writer.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec![r#"{"n":1}"#, r#"{"n":2}"#]);
    }
}
