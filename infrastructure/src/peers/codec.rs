//! NDJSON chunk decoding

use qa_application::GatewayError;
use qa_domain::{FinalPayload, StreamChunk};
use serde::{Deserialize, Serialize};

/// One line of a peer's answer stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WireChunk {
    Fragment { text: String },
    Final { completion: String },
}

impl From<WireChunk> for StreamChunk {
    fn from(chunk: WireChunk) -> Self {
        match chunk {
            WireChunk::Fragment { text } => StreamChunk::Fragment(text),
            WireChunk::Final { completion } => StreamChunk::Final(FinalPayload::new(completion)),
        }
    }
}

/// Decode one NDJSON line. Blank lines decode to `None`.
pub fn decode_chunk_line(line: &str) -> Result<Option<StreamChunk>, GatewayError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<WireChunk>(line)
        .map(|chunk| Some(chunk.into()))
        .map_err(|e| GatewayError::InvalidResponse(format!("Malformed chunk '{}': {}", line, e)))
}

/// Longest line a peer may send before its stream is rejected
pub const MAX_LINE_BYTES: usize = 1024 * 1024;

/// Splits a byte stream into lines and decodes each one.
///
/// Bytes are buffered until a newline arrives, so multi-byte characters
/// split across network reads decode correctly. A line longer than the
/// limit yields one error and the decoder ignores everything after it.
#[derive(Debug)]
pub struct LineDecoder {
    buffer: Vec<u8>,
    /// Bytes of `buffer` already known to contain no newline
    scanned: usize,
    max_line_bytes: usize,
    overflowed: bool,
}

impl Default for LineDecoder {
    fn default() -> Self {
        Self::with_max_line_bytes(MAX_LINE_BYTES)
    }
}

impl LineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_line_bytes(max_line_bytes: usize) -> Self {
        Self {
            buffer: Vec::new(),
            scanned: 0,
            max_line_bytes,
            overflowed: false,
        }
    }

    /// Feed bytes, returning every chunk completed by them.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<Result<StreamChunk, GatewayError>> {
        if self.overflowed {
            return Vec::new();
        }
        self.buffer.extend_from_slice(bytes);

        let mut decoded = Vec::new();
        let mut line_start = 0;
        let mut scan_from = self.scanned;
        while let Some(offset) = self.buffer[scan_from..].iter().position(|b| *b == b'\n') {
            let line_end = scan_from + offset;
            if line_end - line_start > self.max_line_bytes {
                decoded.push(Err(self.overflow()));
                return decoded;
            }
            if let Some(item) = decode_bytes(&self.buffer[line_start..line_end]) {
                decoded.push(item);
            }
            line_start = line_end + 1;
            scan_from = line_start;
        }

        self.buffer.drain(..line_start);
        self.scanned = self.buffer.len();
        if self.buffer.len() > self.max_line_bytes {
            decoded.push(Err(self.overflow()));
        }
        decoded
    }

    /// Decode whatever is left once the stream ends without a final newline.
    pub fn finish(&mut self) -> Option<Result<StreamChunk, GatewayError>> {
        if self.overflowed {
            return None;
        }
        self.scanned = 0;
        let rest = std::mem::take(&mut self.buffer);
        decode_bytes(&rest)
    }

    fn overflow(&mut self) -> GatewayError {
        self.overflowed = true;
        self.buffer = Vec::new();
        self.scanned = 0;
        GatewayError::InvalidResponse(format!(
            "Chunk line exceeds {} bytes",
            self.max_line_bytes
        ))
    }
}

fn decode_bytes(line: &[u8]) -> Option<Result<StreamChunk, GatewayError>> {
    match std::str::from_utf8(line) {
        Ok(text) => decode_chunk_line(text).transpose(),
        Err(e) => Some(Err(GatewayError::InvalidResponse(format!(
            "Chunk is not UTF-8: {}",
            e
        )))),
    }
}
