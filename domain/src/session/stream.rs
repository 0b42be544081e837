//! Streaming chunks and answer reassembly.

use serde::{Deserialize, Serialize};

/// Structured terminal payload a peer may send after its fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalPayload {
    /// The peer's complete answer
    pub completion: String,
}

impl FinalPayload {
    pub fn new(completion: impl Into<String>) -> Self {
        Self {
            completion: completion.into(),
        }
    }
}

/// One item of a peer's answer stream.
///
/// Peers stream `Fragment`s as text is produced and may finish with a
/// `Final` carrying the authoritative answer. End of stream itself is
/// signalled by the transport, not by a chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamChunk {
    /// A partial piece of answer text.
    Fragment(String),
    /// The complete structured answer (signals stream end).
    Final(FinalPayload),
}

impl StreamChunk {
    pub fn fragment(text: impl Into<String>) -> Self {
        StreamChunk::Fragment(text.into())
    }

    pub fn final_answer(completion: impl Into<String>) -> Self {
        StreamChunk::Final(FinalPayload::new(completion))
    }

    /// Returns true if no further chunks are expected after this one.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamChunk::Final(_))
    }
}

/// Reassembles one peer's answer.
///
/// Fragments are concatenated in arrival order. A `Final` payload supersedes
/// everything accumulated so far, and fragments arriving after it are ignored.
#[derive(Debug, Default)]
pub struct AnswerAssembler {
    fragments: String,
    final_payload: Option<FinalPayload>,
}

impl AnswerAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chunk: StreamChunk) {
        match chunk {
            StreamChunk::Fragment(text) => {
                if self.final_payload.is_none() {
                    self.fragments.push_str(&text);
                }
            }
            StreamChunk::Final(payload) => {
                if self.final_payload.is_none() {
                    self.final_payload = Some(payload);
                }
            }
        }
    }

    /// The reassembled answer.
    pub fn finish(self) -> String {
        match self.final_payload {
            Some(payload) => payload.completion,
            None => self.fragments,
        }
    }
}
