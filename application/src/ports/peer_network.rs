//! Peer query port
//!
//! Defines how a query is streamed to one remote peer.

use super::text_generator::GatewayError;
use async_trait::async_trait;
use qa_domain::{AnswerAssembler, Engine, PeerIdentity, StreamChunk};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Query broadcast to every peer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerQuery {
    pub messages: Vec<String>,
    pub engine: Engine,
}

impl PeerQuery {
    pub fn new(question: impl Into<String>, engine: Engine) -> Self {
        Self {
            messages: vec![question.into()],
            engine,
        }
    }
}

/// Handle for receiving one peer's answer stream.
///
/// Chunks arrive in order; the sender dropping the channel signals
/// end-of-stream. An `Err` item means the stream broke.
pub struct ChunkStream {
    pub receiver: mpsc::Receiver<Result<StreamChunk, GatewayError>>,
}

impl ChunkStream {
    pub fn new(receiver: mpsc::Receiver<Result<StreamChunk, GatewayError>>) -> Self {
        Self { receiver }
    }

    /// Build an already-finished stream from a fixed list of items.
    #[cfg(test)]
    pub(crate) fn from_items(items: Vec<Result<StreamChunk, GatewayError>>) -> Self {
        let (tx, rx) = mpsc::channel(items.len().max(1));
        for item in items {
            // Capacity covers every item
            let _ = tx.try_send(item);
        }
        Self::new(rx)
    }

    /// Consume the stream and reassemble the peer's answer.
    ///
    /// Stops at end-of-stream or at the first `Final` chunk. `on_chunk` sees
    /// every chunk before it is folded into the answer.
    pub async fn collect_answer(
        mut self,
        mut on_chunk: impl FnMut(&StreamChunk),
    ) -> Result<String, GatewayError> {
        let mut assembler = AnswerAssembler::new();
        while let Some(item) = self.receiver.recv().await {
            let chunk = item?;
            on_chunk(&chunk);
            let terminal = chunk.is_terminal();
            assembler.push(chunk);
            if terminal {
                break;
            }
        }
        Ok(assembler.finish())
    }
}

/// Transport used to reach peers
#[async_trait]
pub trait PeerNetwork: Send + Sync {
    /// Send the query to a peer and return its answer stream
    async fn open_stream(
        &self,
        peer: &PeerIdentity,
        query: &PeerQuery,
    ) -> Result<ChunkStream, GatewayError>;
}
