//! Peer answer streams.
//!
//! - [`stream::StreamChunk`] — one item of a peer's answer stream
//! - [`stream::AnswerAssembler`] — reassembles a peer's answer from its chunks
//! - [`answer::PeerAnswer`] — terminal result of one peer's stream

pub mod answer;
pub mod stream;

pub use answer::{PeerAnswer, StreamOutcome};
pub use stream::{AnswerAssembler, FinalPayload, StreamChunk};
