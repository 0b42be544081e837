//! HTTP peer transport
//!
//! Peers expose `POST {endpoint}/stream` and answer with newline-delimited
//! JSON chunks:
//!
//! ```text
//! {"type":"fragment","text":"Par"}
//! {"type":"fragment","text":"is"}
//! {"type":"final","completion":"Paris"}
//! ```

mod client;
mod codec;

pub use client::HttpPeerClient;
pub use codec::{LineDecoder, MAX_LINE_BYTES, WireChunk, decode_chunk_line};
