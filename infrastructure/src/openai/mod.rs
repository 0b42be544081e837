//! OpenAI-compatible text generation adapter
//!
//! Implements the [`TextGenerator`](qa_application::TextGenerator) port over
//! the `/chat/completions` endpoint.

mod generator;
mod protocol;

pub use generator::OpenAiTextGenerator;
pub use protocol::{ChatMessage, ChatRequest, parse_completion};

pub(crate) use generator::map_transport_error;
