//! Logging infrastructure: structured JSONL output.
//!
//! Provides [`JsonlTelemetrySink`], which implements the
//! [`TelemetrySink`](qa_application::TelemetrySink) port, and the shared
//! [`JsonlWriter`] also used by the weight submitter.

mod jsonl_telemetry;
mod jsonl_writer;

pub use jsonl_telemetry::JsonlTelemetrySink;
pub use jsonl_writer::JsonlWriter;
