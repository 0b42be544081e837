//! Parsing of structured data out of free-form model output.
//!
//! These functions are pure domain logic — no I/O, no retries. Retrying
//! generation on a parse failure is the caller's concern.

pub mod list;

pub use list::{ListParseError, extract_list, parse_list_literal, render_list};
