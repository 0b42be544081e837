//! Two-level question rotation
//!
//! Themes are generated in batches and consumed back-to-front; each theme
//! in turn yields a batch of questions, also consumed back-to-front.
//!
//! ```text
//! themes:    [T0, T1, ..., Tn]          <- theme_index starts at n
//!                             │
//! questions: [Q0, Q1, ..., Qm]          <- question_index starts at m
//!
//! question_index underflow -> questions cleared, theme_index - 1
//! theme_index underflow    -> themes cleared (full regeneration)
//! ```
//!
//! [`RotationCursor`] holds this state. It is owned by the validator loop and
//! handed to the question supply on every call; nothing else keeps it.

pub mod cursor;
pub mod defaults;

pub use cursor::RotationCursor;
pub use defaults::{DEFAULT_THEMES, default_theme_labels, default_themes};
