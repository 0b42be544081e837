//! Prompt templates for question generation.

pub mod template;

pub use template::PromptTemplate;
