//! Prompt templates for the generation flow

use crate::core::question::Theme;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt asking for a batch of themes
    pub fn themes(count: usize) -> String {
        format!(
            "Give me a python list of {count} different creative themes of which one could ask \
             meaningful questions. Max four words each. Provide it in python list structure and \
             don't write anything extra, just provide exclusively the complete list."
        )
    }

    /// Prompt asking for a batch of questions about one theme
    pub fn questions(theme: &Theme, count: usize) -> String {
        format!(
            "Give me a python list of {count} different creative questions based off of the theme \
             of {theme}. Max 15 words each. Provide it in python list structure and don't write \
             anything extra, just provide exclusively the complete python list."
        )
    }
}
