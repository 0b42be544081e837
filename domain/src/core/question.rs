//! Question and theme value objects

use serde::{Deserialize, Serialize};

/// A generated question to broadcast to peers (Value Object)
///
/// Questions come out of free-text model output, so construction
/// rejects blank content instead of trusting the generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Question cannot be empty");
        Self {
            content: content.trim().to_string(),
        }
    }

    /// Try to create a new question, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == content.len() {
            Some(Self { content })
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

/// A topic label used to generate a batch of related questions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Theme(String);

impl Theme {
    /// Try to create a theme, returning None for blank labels
    pub fn try_new(label: impl Into<String>) -> Option<Self> {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("What is Rust?");
        assert_eq!(q.content(), "What is Rust?");
    }

    #[test]
    fn test_question_is_trimmed() {
        let q = Question::try_new("  Why is the sky blue?  ").unwrap();
        assert_eq!(q.content(), "Why is the sky blue?");
    }

    #[test]
    #[should_panic]
    fn test_empty_question_panics() {
        Question::new("");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Question::try_new("").is_none());
        assert!(Question::try_new("   ").is_none());
    }

    #[test]
    fn test_theme_rejects_blank() {
        assert!(Theme::try_new("\t").is_none());
        assert_eq!(Theme::try_new(" Nature ").unwrap().as_str(), "Nature");
    }
}
