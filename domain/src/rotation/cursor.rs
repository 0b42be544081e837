//! Rotation cursor state machine

use crate::core::question::{Question, Theme};

/// Position within the current theme batch and question batch.
///
/// `None` indexes mean "nothing loaded": a cursor with no theme index
/// needs a fresh theme batch, one with no question index needs a fresh
/// question batch for [`current_theme`](Self::current_theme).
#[derive(Debug, Clone, Default)]
pub struct RotationCursor {
    themes: Vec<Theme>,
    questions: Vec<Question>,
    theme_index: Option<usize>,
    question_index: Option<usize>,
}

impl RotationCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn needs_themes(&self) -> bool {
        self.theme_index.is_none()
    }

    /// Load a theme batch and point at its last entry.
    ///
    /// Any questions of a previous theme are discarded. An empty batch leaves
    /// the cursor still needing themes.
    pub fn install_themes(&mut self, themes: Vec<Theme>) {
        self.theme_index = themes.len().checked_sub(1);
        self.themes = themes;
        self.clear_questions();
    }

    pub fn current_theme(&self) -> Option<&Theme> {
        self.theme_index.and_then(|i| self.themes.get(i))
    }

    pub fn needs_questions(&self) -> bool {
        self.question_index.is_none()
    }

    /// Load the question batch for the current theme and point at its last entry.
    pub fn install_questions(&mut self, questions: Vec<Question>) {
        self.question_index = questions.len().checked_sub(1);
        self.questions = questions;
    }

    /// Serve the question under the cursor and step backwards.
    ///
    /// Returns `None` when no question batch is loaded.
    pub fn take_question(&mut self) -> Option<Question> {
        let index = self.question_index?;
        let question = self.questions.get(index)?.clone();

        match index.checked_sub(1) {
            Some(next) => self.question_index = Some(next),
            None => self.advance_theme(),
        }

        Some(question)
    }

    /// Abandon the current theme without serving from it.
    pub fn skip_theme(&mut self) {
        self.advance_theme();
    }

    pub fn theme_index(&self) -> Option<usize> {
        self.theme_index
    }

    pub fn question_index(&self) -> Option<usize> {
        self.question_index
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    fn clear_questions(&mut self) {
        self.questions.clear();
        self.question_index = None;
    }

    fn advance_theme(&mut self) {
        self.clear_questions();
        match self.theme_index.and_then(|i| i.checked_sub(1)) {
            Some(next) => self.theme_index = Some(next),
            None => {
                self.themes.clear();
                self.theme_index = None;
            }
        }
    }
}
