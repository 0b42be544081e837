//! Question supply use case
//!
//! Serves one question per call by walking a [`RotationCursor`] over a
//! generated theme batch and, per theme, a generated question batch.

use crate::config::GenerationParams;
use crate::ports::text_generator::TextGenerator;
use crate::use_cases::generate_list::ListGenerator;
use qa_domain::{PromptTemplate, Question, RotationCursor, Theme, default_theme_labels};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while supplying a question
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SupplyError {
    #[error("No usable themes (generated and default lists are empty)")]
    NoThemes,

    #[error("Every theme in the batch produced an empty question list")]
    Exhausted,
}

/// Theme → question rotation backed by list generation
pub struct RotatingQuestionSupply {
    lists: ListGenerator,
    params: GenerationParams,
    default_themes: Vec<String>,
}

impl RotatingQuestionSupply {
    pub fn new(generator: Arc<dyn TextGenerator>, params: GenerationParams) -> Self {
        let lists = ListGenerator::new(generator, params.engine.clone(), params.list_temperature);
        Self {
            lists,
            params,
            default_themes: default_theme_labels(),
        }
    }

    /// Replace the fallback theme set used when theme generation fails.
    pub fn with_default_themes(mut self, themes: Vec<String>) -> Self {
        self.default_themes = themes;
        self
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Serve the next question, regenerating batches as the cursor drains.
    ///
    /// A theme whose question list comes back empty is skipped. If that
    /// drains the whole theme batch, this call returns
    /// [`SupplyError::Exhausted`] and the next call starts a fresh batch.
    pub async fn next_question(
        &self,
        cursor: &mut RotationCursor,
    ) -> Result<Question, SupplyError> {
        loop {
            if cursor.needs_themes() {
                let themes = self.generate_themes().await;
                if themes.is_empty() {
                    return Err(SupplyError::NoThemes);
                }
                info!("Installed {} themes", themes.len());
                cursor.install_themes(themes);
            }

            let theme = cursor.current_theme().cloned().ok_or(SupplyError::NoThemes)?;

            if cursor.needs_questions() {
                let questions = self.generate_questions(&theme).await;
                if questions.is_empty() {
                    warn!("No questions for theme '{}', skipping it", theme);
                    cursor.skip_theme();
                    if cursor.needs_themes() {
                        return Err(SupplyError::Exhausted);
                    }
                    continue;
                }
                debug!("Installed {} questions for theme '{}'", questions.len(), theme);
                cursor.install_questions(questions);
            }

            return cursor.take_question().ok_or(SupplyError::Exhausted);
        }
    }

    async fn generate_themes(&self) -> Vec<Theme> {
        let prompt = PromptTemplate::themes(self.params.num_themes);
        self.lists
            .generate_list(&prompt, self.default_themes.clone(), self.params.max_retries)
            .await
            .into_iter()
            .filter_map(Theme::try_new)
            .collect()
    }

    async fn generate_questions(&self, theme: &Theme) -> Vec<Question> {
        let prompt = PromptTemplate::questions(theme, self.params.questions_per_theme);
        self.lists
            .generate_list(&prompt, Vec::new(), self.params.max_retries)
            .await
            .into_iter()
            .filter_map(Question::try_new)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::text_generator::{GatewayError, GenerationRequest};
    use crate::use_cases::test_support::ScriptedGenerator;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    fn supply(stub: Arc<dyn TextGenerator>, retries: usize) -> RotatingQuestionSupply {
        RotatingQuestionSupply::new(stub, GenerationParams::default().with_max_retries(retries))
    }

    fn is_theme_prompt(request: &GenerationRequest) -> bool {
        request.prompt.contains("creative themes")
    }

    /// Serves a fixed theme list and two questions tagged with their theme.
    struct ThemedGenerator {
        themes: String,
        requests: Mutex<Vec<GenerationRequest>>,
    }

    impl ThemedGenerator {
        fn new(themes: &[&str]) -> Self {
            let quoted: Vec<String> = themes.iter().map(|t| format!("'{t}'")).collect();
            Self {
                themes: format!("[{}]", quoted.join(", ")),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn theme_requests(&self) -> usize {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .filter(|r| is_theme_prompt(r))
                .count()
        }
    }

    #[async_trait]
    impl TextGenerator for ThemedGenerator {
        async fn generate(&self, request: &GenerationRequest) -> Result<String, GatewayError> {
            self.requests.lock().unwrap().push(request.clone());
            if is_theme_prompt(request) {
                return Ok(self.themes.clone());
            }
            let theme = request
                .prompt
                .split("theme of ")
                .nth(1)
                .and_then(|rest| rest.split(". Max").next())
                .unwrap_or("?");
            Ok(format!("['{theme} one', '{theme} two']"))
        }
    }

    #[tokio::test]
    async fn test_single_theme_depletes_then_regenerates() {
        let stub = Arc::new(ScriptedGenerator::new(vec![
            Ok("['Nature']".to_string()),
            Ok("['Q1', 'Q2']".to_string()),
            Ok("['Space']".to_string()),
            Ok("['Q3', 'Q4']".to_string()),
        ]));
        let supply = supply(stub.clone(), 5);
        let mut cursor = RotationCursor::new();

        assert_eq!(supply.next_question(&mut cursor).await.unwrap().content(), "Q2");
        assert_eq!(supply.next_question(&mut cursor).await.unwrap().content(), "Q1");
        assert!(cursor.needs_themes());
        assert_eq!(stub.call_count(), 2);

        assert_eq!(supply.next_question(&mut cursor).await.unwrap().content(), "Q4");
        assert_eq!(stub.call_count(), 4);

        let requests = stub.requests();
        assert!(is_theme_prompt(&requests[0]));
        assert!(requests[1].prompt.contains("theme of Nature"));
        assert!(is_theme_prompt(&requests[2]));
        assert!(requests[3].prompt.contains("theme of Space"));
        assert!(requests[0].prompt.contains("list of 50"));
        assert!(requests[1].prompt.contains("list of 10"));
    }

    #[tokio::test]
    async fn test_theme_regeneration_is_bounded() {
        // T = 3 themes, Q = 2 questions each
        let stub = Arc::new(ThemedGenerator::new(&["A", "B", "C"]));
        let supply = supply(stub.clone(), 5);
        let mut cursor = RotationCursor::new();

        for n in 1..=20usize {
            supply.next_question(&mut cursor).await.unwrap();
            assert!(stub.theme_requests() <= n.div_ceil(6));
        }
    }

    #[tokio::test]
    async fn test_no_repeats_within_cycle() {
        let stub = Arc::new(ThemedGenerator::new(&["A", "B", "C"]));
        let supply = supply(stub.clone(), 5);
        let mut cursor = RotationCursor::new();

        let mut served = Vec::new();
        for _ in 0..12 {
            served.push(supply.next_question(&mut cursor).await.unwrap().into_content());
        }

        for cycle in served.chunks(6) {
            let unique: HashSet<&String> = cycle.iter().collect();
            assert_eq!(unique.len(), 6);
        }
        assert_eq!(served[0], "C two");
        assert_eq!(served[1], "C one");
        assert_eq!(served[2], "B two");
        assert_eq!(stub.theme_requests(), 2);
    }

    #[tokio::test]
    async fn test_empty_question_list_skips_theme() {
        let stub = Arc::new(ScriptedGenerator::new(vec![
            Ok("['A', 'B']".to_string()),
            Ok("no list".to_string()),
            Ok("still no list".to_string()),
            Ok("['qa']".to_string()),
        ]));
        let supply = supply(stub.clone(), 2);
        let mut cursor = RotationCursor::new();

        let question = supply.next_question(&mut cursor).await.unwrap();

        assert_eq!(question.content(), "qa");
        assert_eq!(stub.call_count(), 4);
        assert!(stub.requests()[3].prompt.contains("theme of A"));
    }

    #[tokio::test]
    async fn test_every_theme_empty_is_exhaustion() {
        let stub = Arc::new(ScriptedGenerator::new(vec![
            Ok("['A']".to_string()),
            Ok("nothing".to_string()),
            Ok("['B']".to_string()),
            Ok("['qb']".to_string()),
        ]));
        let supply = supply(stub.clone(), 1);
        let mut cursor = RotationCursor::new();

        assert_eq!(
            supply.next_question(&mut cursor).await,
            Err(SupplyError::Exhausted)
        );
        assert!(cursor.needs_themes());

        let question = supply.next_question(&mut cursor).await.unwrap();
        assert_eq!(question.content(), "qb");
    }

    #[tokio::test]
    async fn test_falls_back_to_default_themes() {
        let stub = Arc::new(ScriptedGenerator::new(vec![
            Err(GatewayError::Timeout),
            Ok("['What grows here?']".to_string()),
        ]));
        let supply = supply(stub.clone(), 1).with_default_themes(vec!["Gardens".to_string()]);
        let mut cursor = RotationCursor::new();

        let question = supply.next_question(&mut cursor).await.unwrap();

        assert_eq!(question.content(), "What grows here?");
        assert_eq!(cursor.themes()[0].as_str(), "Gardens");
        assert!(stub.requests()[1].prompt.contains("theme of Gardens"));
    }

    #[tokio::test]
    async fn test_no_themes_at_all() {
        let stub = Arc::new(ScriptedGenerator::always_failing());
        let supply = supply(stub, 1).with_default_themes(Vec::new());
        let mut cursor = RotationCursor::new();

        assert_eq!(
            supply.next_question(&mut cursor).await,
            Err(SupplyError::NoThemes)
        );
    }

    #[tokio::test]
    async fn test_blank_questions_are_dropped() {
        let stub = Arc::new(ScriptedGenerator::new(vec![
            Ok("['Nature']".to_string()),
            Ok("['Q1', '   ']".to_string()),
        ]));
        let supply = supply(stub, 5);
        let mut cursor = RotationCursor::new();

        assert_eq!(supply.next_question(&mut cursor).await.unwrap().content(), "Q1");
        assert!(cursor.needs_themes());
    }
}
