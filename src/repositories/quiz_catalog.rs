use std::{collections::BTreeMap, path::Path};

use async_trait::async_trait;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{QuizQuestion, QuizTopic},
};

/// Mini-games linked to quiz themes, keyed by lowercased theme.
pub const THEME_GAME_LINKS: &[(&str, &str)] = &[
    ("smart home", "emoji_scavenger_hunt"),
    ("ai ethics", "balloon_debate"),
    ("sustainable development", "goals_board_game"),
];

#[async_trait]
pub trait QuizCatalog: Send + Sync {
    async fn find_by_theme(&self, theme: &str) -> AppResult<Option<QuizTopic>>;
    async fn list_themes(&self) -> AppResult<Vec<String>>;
}

/// Read-only catalog loaded once at startup.
pub struct StaticQuizCatalog {
    topics: Vec<QuizTopic>,
}

impl StaticQuizCatalog {
    pub fn new(topics: Vec<QuizTopic>) -> Self {
        Self { topics }
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        log::info!("Loading quiz catalog from {}", path.display());

        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(format!(
                "Failed to read quiz data {}: {}",
                path.display(),
                e
            ))
        })?;
        let catalog = Self::from_json(&raw)?;

        log::info!("Loaded {} quiz themes", catalog.topics.len());
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        let parsed: BTreeMap<String, Vec<QuizQuestion>> = serde_json::from_str(raw)?;

        let topics = parsed
            .into_iter()
            .map(|(topic_name, questions)| {
                for (i, question) in questions.iter().enumerate() {
                    if question.resolved_answer().is_none() {
                        log::warn!(
                            "Quiz '{}' question {} has no valid answer_index",
                            topic_name,
                            i
                        );
                    }
                }
                let linked_game = linked_game_for(&topic_name);
                QuizTopic {
                    topic_name,
                    questions,
                    linked_game,
                }
            })
            .collect();

        Ok(Self::new(topics))
    }
}

#[async_trait]
impl QuizCatalog for StaticQuizCatalog {
    async fn find_by_theme(&self, theme: &str) -> AppResult<Option<QuizTopic>> {
        Ok(self.topics.iter().find(|t| t.matches(theme)).cloned())
    }

    async fn list_themes(&self) -> AppResult<Vec<String>> {
        Ok(self.topics.iter().map(|t| t.topic_name.clone()).collect())
    }
}

pub fn linked_game_for(topic_name: &str) -> Option<String> {
    let key = topic_name.trim().to_lowercase();
    THEME_GAME_LINKS
        .iter()
        .find(|(theme, _)| *theme == key)
        .map(|(_, game)| game.to_string())
}
