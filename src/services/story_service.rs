use std::{sync::Arc, time::Duration};

use crate::{
    constants::prompts::{render_continuation_prompt, render_story_prompt},
    errors::{AppError, AppResult},
    inference::{with_deadline, SamplingParams, TextGenerator},
};

pub struct StoryService {
    generator: Arc<dyn TextGenerator>,
    iterations: usize,
    max_topic_chars: usize,
    deadline: Duration,
}

impl StoryService {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        iterations: usize,
        max_topic_chars: usize,
        deadline: Duration,
    ) -> Self {
        Self {
            generator,
            iterations,
            max_topic_chars,
            deadline,
        }
    }

    /// Story for a user-supplied topic, using the configured iteration count.
    pub async fn story_for_topic(&self, topic: &str) -> AppResult<String> {
        let topic = truncate_chars(topic, self.max_topic_chars);
        self.generate_story(topic, self.iterations).await
    }

    /// Runs the generation loop. Each increment is generated from the previous
    /// increment alone, not from the whole story so far.
    pub async fn generate_story(&self, topic: &str, iterations: usize) -> AppResult<String> {
        if iterations == 0 {
            return Err(AppError::ValidationError(
                "Story iterations must be at least 1".to_string(),
            ));
        }

        let params = SamplingParams::story();
        let mut story = String::new();
        let mut prompt = render_story_prompt(topic);

        for round in 1..=iterations {
            let increment = with_deadline(
                self.deadline,
                "Story generation",
                self.generator.generate(&prompt, &params),
            )
            .await?;

            log::debug!(
                "Story round {}/{} produced {} chars",
                round,
                iterations,
                increment.len()
            );

            story.push_str(increment.trim());
            story.push_str("\n\n");

            if round < iterations {
                prompt = render_continuation_prompt(&increment);
            }
        }

        Ok(story.trim().to_string())
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}
