pub const STORY_PROMPT_TEMPLATE: &str = "Write a short, fun children’s story (200–300 words) for ages 9–12.
Make it about {topic}. Use friendly child characters such as Riya, Arjun, or Robo the Robot.
The story should be imaginative but also teach one simple computer science or AI concept.
Keep it light, positive, and easy to understand.
End with a moral or a question like 'What would you build if you had your own AI robot?'

Story:
";

pub const CONTINUATION_PROMPT_PREFIX: &str = "Continue the story with the same tone:\n";

/// Framing phrases for the story illustrations, in response order.
pub const ILLUSTRATION_FRAMINGS: [&str; 3] = [
    "Children's book illustration: ",
    "Colorful cute scene from this story: ",
    "Friendly AI story artwork: ",
];

/// Number of leading story characters quoted in each illustration prompt.
pub const ILLUSTRATION_EXCERPT_CHARS: usize = 300;

pub fn render_story_prompt(topic: &str) -> String {
    STORY_PROMPT_TEMPLATE.replacen("{topic}", topic, 1)
}

pub fn render_continuation_prompt(increment: &str) -> String {
    format!("{}{}", CONTINUATION_PROMPT_PREFIX, increment)
}

pub fn render_illustration_prompts(story: &str) -> Vec<String> {
    let excerpt: String = story.chars().take(ILLUSTRATION_EXCERPT_CHARS).collect();
    ILLUSTRATION_FRAMINGS
        .iter()
        .map(|framing| format!("{}{}", framing, excerpt))
        .collect()
}
