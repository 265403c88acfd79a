//! System prompt and message builder for mood suggestions.

use super::ollama::Message;
use crate::mood_core::Mood;

/// System prompt for suggestion requests.
pub const SYSTEM_PROMPT: &str = r#"You are a helpful, warm assistant for a personal mood journal.
Offer brief, practical suggestions that fit the user's day.

Guidelines:
- Be empathetic and non-judgmental
- Keep suggestions concrete and achievable today
- Build on the activities the user already enjoys
- Keep the whole answer under 150 words"#;

/// Builds messages asking for suggestions to maintain or improve a mood.
///
/// # Arguments
///
/// * `mood` - Today's mood
/// * `activities` - Today's activities, comma separated
pub fn suggestion_prompt(mood: Mood, activities: &str) -> Vec<Message> {
    vec![
        Message::system(SYSTEM_PROMPT),
        Message::user(format!(
            "I am feeling {} today. I have done the following activities: {}. \
             Can you provide some suggestions or activities to help me maintain or improve my mood?",
            mood.as_key(),
            activities
        )),
    ]
}
