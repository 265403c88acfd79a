//! AI suggestions for logged moods.
//!
//! The suggestion capability is an explicit collaborator: callers construct a
//! provider and hand it to the operation that needs it. `OllamaClient` is the
//! provided implementation, talking to a local Ollama server.
//!
//! # Example
//!
//! ```no_run
//! use moodtrack::ai::{OllamaClient, SuggestionProvider};
//! use moodtrack::mood_core::Mood;
//!
//! let client = OllamaClient::new("http://127.0.0.1:11434", "llama3.2:3b");
//! let suggestion = client.suggest(Mood::Tired, "coding, cooking")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod ollama;
pub mod prompts;

use crate::errors::AppResult;
use crate::mood_core::Mood;

pub use ollama::{Message, OllamaClient};
pub use prompts::{suggestion_prompt, SYSTEM_PROMPT};

/// Produces free-form suggestions for a mood and its activities.
pub trait SuggestionProvider {
    /// `activities` is the stored, comma-separated activity list.
    fn suggest(&self, mood: Mood, activities: &str) -> AppResult<String>;
}
