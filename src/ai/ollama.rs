//! Ollama HTTP client for chat completion.
//!
//! This module provides a simple client for the Ollama chat API, used to turn
//! a day's mood and activities into free-form suggestions.

use super::prompts::suggestion_prompt;
use super::SuggestionProvider;
use crate::errors::{AIError, AppResult};
use crate::mood_core::Mood;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A message in a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender (system, user, assistant)
    pub role: String,
    /// The content of the message
    pub content: String,
}

impl Message {
    /// Creates a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Creates a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for chat completion.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    stream: bool,
}

/// Response from chat completion.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: Message,
}

/// Client for interacting with Ollama API.
pub struct OllamaClient {
    base_url: String,
    model: String,
    client: Client,
}

impl OllamaClient {
    /// Creates a new Ollama client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the Ollama API (e.g., "http://127.0.0.1:11434")
    /// * `model` - Chat model used for suggestions (e.g., "llama3.2:3b")
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client: Client::new(),
        }
    }

    /// Sends a chat completion request.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Ollama API is not reachable
    /// - Model is not found
    /// - API returns an error response
    pub fn chat(&self, messages: &[Message]) -> AppResult<String> {
        debug!("Sending chat request with model: {}", self.model);

        let url = format!("{}/api/chat", self.base_url);
        let request = ChatRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .map_err(AIError::OllamaOffline)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();

            if status.as_u16() == 404 {
                return Err(AIError::ModelNotFound(self.model.clone()).into());
            }

            return Err(
                AIError::InvalidResponse(format!("HTTP {}: {}", status, error_text)).into(),
            );
        }

        let chat_response: ChatResponse = response.json().map_err(|e| {
            AIError::InvalidResponse(format!("Failed to parse chat response: {}", e))
        })?;

        debug!("Received chat response");
        Ok(chat_response.message.content)
    }
}

impl SuggestionProvider for OllamaClient {
    fn suggest(&self, mood: Mood, activities: &str) -> AppResult<String> {
        let reply = self.chat(&suggestion_prompt(mood, activities))?;
        let reply = reply.trim();
        if reply.is_empty() {
            return Err(AIError::InvalidResponse("empty suggestion".to_string()).into());
        }
        Ok(reply.to_string())
    }
}
