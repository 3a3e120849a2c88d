//! Wire types for the OpenAI-compatible `chat/completions` endpoint.

use super::message::{Message, MessageRole};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Non-streaming completion request body.
///
/// Built fresh for every call and dropped once the response is read.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub stream: bool,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            stream: false,
            max_tokens: 1024,
            temperature: 0.7,
        }
    }

    pub fn max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = temp;
        self
    }

    /// Number of `system` entries; the gateway never sends more than one.
    pub fn system_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == MessageRole::System)
            .count()
    }

    /// Content of the last user turn, which drives keyword fallbacks.
    pub fn last_user_text(&self) -> &str {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.as_str())
            .unwrap_or("")
    }
}

/// Success body. Only the first choice is ever read.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Parse a raw body and pull out `choices[0].message.content`.
    pub fn first_content_from_body(body: &str) -> Result<String> {
        let parsed: CompletionResponse = serde_json::from_str(body)?;
        parsed.into_first_content()
    }

    pub fn into_first_content(self) -> Result<String> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::MalformedResponse("response has no choices".into()))?;
        let message = choice
            .message
            .ok_or_else(|| Error::MalformedResponse("first choice has no message".into()))?;
        message
            .content
            .ok_or_else(|| Error::MalformedResponse("first choice message has no content".into()))
    }
}
