//! AI Service Module
//!
//! Seam between the analysis core and the hosted chat-completion service.
//!
//! - Provider: `CompletionProvider` trait, `OpenRouterProvider` implementation
//! - Prompts: roadmap and job-suggestion prompt builders
//! - Parsing: turning free-text replies into JSON records

pub mod openrouter;
pub mod prompts;

pub use openrouter::*;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Options for a single completion request
#[derive(Debug, Clone)]
pub struct CompletionOptions {
    pub max_tokens: u32,
    pub temperature: Option<f32>,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_tokens: 1500,
            temperature: Some(0.7),
        }
    }
}

/// Errors from the AI service boundary
#[derive(Error, Debug)]
pub enum AiError {
    #[error("No API key configured for the AI service")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("AI request timed out")]
    Timeout,

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Malformed AI response: {0}")]
    MalformedResponse(String),
}

/// A hosted language model that answers a single user prompt
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Text content of the first completion choice
    async fn complete(&self, prompt: &str, options: &CompletionOptions) -> Result<String, AiError>;

    /// Cheap round trip proving the service answers
    async fn check_connection(&self) -> bool {
        use log::error;

        let options = CompletionOptions {
            max_tokens: 10,
            temperature: None,
        };
        match self
            .complete("Hello, please respond with just 'API Working'", &options)
            .await
        {
            Ok(reply) => reply.contains("API Working"),
            Err(e) => {
                error!("API connection test failed: {}", e);
                false
            }
        }
    }
}

/// Parse a model reply that should contain a JSON array.
///
/// Models often wrap JSON in a fenced code block; when the reply does not
/// parse as-is, the first fenced block is unwrapped and parsed instead.
/// Anything other than an array is malformed.
pub fn parse_json_array(reply: &str) -> Result<Vec<Value>, AiError> {
    let parsed = match serde_json::from_str::<Value>(reply.trim()) {
        Ok(value) => Ok(value),
        Err(_) => serde_json::from_str::<Value>(strip_code_fence(reply)),
    };
    match parsed {
        Ok(Value::Array(items)) => Ok(items),
        Ok(other) => Err(AiError::MalformedResponse(format!(
            "expected a JSON array, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(AiError::MalformedResponse(e.to_string())),
    }
}

fn strip_code_fence(reply: &str) -> &str {
    let reply = reply.trim();
    if let Some(start) = reply.find("```") {
        let after = &reply[start + 3..];
        if let Some(end) = after.find("```") {
            let block = &after[..end];
            // Skip a language tag such as ```json
            return match block.find('\n') {
                Some(newline) if !block[..newline].trim_start().starts_with('[') => {
                    block[newline + 1..].trim()
                }
                _ => block.trim(),
            };
        }
    }
    reply
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Non-empty string field of a loosely-typed JSON record
pub(crate) fn str_field<'a>(record: &'a Value, key: &str) -> Option<&'a str> {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
