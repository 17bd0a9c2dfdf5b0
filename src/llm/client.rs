//! Anthropic Messages API client
//!
//! The single request/response boundary shared by the driver and swarm
//! agents. Each call sends one user message and returns the response
//! text together with reported token usage.

use crate::error::{DomainScoutError, Result};
use crate::types::LlmConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic API client
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// One completion request: a single user message plus sampling controls
#[derive(Debug, Clone)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
    pub system: &'a str,
    pub prompt: &'a str,
}

/// Model response text plus the token usage the API reported for it
#[derive(Debug, Clone, Default)]
pub struct Completion {
    pub text: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl AnthropicClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(DomainScoutError::config(
                "Anthropic API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| DomainScoutError::network(e.to_string(), None, None))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    /// Send one message to the model and return its completion.
    ///
    /// A response with no content blocks yields an empty completion, not
    /// an error; the parsers treat empty text as a valid empty result.
    pub async fn complete(&self, request: CompletionRequest<'_>) -> Result<Completion> {
        let body = MessagesRequest {
            model: request.model,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            system: request.system,
            messages: vec![Message {
                role: "user",
                content: request.prompt,
            }],
        };

        let url = format!("{}/messages", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                DomainScoutError::network(
                    format!("Failed to connect to Anthropic API: {}", e),
                    None,
                    Some(url.clone()),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            let error_msg = match status.as_u16() {
                401 => format!(
                    "Authentication failed (401). Check your Anthropic API key: {}",
                    error_text
                ),
                403 => format!(
                    "Access forbidden (403). Your API key may not have permission: {}",
                    error_text
                ),
                429 => format!("Rate limit exceeded (429): {}", error_text),
                500..=599 => format!("Anthropic server error ({}): {}", status, error_text),
                _ => format!("Anthropic API request failed ({}): {}", status, error_text),
            };

            return Err(DomainScoutError::network(
                error_msg,
                Some(status.as_u16()),
                Some(url),
            ));
        }

        let messages: MessagesResponse = response
            .json()
            .await
            .map_err(|e| DomainScoutError::parse(e.to_string(), None))?;

        let text = messages
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .unwrap_or_default();

        Ok(Completion {
            text,
            input_tokens: messages.usage.input_tokens,
            output_tokens: messages.usage.output_tokens,
        })
    }
}

// Messages API wire structures
#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Usage,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: String,
}

#[derive(Deserialize, Default)]
struct Usage {
    input_tokens: u64,
    output_tokens: u64,
}
