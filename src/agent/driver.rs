//! Driver agent - generates candidate domains
//!
//! One model call per batch; the prompt carries the client brief and a
//! summary of earlier rounds so later batches explore new ground.

use crate::error::Result;
use crate::llm::prompts::{format_driver_prompt, DRIVER_SYSTEM_PROMPT};
use crate::llm::{AnthropicClient, CompletionRequest};
use crate::types::{DriverOptions, DriverResult, LlmConfig};

use super::parser;

/// Default model for candidate generation
pub const DRIVER_MODEL: &str = "claude-sonnet-4-20250514";

const MAX_TOKENS: u32 = 4096;

// Elevated temperature: brainstorming wants variety
const TEMPERATURE: f32 = 0.8;

/// Candidate generation agent
pub struct DriverAgent {
    client: AnthropicClient,
    model: String,
}

impl DriverAgent {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let model = if config.model.is_empty() {
            DRIVER_MODEL.to_string()
        } else {
            config.model.clone()
        };

        Ok(Self {
            client: AnthropicClient::new(config)?,
            model,
        })
    }

    /// Generate one batch of domain candidates.
    ///
    /// Fails when the model call itself fails; the error carries the
    /// response status and body text so the caller can decide whether
    /// to retry.
    pub async fn generate(&self, options: &DriverOptions) -> Result<DriverResult> {
        let prompt = format_driver_prompt(options);

        let completion = self
            .client
            .complete(CompletionRequest {
                model: &self.model,
                max_tokens: MAX_TOKENS,
                temperature: TEMPERATURE,
                system: DRIVER_SYSTEM_PROMPT,
                prompt: &prompt,
            })
            .await?;

        let mut candidates = parser::parse_candidates(&completion.text, options.batch_num);

        // Drop anything the caller already tried in earlier rounds
        if let Some(previous) = &options.previous_results {
            let tried = previous.tried_set();
            candidates.retain(|c| !tried.contains(&c.domain));
        }

        candidates.truncate(options.count());

        tracing::info!(
            batch = options.batch_num,
            candidates = candidates.len(),
            input_tokens = completion.input_tokens,
            output_tokens = completion.output_tokens,
            "Candidate generation completed"
        );

        Ok(DriverResult {
            candidates,
            input_tokens: completion.input_tokens,
            output_tokens: completion.output_tokens,
        })
    }
}
