//! LLM (Large Language Model) integration module
//!
//! The Anthropic API boundary and the prompt collaborators built on it.

pub mod client;
pub mod prompts;

// Re-export main functionality
pub use client::{AnthropicClient, Completion, CompletionRequest};
