//! Domain Scout - AI-powered domain name brainstorming and evaluation
//!
//! Generates candidate domain names with a creative model pass, then
//! scores them with fast parallel evaluation calls, falling back to
//! deterministic heuristics whenever the model path fails.

pub mod agent;
pub mod domain;
pub mod error;
pub mod llm;
pub mod types;

// Re-export commonly used types
pub use error::{DomainScoutError, Result};
pub use types::{
    DomainCandidate, DomainEvaluation, DriverOptions, DriverResult, LlmConfig, PreviousResults,
    SwarmOptions, SwarmResult,
};

// Re-export main functionality
pub use agent::{filter_worth_checking, rank_evaluations, DriverAgent, SwarmAgent};
pub use domain::{is_valid_domain, quick_evaluate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
