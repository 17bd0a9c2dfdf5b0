//! Core types and structures for domain-scout

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::validator::split_domain;

/// A generated domain name candidate, tied to the batch that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCandidate {
    pub domain: String,
    pub batch_num: u32,
    pub tld: String,
    pub name: String,
}

impl DomainCandidate {
    /// Build a candidate from a raw domain string, lower-casing and
    /// splitting out the name and TLD on the last dot
    pub fn new(domain: &str, batch_num: u32) -> Self {
        let (name, tld) = split_domain(domain);

        Self {
            domain: domain.to_lowercase(),
            batch_num,
            tld,
            name,
        }
    }
}

/// A scored assessment of one candidate domain's quality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEvaluation {
    pub domain: String,
    pub score: f64,
    pub worth_checking: bool,
    pub pronounceable: bool,
    pub memorable: bool,
    pub brand_fit: bool,
    pub email_friendly: bool,
    pub flags: Vec<String>,
    pub notes: String,
}

/// Summary of domains already attempted in earlier rounds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreviousResults {
    pub tried_summary: String,
}

impl PreviousResults {
    /// Lower-cased set of the domains named in `tried_summary`
    /// (tokens split on commas and whitespace, empties dropped)
    pub fn tried_set(&self) -> HashSet<String> {
        self.tried_summary
            .to_lowercase()
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect()
    }
}

/// Options for the candidate generation stage
#[derive(Debug, Clone, Default)]
pub struct DriverOptions {
    pub business_name: String,
    pub tld_preferences: Vec<String>,
    pub vibe: String,
    pub batch_num: u32,
    pub count: Option<usize>,
    pub max_batches: Option<u32>,
    pub domain_idea: Option<String>,
    pub keywords: Option<String>,
    pub previous_results: Option<PreviousResults>,
}

impl DriverOptions {
    /// Requested candidate count, defaulting to 50
    pub fn count(&self) -> usize {
        self.count.unwrap_or(50)
    }

    /// Total batches the caller plans to run, defaulting to 6
    pub fn max_batches(&self) -> u32 {
        self.max_batches.unwrap_or(6)
    }
}

/// Result of one generation batch
#[derive(Debug, Clone, Default)]
pub struct DriverResult {
    pub candidates: Vec<DomainCandidate>,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// Options for the parallel evaluation stage
#[derive(Debug, Clone, Default)]
pub struct SwarmOptions {
    pub domains: Vec<String>,
    pub vibe: String,
    pub business_name: String,
    pub chunk_size: Option<usize>,
    pub max_concurrent: Option<usize>,
}

impl SwarmOptions {
    /// Domains per evaluation call, defaulting to 10
    pub fn chunk_size(&self) -> usize {
        self.chunk_size.unwrap_or(10)
    }

    /// Calls in flight at once, defaulting to 12
    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent.unwrap_or(12)
    }
}

/// Result of one evaluation run
#[derive(Debug, Clone, Default)]
pub struct SwarmResult {
    pub evaluations: Vec<DomainEvaluation>,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// LLM configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
}
