//! Swarm agent - parallel domain evaluation
//!
//! Partitions domains into fixed-size chunks and dispatches them in
//! bounded-concurrency waves. A chunk whose call fails degrades to
//! heuristic scoring, so every requested domain always comes back with
//! an evaluation.

use crate::domain::quick_evaluate;
use crate::error::Result;
use crate::llm::prompts::{format_swarm_prompt, SWARM_SYSTEM_PROMPT};
use crate::llm::{AnthropicClient, CompletionRequest};
use crate::types::{DomainEvaluation, LlmConfig, SwarmOptions, SwarmResult};
use futures::future::join_all;

/// Default model for domain evaluation
pub const SWARM_MODEL: &str = "claude-3-5-haiku-20241022";

/// Score floor for `filter_worth_checking`
pub const DEFAULT_MIN_SCORE: f64 = 0.4;

const MAX_TOKENS: u32 = 2048;

// Low temperature: scoring, not brainstorming
const TEMPERATURE: f32 = 0.3;

/// Outcome of one chunk: model-parsed evaluations with their token
/// usage, or the heuristic fallback with none. The merge step does not
/// care which variant produced an item.
enum ChunkOutcome {
    Parsed {
        evaluations: Vec<DomainEvaluation>,
        input_tokens: u64,
        output_tokens: u64,
    },
    Fallback(Vec<DomainEvaluation>),
}

/// Domain evaluation agent
pub struct SwarmAgent {
    client: AnthropicClient,
    model: String,
}

impl SwarmAgent {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let model = if config.model.is_empty() {
            SWARM_MODEL.to_string()
        } else {
            config.model.clone()
        };

        Ok(Self {
            client: AnthropicClient::new(config)?,
            model,
        })
    }

    /// Evaluate a list of domains.
    ///
    /// Never fails outward: per-chunk call failures are logged and
    /// replaced with heuristic evaluations carrying zero token usage.
    /// Output preserves chunk order and within-chunk order.
    pub async fn evaluate(&self, options: &SwarmOptions) -> SwarmResult {
        if options.domains.is_empty() {
            return SwarmResult::default();
        }

        let chunks: Vec<&[String]> = options.domains.chunks(options.chunk_size()).collect();

        let mut result = SwarmResult::default();

        // Waves: up to max_concurrent chunks in flight, full barrier
        // between waves
        for wave in chunks.chunks(options.max_concurrent()) {
            let outcomes = join_all(
                wave.iter()
                    .map(|&chunk| self.evaluate_chunk(chunk, options)),
            )
            .await;

            for outcome in outcomes {
                match outcome {
                    ChunkOutcome::Parsed {
                        evaluations,
                        input_tokens,
                        output_tokens,
                    } => {
                        result.evaluations.extend(evaluations);
                        result.input_tokens += input_tokens;
                        result.output_tokens += output_tokens;
                    }
                    ChunkOutcome::Fallback(evaluations) => {
                        result.evaluations.extend(evaluations);
                    }
                }
            }
        }

        result
    }

    async fn evaluate_chunk(&self, domains: &[String], options: &SwarmOptions) -> ChunkOutcome {
        let prompt = format_swarm_prompt(domains, &options.vibe, &options.business_name);

        let completion = self
            .client
            .complete(CompletionRequest {
                model: &self.model,
                max_tokens: MAX_TOKENS,
                temperature: TEMPERATURE,
                system: SWARM_SYSTEM_PROMPT,
                prompt: &prompt,
            })
            .await;

        match completion {
            Ok(completion) => ChunkOutcome::Parsed {
                evaluations: super::parser::parse_evaluations(&completion.text, domains),
                input_tokens: completion.input_tokens,
                output_tokens: completion.output_tokens,
            },
            Err(e) => {
                tracing::warn!(
                    domains = domains.len(),
                    error = %e,
                    "Chunk evaluation failed, falling back to heuristics"
                );
                ChunkOutcome::Fallback(domains.iter().map(|d| quick_evaluate(d)).collect())
            }
        }
    }
}

/// Keep only evaluations worth a registrar availability check
pub fn filter_worth_checking(
    evaluations: &[DomainEvaluation],
    min_score: f64,
) -> Vec<DomainEvaluation> {
    evaluations
        .iter()
        .filter(|e| e.worth_checking && e.score >= min_score)
        .cloned()
        .collect()
}

/// Rank evaluations by score, highest first.
///
/// The sort is stable: equal scores keep their input order.
pub fn rank_evaluations(evaluations: &[DomainEvaluation]) -> Vec<DomainEvaluation> {
    let mut ranked = evaluations.to_vec();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(domain: &str, score: f64, worth_checking: bool) -> DomainEvaluation {
        DomainEvaluation {
            domain: domain.to_string(),
            score,
            worth_checking,
            pronounceable: true,
            memorable: true,
            brand_fit: true,
            email_friendly: true,
            flags: Vec::new(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_filter_worth_checking_applies_both_conditions() {
        let evaluations = vec![
            eval("keep.com", 0.9, true),
            eval("low-score.com", 0.3, true),
            eval("not-worth.com", 0.9, false),
            eval("boundary.com", 0.4, true),
        ];

        let kept = filter_worth_checking(&evaluations, DEFAULT_MIN_SCORE);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].domain, "keep.com");
        assert_eq!(kept[1].domain, "boundary.com");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let evaluations = vec![
            eval("a.com", 0.9, true),
            eval("b.com", 0.2, true),
            eval("c.com", 0.7, false),
        ];

        let once = filter_worth_checking(&evaluations, DEFAULT_MIN_SCORE);
        let twice = filter_worth_checking(&once, DEFAULT_MIN_SCORE);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rank_orders_by_score_descending() {
        let evaluations = vec![
            eval("mid.com", 0.5, true),
            eval("top.com", 0.9, true),
            eval("bottom.com", 0.1, true),
        ];

        let ranked = rank_evaluations(&evaluations);
        assert_eq!(ranked[0].domain, "top.com");
        assert_eq!(ranked[1].domain, "mid.com");
        assert_eq!(ranked[2].domain, "bottom.com");
    }

    #[test]
    fn test_rank_is_stable_and_idempotent() {
        let evaluations = vec![
            eval("first.com", 0.5, true),
            eval("second.com", 0.5, true),
            eval("third.com", 0.8, true),
        ];

        let once = rank_evaluations(&evaluations);
        assert_eq!(once[0].domain, "third.com");
        assert_eq!(once[1].domain, "first.com");
        assert_eq!(once[2].domain, "second.com");

        let twice = rank_evaluations(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rank_does_not_mutate_input() {
        let evaluations = vec![eval("a.com", 0.1, true), eval("b.com", 0.9, true)];
        let _ranked = rank_evaluations(&evaluations);
        assert_eq!(evaluations[0].domain, "a.com");
    }
}
