//! Parsing of model responses into candidates and evaluations
//!
//! Both parsers try a structured phase first: the brace-delimited
//! substring of the response is decoded as JSON. Only when that yields
//! nothing usable does the fallback run: a pattern scan for candidates,
//! heuristic fill-in for evaluations. Parse errors never escape; they
//! route to the next strategy.

use crate::domain::{is_valid_domain, quick_evaluate};
use crate::types::{DomainCandidate, DomainEvaluation};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::LazyLock;

static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([a-zA-Z0-9][-a-zA-Z0-9]*\.[a-zA-Z]{2,})\b").expect("domain pattern")
});

#[derive(Deserialize)]
struct CandidatePayload {
    #[serde(default)]
    domains: Vec<String>,
}

#[derive(Deserialize)]
struct EvaluationPayload {
    #[serde(default)]
    evaluations: Vec<EvaluationRaw>,
}

/// Wire shape of one evaluation entry; every field beyond the domain is
/// optional and defaulted permissively
#[derive(Deserialize)]
struct EvaluationRaw {
    domain: Option<String>,
    score: Option<f64>,
    worth_checking: Option<bool>,
    pronounceable: Option<bool>,
    memorable: Option<bool>,
    brand_fit: Option<bool>,
    email_friendly: Option<bool>,
    flags: Option<Vec<String>>,
    notes: Option<String>,
}

/// Extract domain candidates from a model response.
///
/// Output order is order of first appearance; duplicates are dropped
/// case-insensitively and invalid domains are skipped.
pub fn parse_candidates(content: &str, batch_num: u32) -> Vec<DomainCandidate> {
    let mut candidates = Vec::new();
    let mut seen = HashSet::new();

    if let Some(json) = extract_json_object(content) {
        if let Ok(payload) = serde_json::from_str::<CandidatePayload>(json) {
            for domain in &payload.domains {
                push_candidate(domain, batch_num, &mut candidates, &mut seen);
            }
        }
    }

    // Fallback: scan the whole text for domain-shaped tokens
    if candidates.is_empty() {
        for capture in DOMAIN_PATTERN.captures_iter(content) {
            if let Some(m) = capture.get(1) {
                push_candidate(m.as_str(), batch_num, &mut candidates, &mut seen);
            }
        }
    }

    candidates
}

/// Extract evaluations from a model response.
///
/// Every domain in `expected_domains` that the structured phase did not
/// produce gets a heuristic evaluation appended, so the output always
/// covers the expected list. Structured entries outside the expected
/// list are kept.
pub fn parse_evaluations(content: &str, expected_domains: &[String]) -> Vec<DomainEvaluation> {
    let mut evaluations = Vec::new();
    let mut parsed = HashSet::new();

    if let Some(json) = extract_json_object(content) {
        if let Ok(payload) = serde_json::from_str::<EvaluationPayload>(json) {
            for raw in payload.evaluations {
                let domain = match raw.domain {
                    Some(d) if !d.is_empty() => d.to_lowercase(),
                    _ => continue,
                };
                if !parsed.insert(domain.clone()) {
                    continue;
                }
                evaluations.push(DomainEvaluation {
                    domain,
                    score: raw.score.unwrap_or(0.5),
                    worth_checking: raw.worth_checking.unwrap_or(true),
                    pronounceable: raw.pronounceable.unwrap_or(true),
                    memorable: raw.memorable.unwrap_or(true),
                    brand_fit: raw.brand_fit.unwrap_or(true),
                    email_friendly: raw.email_friendly.unwrap_or(true),
                    flags: raw.flags.unwrap_or_default(),
                    notes: raw.notes.unwrap_or_default(),
                });
            }
        }
    }

    // Fill in anything the model skipped with heuristic scores
    for domain in expected_domains {
        if !parsed.contains(&domain.to_lowercase()) {
            evaluations.push(quick_evaluate(domain));
        }
    }

    evaluations
}

/// The substring from the first `{` to the last `}`, if any
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

fn push_candidate(
    domain: &str,
    batch_num: u32,
    candidates: &mut Vec<DomainCandidate>,
    seen: &mut HashSet<String>,
) {
    if is_valid_domain(domain) && seen.insert(domain.to_lowercase()) {
        candidates.push(DomainCandidate::new(domain, batch_num));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_candidates_round_trip() {
        let candidates = parse_candidates(r#"{"domains":["alpha.com","beta.io"]}"#, 1);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].domain, "alpha.com");
        assert_eq!(candidates[0].name, "alpha");
        assert_eq!(candidates[0].tld, "com");
        assert_eq!(candidates[1].domain, "beta.io");
        assert_eq!(candidates[1].name, "beta");
        assert_eq!(candidates[1].tld, "io");
    }

    #[test]
    fn test_candidates_dedup_case_insensitive() {
        let candidates = parse_candidates(r#"{"domains":["a1.com","A1.COM","b2.io"]}"#, 1);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].domain, "a1.com");
        assert_eq!(candidates[1].domain, "b2.io");
    }

    #[test]
    fn test_candidates_skip_invalid_entries() {
        let candidates =
            parse_candidates(r#"{"domains":["good.com","-bad.com","ab","x.c"]}"#, 3);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].domain, "good.com");
        assert_eq!(candidates[0].batch_num, 3);
    }

    #[test]
    fn test_candidates_ignore_prose_around_json() {
        let content = "Here are my suggestions:\n{\"domains\": [\"alpha.com\"]}\nEnjoy!";
        let candidates = parse_candidates(content, 1);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].domain, "alpha.com");
    }

    #[test]
    fn test_candidates_pattern_fallback() {
        let content = "I'd suggest alpha.com or maybe beta.io, even ALPHA.com again.";
        let candidates = parse_candidates(content, 2);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].domain, "alpha.com");
        assert_eq!(candidates[1].domain, "beta.io");
    }

    #[test]
    fn test_candidates_empty_on_nothing_usable() {
        assert!(parse_candidates("no domains here at all", 1).is_empty());
        assert!(parse_candidates("", 1).is_empty());
    }

    #[test]
    fn test_evaluations_structured_with_defaults() {
        let content = r#"{"evaluations":[
            {"domain":"Alpha.com","score":0.9,"worth_checking":true,"flags":["taken vibe"],"notes":"strong"},
            {"domain":"beta.io"}
        ]}"#;
        let expected = vec!["alpha.com".to_string(), "beta.io".to_string()];
        let evaluations = parse_evaluations(content, &expected);

        assert_eq!(evaluations.len(), 2);
        assert_eq!(evaluations[0].domain, "alpha.com");
        assert_eq!(evaluations[0].score, 0.9);
        assert_eq!(evaluations[0].flags, vec!["taken vibe".to_string()]);

        // missing fields default permissively
        assert_eq!(evaluations[1].domain, "beta.io");
        assert_eq!(evaluations[1].score, 0.5);
        assert!(evaluations[1].worth_checking);
        assert!(evaluations[1].pronounceable);
        assert!(evaluations[1].memorable);
        assert!(evaluations[1].brand_fit);
        assert!(evaluations[1].email_friendly);
        assert!(evaluations[1].flags.is_empty());
        assert_eq!(evaluations[1].notes, "");
    }

    #[test]
    fn test_evaluations_fallback_completeness() {
        let expected = vec!["x.com".to_string(), "y.io".to_string()];
        let evaluations = parse_evaluations("not json", &expected);

        assert_eq!(evaluations.len(), 2);
        assert_eq!(evaluations[0], quick_evaluate("x.com"));
        assert_eq!(evaluations[1], quick_evaluate("y.io"));
    }

    #[test]
    fn test_evaluations_fill_in_missing_domains() {
        let content = r#"{"evaluations":[{"domain":"x.com","score":0.8}]}"#;
        let expected = vec!["x.com".to_string(), "y.io".to_string()];
        let evaluations = parse_evaluations(content, &expected);

        assert_eq!(evaluations.len(), 2);
        assert_eq!(evaluations[0].score, 0.8);
        assert_eq!(evaluations[1], quick_evaluate("y.io"));
    }

    #[test]
    fn test_evaluations_keep_unexpected_domains() {
        let content = r#"{"evaluations":[{"domain":"extra.dev","score":0.6}]}"#;
        let expected = vec!["x.com".to_string()];
        let evaluations = parse_evaluations(content, &expected);

        assert_eq!(evaluations.len(), 2);
        assert_eq!(evaluations[0].domain, "extra.dev");
        assert_eq!(evaluations[1], quick_evaluate("x.com"));
    }

    #[test]
    fn test_evaluations_skip_blank_and_duplicate_domains() {
        let content = r#"{"evaluations":[
            {"domain":"","score":0.9},
            {"score":0.9},
            {"domain":"x.com","score":0.7},
            {"domain":"X.COM","score":0.1}
        ]}"#;
        let expected = vec!["x.com".to_string()];
        let evaluations = parse_evaluations(content, &expected);

        assert_eq!(evaluations.len(), 1);
        assert_eq!(evaluations[0].score, 0.7);
    }
}
