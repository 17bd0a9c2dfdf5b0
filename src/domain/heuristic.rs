//! Quick heuristic domain scoring without an AI call
//!
//! Used as the fallback path when a model evaluation fails or omits a
//! domain, and available as a standalone utility.

use crate::types::DomainEvaluation;
use regex::Regex;
use std::sync::LazyLock;

static CONSONANT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[bcdfghjklmnpqrstvwxyz]{4,}").expect("consonant run pattern"));

/// Score multipliers and TLD table are fixed: the same input always
/// produces the same evaluation.
const TLD_SCORES: &[(&str, f64)] = &[
    ("com", 1.0),
    ("co", 0.9),
    ("io", 0.85),
    ("dev", 0.8),
    ("app", 0.8),
    ("me", 0.75),
    ("net", 0.7),
    ("org", 0.7),
];

const DEFAULT_TLD_SCORE: f64 = 0.5;

/// Evaluate a domain with deterministic heuristics
pub fn quick_evaluate(domain: &str) -> DomainEvaluation {
    let parts: Vec<&str> = domain.split('.').collect();
    let name = parts.first().copied().unwrap_or_default();
    let tld = if parts.len() > 1 {
        parts[parts.len() - 1]
    } else {
        ""
    };

    // Length-based scoring: short names score best
    let length_score = if name.len() <= 8 {
        1.0
    } else {
        (1.0 - (name.len() - 8) as f64 * 0.1).max(0.3)
    };

    let tld_score = TLD_SCORES
        .iter()
        .find(|(t, _)| *t == tld)
        .map(|(_, s)| *s)
        .unwrap_or(DEFAULT_TLD_SCORE);

    // Pronounceability: no run of 4+ consecutive consonants
    let pronounceable = !CONSONANT_RUN.is_match(&name.to_lowercase());

    let has_numbers = name.chars().any(|c| c.is_ascii_digit());
    let has_hyphens = name.contains('-');

    let mut score = (length_score + tld_score) / 2.0;
    if !pronounceable {
        score *= 0.7;
    }
    if has_numbers {
        score *= 0.8;
    }
    if has_hyphens {
        score *= 0.85;
    }

    let mut flags = Vec::new();
    if has_numbers {
        flags.push("contains numbers".to_string());
    }
    if has_hyphens {
        flags.push("contains hyphens".to_string());
    }
    if !pronounceable {
        flags.push("hard to pronounce".to_string());
    }

    DomainEvaluation {
        domain: domain.to_string(),
        score: (score * 100.0).round() / 100.0,
        worth_checking: score > 0.4,
        pronounceable,
        memorable: name.len() <= 12,
        brand_fit: score > 0.5,
        email_friendly: !has_numbers && !has_hyphens,
        flags,
        notes: format!("Quick eval: length={}, tld=.{}", name.len(), tld),
    }
}
