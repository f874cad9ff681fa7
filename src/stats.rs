//! Frequency rankings and aggregate statistics over a registry.

use serde::Serialize;

use crate::error::{AnalysisError, Result};
use crate::registry::{WordRecord, WordRegistry};
use crate::tokenizer::RunningCounters;

/// Aggregates derived from the registry and the running counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisSnapshot {
    pub total_tokens: u64,
    pub unique_words: usize,
    pub lexical_diversity: f64,
    pub total_sentences: u64,
    pub total_characters: u64,
    pub average_sentence_length: f64,
    pub average_word_length: f64,
    pub toxic_unique_count: usize,
    pub toxic_total_occurrences: u64,
    pub max_toxicity_severity: u32,
}

///Sorts records by descending count into Vec<&WordRecord>.
///The sort is stable, so words with equal counts stay in the order they were first seen.
pub fn rank_by_frequency(registry: &WordRegistry) -> Vec<&WordRecord> {
    let mut ranked: Vec<&WordRecord> = registry.records().collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// The `n` most frequent words; fewer when the registry holds fewer.
pub fn top_words(registry: &WordRegistry, n: usize) -> Vec<&WordRecord> {
    let mut ranked = rank_by_frequency(registry);
    ranked.truncate(n);
    ranked
}

/// The `limit` most frequent toxic words, in frequency order.
pub fn top_toxic(registry: &WordRegistry, limit: usize) -> Vec<&WordRecord> {
    rank_by_frequency(registry)
        .into_iter()
        .filter(|r| r.is_toxic())
        .take(limit)
        .collect()
}

fn ratio(numerator: f64, denominator: u64) -> f64 {
    if denominator > 0 {
        numerator / denominator as f64
    } else {
        0.0
    }
}

pub fn compute_statistics(registry: &WordRegistry, counters: &RunningCounters) -> AnalysisSnapshot {
    let total_tokens: u64 = registry.records().map(|r| r.count).sum();
    let unique_words = registry.len();

    let mut toxic_unique_count = 0;
    let mut toxic_total_occurrences = 0;
    let mut max_toxicity_severity = 0;
    for r in registry.records().filter(|r| r.is_toxic()) {
        toxic_unique_count += 1;
        toxic_total_occurrences += r.count;
        max_toxicity_severity = max_toxicity_severity.max(r.severity);
    }

    AnalysisSnapshot {
        total_tokens,
        unique_words,
        lexical_diversity: ratio(unique_words as f64, total_tokens),
        total_sentences: counters.total_sentences,
        total_characters: counters.total_characters,
        average_sentence_length: ratio(total_tokens as f64, counters.total_sentences),
        average_word_length: ratio(counters.total_characters as f64, total_tokens),
        toxic_unique_count,
        toxic_total_occurrences,
        max_toxicity_severity,
    }
}

///Parses a user supplied word count such as the N of "top N words".
/// # Example
/// ```
/// use toxic_text_analysis::parse_count;
/// assert_eq!(parse_count(" 15 ").unwrap(), 15);
/// assert!(parse_count("fifteen").is_err());
/// assert!(parse_count("-3").is_err());
/// ```
pub fn parse_count(input: &str) -> Result<usize> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|e| AnalysisError::malformed(input, format!("expected a non-negative whole number ({e})")))
}
