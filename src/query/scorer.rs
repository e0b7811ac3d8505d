//! Relevance scoring for indexed records
//!
//! Each query term contributes independently and the per-term scores are
//! summed:
//! - substring match anywhere in the content
//! - whole-word match against the token set (only on a substring match)
//! - match at a word boundary (only on a substring match)
//! - one fuzzy bonus per token within the edit-distance budget
//! - one prefix bonus per token that extends the term
//!
//! A record scoring zero is not a match.

use crate::index::IndexEntry;
use crate::query::parser::QueryTerm;
use crate::utils::{SearchConfig, levenshtein_within};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Configurable weights for scoring signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Term appears anywhere in the record content
    pub substring: u32,
    /// Term equals one of the record's tokens
    pub whole_word: u32,
    /// Term matches at the start of a word
    pub word_boundary: u32,
    /// Per token within the fuzzy edit-distance budget
    pub fuzzy: u32,
    /// Per token that starts with the term but is longer
    pub prefix: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            substring: 10,
            whole_word: 5,
            word_boundary: 3,
            fuzzy: 2,
            prefix: 1,
        }
    }
}

/// Scorer calculates relevance scores for index entries
#[derive(Debug, Clone)]
pub struct Scorer {
    weights: ScoringWeights,
    fuzzy_max_distance: usize,
    fuzzy_length_tolerance: usize,
}

impl Scorer {
    pub fn new(weights: ScoringWeights, fuzzy_max_distance: usize, fuzzy_length_tolerance: usize) -> Self {
        Self {
            weights,
            fuzzy_max_distance,
            fuzzy_length_tolerance,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.weights, config.fuzzy_max_distance, config.fuzzy_length_tolerance)
    }

    /// Create a scorer with default weights
    pub fn with_defaults() -> Self {
        Self::from_config(&SearchConfig::default())
    }

    /// Score one term against one entry
    pub fn score_term(&self, term: &QueryTerm, entry: &IndexEntry) -> u32 {
        let w = &self.weights;
        let mut score = 0;

        if entry.content.contains(term.text.as_str()) {
            score += w.substring;

            if entry.tokens.contains(term.text.as_str()) {
                score += w.whole_word;
            }

            if term
                .boundary
                .as_ref()
                .is_some_and(|re| re.is_match(&entry.content))
            {
                score += w.word_boundary;
            }
        }

        for token in &entry.tokens {
            if self.is_fuzzy_match(term, token) {
                score += w.fuzzy;
            }

            if token.len() > term.text.len() && token.starts_with(term.text.as_str()) {
                score += w.prefix;
            }
        }

        score
    }

    /// Score all terms against one entry.
    /// Returns the total and the distinct terms that contributed.
    pub fn score_entry(&self, terms: &[QueryTerm], entry: &IndexEntry) -> (u32, Vec<String>) {
        let mut total = 0;
        let mut matched: Vec<String> = Vec::new();

        for term in terms {
            let score = self.score_term(term, entry);
            trace!(term = %term.text, score, "term scored");

            if score > 0 {
                total += score;
                if !matched.contains(&term.text) {
                    matched.push(term.text.clone());
                }
            }
        }

        (total, matched)
    }

    fn is_fuzzy_match(&self, term: &QueryTerm, token: &str) -> bool {
        let token_len = token.chars().count();
        if token_len.abs_diff(term.char_len) > self.fuzzy_length_tolerance {
            return false;
        }
        levenshtein_within(&term.text, token, self.fuzzy_max_distance)
    }
}
