//! The search context: index, history and highlighter behind one value.
//!
//! Everything mutable lives in [`LeadSearch`] and is reached through
//! `&mut self`, so the borrow checker enforces the single-actor model. A
//! multi-threaded host wraps the whole context in one `Mutex`.

use crate::highlight::Highlighter;
use crate::index::{SearchIndex, Searchable};
use crate::lead::FIELD_NAMES;
use crate::query::{Scorer, compile_terms, parse_query};
use crate::suggest::{SearchHistory, Suggestion, generate_suggestions};
use crate::utils::{AppConfig, PatternCache, SearchConfig};
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

/// Summary of one filtering search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    pub total_results: usize,
    pub search_time_ms: f64,
    /// The query exactly as passed in
    pub query: String,
}

/// One scored record
#[derive(Debug, Clone)]
pub struct MatchResult<'a, T> {
    pub record: &'a T,
    pub score: u32,
    /// Query terms that contributed to the score, in query order
    pub matched_terms: Vec<String>,
}

/// Ranked matches plus stats. `stats` is `None` for a pass-through.
#[derive(Debug, Clone)]
pub struct RankedOutcome<'a, T> {
    pub matches: Vec<MatchResult<'a, T>>,
    pub stats: Option<SearchStats>,
}

/// Matching records in rank order plus stats. `stats` is `None` for a pass-through.
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a, T> {
    pub results: Vec<&'a T>,
    pub stats: Option<SearchStats>,
}

pub struct LeadSearch {
    config: SearchConfig,
    scorer: Scorer,
    index: SearchIndex,
    history: SearchHistory,
    patterns: PatternCache,
    highlighter: Highlighter,
    max_suggestions: usize,
}

impl LeadSearch {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: config.search.clone(),
            scorer: Scorer::from_config(&config.search),
            index: SearchIndex::new(),
            history: SearchHistory::new(config.history_size),
            patterns: PatternCache::default(),
            highlighter: Highlighter::new(&config.highlight_class, config.search.min_query_length),
            max_suggestions: config.max_suggestions,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(&AppConfig::default())
    }

    /// Rebuild the index from `records`. Call again whenever they change.
    ///
    /// Records without an id are matched by position, so search the same
    /// slice that was indexed.
    pub fn build_index<T: Searchable>(&mut self, records: &[T]) {
        self.index.build(records);
    }

    /// Filter and rank `records` against `query`.
    ///
    /// A trimmed query shorter than the minimum length returns `records`
    /// unchanged with no stats. Otherwise only records with a positive score
    /// are returned, best first, ties in input order.
    pub fn search<'a, T: Searchable>(&mut self, query: &str, records: &'a [T]) -> SearchOutcome<'a, T> {
        let ranked = self.search_ranked(query, records);
        SearchOutcome {
            results: ranked.matches.into_iter().map(|m| m.record).collect(),
            stats: ranked.stats,
        }
    }

    /// Like [`search`](Self::search) but keeps each record's score and
    /// matched terms. A pass-through yields every record with score 0.
    pub fn search_ranked<'a, T: Searchable>(
        &mut self,
        query: &str,
        records: &'a [T],
    ) -> RankedOutcome<'a, T> {
        let parsed = parse_query(query);
        if !parsed.is_searchable(self.config.min_query_length) {
            return RankedOutcome {
                matches: records
                    .iter()
                    .map(|record| MatchResult {
                        record,
                        score: 0,
                        matched_terms: Vec::new(),
                    })
                    .collect(),
                stats: None,
            };
        }

        let start = Instant::now();
        self.history.record(query.trim());

        let terms = compile_terms(&parsed, &mut self.patterns);
        let mut matches: Vec<MatchResult<'a, T>> = records
            .iter()
            .enumerate()
            .filter_map(|(position, record)| {
                let entry = self.index.lookup(record.search_key(), position)?;
                let (score, matched_terms) = self.scorer.score_entry(&terms, entry);
                (score > 0).then_some(MatchResult {
                    record,
                    score,
                    matched_terms,
                })
            })
            .collect();

        // Stable: equal scores keep input order
        matches.sort_by(|a, b| b.score.cmp(&a.score));

        let stats = SearchStats {
            total_results: matches.len(),
            search_time_ms: start.elapsed().as_secs_f64() * 1000.0,
            query: query.to_string(),
        };
        debug!(
            query = %stats.query,
            results = stats.total_results,
            candidates = records.len(),
            elapsed_ms = stats.search_time_ms,
            "search complete"
        );

        RankedOutcome {
            matches,
            stats: Some(stats),
        }
    }

    /// HTML-escape `text` and wrap matches of `terms`. Absent text gives `""`.
    pub fn highlight<'t, S: AsRef<str>>(&mut self, text: impl Into<Option<&'t str>>, terms: &[S]) -> String {
        self.highlighter.highlight(text, terms)
    }

    /// Record a query in history without searching
    pub fn update_history(&mut self, query: &str) {
        self.history.record(query);
    }

    /// Autocomplete suggestions for a partial query
    pub fn suggestions(&self, query: &str) -> Vec<Suggestion> {
        generate_suggestions(query, &self.history, FIELD_NAMES, self.max_suggestions)
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn highlighter_mut(&mut self) -> &mut Highlighter {
        &mut self.highlighter
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of indexed records
    pub fn index_len(&self) -> usize {
        self.index.len()
    }

    /// Whether a record with this key is in the current index
    pub fn is_indexed(&self, key: &str) -> bool {
        self.index.contains(key)
    }
}

impl Default for LeadSearch {
    fn default() -> Self {
        Self::with_defaults()
    }
}
