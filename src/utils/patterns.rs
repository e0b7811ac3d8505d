//! Compiled regex cache for dynamic search terms.
//!
//! Every pattern built here embeds user input, so terms always pass through
//! [`regex::escape`] first. Compiled patterns are kept in an LRU keyed by the
//! final pattern text; an interactive session re-issues the same few terms
//! on every keystroke.

use lru::LruCache;
use regex::Regex;
use std::num::NonZeroUsize;
use tracing::warn;

/// Default number of compiled patterns to keep.
pub const DEFAULT_PATTERN_CACHE_SIZE: usize = 128;

pub struct PatternCache {
    cache: LruCache<String, Option<Regex>>,
}

impl PatternCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Case-insensitive pattern matching `term` at the start of a word (`\bterm`).
    pub fn word_boundary(&mut self, term: &str) -> Option<Regex> {
        self.compile(format!(r"(?i)\b{}", regex::escape(term)))
    }

    /// Case-insensitive alternation of `terms`, longest first so that a
    /// longer term wins over its own prefix at the same position. Empty terms
    /// are dropped; `None` if nothing is left.
    pub fn any_of<S: AsRef<str>>(&mut self, terms: &[S]) -> Option<Regex> {
        let mut sorted: Vec<&str> = terms
            .iter()
            .map(AsRef::as_ref)
            .filter(|term| !term.is_empty())
            .collect();
        sorted.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        sorted.dedup();

        if sorted.is_empty() {
            return None;
        }

        let alternation = sorted
            .iter()
            .map(|term| regex::escape(term))
            .collect::<Vec<_>>()
            .join("|");
        self.compile(format!("(?i)(?:{})", alternation))
    }

    /// Number of cached patterns (including ones that failed to compile).
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    fn compile(&mut self, pattern: String) -> Option<Regex> {
        if let Some(cached) = self.cache.get(&pattern) {
            return cached.clone();
        }

        let compiled = match Regex::new(&pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(%pattern, error = %e, "skipping search pattern that failed to compile");
                None
            }
        };
        self.cache.put(pattern, compiled.clone());
        compiled
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN_CACHE_SIZE)
    }
}
