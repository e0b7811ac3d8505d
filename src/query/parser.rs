use crate::utils::{PatternCache, query_len, tokenize_query};
use regex::Regex;

/// A query split into lowercase whitespace terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// The query exactly as the caller passed it
    pub original: String,
    /// Lowercase terms in query order, duplicates kept
    pub terms: Vec<String>,
}

impl ParsedQuery {
    /// Whether the query is long enough to filter anything.
    /// Shorter queries are a pass-through, not a miss.
    pub fn is_searchable(&self, min_query_length: usize) -> bool {
        query_len(&self.original) >= min_query_length && !self.terms.is_empty()
    }
}

/// Parse a raw query string
pub fn parse_query(query: &str) -> ParsedQuery {
    ParsedQuery {
        original: query.to_string(),
        terms: tokenize_query(query),
    }
}

/// A single term prepared for scoring against many entries
#[derive(Debug, Clone)]
pub struct QueryTerm {
    pub text: String,
    /// Length in chars, for the fuzzy length pre-filter
    pub char_len: usize,
    /// `\bterm`, case-insensitive; `None` if it could not be compiled
    pub boundary: Option<Regex>,
}

impl QueryTerm {
    pub fn compile(text: &str, patterns: &mut PatternCache) -> Self {
        Self {
            text: text.to_string(),
            char_len: text.chars().count(),
            boundary: patterns.word_boundary(text),
        }
    }
}

/// Prepare every term of a parsed query
pub fn compile_terms(query: &ParsedQuery, patterns: &mut PatternCache) -> Vec<QueryTerm> {
    query
        .terms
        .iter()
        .map(|term| QueryTerm::compile(term, patterns))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_original() {
        let parsed = parse_query("  John  Smith ");
        assert_eq!(parsed.original, "  John  Smith ");
        assert_eq!(parsed.terms, vec!["john", "smith"]);
    }

    #[test]
    fn test_short_queries_are_not_searchable() {
        assert!(!parse_query("").is_searchable(2));
        assert!(!parse_query("   ").is_searchable(2));
        assert!(!parse_query(" j ").is_searchable(2));
        assert!(parse_query("jo").is_searchable(2));
        assert!(parse_query("j d").is_searchable(2));
    }

    #[test]
    fn test_compile_terms() {
        let mut patterns = PatternCache::default();
        let terms = compile_terms(&parse_query("josé (555)"), &mut patterns);

        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].char_len, 4);
        assert!(terms[1].boundary.is_some());
    }
}
