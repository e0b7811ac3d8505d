//! HTML-safe highlighting of matched terms.
//!
//! Matches are located in the raw text and every slice of it, marked or not,
//! is escaped on the way out. Input markup therefore always comes out as
//! entities, and a term can never match inside an entity or inside a marker
//! emitted for an earlier term.

use crate::utils::PatternCache;
use std::ops::Range;

/// Default CSS class on the highlight wrapper
pub const DEFAULT_HIGHLIGHT_CLASS: &str = "search-highlight";

/// Compiled highlight patterns are small; a handful covers a session
const HIGHLIGHT_PATTERN_CACHE_SIZE: usize = 32;

/// Escape `&`, `<`, `>`, `"` and `'` for HTML text and attribute contexts
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Wraps case-insensitive term matches in `<mark class="...">`
pub struct Highlighter {
    open_tag: String,
    min_term_len: usize,
    patterns: PatternCache,
}

impl Highlighter {
    pub fn new(class: &str, min_term_len: usize) -> Self {
        Self {
            open_tag: format!("<mark class=\"{}\">", escape_html(class)),
            min_term_len,
            patterns: PatternCache::new(HIGHLIGHT_PATTERN_CACHE_SIZE),
        }
    }

    /// Render `text` as escaped HTML with every term match wrapped.
    ///
    /// Absent text renders as an empty string. Terms shorter than the
    /// minimum query length are ignored.
    pub fn highlight<'t, S: AsRef<str>>(
        &mut self,
        text: impl Into<Option<&'t str>>,
        terms: &[S],
    ) -> String {
        let Some(text) = text.into() else {
            return String::new();
        };

        let mut html = String::with_capacity(text.len() + 32);
        let mut last = 0;
        for range in self.match_ranges(text, terms) {
            html.push_str(&escape_html(&text[last..range.start]));
            html.push_str(&self.open_tag);
            html.push_str(&escape_html(&text[range.clone()]));
            html.push_str("</mark>");
            last = range.end;
        }
        html.push_str(&escape_html(&text[last..]));

        html
    }

    /// Byte ranges of non-overlapping term matches in `text`, left to right
    pub fn match_ranges<S: AsRef<str>>(&mut self, text: &str, terms: &[S]) -> Vec<Range<usize>> {
        let eligible: Vec<&str> = terms
            .iter()
            .map(|t| t.as_ref().trim())
            .filter(|t| !t.is_empty() && t.chars().count() >= self.min_term_len)
            .collect();

        match self.patterns.any_of(&eligible) {
            Some(re) => re.find_iter(text).map(|m| m.range()).collect(),
            None => Vec::new(),
        }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHLIGHT_CLASS, 2)
    }
}
