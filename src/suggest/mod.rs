//! Autocomplete suggestions from recent queries and known field names.
//!
//! Suggestions are advisory UI aids and live only as long as the session.

pub mod history;

pub use history::{DEFAULT_HISTORY_SIZE, SearchHistory};

use serde::Serialize;

/// Default cap on returned suggestions
pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;

/// Where a suggestion came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuggestionKind {
    Recent,
    Field,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
}

/// Suggestions whose text contains `query`, case-insensitively.
///
/// History entries come first (most recent first), then matching field
/// names; the combined list is capped at `limit`. A blank query suggests
/// nothing.
pub fn generate_suggestions(
    query: &str,
    history: &SearchHistory,
    fields: &[&str],
    limit: usize,
) -> Vec<Suggestion> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let recent = history
        .iter()
        .filter(|entry| entry.to_lowercase().contains(&needle))
        .map(|entry| Suggestion {
            text: entry.to_string(),
            kind: SuggestionKind::Recent,
        });

    let known_fields = fields
        .iter()
        .filter(|field| field.to_lowercase().contains(&needle))
        .map(|field| Suggestion {
            text: field.to_string(),
            kind: SuggestionKind::Field,
        });

    recent.chain(known_fields).take(limit).collect()
}
