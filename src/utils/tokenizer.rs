use rustc_hash::FxHashSet;

/// Minimum token length (in chars) kept in an index entry's word set.
/// Single characters match almost every record and add nothing to ranking.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Extract the word set from already-lowercased index content.
///
/// Tokens are whitespace-delimited, so punctuation stays attached:
/// `a@x.com` and `555-0100` are single tokens, which is what makes an
/// exact email or phone query a whole-word match.
pub fn extract_tokens(content: &str) -> FxHashSet<String> {
    content
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_owned)
        .collect()
}

/// Split a raw query into lowercase search terms.
///
/// Repeated terms are kept; each occurrence scores on its own.
pub fn tokenize_query(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

/// Length of a query after trimming, in chars.
pub fn query_len(query: &str) -> usize {
    query.trim().chars().count()
}
