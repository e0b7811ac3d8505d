use crate::utils::extract_tokens;
use rustc_hash::FxHashSet;

/// Explicit field extraction for records that can be indexed.
///
/// Implementors list their searchable fields in a fixed order; `None` is
/// indexed as an empty string so a missing field never shifts or breaks the
/// content of the others.
pub trait Searchable {
    /// Key the index entry is stored under (the record id)
    fn search_key(&self) -> &str;

    /// Searchable fields, in indexing order
    fn search_fields(&self) -> Vec<Option<&str>>;
}

/// Derived, searchable view of one record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexEntry {
    /// Lowercased, space-joined searchable fields
    pub content: String,
    /// Whitespace tokens of `content` with at least two chars
    pub tokens: FxHashSet<String>,
}

impl IndexEntry {
    pub fn from_record<T: Searchable + ?Sized>(record: &T) -> Self {
        let content = record
            .search_fields()
            .into_iter()
            .map(|field| field.unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        let tokens = extract_tokens(&content);

        Self { content, tokens }
    }
}
