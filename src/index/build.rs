use crate::index::types::{IndexEntry, Searchable};
use rustc_hash::FxHashMap;
use std::time::Instant;
use tracing::debug;

/// In-memory index of searchable records.
///
/// Records with a key are stored under it. Records whose key is empty are
/// stored under their position in the slice passed to [`SearchIndex::build`],
/// so look them up with the same slice.
///
/// There is no incremental update: whenever the backing collection changes
/// the caller rebuilds the whole index with [`SearchIndex::build`]. Searching
/// a stale index silently skips records it has never seen.
#[derive(Debug, Default)]
pub struct SearchIndex {
    keyed: FxHashMap<String, IndexEntry>,
    unkeyed: FxHashMap<usize, IndexEntry>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `records`, replacing whatever was indexed before.
    ///
    /// Records sharing a non-empty key collapse into one entry; the last one wins.
    pub fn build<T: Searchable>(&mut self, records: &[T]) {
        let start = Instant::now();

        let mut keyed = FxHashMap::with_capacity_and_hasher(records.len(), Default::default());
        let mut unkeyed = FxHashMap::default();
        for (position, record) in records.iter().enumerate() {
            let entry = IndexEntry::from_record(record);
            match record.search_key() {
                "" => {
                    unkeyed.insert(position, entry);
                }
                key => {
                    keyed.insert(key.to_string(), entry);
                }
            }
        }
        self.keyed = keyed;
        self.unkeyed = unkeyed;

        debug!(
            records = records.len(),
            keyed = self.keyed.len(),
            unkeyed = self.unkeyed.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "search index rebuilt"
        );
    }

    /// Entry for the record with `key`
    pub fn get(&self, key: &str) -> Option<&IndexEntry> {
        self.keyed.get(key)
    }

    /// Entry for a record at `position` of the searched slice: by key, or by
    /// position when the record has no key
    pub fn lookup(&self, key: &str, position: usize) -> Option<&IndexEntry> {
        if key.is_empty() {
            self.unkeyed.get(&position)
        } else {
            self.keyed.get(key)
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keyed.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.keyed.len() + self.unkeyed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyed.is_empty() && self.unkeyed.is_empty()
    }

    pub fn clear(&mut self) {
        self.keyed.clear();
        self.unkeyed.clear();
    }
}
