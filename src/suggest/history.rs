use std::collections::VecDeque;

/// Default number of remembered queries
pub const DEFAULT_HISTORY_SIZE: usize = 10;

/// Past queries, most recent first, without duplicates
#[derive(Debug, Clone)]
pub struct SearchHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl SearchHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Move `query` to the front, dropping the oldest entries past capacity.
    /// A capacity of zero disables history.
    pub fn record(&mut self, query: &str) {
        if self.capacity == 0 {
            return;
        }

        if let Some(pos) = self.entries.iter().position(|q| q == query) {
            self.entries.remove(pos);
        }
        self.entries.push_front(query.to_string());
        self.entries.truncate(self.capacity);
    }

    /// Entries, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}
