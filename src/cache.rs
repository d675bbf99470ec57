use crate::models::AirportRecord;
use std::collections::HashMap;

/// Session-scoped result cache, keyed by the exact search term the user
/// submitted (no trimming or case-folding). Entries are never evicted or
/// invalidated; staleness over a session's lifetime is an accepted tradeoff.
#[derive(Debug, Default)]
pub struct SearchCache {
    entries: HashMap<String, Vec<AirportRecord>>,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, term: &str) -> Option<&[AirportRecord]> {
        self.entries.get(term).map(Vec::as_slice)
    }

    pub fn insert(&mut self, term: &str, records: Vec<AirportRecord>) {
        self.entries.insert(term.to_string(), records);
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
