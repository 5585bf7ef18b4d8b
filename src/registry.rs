//! Counter-name to counter-id resolution.
//!
//! The category preprocessor classifies counters by name but stores them by id.
//! The lookup is an explicit dependency handed to whoever needs it.

use crate::records::Counter;
use std::collections::HashMap;

/// Read-only lookup from a counter's display name to its numeric id.
pub trait CounterRegistry {
    fn counter_id(&self, name: &str) -> Option<u64>;
}

/// In-memory counter index, usually a snapshot of the `counters` table.
#[derive(Debug, Clone, Default)]
pub struct CounterIndex {
    by_name: HashMap<String, u64>,
}

impl CounterIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a counter. The first id registered for a name wins.
    pub fn insert(&mut self, name: impl Into<String>, id: u64) {
        self.by_name.entry(name.into()).or_insert(id);
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl FromIterator<Counter> for CounterIndex {
    fn from_iter<I: IntoIterator<Item = Counter>>(iter: I) -> Self {
        let mut index = CounterIndex::new();
        for counter in iter {
            index.insert(counter.counter_name, counter.counter_id);
        }
        index
    }
}

impl<'a> FromIterator<(&'a str, u64)> for CounterIndex {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        let mut index = CounterIndex::new();
        for (name, id) in iter {
            index.insert(name, id);
        }
        index
    }
}

impl CounterRegistry for CounterIndex {
    fn counter_id(&self, name: &str) -> Option<u64> {
        self.by_name.get(name).copied()
    }
}

impl CounterRegistry for HashMap<String, u64> {
    fn counter_id(&self, name: &str) -> Option<u64> {
        self.get(name).copied()
    }
}
