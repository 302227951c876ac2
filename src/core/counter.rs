//! Insertion-ordered frequency counter.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts keys while remembering the order in which they first appeared, so
/// ties in [`most_common`](Counter::most_common) resolve by first appearance.
#[derive(Debug, Clone)]
pub struct Counter<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> Counter<K> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Increments the count of `key` by one.
    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Returns entries by descending count; equal counts keep first-seen order.
    pub fn most_common(self) -> Vec<(K, usize)> {
        let mut entries = self.entries;
        // sort_by is stable
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl<K: Eq + Hash + Clone> Default for Counter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for Counter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Counter::new();
        for key in iter {
            counter.add(key);
        }
        counter
    }
}
