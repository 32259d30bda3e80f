//! Token frequency maps

use std::collections::hash_map::{self, HashMap};
use stillwater::Semigroup;

/// Mapping from token to its number of occurrences
///
/// Keys are unique and iteration order carries no meaning. Counts are never
/// zero: a token is either present with a positive count or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<String, u64>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from `(token, count)` pairs, summing repeated tokens
    pub fn from_counts<K, I>(counts: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, u64)>,
    {
        let mut map = Self::new();
        for (token, count) in counts {
            map.add(token.into(), count);
        }
        map
    }

    /// Record one more occurrence of `token`
    pub fn record(&mut self, token: String) {
        self.add(token, 1);
    }

    fn add(&mut self, token: String, count: u64) {
        if count == 0 {
            return;
        }
        let entry = self.counts.entry(token).or_insert(0);
        *entry = entry.saturating_add(count);
    }

    /// Count for `token`, zero when absent
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, u64> {
        self.counts.iter()
    }

    /// Entries whose count is strictly greater than `threshold`, sorted by token
    pub fn above_threshold(&self, threshold: u64) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .counts
            .iter()
            .filter(|(_, count)| **count > threshold)
            .map(|(token, &count)| (token.as_str(), count))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl Semigroup for FrequencyMap {
    fn combine(self, other: Self) -> Self {
        // Fold the smaller map into the larger one
        let (mut into, from) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        for (token, count) in from.counts {
            into.add(token, count);
        }
        into
    }
}

impl FromIterator<String> for FrequencyMap {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut map = Self::new();
        for token in iter {
            map.record(token);
        }
        map
    }
}

impl IntoIterator for FrequencyMap {
    type Item = (String, u64);
    type IntoIter = hash_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl<'a> IntoIterator for &'a FrequencyMap {
    type Item = (&'a String, &'a u64);
    type IntoIter = hash_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

/// Merge two maps without modifying either
///
/// Every key present in `a` or `b` appears in the result with the sum of its
/// counts in both inputs.
pub fn merge(a: &FrequencyMap, b: &FrequencyMap) -> FrequencyMap {
    a.clone().combine(b.clone())
}
