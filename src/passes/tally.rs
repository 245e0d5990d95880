//! Pass-pair tally
//!
//! Counts qualifying passes per unordered pair of player names. Entries keep
//! the order in which pairs were first seen so repeated runs iterate
//! identically.

use indexmap::IndexMap;

/// Unordered pair of player names, stored sorted
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn is_self_pair(&self) -> bool {
        self.first == self.second
    }

    pub fn has_empty_name(&self) -> bool {
        self.first.is_empty() || self.second.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassTally {
    counts: IndexMap<PairKey, u32>,
}

impl PassTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one pass between `a` and `b` (order-independent)
    pub fn record(&mut self, a: &str, b: &str) {
        *self.counts.entry(PairKey::new(a, b)).or_insert(0) += 1;
    }

    pub fn count(&self, a: &str, b: &str) -> u32 {
        self.counts.get(&PairKey::new(a, b)).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total passes counted across all pairs
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, u32)> {
        self.counts.iter().map(|(k, &c)| (k, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_key_is_order_independent() {
        assert_eq!(PairKey::new("Varane", "Umtiti"), PairKey::new("Umtiti", "Varane"));
        let key = PairKey::new("Varane", "Umtiti");
        assert_eq!(key.first(), "Umtiti");
        assert_eq!(key.second(), "Varane");
    }

    #[test]
    fn test_reverse_passes_share_entry() {
        let mut tally = PassTally::new();
        tally.record("Pogba", "Kanté");
        tally.record("Kanté", "Pogba");
        assert_eq!(tally.len(), 1);
        assert_eq!(tally.count("Pogba", "Kanté"), 2);
        assert_eq!(tally.total(), 2);
    }

    #[test]
    fn test_self_and_empty_pairs_are_kept() {
        let mut tally = PassTally::new();
        tally.record("Mbappé", "Mbappé");
        tally.record("", "Giroud");
        let keys: Vec<_> = tally.iter().map(|(k, _)| k.clone()).collect();
        assert!(keys[0].is_self_pair());
        assert!(keys[1].has_empty_name());
    }

    #[test]
    fn test_iteration_follows_first_insertion() {
        let mut tally = PassTally::new();
        tally.record("Z", "Y");
        tally.record("A", "B");
        tally.record("Y", "Z");
        let order: Vec<_> = tally.iter().map(|(k, c)| (k.first().to_string(), c)).collect();
        assert_eq!(order, vec![("Y".to_string(), 2), ("A".to_string(), 1)]);
    }
}
