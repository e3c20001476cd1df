//! Shared selection set for row-based widgets.

use std::collections::HashSet;
use std::hash::Hash;

/// Tracks selected items by their keys.
///
/// The set starts empty and is only mutated by explicit toggles; it is never
/// reconciled against the data it refers to. If the underlying data changes,
/// keys of removed rows remain until the caller prunes them (see
/// [`DataTableState::prune`](crate::widgets::DataTableState::prune)).
#[derive(Debug, Clone)]
pub struct Selection<K: Clone + Eq + Hash> {
    selected: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }

    /// Toggle selection for a key. Returns true if the key is now selected.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.selected.remove(&key) {
            false
        } else {
            self.selected.insert(key);
            true
        }
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Number of selected keys.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterate over all selected keys.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.selected.iter()
    }

    /// Keep only the keys for which the predicate holds.
    pub fn retain(&mut self, f: impl FnMut(&K) -> bool) {
        self.selected.retain(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_pairs_are_idempotent() {
        let mut selection: Selection<u32> = Selection::new();
        assert!(selection.toggle(7));
        assert!(selection.is_selected(&7));
        assert!(!selection.toggle(7));
        assert!(selection.is_empty());
    }
}
