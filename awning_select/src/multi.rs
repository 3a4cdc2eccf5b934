// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-owned accumulation for multi-selects.
//!
//! The overlay core is single-focus/single-commit by design: every commit
//! reports exactly one item. A multi-select is the wrapper accumulating
//! those commits into its own list and rendering chips/tags from it. This
//! type is that list — it lives in the wrapper, fed from the wrapper's
//! `on_item_selected` callback, and never enters the core's state machine.

use alloc::vec::Vec;

use awning_overlay::Item;

/// An ordered, deduplicated accumulation of committed items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultiSelection<T> {
    chosen: Vec<Item<T>>,
}

impl<T: PartialEq> MultiSelection<T> {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self { chosen: Vec::new() }
    }

    /// Records a committed item. Items already selected (by value equality)
    /// are ignored; returns `true` if the item was added.
    pub fn insert(&mut self, item: Item<T>) -> bool {
        if self.contains(&item.value) {
            return false;
        }
        self.chosen.push(item);
        true
    }

    /// Removes the selection at `index` (the position of the rendered chip),
    /// returning it. Out-of-range indices return `None`.
    pub fn remove(&mut self, index: usize) -> Option<Item<T>> {
        if index < self.chosen.len() {
            Some(self.chosen.remove(index))
        } else {
            None
        }
    }

    /// Returns `true` if a selected item carries this value.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.chosen.iter().any(|item| item.value == *value)
    }

    /// The selected items, in commit order.
    #[must_use]
    pub fn selected(&self) -> &[Item<T>] {
        &self.chosen
    }

    /// Number of selected items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    /// Returns `true` when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Drops every selection.
    pub fn clear(&mut self) {
        self.chosen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commits_accumulate_in_order() {
        let mut selection = MultiSelection::new();
        assert!(selection.insert(Item::new("a", 1_u32)));
        assert!(selection.insert(Item::new("b", 2_u32)));

        let values: Vec<_> = selection.selected().iter().map(|i| i.value).collect();
        assert_eq!(values, [1, 2]);
    }

    #[test]
    fn repeated_commits_of_the_same_value_are_ignored() {
        let mut selection = MultiSelection::new();
        assert!(selection.insert(Item::new("a", 1_u32)));
        assert!(!selection.insert(Item::new("a again", 1_u32)));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn removal_is_positional() {
        let mut selection = MultiSelection::new();
        selection.insert(Item::new("a", 1_u32));
        selection.insert(Item::new("b", 2_u32));

        let removed = selection.remove(0).unwrap();
        assert_eq!(removed.value, 1);
        assert!(!selection.contains(&1));
        assert!(selection.contains(&2));

        assert!(selection.remove(5).is_none());
    }

    #[test]
    fn removed_values_can_be_selected_again() {
        let mut selection = MultiSelection::new();
        selection.insert(Item::new("a", 1_u32));
        selection.remove(0);
        assert!(selection.insert(Item::new("a", 1_u32)));
    }

    #[test]
    fn clear_empties_the_selection() {
        let mut selection = MultiSelection::new();
        selection.insert(Item::new("a", 1_u32));
        selection.clear();
        assert!(selection.is_empty());
    }
}
