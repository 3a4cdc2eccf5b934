// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label filtering for filtering selects.
//!
//! A filtering select narrows the item collection as the user types: the
//! wrapper filters its full item set against the input's current value and
//! feeds the result to `OverlayController::set_items` before (re)showing the
//! list. The match rule is a strategy so hosts can swap in fuzzy or
//! locale-aware matching without touching the call pattern.

use alloc::vec::Vec;

use awning_overlay::Item;

/// A label-matching rule for narrowing an item collection.
pub trait FilterStrategy {
    /// Returns `true` if an item with this label should survive the query.
    fn matches(&self, label: &str, query: &str) -> bool;
}

/// Case-sensitive substring matching; the default filtering-select rule.
///
/// An empty query matches everything.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SubstringFilter;

impl FilterStrategy for SubstringFilter {
    fn matches(&self, label: &str, query: &str) -> bool {
        label.contains(query)
    }
}

/// Narrows `items` to those whose labels match `query` under `strategy`.
///
/// The result is an independent collection ready to hand to
/// `OverlayController::set_items`; the input is left untouched.
///
/// ```
/// use awning_overlay::Item;
/// use awning_select::{SubstringFilter, filter_items};
///
/// let items = vec![
///     Item::new("red", 0_u32),
///     Item::new("green", 1_u32),
///     Item::new("dark red", 2_u32),
/// ];
/// let narrowed = filter_items(&items, "red", &SubstringFilter);
/// assert_eq!(narrowed.len(), 2);
/// ```
#[must_use]
pub fn filter_items<T: Clone, S: FilterStrategy>(
    items: &[Item<T>],
    query: &str,
    strategy: &S,
) -> Vec<Item<T>> {
    items
        .iter()
        .filter(|item| strategy.matches(&item.label, query))
        .cloned()
        .collect()
}
