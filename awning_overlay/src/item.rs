// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The item type rendered into the overlay list.

use alloc::string::String;

/// A single entry in the overlay's item list.
///
/// The controller treats items as opaque except for two things: `label`,
/// used by the default render path, and the item's positional index within
/// the current render pass, used to correlate clicks and hovers. "Same item"
/// is positional identity, not value identity; replacing the collection via
/// `set_items` resets the focus cursor rather than chasing equal values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item<T> {
    /// Text shown by the default renderer.
    pub label: String,
    /// Caller-owned payload handed back through the selection callback.
    pub value: T,
    /// Carried for hosts and selection strategies; the core does not skip
    /// disabled items during navigation.
    pub disabled: bool,
}

impl<T> Item<T> {
    /// Creates an enabled item from a label and a value.
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
            disabled: false,
        }
    }
}
