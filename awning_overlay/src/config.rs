// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration and its validation error.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::Item;
use crate::host::OverlayHost;

/// Callback invoked with the committed item.
pub type SelectedFn<T> = Box<dyn FnMut(&Item<T>)>;

/// Per-item render hook: receives the item's surface and the item. When
/// absent, the default render path writes the item's label as text.
pub type RenderFn<T, H> = Box<dyn FnMut(&mut <H as OverlayHost>::Surface, &Item<T>)>;

/// Uniform item extent and the overlay's maximum content extent, in logical
/// pixels.
///
/// These stand in for DOM-style measurement: the overlay's natural height is
/// `len * item_extent`, capped at `max_extent`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverlayMetrics {
    /// Extent of one rendered item.
    pub item_extent: f64,
    /// Cap on the overlay's scrollable window.
    pub max_extent: f64,
}

impl Default for OverlayMetrics {
    fn default() -> Self {
        Self {
            item_extent: 24.0,
            max_extent: 240.0,
        }
    }
}

/// Configuration for [`OverlayController::new`](crate::OverlayController::new).
pub struct OverlayConfig<T, H: OverlayHost> {
    /// Initial item collection; owned by the controller from here on.
    pub items: Vec<Item<T>>,
    /// Overlay measurement model.
    pub metrics: OverlayMetrics,
    /// Invoked synchronously with the committed item.
    pub on_item_selected: Option<SelectedFn<T>>,
    /// Invoked per item at render time to produce custom content.
    pub on_item_render: Option<RenderFn<T, H>>,
}

impl<T, H: OverlayHost> OverlayConfig<T, H> {
    /// Creates a configuration with the given items and defaults elsewhere.
    #[must_use]
    pub fn new(items: Vec<Item<T>>) -> Self {
        Self {
            items,
            metrics: OverlayMetrics::default(),
            on_item_selected: None,
            on_item_render: None,
        }
    }
}

impl<T, H: OverlayHost> Default for OverlayConfig<T, H> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: fmt::Debug, H: OverlayHost> fmt::Debug for OverlayConfig<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayConfig")
            .field("items", &self.items)
            .field("metrics", &self.metrics)
            .field("on_item_selected", &self.on_item_selected.is_some())
            .field("on_item_render", &self.on_item_render.is_some())
            .finish()
    }
}

/// Construction failed; no usable controller was produced.
///
/// This is the only error surface of the crate: all runtime misuse after a
/// successful construction is defined as a benign no-op instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConfigError {
    /// The host's anchor rectangle has non-finite coordinates.
    InvalidAnchor,
    /// `metrics.item_extent` is not a positive finite number.
    NonPositiveItemExtent,
    /// `metrics.max_extent` is not a positive finite number.
    NonPositiveMaxExtent,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAnchor => {
                write!(f, "anchor rectangle must have finite coordinates")
            }
            Self::NonPositiveItemExtent => {
                write!(f, "item extent must be positive and finite")
            }
            Self::NonPositiveMaxExtent => {
                write!(f, "max extent must be positive and finite")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
