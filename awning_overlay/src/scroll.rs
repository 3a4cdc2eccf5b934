// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll window math for the overlay's internal item region.
//!
//! The overlay shows `len` uniform-extent items inside a window capped at
//! `max_extent`. This module owns the scroll offset plus the two behaviors
//! built on it: nearest-alignment scroll-into-view for the focus cursor and
//! the wheel-boundary guard that keeps edge wheel gestures from bubbling
//! into page scroll.

/// Scroll state for a strip of uniform-extent items inside a capped window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRegion {
    len: usize,
    item_extent: f64,
    max_extent: f64,
    offset: f64,
}

impl ScrollRegion {
    /// Creates a region over `len` items of `item_extent` each, windowed to
    /// at most `max_extent`.
    #[must_use]
    pub fn new(len: usize, item_extent: f64, max_extent: f64) -> Self {
        debug_assert!(
            item_extent.is_finite() && item_extent > 0.0,
            "item extent must be positive and finite; got {item_extent:?}"
        );
        debug_assert!(
            max_extent.is_finite() && max_extent > 0.0,
            "max extent must be positive and finite; got {max_extent:?}"
        );
        Self {
            len,
            item_extent,
            max_extent,
            offset: 0.0,
        }
    }

    /// Total extent of all items.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        self.item_extent * self.len as f64
    }

    /// Extent of the visible window: the content, capped at the maximum.
    #[must_use]
    pub fn view_extent(&self) -> f64 {
        self.content_extent().min(self.max_extent)
    }

    /// Largest reachable scroll offset.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        (self.content_extent() - self.view_extent()).max(0.0)
    }

    /// Current scroll offset from the top of the content.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Replaces the item count and rewinds to the top.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.offset = 0.0;
    }

    /// Moves the offset by `delta`, clamped to the reachable range.
    pub fn scroll_by(&mut self, delta: f64) {
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset());
    }

    /// Returns `true` when a wheel `delta` must be suppressed instead of
    /// scrolled: the window already sits at the top and the gesture scrolls
    /// further up, or at the bottom and the gesture scrolls further down.
    #[must_use]
    pub fn blocks_wheel(&self, delta: f64) -> bool {
        (self.offset <= 0.0 && delta < 0.0) || (self.offset >= self.max_offset() && delta > 0.0)
    }

    /// Scrolls just enough to bring item `index` fully into the window.
    ///
    /// An item above the window aligns its start with the window start; an
    /// item below aligns its end with the window end; a fully visible item
    /// leaves the offset untouched. Returns `true` if the offset changed.
    pub fn ensure_visible(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        let item_start = index as f64 * self.item_extent;
        let item_end = item_start + self.item_extent;
        let window_start = self.offset;
        let window_end = self.offset + self.view_extent();

        if item_start >= window_start && item_end <= window_end {
            false
        } else if item_start < window_start {
            self.offset = item_start;
            true
        } else {
            self.offset = (item_end - self.view_extent()).max(0.0);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 10 items of 20 inside a 60-tall window: max offset 140.
    fn region() -> ScrollRegion {
        ScrollRegion::new(10, 20.0, 60.0)
    }

    #[test]
    fn window_caps_at_max_extent() {
        let r = region();
        assert_eq!(r.content_extent(), 200.0);
        assert_eq!(r.view_extent(), 60.0);
        assert_eq!(r.max_offset(), 140.0);

        // Short content: window shrinks to fit, nothing to scroll.
        let short = ScrollRegion::new(2, 20.0, 60.0);
        assert_eq!(short.view_extent(), 40.0);
        assert_eq!(short.max_offset(), 0.0);
    }

    #[test]
    fn scroll_by_clamps_to_range() {
        let mut r = region();
        r.scroll_by(-10.0);
        assert_eq!(r.offset(), 0.0);
        r.scroll_by(1000.0);
        assert_eq!(r.offset(), 140.0);
    }

    #[test]
    fn ensure_visible_aligns_below_items_with_window_end() {
        let mut r = region();
        // Item 5 spans 100..120; window is 0..60.
        assert!(r.ensure_visible(5));
        assert_eq!(r.offset(), 60.0);
    }

    #[test]
    fn ensure_visible_aligns_above_items_with_window_start() {
        let mut r = region();
        r.scroll_by(100.0);
        // Item 1 spans 20..40; window is 100..160.
        assert!(r.ensure_visible(1));
        assert_eq!(r.offset(), 20.0);
    }

    #[test]
    fn ensure_visible_leaves_visible_items_alone() {
        let mut r = region();
        r.scroll_by(40.0);
        // Item 3 spans 60..80; window is 40..100.
        assert!(!r.ensure_visible(3));
        assert_eq!(r.offset(), 40.0);
    }

    #[test]
    fn ensure_visible_ignores_out_of_range_indices() {
        let mut r = region();
        assert!(!r.ensure_visible(10));
        assert_eq!(r.offset(), 0.0);
    }

    #[test]
    fn wheel_guard_blocks_only_at_the_edges() {
        let mut r = region();
        assert!(r.blocks_wheel(-1.0), "top + up should block");
        assert!(!r.blocks_wheel(1.0), "top + down should scroll");

        r.scroll_by(140.0);
        assert!(r.blocks_wheel(1.0), "bottom + down should block");
        assert!(!r.blocks_wheel(-1.0), "bottom + up should scroll");

        r.reset(10);
        r.scroll_by(70.0);
        assert!(!r.blocks_wheel(1.0));
        assert!(!r.blocks_wheel(-1.0));
    }

    #[test]
    fn unscrollable_content_blocks_both_directions() {
        let r = ScrollRegion::new(2, 20.0, 60.0);
        assert!(r.blocks_wheel(1.0));
        assert!(r.blocks_wheel(-1.0));
    }
}
