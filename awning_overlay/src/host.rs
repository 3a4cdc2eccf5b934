// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host contract the overlay controller drives its environment through.
//!
//! The controller is headless: it never touches a document, widget tree, or
//! event loop directly. An embedding wrapper implements [`OverlayHost`] and
//! forwards environment events back into the controller's `on_*` entry
//! points. The contract is imperative: every method is an effect the
//! controller has already decided on, so hosts should not reorder calls or
//! add policy of their own.

use kurbo::Rect;

use crate::Placement;

bitflags::bitflags! {
    /// The externally registered listener kinds the controller arms while
    /// its overlay is visible.
    ///
    /// Each flag corresponds to one registration point in the host
    /// environment (a document-level listener or the animation-frame
    /// scheduler). The controller guarantees it arms each kind at most once
    /// at any time: hosts can treat `arm_listener`/`disarm_listener` as
    /// strict add/remove pairs without reference counting.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ListenerKind: u8 {
        /// Document-level click used for outside-click dismissal. Armed
        /// lazily on first show and kept armed across hide/show cycles;
        /// released only by `destroy`.
        const OUTSIDE_CLICK = 1 << 0;
        /// Document-level capture-phase keydown used to suppress default
        /// arrow-key scrolling while the anchor holds focus. Re-armed per
        /// show session.
        const KEY_CAPTURE = 1 << 1;
        /// Per-frame anchor-motion poll. Arming schedules the first frame;
        /// the controller requests follow-up frames itself. Disarming must
        /// cancel any pending frame.
        const ANCHOR_WATCH = 1 << 2;
        /// Wheel events over the overlay surface. Re-armed per show session.
        const WHEEL = 1 << 3;
    }
}

/// One rendered item's drawing surface.
///
/// The default render path only needs to write the item's label; custom
/// renderers receive the surface through the `on_item_render` hook and may
/// downcast or extend it host-side.
pub trait ItemSurface {
    /// Replaces the surface's visual content with plain text.
    fn set_text(&mut self, text: &str);
}

/// The environment an [`OverlayController`](crate::OverlayController) runs
/// inside.
///
/// Geometry is viewport-relative and flows host → controller; everything
/// else is an effect flowing controller → host. The overlay surface must be
/// attached at the document/scene root (never nested under a scrollable
/// ancestor) so that [`Placement`] coordinates hold regardless of ancestor
/// clipping.
pub trait OverlayHost {
    /// Surface type handed to item render hooks.
    type Surface: ItemSurface;

    /// Viewport-relative bounding rectangle of the anchor element.
    fn anchor_rect(&self) -> Rect;

    /// Height of the visible viewport.
    fn viewport_height(&self) -> f64;

    /// Attaches the overlay surface to the document root.
    fn attach_overlay(&mut self);

    /// Detaches the overlay surface from the document root.
    fn detach_overlay(&mut self);

    /// Applies a computed placement to the attached overlay surface.
    fn apply_placement(&mut self, placement: Placement);

    /// Drops all existing item surfaces and creates `count` fresh ones.
    fn begin_items(&mut self, count: usize);

    /// Borrows the surface for item `index`; `index` is always below the
    /// `count` passed to the most recent [`begin_items`](Self::begin_items).
    fn item_surface(&mut self, index: usize) -> &mut Self::Surface;

    /// Highlights exactly the given item, clearing any previous highlight;
    /// `None` clears all highlighting.
    fn set_highlight(&mut self, index: Option<usize>);

    /// Scrolls the overlay's internal item region to `offset`.
    fn set_scroll_offset(&mut self, offset: f64);

    /// Moves document focus back to the anchor (or its nearest focusable
    /// descendant). Called after pointer-driven commits.
    fn focus_anchor(&mut self);

    /// Registers the listener kind with the environment. Never called for a
    /// kind that is already armed.
    fn arm_listener(&mut self, kind: ListenerKind);

    /// Unregisters the listener kind. Never called for a kind that is not
    /// armed. For [`ListenerKind::ANCHOR_WATCH`] this must also cancel any
    /// pending animation frame.
    fn disarm_listener(&mut self, kind: ListenerKind);

    /// Schedules one more animation-frame callback for the anchor-motion
    /// watcher. Only called while [`ListenerKind::ANCHOR_WATCH`] is armed.
    fn request_frame(&mut self);
}

#[cfg(test)]
mod tests {
    use super::ListenerKind;

    #[test]
    fn listener_kinds_are_distinct_bits() {
        let all = ListenerKind::OUTSIDE_CLICK
            | ListenerKind::KEY_CAPTURE
            | ListenerKind::ANCHOR_WATCH
            | ListenerKind::WHEEL;
        assert_eq!(all.bits().count_ones(), 4, "four independent kinds");
        assert_eq!(all, ListenerKind::all());
    }
}
