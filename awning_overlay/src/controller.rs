// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay controller: visibility state machine, item store, keyboard
//! navigation, and the host-event entry points.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

use crate::Item;
use crate::config::{ConfigError, OverlayConfig, RenderFn, SelectedFn};
use crate::host::{ItemSurface, ListenerKind, OverlayHost};
use crate::keys::{Key, Propagation};
use crate::placement::compute_placement;
use crate::scroll::ScrollRegion;
use crate::wiring::Wiring;

/// A headless dropdown/select interaction engine.
///
/// The controller owns all protocol state — whether the overlay is shown,
/// the defensive copy of the item list, the focus cursor, the armed listener
/// set, and the internal scroll window — and drives its environment through
/// an [`OverlayHost`]. The embedding wrapper binds its native input events
/// to the public operations and forwards environment events (document
/// clicks, animation frames, wheel deltas, item pointer events) into the
/// `on_*` entry points.
///
/// Every operation runs to completion synchronously. Calls that do not
/// apply in the current state — hiding while hidden, committing with no
/// items, events for listener kinds that are not armed, anything after
/// [`destroy`](Self::destroy) — are silent no-ops; wrappers are expected to
/// call defensively from their lifecycle hooks.
pub struct OverlayController<T, H: OverlayHost> {
    items: Vec<Item<T>>,
    focus_index: usize,
    showing: bool,
    destroyed: bool,
    wiring: Wiring,
    scroll: ScrollRegion,
    /// Anchor origin captured at show time; the motion watcher compares
    /// against this every frame.
    shown_origin: Option<Point>,
    on_item_selected: Option<SelectedFn<T>>,
    on_item_render: Option<RenderFn<T, H>>,
}

impl<T, H: OverlayHost> OverlayController<T, H> {
    /// Creates a controller for the anchor the host describes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAnchor`] when the host's anchor
    /// rectangle has non-finite coordinates, and
    /// [`ConfigError::NonPositiveItemExtent`] /
    /// [`ConfigError::NonPositiveMaxExtent`] for unusable metrics.
    pub fn new(host: &H, config: OverlayConfig<T, H>) -> Result<Self, ConfigError> {
        let anchor = host.anchor_rect();
        if ![anchor.x0, anchor.y0, anchor.x1, anchor.y1]
            .iter()
            .all(|c| c.is_finite())
        {
            return Err(ConfigError::InvalidAnchor);
        }
        let metrics = config.metrics;
        if !(metrics.item_extent.is_finite() && metrics.item_extent > 0.0) {
            return Err(ConfigError::NonPositiveItemExtent);
        }
        if !(metrics.max_extent.is_finite() && metrics.max_extent > 0.0) {
            return Err(ConfigError::NonPositiveMaxExtent);
        }

        let scroll = ScrollRegion::new(config.items.len(), metrics.item_extent, metrics.max_extent);
        Ok(Self {
            items: config.items,
            focus_index: 0,
            showing: false,
            destroyed: false,
            wiring: Wiring::default(),
            scroll,
            shown_origin: None,
            on_item_selected: config.on_item_selected,
            on_item_render: config.on_item_render,
        })
    }

    /// Returns the controller's copy of the item list.
    #[must_use]
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    /// Returns the focus cursor.
    #[must_use]
    pub const fn focused_index(&self) -> usize {
        self.focus_index
    }

    /// Returns `true` between a completed [`show_list`](Self::show_list) and
    /// the next [`hide_list`](Self::hide_list).
    #[must_use]
    pub const fn is_showing(&self) -> bool {
        self.showing
    }

    /// Shows the list if hidden, hides it otherwise.
    pub fn toggle(&mut self, host: &mut H) {
        if self.showing {
            self.hide_list(host);
        } else {
            self.show_list(host);
        }
    }

    /// Renders and shows the overlay. No-op while already shown.
    pub fn show_list(&mut self, host: &mut H) {
        if self.destroyed || self.showing {
            return;
        }
        self.showing = true;

        self.render(host);
        host.attach_overlay();

        self.wiring.arm(host, ListenerKind::WHEEL);
        self.wiring.arm(host, ListenerKind::KEY_CAPTURE);
        // Armed lazily once per lifetime; Wiring absorbs later requests so
        // the host never sees a second registration.
        self.wiring.arm(host, ListenerKind::OUTSIDE_CLICK);
        self.shown_origin = Some(host.anchor_rect().origin());
        self.wiring.arm(host, ListenerKind::ANCHOR_WATCH);

        let placement = compute_placement(
            host.anchor_rect(),
            self.scroll.view_extent(),
            host.viewport_height(),
        );
        host.apply_placement(placement);

        self.apply_focus(host);
    }

    /// Disarms the per-session listeners and detaches the overlay. No-op
    /// while already hidden; safe to call any number of times.
    pub fn hide_list(&mut self, host: &mut H) {
        if !self.showing {
            return;
        }
        self.showing = false;

        // Cancelled synchronously: no scheduled frame survives past here.
        self.wiring.disarm(host, ListenerKind::ANCHOR_WATCH);
        self.wiring.disarm(host, ListenerKind::WHEEL);
        self.wiring.disarm(host, ListenerKind::KEY_CAPTURE);
        // OUTSIDE_CLICK stays armed for reuse across show/hide cycles.
        self.shown_origin = None;

        host.detach_overlay();
    }

    /// Replaces the item collection with a defensive copy and resets the
    /// focus cursor to 0.
    ///
    /// If the overlay is shown this runs a full hide-then-show cycle so the
    /// rendered surfaces and the armed listener set stay consistent with the
    /// new collection without accumulating registrations.
    pub fn set_items(&mut self, host: &mut H, items: &[Item<T>])
    where
        T: Clone,
    {
        if self.destroyed {
            return;
        }
        self.items = items.to_vec();
        self.focus_index = 0;
        self.scroll.reset(self.items.len());

        if self.showing {
            self.hide_list(host);
            self.show_list(host);
        }
    }

    /// Moves the focus cursor to `index`.
    ///
    /// While shown this re-applies the highlight and scrolls the item into
    /// view; while hidden the cursor is stored and applied on the next show.
    /// Out-of-range indices are ignored.
    pub fn set_focused_item(&mut self, host: &mut H, index: usize) {
        if self.destroyed || index >= self.items.len() {
            return;
        }
        self.focus_index = index;
        if self.showing {
            self.apply_focus(host);
        }
    }

    /// Interprets a key press against the current state.
    ///
    /// Returns [`Propagation::Stop`] exactly when the controller responded;
    /// the caller must then stop the event's propagation. While hidden only
    /// [`Key::Down`] acts (it shows the list); everything else is left
    /// untouched so surrounding dialogs and forms keep their own behavior.
    pub fn handle_key_down(&mut self, host: &mut H, key: Key) -> Propagation {
        if self.destroyed {
            return Propagation::Continue;
        }
        if !self.showing {
            return match key {
                Key::Down => {
                    self.show_list(host);
                    Propagation::Stop
                }
                _ => Propagation::Continue,
            };
        }
        match key {
            Key::Enter | Key::Tab => {
                // Tab commits rather than only moving focus: selection and
                // advancing to the next field happen together.
                self.commit(host);
                Propagation::Stop
            }
            Key::Escape => {
                self.hide_list(host);
                Propagation::Stop
            }
            Key::Down => {
                self.focus_step(host, 1);
                Propagation::Stop
            }
            Key::Up => {
                self.focus_step(host, -1);
                Propagation::Stop
            }
        }
    }

    /// Raw-code variant of [`handle_key_down`](Self::handle_key_down);
    /// unrecognized codes answer [`Propagation::Continue`] with no side
    /// effect.
    pub fn handle_key_code(&mut self, host: &mut H, code: u32) -> Propagation {
        match Key::from_code(code) {
            Some(key) => self.handle_key_down(host, key),
            None => Propagation::Continue,
        }
    }

    /// Forces a hide and releases every armed listener, including the
    /// shared outside-click registration. All further calls on the
    /// controller are silent no-ops.
    pub fn destroy(&mut self, host: &mut H) {
        if self.destroyed {
            return;
        }
        self.hide_list(host);
        self.wiring.disarm(host, ListenerKind::OUTSIDE_CLICK);
        self.on_item_selected = None;
        self.on_item_render = None;
        self.destroyed = true;
    }

    /// Document-level click at `target`. Hides the overlay unless the click
    /// lands within the anchor's current rectangle (which covers the anchor
    /// and its descendants).
    pub fn on_document_click(&mut self, host: &mut H, target: Point) {
        if self.destroyed || !self.wiring.is_armed(ListenerKind::OUTSIDE_CLICK) {
            return;
        }
        // Without this check the anchor's own toggle handler and the
        // dismissal would fire together and cancel each other out.
        if !host.anchor_rect().contains(target) {
            self.hide_list(host);
        }
    }

    /// Capture-phase document keydown. Answers [`Propagation::Stop`] (the
    /// host must suppress the default scroll) exactly when the anchor holds
    /// document focus and the key is Up or Down.
    pub fn on_global_key(&self, code: u32, anchor_focused: bool) -> Propagation {
        if self.destroyed || !self.wiring.is_armed(ListenerKind::KEY_CAPTURE) {
            return Propagation::Continue;
        }
        if anchor_focused && matches!(Key::from_code(code), Some(Key::Up | Key::Down)) {
            Propagation::Stop
        } else {
            Propagation::Continue
        }
    }

    /// One animation-frame tick of the anchor-motion watcher. A moved
    /// anchor hides the overlay immediately; an unchanged one schedules the
    /// next frame's check.
    pub fn on_frame(&mut self, host: &mut H) {
        if self.destroyed || !self.wiring.is_armed(ListenerKind::ANCHOR_WATCH) {
            return;
        }
        let Some(origin) = self.shown_origin else {
            return;
        };
        let now = host.anchor_rect().origin();
        if now.x != origin.x || now.y != origin.y {
            self.hide_list(host);
        } else {
            host.request_frame();
        }
    }

    /// Wheel gesture over the overlay. Interior deltas scroll the internal
    /// region; deltas past the top or bottom edge answer
    /// [`Propagation::Stop`] so the host prevents them from becoming page
    /// scroll.
    pub fn on_wheel(&mut self, host: &mut H, delta: f64) -> Propagation {
        if self.destroyed || !self.wiring.is_armed(ListenerKind::WHEEL) {
            return Propagation::Continue;
        }
        if self.scroll.blocks_wheel(delta) {
            return Propagation::Stop;
        }
        self.scroll.scroll_by(delta);
        host.set_scroll_offset(self.scroll.offset());
        Propagation::Continue
    }

    /// Click on rendered item `index`: focuses it, commits it, and hands
    /// document focus back to the anchor.
    pub fn on_item_click(&mut self, host: &mut H, index: usize) {
        if self.destroyed || !self.showing || index >= self.items.len() {
            return;
        }
        self.focus_index = index;
        self.commit(host);
        host.focus_anchor();
    }

    /// Hover over rendered item `index`: moves the focus cursor without
    /// committing.
    pub fn on_item_hover(&mut self, host: &mut H, index: usize) {
        if self.destroyed || !self.showing {
            return;
        }
        self.set_focused_item(host, index);
    }

    /// Hides the overlay, then reports the focused item to the selection
    /// callback. With an empty collection the hide still happens but there
    /// is nothing to report.
    fn commit(&mut self, host: &mut H) {
        self.hide_list(host);
        if self.items.is_empty() {
            return;
        }
        debug_assert!(
            self.focus_index < self.items.len(),
            "focus cursor out of range: {} >= {}",
            self.focus_index,
            self.items.len()
        );
        if let Some(on_selected) = self.on_item_selected.as_mut() {
            on_selected(&self.items[self.focus_index]);
        }
    }

    /// Moves the focus cursor by one step, wrapping at both ends.
    fn focus_step(&mut self, host: &mut H, step: isize) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.focus_index = if step > 0 {
            (self.focus_index + 1) % len
        } else if self.focus_index == 0 {
            len - 1
        } else {
            self.focus_index - 1
        };
        self.apply_focus(host);
    }

    /// Re-applies the highlight and scrolls the cursor into view. Does not
    /// re-render the item surfaces.
    fn apply_focus(&mut self, host: &mut H) {
        if self.items.is_empty() {
            host.set_highlight(None);
            return;
        }
        host.set_highlight(Some(self.focus_index));
        if self.scroll.ensure_visible(self.focus_index) {
            host.set_scroll_offset(self.scroll.offset());
        }
    }

    /// Rebuilds the item surfaces from the current collection and rewinds
    /// the scroll window.
    fn render(&mut self, host: &mut H) {
        host.begin_items(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            let surface = host.item_surface(index);
            match self.on_item_render.as_mut() {
                Some(render) => render(surface, item),
                None => surface.set_text(&item.label),
            }
        }
        self.scroll.reset(self.items.len());
        host.set_scroll_offset(0.0);
    }
}

impl<T: fmt::Debug, H: OverlayHost> fmt::Debug for OverlayController<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayController")
            .field("items", &self.items)
            .field("focus_index", &self.focus_index)
            .field("showing", &self.showing)
            .field("destroyed", &self.destroyed)
            .field("wiring", &self.wiring)
            .field("scroll", &self.scroll)
            .field("shown_origin", &self.shown_origin)
            .field("on_item_selected", &self.on_item_selected.is_some())
            .field("on_item_render", &self.on_item_render.is_some())
            .finish()
    }
}
