// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exactly-once listener wiring.
//!
//! Tracks which [`ListenerKind`]s are currently armed and forwards only
//! genuine transitions to the host. Repeated arm/disarm requests for the
//! same kind are absorbed here, which is what lets `show_list` and
//! `set_items` be called back-to-back without the host ever seeing a
//! duplicate registration.

use crate::host::{ListenerKind, OverlayHost};

/// The controller's armed-listener set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Wiring {
    live: ListenerKind,
}

impl Default for Wiring {
    fn default() -> Self {
        Self {
            live: ListenerKind::empty(),
        }
    }
}

impl Wiring {
    /// Arms `kind` if it is not already live. No-op otherwise.
    pub(crate) fn arm<H: OverlayHost>(&mut self, host: &mut H, kind: ListenerKind) {
        debug_assert_eq!(kind.bits().count_ones(), 1, "arm takes a single kind");
        if !self.live.contains(kind) {
            self.live.insert(kind);
            host.arm_listener(kind);
        }
    }

    /// Disarms `kind` if it is live. No-op otherwise.
    pub(crate) fn disarm<H: OverlayHost>(&mut self, host: &mut H, kind: ListenerKind) {
        debug_assert_eq!(kind.bits().count_ones(), 1, "disarm takes a single kind");
        if self.live.contains(kind) {
            self.live.remove(kind);
            host.disarm_listener(kind);
        }
    }

    /// Returns `true` if `kind` is currently armed.
    pub(crate) fn is_armed(&self, kind: ListenerKind) -> bool {
        self.live.contains(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use kurbo::Rect;

    use crate::Placement;
    use crate::host::ItemSurface;

    struct NullSurface;

    impl ItemSurface for NullSurface {
        fn set_text(&mut self, _text: &str) {}
    }

    #[derive(Default)]
    struct CountingHost {
        arms: Vec<ListenerKind>,
        disarms: Vec<ListenerKind>,
        surface: Option<NullSurface>,
    }

    impl OverlayHost for CountingHost {
        type Surface = NullSurface;

        fn anchor_rect(&self) -> Rect {
            Rect::ZERO
        }
        fn viewport_height(&self) -> f64 {
            0.0
        }
        fn attach_overlay(&mut self) {}
        fn detach_overlay(&mut self) {}
        fn apply_placement(&mut self, _placement: Placement) {}
        fn begin_items(&mut self, _count: usize) {}
        fn item_surface(&mut self, _index: usize) -> &mut Self::Surface {
            self.surface.get_or_insert(NullSurface)
        }
        fn set_highlight(&mut self, _index: Option<usize>) {}
        fn set_scroll_offset(&mut self, _offset: f64) {}
        fn focus_anchor(&mut self) {}
        fn arm_listener(&mut self, kind: ListenerKind) {
            self.arms.push(kind);
        }
        fn disarm_listener(&mut self, kind: ListenerKind) {
            self.disarms.push(kind);
        }
        fn request_frame(&mut self) {}
    }

    #[test]
    fn repeated_arms_reach_the_host_once() {
        let mut host = CountingHost::default();
        let mut wiring = Wiring::default();

        wiring.arm(&mut host, ListenerKind::WHEEL);
        wiring.arm(&mut host, ListenerKind::WHEEL);
        wiring.arm(&mut host, ListenerKind::WHEEL);
        assert_eq!(host.arms, [ListenerKind::WHEEL]);
        assert!(wiring.is_armed(ListenerKind::WHEEL));
    }

    #[test]
    fn disarm_without_arm_is_absorbed() {
        let mut host = CountingHost::default();
        let mut wiring = Wiring::default();

        wiring.disarm(&mut host, ListenerKind::KEY_CAPTURE);
        assert!(host.disarms.is_empty());

        wiring.arm(&mut host, ListenerKind::KEY_CAPTURE);
        wiring.disarm(&mut host, ListenerKind::KEY_CAPTURE);
        wiring.disarm(&mut host, ListenerKind::KEY_CAPTURE);
        assert_eq!(host.disarms, [ListenerKind::KEY_CAPTURE]);
        assert!(!wiring.is_armed(ListenerKind::KEY_CAPTURE));
    }

    #[test]
    fn kinds_are_tracked_independently() {
        let mut host = CountingHost::default();
        let mut wiring = Wiring::default();

        wiring.arm(&mut host, ListenerKind::OUTSIDE_CLICK);
        wiring.arm(&mut host, ListenerKind::ANCHOR_WATCH);
        wiring.disarm(&mut host, ListenerKind::ANCHOR_WATCH);

        assert!(wiring.is_armed(ListenerKind::OUTSIDE_CLICK));
        assert!(!wiring.is_armed(ListenerKind::ANCHOR_WATCH));
    }
}
