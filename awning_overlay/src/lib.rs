// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=awning_overlay --heading-base-level=0

//! Awning Overlay: a headless anchored-overlay (dropdown) interaction core.
//!
//! This crate implements the state and protocol logic of a dropdown/select
//! widget — and nothing else. The [`OverlayController`] owns:
//!
//! - a **visibility state machine** with hidden/shown transitions and their
//!   side effects,
//! - an **item store**: a defensive copy of the caller's items plus a focus
//!   cursor,
//! - a **positioning engine** that places the overlay against the anchor and
//!   flips it upward when the viewport would crop it,
//! - an **event wiring manager** that arms each external listener kind
//!   exactly once per visible session,
//! - **keyboard navigation** over a small fixed key set, and
//! - an internal **scroll window** providing scroll-into-view and the
//!   wheel-boundary guard.
//!
//! It knows nothing about documents, widget trees, or event loops. An
//! embedding wrapper implements [`OverlayHost`], binds its native input
//! events to the controller's public operations, and forwards environment
//! events (document clicks, capture-phase keydowns, animation frames, wheel
//! deltas, item pointer events) into the controller's `on_*` entry points.
//! Geometry is expressed with [`kurbo`] types in viewport-relative
//! coordinates.
//!
//! ## Minimal example
//!
//! Driving a controller with keyboard input (the host here is whatever your
//! UI stack binds; see [`OverlayHost`]):
//!
//! ```
//! use awning_overlay::{
//!     Item, Key, OverlayConfig, OverlayController, Propagation,
//! };
//! # use awning_overlay::{ItemSurface, ListenerKind, OverlayHost, Placement};
//! # use kurbo::Rect;
//! # #[derive(Default)] struct Surface;
//! # impl ItemSurface for Surface { fn set_text(&mut self, _: &str) {} }
//! # #[derive(Default)] struct Host { surfaces: Vec<Surface> }
//! # impl OverlayHost for Host {
//! #     type Surface = Surface;
//! #     fn anchor_rect(&self) -> Rect { Rect::new(0.0, 0.0, 100.0, 20.0) }
//! #     fn viewport_height(&self) -> f64 { 600.0 }
//! #     fn attach_overlay(&mut self) {}
//! #     fn detach_overlay(&mut self) {}
//! #     fn apply_placement(&mut self, _: Placement) {}
//! #     fn begin_items(&mut self, n: usize) {
//! #         self.surfaces = (0..n).map(|_| Surface).collect();
//! #     }
//! #     fn item_surface(&mut self, i: usize) -> &mut Surface { &mut self.surfaces[i] }
//! #     fn set_highlight(&mut self, _: Option<usize>) {}
//! #     fn set_scroll_offset(&mut self, _: f64) {}
//! #     fn focus_anchor(&mut self) {}
//! #     fn arm_listener(&mut self, _: ListenerKind) {}
//! #     fn disarm_listener(&mut self, _: ListenerKind) {}
//! #     fn request_frame(&mut self) {}
//! # }
//! let mut host = Host::default();
//! let items = vec![Item::new("apple", 1_u32), Item::new("pear", 2_u32)];
//! let mut dropdown =
//!     OverlayController::new(&host, OverlayConfig::new(items)).unwrap();
//!
//! // Down while hidden opens the list and consumes the key.
//! assert_eq!(dropdown.handle_key_down(&mut host, Key::Down), Propagation::Stop);
//! assert!(dropdown.is_showing());
//!
//! // Down again moves the focus cursor.
//! dropdown.handle_key_down(&mut host, Key::Down);
//! assert_eq!(dropdown.focused_index(), 1);
//!
//! // Escape dismisses without committing.
//! dropdown.handle_key_down(&mut host, Key::Escape);
//! assert!(!dropdown.is_showing());
//! ```
//!
//! ## Lifecycle
//!
//! Wrappers drive the controller from their own lifecycle hooks: construct
//! it on mount, pass prop changes through
//! [`set_items`](OverlayController::set_items), and call
//! [`destroy`](OverlayController::destroy) on unmount. All operations are
//! idempotent or no-ops where repeating them makes no sense, so defensive
//! calls are safe.
//!
//! Filtering, debounced async population, and multi-select accumulation are
//! call-pattern layers on top of this contract; see the `awning_select`
//! crate.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod host;
mod item;
mod keys;
mod placement;
mod scroll;
mod wiring;

pub use config::{ConfigError, OverlayConfig, OverlayMetrics, RenderFn, SelectedFn};
pub use controller::OverlayController;
pub use host::{ItemSurface, ListenerKind, OverlayHost};
pub use item::Item;
pub use keys::{Key, Propagation};
pub use placement::{Placement, Side, compute_placement};
pub use scroll::ScrollRegion;
