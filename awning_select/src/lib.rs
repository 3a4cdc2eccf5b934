// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=awning_select --heading-base-level=0

//! Awning Select: caller-side strategies layered on the overlay core.
//!
//! Every select flavor — plain, filtering, async-filtering, multi,
//! custom-rendered — is the same `awning_overlay::OverlayController`
//! contract driven with a different call pattern, not a different
//! controller. This crate holds the small pieces those call patterns need:
//!
//! - [`filter_items`] + [`FilterStrategy`]: narrow the full item set against
//!   the input's text before handing it to `set_items` (filtering select).
//! - [`RefreshGuard`]: a latest-wins token so out-of-order async responses
//!   cannot clobber a newer query's items (async filtering select).
//! - [`MultiSelection`]: wrapper-owned accumulation of committed items; the
//!   core stays single-commit (multi select).
//!
//! Custom rendering needs no helper here: it is the core's `on_item_render`
//! hook.
//!
//! ## Filtering call pattern
//!
//! ```
//! use awning_overlay::Item;
//! use awning_select::{SubstringFilter, filter_items};
//!
//! let all_items = vec![
//!     Item::new("red", 0_u32),
//!     Item::new("green", 1_u32),
//!     Item::new("blue", 2_u32),
//! ];
//!
//! // On each input event:
//! let typed = "re";
//! let narrowed = filter_items(&all_items, typed, &SubstringFilter);
//! // dropdown.set_items(&mut host, &narrowed);
//! // dropdown.show_list(&mut host);
//! assert_eq!(narrowed.len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod filter;
mod multi;
mod refresh;

pub use filter::{FilterStrategy, SubstringFilter, filter_items};
pub use multi::MultiSelection;
pub use refresh::{RefreshGuard, RefreshToken};
