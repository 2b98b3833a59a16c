// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vigil_virtual_list --heading-base-level=0

//! Vigil Virtual List: the geometry core of feed virtualization.
//!
//! A tribute wall or guestbook can hold tens of thousands of entries, but only
//! a screenful is ever visible. This crate answers the question "which entries
//! should exist right now, and where do they go?" without knowing anything
//! about the UI toolkit that draws them.
//!
//! The pipeline is:
//!
//! 1. [`ItemExtent`]: a sizing policy, either one constant or a pure
//!    `(index, item) -> extent` function.
//! 2. [`compute_offsets`]: one linear pass producing an [`OffsetTable`] of
//!    cumulative start offsets. [`OffsetCache`] memoizes the table on the
//!    collection length and the identity of the sizing policy.
//! 3. [`resolve_visible`]: binary-searches the table for the item under the
//!    scroll offset, scans forward to the end of the viewport, and widens
//!    the result by an [`Overscan`] buffer, yielding a [`VisibleWindow`].
//! 4. [`materialize`]: calls the host's render callback for every index in
//!    the window and returns a [`RenderPass`] holding positioned children and
//!    the full content extent for the host's spacer.
//!
//! [`VirtualList`] bundles the memoized table, the overscan policy, and the
//! last resolved window, and adds index-based scrolling via [`ScrollAlign`].
//! The resolver and the materializer are written against the [`ExtentModel`]
//! trait, so fixed-size grids can plug in a closed-form model instead of a
//! table.
//!
//! ## Minimal example
//!
//! ```rust
//! use vigil_virtual_list::{ItemExtent, Overscan, ViewportState, VirtualList};
//!
//! // Guestbook entries; longer messages take more room.
//! let entries: Vec<&str> = (0..500)
//!     .map(|i| {
//!         if i % 3 == 0 {
//!             "We will always remember the summers at the lake."
//!         } else {
//!             "Rest well."
//!         }
//!     })
//!     .collect();
//! let extent = ItemExtent::from_fn(|_, text: &&str| 40.0 + (text.len() / 30) as f64 * 18.0);
//!
//! let mut list = VirtualList::new();
//! list.set_overscan(Overscan::Items(3));
//! list.sync(&entries, &extent).unwrap();
//!
//! let window = list.resolve(&ViewportState::new(1_200.0, 600.0)).unwrap();
//! let pass = list.render(&entries, |text, index| format!("#{index}: {text}"));
//!
//! assert!(window.rendered.covers(&window.visible));
//! assert_eq!(pass.children.len(), window.rendered.count());
//! ```
//!
//! Extents and offsets live in a caller-chosen 1D space (typically logical
//! pixels) and must be finite and non-negative; [`InvalidExtentHandling`]
//! decides what happens when a sizing function breaks that contract.
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod extent;
mod geometry;
mod materialize;
mod model;
mod range;
mod resolve;
mod scalar;
mod virtual_list;

pub use extent::{ExtentError, InvalidExtentHandling, ItemExtent};
pub use geometry::{OffsetCache, OffsetTable, compute_offsets};
pub use materialize::{
    Placed, Placement, RenderPass, for_each_placement, materialize, try_materialize,
};
pub use model::ExtentModel;
pub use range::{Overscan, ViewportState, VisibleRange, VisibleWindow};
pub use resolve::resolve_visible;
pub use scalar::Scalar;
pub use virtual_list::{ScrollAlign, VirtualList, max_scroll_offset, scroll_offset_for_index};
