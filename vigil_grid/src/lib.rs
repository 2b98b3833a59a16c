// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vigil_grid --heading-base-level=0

//! Vigil Grid: fixed-cell grid virtualization.
//!
//! Photo walls and portrait galleries lay items out in equally sized cells
//! that wrap into rows. [`GridLayout`] derives the column count from the
//! container width and exposes the rows as a closed-form
//! [`ExtentModel`](vigil_virtual_list::ExtentModel), so the same resolver
//! that drives lists finds the visible rows without an offset table.
//! [`materialize_grid`] then expands each rendered row into its cells, each
//! with a [`kurbo::Rect`] inside the spacer.
//!
//! ```rust
//! use kurbo::Size;
//! use vigil_grid::{GridLayout, materialize_grid, resolve_rows};
//! use vigil_virtual_list::{Overscan, ViewportState};
//!
//! let photos: Vec<u32> = (0..10).collect();
//! let layout = GridLayout::new(Size::new(200.0, 200.0), 20.0, 1_000.0);
//! assert_eq!(layout.columns(), 4);
//! assert_eq!(layout.rows(photos.len()), 3);
//!
//! let viewport = ViewportState::new(0.0, 300.0);
//! let window = resolve_rows(&layout, photos.len(), &viewport, Overscan::Items(0));
//! let pass = materialize_grid(&photos, &layout, window, |photo, _| *photo);
//!
//! // Two rows intersect the first 300 pixels.
//! assert_eq!(pass.rows.len(), 2);
//! assert_eq!(pass.indices().count(), 8);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable either the `std` or the
//! `libm` feature for `kurbo`'s floating-point support.

#![no_std]

extern crate alloc;

mod layout;
mod materialize;

pub use layout::{GridLayout, GridRows};
pub use materialize::{
    GridCell, GridPass, GridRow, PlacedCell, for_each_cell, materialize_grid, resolve_rows,
    try_materialize_grid,
};
