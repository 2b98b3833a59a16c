// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-wise materialization of a [`GridLayout`].

use alloc::vec::Vec;
use core::convert::Infallible;

use kurbo::{Rect, Size};
use smallvec::SmallVec;
use vigil_virtual_list::{
    Overscan, ViewportState, VisibleWindow, for_each_placement, resolve_visible,
};

use crate::GridLayout;

/// Geometry of one cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridCell {
    /// Index into the item collection.
    pub index: usize,
    /// Row of the cell.
    pub row: usize,
    /// Column of the cell.
    pub column: usize,
    /// Bounds inside the spacer.
    pub rect: Rect,
}

/// A rendered cell.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedCell<R> {
    /// Where the cell goes.
    pub cell: GridCell,
    /// Whatever the host's render callback produced.
    pub unit: R,
}

/// One materialized row. The last row of a grid may be partially filled.
#[derive(Clone, Debug, PartialEq)]
pub struct GridRow<R> {
    /// Row index.
    pub row: usize,
    /// Start offset of the row along the scroll axis.
    pub offset: f64,
    /// Cells in column order.
    pub cells: SmallVec<[PlacedCell<R>; 8]>,
}

/// Output of a grid materialization pass.
#[derive(Clone, Debug, PartialEq)]
pub struct GridPass<R> {
    /// Size of the spacer holding every cell.
    pub spacer: Size,
    /// Row window that was materialized, if any.
    pub window: Option<VisibleWindow>,
    /// Rendered rows in order.
    pub rows: Vec<GridRow<R>>,
}

impl<R> GridPass<R> {
    /// All rendered cells in index order.
    pub fn cells(&self) -> impl Iterator<Item = &PlacedCell<R>> + '_ {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }

    /// Item indices that were rendered, in order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells().map(|placed| placed.cell.index)
    }
}

/// Resolves the row window of a grid holding `len` items.
///
/// `Overscan::Items` counts rows, not items.
#[must_use]
pub fn resolve_rows(
    layout: &GridLayout,
    len: usize,
    viewport: &ViewportState<f64>,
    overscan: Overscan<f64>,
) -> Option<VisibleWindow> {
    resolve_visible(&layout.row_model(len), viewport, overscan)
}

/// Calls `f` with every cell of the rendered rows of `window`.
pub fn for_each_cell(
    layout: &GridLayout,
    len: usize,
    window: Option<VisibleWindow>,
    mut f: impl FnMut(GridCell),
) {
    let columns = layout.columns();
    for_each_placement(&layout.row_model(len), window, |row| {
        let first = row.index * columns;
        for index in first..(first + columns).min(len) {
            f(GridCell {
                index,
                row: row.index,
                column: index - first,
                rect: layout.cell_rect(index),
            });
        }
    });
}

/// Materializes the rendered rows of `window`, calling `render_item(item, index)`
/// once per cell.
pub fn materialize_grid<T, R>(
    items: &[T],
    layout: &GridLayout,
    window: Option<VisibleWindow>,
    mut render_item: impl FnMut(&T, usize) -> R,
) -> GridPass<R> {
    let pass = try_materialize_grid(items, layout, window, |item, index| {
        Ok::<_, Infallible>(render_item(item, index))
    });
    match pass {
        Ok(pass) => pass,
        Err(never) => match never {},
    }
}

/// Like [`materialize_grid`], with a fallible render callback.
///
/// # Errors
///
/// Returns the first error produced by `render_item`, unchanged.
pub fn try_materialize_grid<T, R, E>(
    items: &[T],
    layout: &GridLayout,
    window: Option<VisibleWindow>,
    mut render_item: impl FnMut(&T, usize) -> Result<R, E>,
) -> Result<GridPass<R>, E> {
    let len = items.len();
    let mut rows: Vec<GridRow<R>> =
        Vec::with_capacity(window.map_or(0, |w| w.rendered.count()));
    let mut failure = None;
    for_each_cell(layout, len, window, |cell| {
        if failure.is_some() {
            return;
        }
        let Some(item) = items.get(cell.index) else {
            return;
        };
        let unit = match render_item(item, cell.index) {
            Ok(unit) => unit,
            Err(err) => {
                failure = Some(err);
                return;
            }
        };
        if rows.last().is_none_or(|last| last.row != cell.row) {
            rows.push(GridRow {
                row: cell.row,
                offset: layout.row_offset(cell.row),
                cells: SmallVec::new(),
            });
        }
        if let Some(last) = rows.last_mut() {
            last.cells.push(PlacedCell { cell, unit });
        }
    });
    if let Some(err) = failure {
        return Err(err);
    }
    Ok(GridPass {
        spacer: layout.content_size(len),
        window,
        rows,
    })
}
