// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};
use vigil_virtual_list::{ExtentModel, Scalar};

/// Fixed-size cell grid that wraps items into rows.
///
/// Columns are derived from the container width:
/// `columns = max(1, floor((container_width + gap) / (item_width + gap)))`.
/// Every row has the same stride, `item_height + gap`, so row offsets have a
/// closed form and no offset table is needed.
///
/// Negative or non-finite sizes and gaps are treated as zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridLayout {
    item_size: Size,
    gap: f64,
    container_width: f64,
}

impl GridLayout {
    /// Creates a layout for cells of `item_size` separated by `gap`.
    #[must_use]
    pub fn new(item_size: Size, gap: f64, container_width: f64) -> Self {
        Self {
            item_size: Size::new(item_size.width.sanitize(), item_size.height.sanitize()),
            gap: gap.sanitize(),
            container_width: container_width.sanitize(),
        }
    }

    /// Cell size.
    #[must_use]
    pub fn item_size(&self) -> Size {
        self.item_size
    }

    /// Gap between neighbouring cells, both across and down.
    #[must_use]
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Width available for columns.
    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Updates the container width, typically from a resize notification.
    pub fn set_container_width(&mut self, width: f64) {
        self.container_width = width.sanitize();
    }

    /// Horizontal distance between the starts of neighbouring columns.
    #[must_use]
    pub fn column_stride(&self) -> f64 {
        self.item_size.width + self.gap
    }

    /// Vertical distance between the starts of neighbouring rows.
    #[must_use]
    pub fn row_stride(&self) -> f64 {
        self.item_size.height + self.gap
    }

    /// Number of columns that fit, never less than one.
    #[must_use]
    pub fn columns(&self) -> usize {
        let stride = self.column_stride();
        if stride <= 0.0 {
            return 1;
        }
        ((self.container_width + self.gap) / stride)
            .floor_to_usize()
            .max(1)
    }

    /// Number of rows needed for `len` items.
    #[must_use]
    pub fn rows(&self, len: usize) -> usize {
        len.div_ceil(self.columns())
    }

    /// Start offset of `row` along the scroll axis.
    #[must_use]
    pub fn row_offset(&self, row: usize) -> f64 {
        row as f64 * self.row_stride()
    }

    /// Row and column of item `index`.
    #[must_use]
    pub fn cell_position(&self, index: usize) -> (usize, usize) {
        let columns = self.columns();
        (index / columns, index % columns)
    }

    /// Top-left corner of item `index` inside the spacer.
    #[must_use]
    pub fn cell_origin(&self, index: usize) -> Point {
        let (row, column) = self.cell_position(index);
        Point::new(column as f64 * self.column_stride(), self.row_offset(row))
    }

    /// Bounds of item `index` inside the spacer.
    #[must_use]
    pub fn cell_rect(&self, index: usize) -> Rect {
        Rect::from_origin_size(self.cell_origin(index), self.item_size)
    }

    /// Size of the spacer holding `len` items: the occupied columns across,
    /// every row stride down.
    #[must_use]
    pub fn content_size(&self, len: usize) -> Size {
        let columns = self.columns().min(len);
        let width = if columns == 0 {
            0.0
        } else {
            columns as f64 * self.column_stride() - self.gap
        };
        Size::new(width, self.rows(len) as f64 * self.row_stride())
    }

    /// Row-level extent model for a grid of `len` items.
    #[must_use]
    pub fn row_model(&self, len: usize) -> GridRows {
        GridRows {
            rows: self.rows(len),
            stride: self.row_stride(),
        }
    }
}

/// Closed-form [`ExtentModel`] over the rows of a [`GridLayout`].
///
/// Row `r` starts at `r * stride`; the total extent includes the gap after
/// the last row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridRows {
    rows: usize,
    stride: f64,
}

impl ExtentModel for GridRows {
    type Scalar = f64;

    fn len(&self) -> usize {
        self.rows
    }

    fn total_extent(&self) -> f64 {
        self.rows as f64 * self.stride
    }

    fn offset_of(&self, index: usize) -> f64 {
        index.min(self.rows) as f64 * self.stride
    }

    fn extent_of(&self, index: usize) -> f64 {
        if index < self.rows { self.stride } else { 0.0 }
    }

    fn index_at_offset(&self, offset: f64) -> usize {
        if self.rows == 0 || self.stride <= 0.0 {
            return 0;
        }
        (offset.sanitize() / self.stride)
            .floor_to_usize()
            .min(self.rows - 1)
    }
}
