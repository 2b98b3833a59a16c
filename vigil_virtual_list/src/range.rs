// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::RangeInclusive;

use crate::Scalar;

/// Scroll position and container size along the scroll axis.
///
/// Written only by the viewport tracker; everything else reads it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewportState<S> {
    /// Distance scrolled from the start of the content.
    pub scroll_offset: S,
    /// Size of the visible container.
    pub container_extent: S,
}

impl<S: Scalar> ViewportState<S> {
    /// Creates a viewport state.
    #[must_use]
    pub fn new(scroll_offset: S, container_extent: S) -> Self {
        Self {
            scroll_offset,
            container_extent,
        }
    }

    /// End of the visible span, `scroll_offset + container_extent`, with
    /// invalid inputs treated as zero.
    #[must_use]
    pub fn visible_end(&self) -> S {
        self.scroll_offset.sanitize() + self.container_extent.sanitize()
    }
}

impl<S: Scalar> Default for ViewportState<S> {
    fn default() -> Self {
        Self::new(S::ZERO, S::ZERO)
    }
}

/// Inclusive range of item indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct VisibleRange {
    /// First index in the range.
    pub start: usize,
    /// Last index in the range, inclusive.
    pub end: usize,
}

impl VisibleRange {
    /// Creates a range; `start` must not exceed `end`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "inverted visible range {start}..={end}");
        Self {
            start,
            end: end.max(start),
        }
    }

    /// A range containing exactly one index.
    #[must_use]
    pub fn single(index: usize) -> Self {
        Self::new(index, index)
    }

    /// Number of indices in the range. Always at least one.
    #[must_use]
    pub fn count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Returns `true` if `index` lies within the range.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// Returns `true` if `other` lies entirely inside this range.
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Iterates the indices of the range.
    #[must_use]
    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Widens the range by `before`/`after` indices, clamped to `0..len`.
    #[must_use]
    pub fn expand(&self, before: usize, after: usize, len: usize) -> Self {
        let last = len.saturating_sub(1);
        Self::new(
            self.start.saturating_sub(before).min(last),
            self.end.saturating_add(after).min(last),
        )
    }
}

/// Result of resolving a viewport against an extent model.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct VisibleWindow {
    /// Items that overlap the viewport.
    pub visible: VisibleRange,
    /// Items to materialize: `visible` plus overscan.
    pub rendered: VisibleRange,
}

/// Extra content realized beyond the strictly visible items.
///
/// [`Overscan::Items`] is the classic per-side item count. For feeds whose
/// entries vary wildly in size a count either over- or under-renders, so
/// [`Overscan::Distance`] buffers a fixed distance on each side instead.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Overscan<S> {
    /// Render this many extra items before and after the visible range.
    Items(usize),
    /// Render every item within this distance before and after the viewport.
    Distance(S),
}

impl<S> Overscan<S> {
    /// Default item overscan.
    pub const DEFAULT_ITEMS: usize = 5;
}

impl<S> Default for Overscan<S> {
    fn default() -> Self {
        Self::Items(Self::DEFAULT_ITEMS)
    }
}
