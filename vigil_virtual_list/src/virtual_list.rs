// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    ExtentError, ExtentModel, InvalidExtentHandling, ItemExtent, OffsetCache, OffsetTable,
    Overscan, RenderPass, Scalar, ViewportState, VisibleWindow, materialize, resolve_visible,
    try_materialize,
};

/// Where an item should land when scrolling to it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    /// Align the item's start with the viewport start.
    Start,
    /// Center the item in the viewport.
    Center,
    /// Align the item's end with the viewport end.
    End,
    /// Scroll the minimum distance that makes the item fully visible.
    #[default]
    Nearest,
}

/// Memoized geometry plus the last resolved window for one list.
///
/// `VirtualList` owns no items and no viewport. Each pass the host hands it
/// the current collection through [`VirtualList::sync`], then resolves a
/// viewport with [`VirtualList::resolve`]. The offset table is only rebuilt
/// when the collection length or the extent policy changes.
///
/// ```rust
/// use vigil_virtual_list::{ItemExtent, ViewportState, VirtualList, VisibleRange};
///
/// let tributes = vec!["..."; 1_000];
/// let mut list = VirtualList::new();
/// list.sync(&tributes, &ItemExtent::fixed(48.0)).unwrap();
///
/// let window = list.resolve(&ViewportState::new(480.0, 240.0)).unwrap();
/// assert_eq!(window.visible, VisibleRange::new(10, 14));
///
/// let pass = list.render(&tributes, |text, index| (index, text.len()));
/// assert_eq!(pass.spacer_extent, 48_000.0);
/// assert_eq!(pass.children.len(), window.rendered.count());
/// ```
#[derive(Debug)]
pub struct VirtualList<T, S> {
    cache: OffsetCache<T, S>,
    overscan: Overscan<S>,
    window: Option<VisibleWindow>,
}

impl<T, S: Scalar> Default for VirtualList<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S: Scalar> VirtualList<T, S> {
    /// Creates a list with default overscan and invalid-extent handling.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Overscan::default(), InvalidExtentHandling::default())
    }

    /// Creates a list with explicit overscan and invalid-extent handling.
    #[must_use]
    pub fn with_config(overscan: Overscan<S>, handling: InvalidExtentHandling) -> Self {
        Self {
            cache: OffsetCache::new(handling),
            overscan,
            window: None,
        }
    }

    /// Returns the current offset table.
    #[must_use]
    pub fn table(&self) -> &OffsetTable<S> {
        self.cache.table()
    }

    /// Returns the offset cache.
    #[must_use]
    pub fn cache(&self) -> &OffsetCache<T, S> {
        &self.cache
    }

    /// Forces the next sync to rebuild the offset table.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// Returns the overscan policy.
    #[must_use]
    pub fn overscan(&self) -> Overscan<S> {
        self.overscan
    }

    /// Sets the overscan policy. Takes effect on the next resolve.
    pub fn set_overscan(&mut self, overscan: Overscan<S>) {
        self.overscan = overscan;
    }

    /// Total content extent of the current table.
    #[must_use]
    pub fn total_extent(&self) -> S {
        self.table().total_extent()
    }

    /// The window computed by the most recent [`VirtualList::resolve`].
    #[must_use]
    pub fn window(&self) -> Option<VisibleWindow> {
        self.window
    }

    /// Brings the offset table up to date with `items` and `extent`.
    ///
    /// Returns `true` if the table was rebuilt. The cached window is cleared
    /// on rebuild; resolve again before rendering.
    ///
    /// # Errors
    ///
    /// Returns [`ExtentError`] when the extent handling is
    /// [`InvalidExtentHandling::Error`] and an item has an invalid extent.
    pub fn sync(&mut self, items: &[T], extent: &ItemExtent<T, S>) -> Result<bool, ExtentError<S>> {
        let rebuilt = self.cache.sync(items, extent)?;
        if rebuilt {
            self.window = None;
        }
        Ok(rebuilt)
    }

    /// Resolves and caches the window for `viewport`.
    pub fn resolve(&mut self, viewport: &ViewportState<S>) -> Option<VisibleWindow> {
        self.window = resolve_visible(self.table(), viewport, self.overscan);
        self.window
    }

    /// Materializes the cached window.
    pub fn render<R>(
        &self,
        items: &[T],
        render_item: impl FnMut(&T, usize) -> R,
    ) -> RenderPass<R, S> {
        materialize(items, self.table(), self.window, render_item)
    }

    /// Materializes the cached window with a fallible callback.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `render_item`.
    pub fn try_render<R, E>(
        &self,
        items: &[T],
        render_item: impl FnMut(&T, usize) -> Result<R, E>,
    ) -> Result<RenderPass<R, S>, E> {
        try_materialize(items, self.table(), self.window, render_item)
    }

    /// Largest valid scroll offset for a container of `container_extent`.
    #[must_use]
    pub fn max_scroll_offset(&self, container_extent: S) -> S {
        max_scroll_offset(self.total_extent(), container_extent)
    }

    /// Clamps `offset` into `[0, max_scroll_offset]`.
    #[must_use]
    pub fn clamp_scroll_offset(&self, offset: S, container_extent: S) -> S {
        offset
            .sanitize()
            .min(self.max_scroll_offset(container_extent))
    }

    /// Scroll offset that brings `index` into view with the given alignment.
    ///
    /// See [`scroll_offset_for_index`].
    #[must_use]
    pub fn scroll_offset_for_index(
        &self,
        index: usize,
        align: ScrollAlign,
        viewport: &ViewportState<S>,
    ) -> S {
        scroll_offset_for_index(self.table(), index, align, viewport)
    }

    /// Returns `true` if `index` lies in the cached strictly visible range.
    #[must_use]
    pub fn is_index_visible(&self, index: usize) -> bool {
        self.window
            .is_some_and(|window| window.visible.contains(index))
    }
}

/// Largest valid scroll offset when `total_extent` of content is shown in a
/// container of `container_extent`.
#[must_use]
pub fn max_scroll_offset<S: Scalar>(total_extent: S, container_extent: S) -> S {
    let total = total_extent.sanitize();
    let container = container_extent.sanitize();
    if total > container {
        total - container
    } else {
        S::ZERO
    }
}

/// Scroll offset that brings `index` of `model` into view with the given
/// alignment.
///
/// Indices past the end are clamped to the last item. The result is already
/// clamped to `[0, max_scroll_offset]`.
#[must_use]
pub fn scroll_offset_for_index<M: ExtentModel>(
    model: &M,
    index: usize,
    align: ScrollAlign,
    viewport: &ViewportState<M::Scalar>,
) -> M::Scalar {
    let zero = M::Scalar::ZERO;
    if model.is_empty() {
        return zero;
    }
    let index = index.min(model.len() - 1);
    let start = model.offset_of(index);
    let extent = model.extent_of(index);
    let end = start + extent;
    let container = viewport.container_extent.sanitize();
    let current = viewport.scroll_offset.sanitize();
    let back_off = |target_end: M::Scalar| {
        if target_end > container {
            target_end - container
        } else {
            zero
        }
    };

    let target = match align {
        ScrollAlign::Start => start,
        ScrollAlign::End => back_off(end),
        ScrollAlign::Center => {
            let middle = start + extent.half();
            let half = container.half();
            if middle > half { middle - half } else { zero }
        }
        ScrollAlign::Nearest => {
            if start < current || extent > container {
                start
            } else if end > current + container {
                back_off(end)
            } else {
                current
            }
        }
    };
    target.min(max_scroll_offset(model.total_extent(), container))
}
