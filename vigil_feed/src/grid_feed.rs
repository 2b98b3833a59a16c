// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::marker::PhantomData;

use kurbo::Size;
use vigil_grid::{GridLayout, GridPass, materialize_grid, resolve_rows, try_materialize_grid};
use vigil_paging::TriggerOutcome;
use vigil_viewport::{TimerHost, ViewportChange, ViewportTracker};
use vigil_virtual_list::{
    ExtentModel, Overscan, ScrollAlign, ViewportState, VisibleRange, VisibleWindow,
    scroll_offset_for_index,
};

use crate::host::{EndWatch, PagingHost};
use crate::{FeedConfig, FeedUpdate};

/// Virtualization engine for one fixed-cell grid.
///
/// The grid counterpart of [`VirtualFeed`](crate::VirtualFeed). Geometry is
/// closed-form, so there is no offset table to memoize; a sync only records
/// the item count. Overscan counts rows.
#[derive(Debug)]
pub struct VirtualGrid<T, H> {
    layout: GridLayout,
    len: usize,
    tracker: ViewportTracker<f64, H>,
    end: EndWatch<f64>,
    overscan: Overscan<f64>,
    window: Option<VisibleWindow>,
    items: PhantomData<fn(&T)>,
}

impl<T, H: Copy + Eq + Debug> VirtualGrid<T, H> {
    /// Creates an engine for `layout` in a container `container_height` tall.
    ///
    /// The extent handling in `config` is unused; grid cells all share one size.
    #[must_use]
    pub fn new(layout: GridLayout, container_height: f64, config: FeedConfig<f64>) -> Self {
        Self {
            layout,
            len: 0,
            tracker: ViewportTracker::with_quiet_period(container_height, config.scroll_quiet),
            end: EndWatch::new(config.end_threshold),
            overscan: config.overscan,
            window: None,
            items: PhantomData,
        }
    }

    /// The current layout.
    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Records the host's collection and recomputes.
    pub fn sync(&mut self, items: &[T], host: &mut impl PagingHost<f64>) -> FeedUpdate {
        let rebuilt = items.len() != self.len;
        if rebuilt {
            log::debug!(
                "grid now holds {} items in {} rows",
                items.len(),
                self.layout.rows(items.len())
            );
        }
        self.len = items.len();
        self.resolve();
        FeedUpdate {
            viewport: ViewportChange::Unchanged,
            rebuilt,
            paging: self.check_paging(host),
        }
    }

    /// Records a scroll notification and recomputes.
    pub fn on_scroll(
        &mut self,
        scroll_offset: f64,
        timers: &mut impl TimerHost<Handle = H>,
        host: &mut impl PagingHost<f64>,
    ) -> FeedUpdate {
        let viewport = self.tracker.on_scroll(scroll_offset, timers);
        host.on_scroll(self.tracker.scroll_offset());
        if viewport.is_change() {
            self.resolve();
        }
        FeedUpdate {
            viewport,
            rebuilt: false,
            paging: self.check_paging(host),
        }
    }

    /// Records a change of the container height.
    pub fn on_resize(
        &mut self,
        container_height: f64,
        host: &mut impl PagingHost<f64>,
    ) -> FeedUpdate {
        let viewport = self.tracker.on_resize(container_height);
        if viewport.is_change() {
            self.resolve();
        }
        FeedUpdate {
            viewport,
            rebuilt: false,
            paging: self.check_paging(host),
        }
    }

    /// Records a change of the container width, reflowing the columns.
    ///
    /// `rebuilt` is set when the column count changed.
    pub fn set_container_width(
        &mut self,
        width: f64,
        host: &mut impl PagingHost<f64>,
    ) -> FeedUpdate {
        let columns = self.layout.columns();
        self.layout.set_container_width(width);
        let rebuilt = self.layout.columns() != columns;
        if rebuilt {
            log::debug!("grid reflowed from {columns} to {} columns", self.layout.columns());
            self.resolve();
        }
        FeedUpdate {
            viewport: ViewportChange::Unchanged,
            rebuilt,
            paging: self.check_paging(host),
        }
    }

    /// Routes an elapsed timer. Returns `true` if scrolling settled.
    pub fn timer_fired(&mut self, handle: H) -> bool {
        self.tracker.timer_fired(handle)
    }

    /// Moves the viewport so the row holding `index` is in view and returns
    /// the new offset.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) -> f64 {
        let (row, _) = self.layout.cell_position(index);
        let rows = self.layout.row_model(self.len);
        let offset = scroll_offset_for_index(&rows, row, align, &self.tracker.state());
        if self.tracker.set_scroll_offset(offset).is_change() {
            self.resolve();
        }
        offset
    }

    /// Re-arms paging after a failed fetch.
    pub fn retry_paging(&mut self) {
        self.end.trigger.rearm();
    }

    /// The row window computed on the last event.
    #[must_use]
    pub fn window(&self) -> Option<VisibleWindow> {
        self.window
    }

    /// Strictly visible rows.
    #[must_use]
    pub fn visible_rows(&self) -> Option<VisibleRange> {
        self.window.map(|window| window.visible)
    }

    /// Materializes every cell of the rendered rows.
    pub fn render<R>(
        &self,
        items: &[T],
        render_item: impl FnMut(&T, usize) -> R,
    ) -> GridPass<R> {
        materialize_grid(items, &self.layout, self.window, render_item)
    }

    /// Materializes the rendered rows with a fallible callback.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `render_item`.
    pub fn try_render<R, E>(
        &self,
        items: &[T],
        render_item: impl FnMut(&T, usize) -> Result<R, E>,
    ) -> Result<GridPass<R>, E> {
        try_materialize_grid(items, &self.layout, self.window, render_item)
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> ViewportState<f64> {
        self.tracker.state()
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.tracker.scroll_offset()
    }

    /// Returns `true` until scroll events stop for the quiet period.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.tracker.is_scrolling()
    }

    /// Size of the host's spacer.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.layout.content_size(self.len)
    }

    /// Returns `true` while a requested page has not settled.
    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.end.trigger.is_fetching()
    }

    /// Releases the debounce timer. Call when the grid is unmounted.
    pub fn teardown(&mut self, timers: &mut impl TimerHost<Handle = H>) {
        self.tracker.release(timers);
    }

    fn resolve(&mut self) {
        let viewport = self.tracker.state();
        self.window = resolve_rows(&self.layout, self.len, &viewport, self.overscan);
    }

    fn check_paging(&mut self, host: &mut impl PagingHost<f64>) -> TriggerOutcome {
        let viewport = self.tracker.state();
        let total = self.layout.row_model(self.len).total_extent();
        self.end.observe(&viewport, total, host)
    }
}
