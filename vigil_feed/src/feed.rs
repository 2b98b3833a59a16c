// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;

use vigil_paging::{FetchingFlag, TriggerOutcome};
use vigil_viewport::{ScrollDirection, TimerHost, ViewportChange, ViewportTracker};
use vigil_virtual_list::{
    ExtentError, ItemExtent, RenderPass, Scalar, ScrollAlign, ViewportState, VirtualList,
    VisibleRange, VisibleWindow,
};

use crate::FeedConfig;
use crate::host::{EndWatch, PagingHost};

/// What an engine event did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FeedUpdate {
    /// How the viewport changed.
    pub viewport: ViewportChange,
    /// Whether the geometry was rebuilt.
    pub rebuilt: bool,
    /// Result of the paging check that followed the event.
    pub paging: TriggerOutcome,
}

/// Debug snapshot of a [`VirtualFeed`].
#[derive(Clone, Debug, PartialEq)]
pub struct FeedDebugInfo<S> {
    /// Items in the last synced collection.
    pub len: usize,
    /// Total content extent.
    pub total_extent: S,
    /// Viewport as last recorded.
    pub viewport: ViewportState<S>,
    /// The window computed on the last event.
    pub window: Option<VisibleWindow>,
    /// Whether scroll events are still arriving.
    pub is_scrolling: bool,
    /// Whether a requested page has not settled yet.
    pub is_fetching: bool,
    /// How many times the offset table was rebuilt.
    pub rebuilds: u64,
}

/// Virtualization engine for one list.
///
/// A `VirtualFeed` owns everything that is per-list: the memoized offset
/// table, the viewport tracker with its scroll-settle debounce, and the
/// paging trigger. Create one per virtualized list; instances share nothing.
///
/// Every event handler recomputes the window synchronously from the current
/// inputs, so [`VirtualFeed::window`] and [`VirtualFeed::render`] always
/// reflect the latest event. The host feeds:
///
/// - the collection, re-read on every [`VirtualFeed::sync`]
/// - scroll and resize notifications
/// - elapsed debounce timers, through [`VirtualFeed::timer_fired`]
///
/// `H` is the handle type of the host's [`TimerHost`].
#[derive(Debug)]
pub struct VirtualFeed<T, S, H> {
    list: VirtualList<T, S>,
    tracker: ViewportTracker<S, H>,
    end: EndWatch<S>,
    config: FeedConfig<S>,
    len: usize,
}

impl<T, S: Scalar, H: Copy + Eq + Debug> VirtualFeed<T, S, H> {
    /// Creates an engine for a container of `container_extent`.
    #[must_use]
    pub fn new(container_extent: S, config: FeedConfig<S>) -> Self {
        Self {
            list: VirtualList::with_config(config.overscan, config.extent_handling),
            tracker: ViewportTracker::with_quiet_period(container_extent, config.scroll_quiet),
            end: EndWatch::new(config.end_threshold),
            config,
            len: 0,
        }
    }

    /// The configuration the engine was created with.
    #[must_use]
    pub fn config(&self) -> &FeedConfig<S> {
        &self.config
    }

    /// The underlying list.
    #[must_use]
    pub fn list(&self) -> &VirtualList<T, S> {
        &self.list
    }

    /// The shared fetching flag, for hosts that settle outside the ticket.
    #[must_use]
    pub fn fetching_flag(&self) -> &FetchingFlag {
        self.end.trigger.flag()
    }

    /// Brings the geometry up to date with the host's collection.
    ///
    /// Call whenever the collection or the sizing policy may have changed;
    /// the offset table is only rebuilt when the length or the policy did.
    /// The window is then resolved again and paging re-checked, so a first
    /// page shorter than the container asks for the next one immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ExtentError`] when the extent handling is
    /// [`InvalidExtentHandling::Error`](vigil_virtual_list::InvalidExtentHandling::Error)
    /// and an item has an invalid extent. The previous geometry is kept.
    pub fn sync(
        &mut self,
        items: &[T],
        extent: &ItemExtent<T, S>,
        host: &mut impl PagingHost<S>,
    ) -> Result<FeedUpdate, ExtentError<S>> {
        let rebuilt = self.list.sync(items, extent)?;
        if rebuilt {
            log::debug!(
                "rebuilt offsets for {} items (was {}), total extent {:?}",
                items.len(),
                self.len,
                self.list.total_extent()
            );
        }
        self.len = items.len();
        self.resolve();
        Ok(FeedUpdate {
            viewport: ViewportChange::Unchanged,
            rebuilt,
            paging: self.check_paging(host),
        })
    }

    /// Forces the next [`VirtualFeed::sync`] to rebuild the offset table.
    ///
    /// For hosts that edit items in place, changing their sizes without
    /// changing the length or the sizing policy.
    pub fn invalidate(&mut self) {
        self.list.invalidate();
    }

    /// Records a scroll notification and recomputes.
    pub fn on_scroll(
        &mut self,
        scroll_offset: S,
        timers: &mut impl TimerHost<Handle = H>,
        host: &mut impl PagingHost<S>,
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

    /// Records a container resize and recomputes.
    ///
    /// Resizing does not count as scrolling.
    pub fn on_resize(&mut self, container_extent: S, host: &mut impl PagingHost<S>) -> FeedUpdate {
        let viewport = self.tracker.on_resize(container_extent);
        if viewport.is_change() {
            self.resolve();
        }
        FeedUpdate {
            viewport,
            rebuilt: false,
            paging: self.check_paging(host),
        }
    }

    /// Routes an elapsed timer. Returns `true` if scrolling settled.
    pub fn timer_fired(&mut self, handle: H) -> bool {
        self.tracker.timer_fired(handle)
    }

    /// Moves the viewport so `index` is in view and returns the new offset.
    ///
    /// The host applies the offset to its scroll container. That does not
    /// count as user scrolling; the scroll notification the host's container
    /// emits afterwards is reported as unchanged.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) -> S {
        let offset = self
            .list
            .scroll_offset_for_index(index, align, &self.tracker.state());
        if self.tracker.set_scroll_offset(offset).is_change() {
            self.resolve();
        }
        offset
    }

    /// Re-arms paging after a failed fetch so the next check may fire again.
    pub fn retry_paging(&mut self) {
        self.end.trigger.rearm();
    }

    /// The window computed on the last event, `None` for an empty list.
    #[must_use]
    pub fn window(&self) -> Option<VisibleWindow> {
        self.list.window()
    }

    /// Strictly visible items, without overscan.
    #[must_use]
    pub fn visible_range(&self) -> Option<VisibleRange> {
        self.window().map(|window| window.visible)
    }

    /// Materializes the current window.
    pub fn render<R>(
        &self,
        items: &[T],
        render_item: impl FnMut(&T, usize) -> R,
    ) -> RenderPass<R, S> {
        self.list.render(items, render_item)
    }

    /// Materializes the current window with a fallible callback.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `render_item`.
    pub fn try_render<R, E>(
        &self,
        items: &[T],
        render_item: impl FnMut(&T, usize) -> Result<R, E>,
    ) -> Result<RenderPass<R, S>, E> {
        self.list.try_render(items, render_item)
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> ViewportState<S> {
        self.tracker.state()
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> S {
        self.tracker.scroll_offset()
    }

    /// Returns `true` until scroll events stop for the quiet period.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.tracker.is_scrolling()
    }

    /// Direction of the current scroll gesture.
    #[must_use]
    pub fn direction(&self) -> Option<ScrollDirection> {
        self.tracker.direction()
    }

    /// Total content extent, the size of the host's spacer.
    #[must_use]
    pub fn total_extent(&self) -> S {
        self.list.total_extent()
    }

    /// Returns `true` while a requested page has not settled.
    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.end.trigger.is_fetching()
    }

    /// Releases the debounce timer. Call when the list is unmounted.
    pub fn teardown(&mut self, timers: &mut impl TimerHost<Handle = H>) {
        self.tracker.release(timers);
    }

    /// Snapshot of the engine state for logging or inspection.
    #[must_use]
    pub fn debug_info(&self) -> FeedDebugInfo<S> {
        FeedDebugInfo {
            len: self.len,
            total_extent: self.total_extent(),
            viewport: self.viewport(),
            window: self.window(),
            is_scrolling: self.is_scrolling(),
            is_fetching: self.is_fetching(),
            rebuilds: self.list.cache().rebuild_count(),
        }
    }

    fn resolve(&mut self) {
        let previous = self.list.window();
        let window = self.list.resolve(&self.tracker.state());
        if window != previous {
            log::trace!("window {previous:?} -> {window:?}");
        }
    }

    fn check_paging(&mut self, host: &mut impl PagingHost<S>) -> TriggerOutcome {
        let viewport = self.tracker.state();
        let total = self.list.total_extent();
        self.end.observe(&viewport, total, host)
    }
}
