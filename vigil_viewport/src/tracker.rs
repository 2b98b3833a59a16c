// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use vigil_virtual_list::{Scalar, ViewportState};

use crate::timer::{ScrollDebounce, TimerHost};

/// Direction of the most recent scroll movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Toward the end of the content.
    Forward,
    /// Toward the start of the content.
    Backward,
}

/// What a viewport event changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ViewportChange {
    /// The scroll offset moved.
    Scrolled,
    /// The container extent changed.
    Resized,
    /// The event carried the values already recorded.
    Unchanged,
}

impl ViewportChange {
    /// Returns `true` unless the event was a no-op.
    #[must_use]
    pub fn is_change(self) -> bool {
        self != Self::Unchanged
    }
}

/// Single writer of [`ViewportState`].
///
/// The tracker records scroll and resize notifications from the host and
/// derives an "is scrolling" flag: every scroll event raises it and
/// reschedules a [`ScrollDebounce`] timer, and the flag drops once that timer
/// elapses without further events. Hosts read the flag to defer expensive
/// per-item work, such as decoding portrait photos, until scrolling settles.
///
/// Only scroll notifications raise the flag. [`ViewportTracker::on_resize`]
/// updates the state but leaves "is scrolling" untouched and schedules no
/// timer, so a container that reflows (a rotated phone, an opened side panel)
/// does not defer per-item work the way a scroll gesture does.
/// [`ViewportTracker::set_scroll_offset`] behaves the same way.
///
/// ```rust
/// use core::time::Duration;
/// use vigil_viewport::{DeadlineTimer, ViewportTracker};
///
/// let mut timers = DeadlineTimer::new();
/// let mut tracker = ViewportTracker::new(600.0_f64);
///
/// tracker.on_scroll(120.0, &mut timers);
/// assert!(tracker.is_scrolling());
///
/// for handle in timers.advance_by(Duration::from_millis(200)) {
///     tracker.timer_fired(handle);
/// }
/// assert!(!tracker.is_scrolling());
/// assert_eq!(tracker.scroll_offset(), 120.0);
/// ```
#[derive(Clone, Debug)]
pub struct ViewportTracker<S, H> {
    state: ViewportState<S>,
    debounce: ScrollDebounce<H>,
    direction: Option<ScrollDirection>,
}

impl<S: Scalar, H: Copy + Eq + core::fmt::Debug> ViewportTracker<S, H> {
    /// Creates a tracker at offset zero with the default quiet period.
    #[must_use]
    pub fn new(container_extent: S) -> Self {
        Self::with_debounce(container_extent, ScrollDebounce::default())
    }

    /// Creates a tracker with a custom quiet period.
    #[must_use]
    pub fn with_quiet_period(container_extent: S, quiet: Duration) -> Self {
        Self::with_debounce(container_extent, ScrollDebounce::new(quiet))
    }

    fn with_debounce(container_extent: S, debounce: ScrollDebounce<H>) -> Self {
        Self {
            state: ViewportState::new(S::ZERO, container_extent.sanitize()),
            debounce,
            direction: None,
        }
    }

    /// The current viewport state.
    #[must_use]
    pub fn state(&self) -> ViewportState<S> {
        self.state
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> S {
        self.state.scroll_offset
    }

    /// Current container extent.
    #[must_use]
    pub fn container_extent(&self) -> S {
        self.state.container_extent
    }

    /// Returns `true` while scroll events keep arriving within the quiet period.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.debounce.is_active()
    }

    /// Direction of the last offset change, cleared when scrolling settles.
    #[must_use]
    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    /// The debounce, for inspecting its pending timer or quiet period.
    #[must_use]
    pub fn debounce(&self) -> &ScrollDebounce<H> {
        &self.debounce
    }

    /// Changes the scroll-settle quiet period.
    pub fn set_quiet_period(&mut self, quiet: Duration) {
        self.debounce.set_quiet_period(quiet);
    }

    /// Records a scroll notification.
    ///
    /// Negative and non-finite offsets are recorded as zero. The debounce is
    /// rescheduled even when the offset did not move.
    pub fn on_scroll<T: TimerHost<Handle = H>>(
        &mut self,
        scroll_offset: S,
        timers: &mut T,
    ) -> ViewportChange {
        let offset = scroll_offset.sanitize();
        let previous = self.state.scroll_offset;
        self.debounce.bump(timers);
        if offset > previous {
            self.direction = Some(ScrollDirection::Forward);
        } else if offset < previous {
            self.direction = Some(ScrollDirection::Backward);
        } else {
            return ViewportChange::Unchanged;
        }
        self.state.scroll_offset = offset;
        ViewportChange::Scrolled
    }

    /// Records a container resize. Negative and non-finite extents become zero.
    ///
    /// A resize is not scrolling: the flag and the debounce timer are left as
    /// they were.
    pub fn on_resize(&mut self, container_extent: S) -> ViewportChange {
        let extent = container_extent.sanitize();
        if extent == self.state.container_extent {
            return ViewportChange::Unchanged;
        }
        self.state.container_extent = extent;
        ViewportChange::Resized
    }

    /// Overrides the scroll offset without counting as user scrolling.
    ///
    /// Used when the owner clamps or programmatically repositions the view.
    pub fn set_scroll_offset(&mut self, scroll_offset: S) -> ViewportChange {
        let offset = scroll_offset.sanitize();
        if offset == self.state.scroll_offset {
            return ViewportChange::Unchanged;
        }
        self.state.scroll_offset = offset;
        ViewportChange::Scrolled
    }

    /// Routes an elapsed timer to the debounce.
    ///
    /// Returns `true` if this ended the scrolling phase.
    pub fn timer_fired(&mut self, handle: H) -> bool {
        let settled = self.debounce.fire(handle);
        if settled {
            self.direction = None;
        }
        settled
    }

    /// Releases the debounce timer. Call on teardown.
    pub fn release<T: TimerHost<Handle = H>>(&mut self, timers: &mut T) {
        self.debounce.release(timers);
        self.direction = None;
    }
}
