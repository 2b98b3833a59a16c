// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host timers and the scroll-settle debounce built on them.

use core::fmt::Debug;
use core::time::Duration;

use smallvec::SmallVec;

/// Quiet period after the last scroll event before scrolling counts as settled.
pub const DEFAULT_SCROLL_QUIET: Duration = Duration::from_millis(150);

/// The host's one-shot timer facility.
///
/// Browser hosts map this onto `setTimeout`/`clearTimeout`, native hosts onto
/// their event loop's timers. When a scheduled timer elapses the host reports
/// its handle back to whoever scheduled it.
pub trait TimerHost {
    /// Identifies one scheduled timer.
    type Handle: Copy + Eq + Debug;

    /// Schedules a one-shot timer that elapses after `delay`.
    fn schedule(&mut self, delay: Duration) -> Self::Handle;

    /// Cancels a pending timer. Cancelling an elapsed or unknown handle is a no-op.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Handle issued by [`DeadlineTimer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// A [`TimerHost`] driven by an explicit clock.
///
/// For hosts (and tests) that advance time themselves: call
/// [`DeadlineTimer::advance_to`] with the current time and feed the returned
/// handles back to their owners.
#[derive(Clone, Debug, Default)]
pub struct DeadlineTimer {
    now: Duration,
    next_id: u64,
    pending: SmallVec<[(TimerId, Duration); 2]>,
}

impl DeadlineTimer {
    /// Creates a timer with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock value.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers that have neither elapsed nor been cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Moves the clock forward and returns the timers that elapsed, earliest first.
    ///
    /// Moving the clock backwards is ignored.
    pub fn advance_to(&mut self, now: Duration) -> SmallVec<[TimerId; 2]> {
        self.now = self.now.max(now);
        let mut expired: SmallVec<[(TimerId, Duration); 2]> = SmallVec::new();
        let clock = self.now;
        self.pending.retain(|&mut (id, deadline)| {
            if deadline <= clock {
                expired.push((id, deadline));
                false
            } else {
                true
            }
        });
        expired.sort_by_key(|&(id, deadline)| (deadline, id.0));
        expired.into_iter().map(|(id, _)| id).collect()
    }

    /// Advances the clock by `delta`; see [`DeadlineTimer::advance_to`].
    pub fn advance_by(&mut self, delta: Duration) -> SmallVec<[TimerId; 2]> {
        self.advance_to(self.now.saturating_add(delta))
    }
}

impl TimerHost for DeadlineTimer {
    type Handle = TimerId;

    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push((id, self.now.saturating_add(delay)));
        id
    }

    fn cancel(&mut self, handle: TimerId) {
        self.pending.retain(|&mut (id, _)| id != handle);
    }
}

/// Cancel-and-reschedule debounce owning at most one timer.
///
/// Every [`ScrollDebounce::bump`] cancels the pending timer and schedules a
/// fresh one, so the flag clears only after a full quiet period without
/// events. Call [`ScrollDebounce::release`] on teardown so the host does not
/// keep a timer for a list that no longer exists.
#[derive(Clone, Debug)]
pub struct ScrollDebounce<H> {
    quiet: Duration,
    pending: Option<H>,
}

impl<H: Copy + Eq + Debug> ScrollDebounce<H> {
    /// Creates an idle debounce with the given quiet period.
    #[must_use]
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// The quiet period.
    #[must_use]
    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Changes the quiet period; applies from the next bump.
    pub fn set_quiet_period(&mut self, quiet: Duration) {
        self.quiet = quiet;
    }

    /// Returns `true` while a timer is pending, i.e. scrolling is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle of the pending timer, if any.
    #[must_use]
    pub fn pending(&self) -> Option<H> {
        self.pending
    }

    /// Records activity: cancels the pending timer and schedules a new one.
    pub fn bump<T: TimerHost<Handle = H>>(&mut self, timers: &mut T) {
        if let Some(stale) = self.pending.take() {
            timers.cancel(stale);
        }
        self.pending = Some(timers.schedule(self.quiet));
    }

    /// Handles an elapsed timer.
    ///
    /// Returns `true` if `handle` was the live timer and activity has now
    /// settled. Stale handles (a timer elapsing after it was replaced) are
    /// ignored.
    pub fn fire(&mut self, handle: H) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Cancels the pending timer, if any.
    pub fn release<T: TimerHost<Handle = H>>(&mut self, timers: &mut T) {
        if let Some(handle) = self.pending.take() {
            timers.cancel(handle);
        }
    }
}

impl<H: Copy + Eq + Debug> Default for ScrollDebounce<H> {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_QUIET)
    }
}
