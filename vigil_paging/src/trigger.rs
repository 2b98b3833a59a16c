// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cmp::Ordering;

use vigil_virtual_list::{Scalar, ViewportState};

use crate::flag::{FetchTicket, FetchingFlag};

/// How far through the content the end of the viewport is, in `[0, 1]`.
///
/// Computed as `(scroll_offset + container_extent) / total_extent`. Content
/// that fits inside the viewport (or is empty) counts as fully scrolled, so a
/// short first page immediately asks for more.
#[must_use]
pub fn scroll_fraction<S: Scalar>(viewport: &ViewportState<S>, total_extent: S) -> S {
    let total = total_extent.sanitize();
    let end = viewport.visible_end();
    if total <= S::ZERO || end >= total {
        S::ONE
    } else {
        end / total
    }
}

/// Host-owned paging facts, re-read on every observation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PagingInputs {
    /// More pages exist on the server.
    pub has_more: bool,
    /// The host is already loading for reasons of its own.
    pub loading: bool,
}

impl PagingInputs {
    /// More pages exist and the host is idle.
    #[must_use]
    pub fn ready() -> Self {
        Self {
            has_more: true,
            loading: false,
        }
    }

    /// The feed is exhausted.
    #[must_use]
    pub fn exhausted() -> Self {
        Self {
            has_more: false,
            loading: false,
        }
    }
}

/// Why a crossing did not fire.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Suppressed {
    /// A previously requested page has not settled.
    Fetching,
    /// The host reports no further pages.
    NoMorePages,
    /// The host reports it is loading.
    HostLoading,
}

/// Result of one [`InfiniteScroll::observe`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The viewport is short of the threshold.
    BelowThreshold,
    /// The threshold was crossed and the fetch callback ran.
    Fired,
    /// Past the threshold, but this crossing already fired.
    AlreadyFired,
    /// Past the threshold, but the host or the flag blocks fetching.
    Suppressed(Suppressed),
}

/// Idle/triggered state machine for "load more" pagination.
///
/// The trigger fires its fetch callback once per crossing of the end
/// threshold, and only while the [`FetchingFlag`] is lowered and the host has
/// more pages and is not loading. Crossings blocked by the host or the flag
/// are not consumed; they fire on the first observation after the blocker
/// goes away.
///
/// After firing, the trigger re-arms when either:
/// - the viewport falls back below the threshold, or
/// - the requested fetch settled and the content grew, so a page that still
///   leaves the viewport past the threshold counts as a new crossing.
///
/// A fetch that settles without adding content does not re-arm it. The
/// trigger never retries on its own; hosts retry by calling
/// [`InfiniteScroll::rearm`].
///
/// ```rust
/// use vigil_paging::{InfiniteScroll, PagingInputs, TriggerOutcome};
/// use vigil_virtual_list::ViewportState;
///
/// let mut paging = InfiniteScroll::<f64>::new();
/// let mut tickets = Vec::new();
/// let total = 10_000.0;
///
/// let top = ViewportState::new(0.0, 800.0);
/// assert_eq!(
///     paging.observe(&top, total, PagingInputs::ready(), |t| tickets.push(t)),
///     TriggerOutcome::BelowThreshold
/// );
///
/// let deep = ViewportState::new(7_600.0, 800.0);
/// assert_eq!(
///     paging.observe(&deep, total, PagingInputs::ready(), |t| tickets.push(t)),
///     TriggerOutcome::Fired
/// );
/// assert!(paging.is_fetching());
///
/// // Later, when the page has arrived and been appended:
/// tickets.pop().unwrap().settle();
/// assert!(!paging.is_fetching());
/// ```
#[derive(Clone, Debug)]
pub struct InfiniteScroll<S> {
    threshold: S,
    flag: FetchingFlag,
    armed: bool,
    /// Content extent when the in-flight fetch was requested.
    requested_at: Option<S>,
}

impl<S: Scalar> Default for InfiniteScroll<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scalar> InfiniteScroll<S> {
    /// Default end threshold, `0.8`.
    #[must_use]
    pub fn default_threshold() -> S {
        S::from_usize(4) / S::from_usize(5)
    }

    /// Creates a trigger with the default threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::with_threshold(Self::default_threshold())
    }

    /// Creates a trigger firing at `threshold`, clamped into `[0, 1]`.
    #[must_use]
    pub fn with_threshold(threshold: S) -> Self {
        Self {
            threshold: threshold.sanitize().min(S::ONE),
            flag: FetchingFlag::new(),
            armed: true,
            requested_at: None,
        }
    }

    /// The end threshold.
    #[must_use]
    pub fn threshold(&self) -> S {
        self.threshold
    }

    /// Changes the end threshold, clamped into `[0, 1]`.
    pub fn set_threshold(&mut self, threshold: S) {
        self.threshold = threshold.sanitize().min(S::ONE);
    }

    /// The shared fetching flag.
    #[must_use]
    pub fn flag(&self) -> &FetchingFlag {
        &self.flag
    }

    /// Returns `true` while a requested page has not settled.
    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.flag.is_fetching()
    }

    /// Returns `true` if the trigger will fire on the next unblocked
    /// observation past the threshold, not counting a pending re-arm from
    /// content growth.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Arms the trigger so the next observation past the threshold fires.
    ///
    /// This is how hosts retry after a failed fetch.
    pub fn rearm(&mut self) {
        self.armed = true;
    }

    /// Returns the trigger to its initial state and lowers the flag.
    ///
    /// Hosts call this after a fetch callback failed in a way that left the
    /// handshake unknown. Tickets issued before the reset become stale:
    /// settling them later leaves the flag alone.
    pub fn reset(&mut self) {
        self.flag.revoke();
        self.armed = true;
        self.requested_at = None;
    }

    /// Feeds one viewport observation.
    ///
    /// `fetch_more` runs at most once, synchronously, and receives the ticket
    /// the host settles when its request completes. Panics from the callback
    /// propagate; the flag stays raised in that case.
    pub fn observe(
        &mut self,
        viewport: &ViewportState<S>,
        total_extent: S,
        inputs: PagingInputs,
        fetch_more: impl FnOnce(FetchTicket),
    ) -> TriggerOutcome {
        let total = total_extent.sanitize();
        if let Some(requested_at) = self.requested_at {
            if !self.flag.is_fetching() {
                self.requested_at = None;
                if total > requested_at {
                    self.armed = true;
                }
            }
        }

        let fraction = scroll_fraction(viewport, total);
        let past = matches!(
            fraction.partial_cmp(&self.threshold),
            Some(Ordering::Greater | Ordering::Equal)
        );
        if !past {
            self.armed = true;
            return TriggerOutcome::BelowThreshold;
        }

        let blocked = if self.flag.is_fetching() {
            Some(Suppressed::Fetching)
        } else if !inputs.has_more {
            Some(Suppressed::NoMorePages)
        } else if inputs.loading {
            Some(Suppressed::HostLoading)
        } else {
            None
        };
        if let Some(reason) = blocked {
            log::trace!("end threshold reached but paging is suppressed: {reason:?}");
            return TriggerOutcome::Suppressed(reason);
        }

        if !self.armed {
            return TriggerOutcome::AlreadyFired;
        }

        self.armed = false;
        self.requested_at = Some(total);
        log::debug!(
            "end threshold {:?} crossed at {:?} of {:?}; requesting next page",
            self.threshold,
            fraction,
            total
        );
        fetch_more(self.flag.raise());
        TriggerOutcome::Fired
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use vigil_virtual_list::ViewportState;

    use super::{InfiniteScroll, PagingInputs, Suppressed, TriggerOutcome, scroll_fraction};
    use crate::FetchTicket;

    /// Viewport of 100 whose end sits at `fraction` of a 1000-long feed.
    fn at(fraction: f64) -> ViewportState<f64> {
        ViewportState::new(fraction * 1_000.0 - 100.0, 100.0)
    }

    #[test]
    fn fraction_is_bounded() {
        assert_eq!(scroll_fraction(&ViewportState::new(0.0, 100.0), 1_000.0_f64), 0.1);
        assert_eq!(scroll_fraction(&ViewportState::new(700.0, 100.0), 1_000.0_f64), 0.8);
        assert_eq!(scroll_fraction(&ViewportState::new(950.0, 100.0), 1_000.0_f64), 1.0);
        assert_eq!(scroll_fraction(&ViewportState::new(0.0, 600.0), 300.0_f64), 1.0);
        assert_eq!(scroll_fraction(&ViewportState::new(0.0, 600.0), 0.0_f64), 1.0);
    }

    #[test]
    fn fires_once_per_crossing() {
        let mut paging = InfiniteScroll::new();
        let mut tickets: Vec<FetchTicket> = Vec::new();
        let mut fired = 0;
        for fraction in [0.15, 0.5, 0.81, 0.9, 0.95, 1.0, 0.99] {
            let outcome =
                paging.observe(&at(fraction), 1_000.0, PagingInputs::ready(), |t| tickets.push(t));
            if outcome == TriggerOutcome::Fired {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(tickets.len(), 1);
    }

    #[test]
    fn crossing_while_fetching_is_suppressed() {
        let mut paging = InfiniteScroll::new();
        let mut tickets = Vec::new();
        let ready = PagingInputs::ready();
        assert_eq!(
            paging.observe(&at(0.9), 1_000.0, ready, |t| tickets.push(t)),
            TriggerOutcome::Fired
        );
        // Scroll up and cross again while the first fetch is still running.
        paging.observe(&at(0.2), 1_000.0, ready, |t| tickets.push(t));
        assert_eq!(
            paging.observe(&at(0.9), 1_000.0, ready, |t| tickets.push(t)),
            TriggerOutcome::Suppressed(Suppressed::Fetching)
        );
        assert_eq!(tickets.len(), 1);

        // The blocked crossing fires once the fetch settles.
        tickets.pop().unwrap().settle();
        assert_eq!(
            paging.observe(&at(0.9), 1_000.0, ready, |t| tickets.push(t)),
            TriggerOutcome::Fired
        );
    }

    #[test]
    fn settled_growth_rearms_but_failure_does_not() {
        let mut paging = InfiniteScroll::new();
        let mut tickets = Vec::new();
        let ready = PagingInputs::ready();
        // Short content: the viewport covers it all.
        let viewport = ViewportState::new(0.0, 1_000.0);

        assert_eq!(
            paging.observe(&viewport, 400.0, ready, |t| tickets.push(t)),
            TriggerOutcome::Fired
        );
        // Page arrived but is still shorter than the viewport.
        tickets.pop().unwrap().settle();
        assert_eq!(
            paging.observe(&viewport, 800.0, ready, |t| tickets.push(t)),
            TriggerOutcome::Fired
        );

        // This fetch fails: settled, nothing appended.
        tickets.pop().unwrap().settle();
        assert_eq!(
            paging.observe(&viewport, 800.0, ready, |t| tickets.push(t)),
            TriggerOutcome::AlreadyFired
        );
        assert_eq!(
            paging.observe(&viewport, 800.0, ready, |t| tickets.push(t)),
            TriggerOutcome::AlreadyFired
        );

        // The host decides to retry.
        paging.rearm();
        assert_eq!(
            paging.observe(&viewport, 800.0, ready, |t| tickets.push(t)),
            TriggerOutcome::Fired
        );
    }

    #[test]
    fn exhausted_feed_never_fetches() {
        let mut paging = InfiniteScroll::new();
        let mut calls = 0;
        let mut scroll = 0.0;
        while scroll <= 1_000.0 {
            let viewport = ViewportState::new(scroll, 100.0);
            let outcome =
                paging.observe(&viewport, 1_000.0, PagingInputs::exhausted(), |_ticket| {
                    calls += 1;
                });
            assert_ne!(outcome, TriggerOutcome::Fired);
            scroll += 25.0;
        }
        assert_eq!(calls, 0);
        assert!(!paging.is_fetching());
    }

    #[test]
    fn host_loading_blocks_without_consuming_the_crossing() {
        let mut paging = InfiniteScroll::new();
        let mut tickets = Vec::new();
        let busy = PagingInputs {
            has_more: true,
            loading: true,
        };
        assert_eq!(
            paging.observe(&at(0.9), 1_000.0, busy, |t| tickets.push(t)),
            TriggerOutcome::Suppressed(Suppressed::HostLoading)
        );
        assert_eq!(
            paging.observe(&at(0.9), 1_000.0, PagingInputs::ready(), |t| tickets.push(t)),
            TriggerOutcome::Fired
        );
    }

    #[test]
    fn reset_lowers_flag_and_arms() {
        let mut paging = InfiniteScroll::with_threshold(0.5);
        let mut tickets = Vec::new();
        paging.observe(&at(0.6), 1_000.0, PagingInputs::ready(), |t| tickets.push(t));
        assert!(paging.is_fetching());
        assert!(!paging.is_armed());

        paging.reset();
        assert!(paging.is_armed());
        assert!(!paging.is_fetching());
        // The abandoned ticket is stale and leaves the flag alone.
        tickets.pop().unwrap().settle();
        assert!(!paging.is_fetching());
    }

    #[test]
    fn stale_ticket_after_reset_does_not_allow_a_duplicate_fetch() {
        let mut paging = InfiniteScroll::new();
        let mut tickets = Vec::new();
        let ready = PagingInputs::ready();
        assert_eq!(
            paging.observe(&at(0.9), 1_000.0, ready, |t| tickets.push(t)),
            TriggerOutcome::Fired
        );
        let abandoned = tickets.pop().unwrap();

        paging.reset();
        assert_eq!(
            paging.observe(&at(0.9), 1_000.0, ready, |t| tickets.push(t)),
            TriggerOutcome::Fired
        );

        // The first request finishes late, while the second is in flight.
        abandoned.settle();
        assert!(paging.is_fetching(), "stale ticket lowered the live fetch");

        paging.observe(&at(0.1), 1_000.0, ready, |t| tickets.push(t));
        assert_eq!(
            paging.observe(&at(0.9), 1_000.0, ready, |t| tickets.push(t)),
            TriggerOutcome::Suppressed(Suppressed::Fetching)
        );
        assert_eq!(tickets.len(), 1);

        tickets.pop().unwrap().settle();
        assert!(!paging.is_fetching());
        assert_eq!(
            paging.observe(&at(0.9), 1_000.0, ready, |t| tickets.push(t)),
            TriggerOutcome::Fired
        );
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(InfiniteScroll::<f32>::with_threshold(3.0).threshold(), 1.0);
        assert_eq!(InfiniteScroll::<f32>::with_threshold(-1.0).threshold(), 0.0);
        assert_eq!(InfiniteScroll::<f32>::new().threshold(), 0.8);
    }
}
