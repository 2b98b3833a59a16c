// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vigil_paging::{FetchTicket, InfiniteScroll, PagingInputs, TriggerOutcome, scroll_fraction};
use vigil_virtual_list::{Scalar, ViewportState};

/// The host side of a paged feed.
///
/// The engine reads `has_next_page` and `is_loading` on every observation and
/// calls `fetch_next_page` once per end-threshold crossing. The host owns the
/// request: it starts it, appends the new items, and settles the ticket,
/// whether the request succeeded or not.
pub trait PagingHost<S> {
    /// More pages exist.
    fn has_next_page(&self) -> bool;

    /// The host is already loading for reasons of its own.
    fn is_loading(&self) -> bool {
        false
    }

    /// Starts loading the next page. Settle `ticket` once it finishes.
    fn fetch_next_page(&mut self, ticket: FetchTicket);

    /// Called for every scroll notification, after the engine recorded it.
    fn on_scroll(&mut self, scroll_offset: S) {
        let _ = scroll_offset;
    }

    /// Called when the viewport moves past the end threshold, once per
    /// crossing, whether or not a page gets requested.
    fn on_end_reached(&mut self) {}
}

/// Host for lists that never page.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoPaging;

impl<S> PagingHost<S> for NoPaging {
    fn has_next_page(&self) -> bool {
        false
    }

    fn fetch_next_page(&mut self, ticket: FetchTicket) {
        ticket.settle();
    }
}

/// Paging trigger plus the edge detector behind `on_end_reached`.
#[derive(Clone, Debug)]
pub(crate) struct EndWatch<S> {
    pub(crate) trigger: InfiniteScroll<S>,
    past_end: bool,
}

impl<S: Scalar> EndWatch<S> {
    pub(crate) fn new(threshold: S) -> Self {
        Self {
            trigger: InfiniteScroll::with_threshold(threshold),
            past_end: false,
        }
    }

    pub(crate) fn observe(
        &mut self,
        viewport: &ViewportState<S>,
        total_extent: S,
        host: &mut impl PagingHost<S>,
    ) -> TriggerOutcome {
        let past = total_extent > S::ZERO
            && scroll_fraction(viewport, total_extent) >= self.trigger.threshold();
        if past && !self.past_end {
            host.on_end_reached();
        }
        self.past_end = past;

        let inputs = PagingInputs {
            has_more: host.has_next_page(),
            loading: host.is_loading(),
        };
        self.trigger
            .observe(viewport, total_extent, inputs, |ticket| host.fetch_next_page(ticket))
    }
}
