// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::Cell;

#[derive(Copy, Clone, Debug, Default)]
struct FlagState {
    fetching: bool,
    /// Bumped on every raise and revoke; a ticket only settles its own epoch.
    epoch: u64,
}

/// Shared "a page fetch is in flight" flag.
///
/// Two parties write it under a fixed protocol: the trigger raises it when it
/// asks the host for a page, and the host clears it once that fetch settles,
/// successfully or not. While it is raised no further pages are requested. A
/// host that never clears it simply stops paging; the trigger does not time
/// out or retry.
///
/// Each raise starts a new epoch. A [`FetchTicket`] from an earlier epoch no
/// longer lowers the flag, so a request abandoned by
/// [`InfiniteScroll::reset`](crate::InfiniteScroll::reset) cannot release the
/// fetch that replaced it.
///
/// The flag is reference counted and `!Send`: it lives on the UI thread with
/// the list it belongs to.
#[derive(Clone, Debug, Default)]
pub struct FetchingFlag(Rc<Cell<FlagState>>);

impl FetchingFlag {
    /// Creates a lowered flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a fetch is in flight.
    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.0.get().fetching
    }

    /// Lowers the flag, whichever fetch raised it. Host side of the protocol.
    pub fn clear(&self) {
        let state = self.0.get();
        self.0.set(FlagState {
            fetching: false,
            ..state
        });
    }

    /// Raises the flag and hands out the ticket the host settles later.
    pub(crate) fn raise(&self) -> FetchTicket {
        let epoch = self.0.get().epoch.wrapping_add(1);
        self.0.set(FlagState {
            fetching: true,
            epoch,
        });
        FetchTicket {
            flag: self.clone(),
            epoch,
        }
    }

    /// Lowers the flag and orphans every outstanding ticket.
    pub(crate) fn revoke(&self) {
        let epoch = self.0.get().epoch.wrapping_add(1);
        self.0.set(FlagState {
            fetching: false,
            epoch,
        });
    }
}

/// Proof that a page was requested; settle it when the fetch finishes.
///
/// The ticket is `'static`, so it can move into whatever future or callback
/// performs the request. Dropping it without settling leaves the flag raised.
#[must_use = "paging stalls until the ticket is settled"]
#[derive(Debug)]
pub struct FetchTicket {
    flag: FetchingFlag,
    epoch: u64,
}

impl FetchTicket {
    /// Lowers the fetching flag, allowing the next threshold crossing to fire.
    ///
    /// Does nothing if the flag was raised again or revoked since this ticket
    /// was issued.
    pub fn settle(self) {
        if self.is_current() {
            self.flag.clear();
        }
    }

    /// Returns `true` if settling this ticket would lower the flag.
    #[must_use]
    pub fn is_current(&self) -> bool {
        let state = self.flag.0.get();
        state.fetching && state.epoch == self.epoch
    }

    /// The flag this ticket settles.
    #[must_use]
    pub fn flag(&self) -> &FetchingFlag {
        &self.flag
    }
}
