// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vigil_paging --heading-base-level=0

//! Vigil Paging: infinite-scroll triggering for virtualized feeds.
//!
//! Memorial feeds load tributes a page at a time. [`InfiniteScroll`] watches
//! the same viewport the virtual list resolves against and asks the host for
//! the next page when the end of the viewport passes a fraction of the total
//! content (0.8 by default).
//!
//! The asynchronous part, the actual request, belongs to the host. The two
//! sides coordinate through a [`FetchingFlag`]:
//!
//! - On a threshold crossing the trigger raises the flag and passes a
//!   [`FetchTicket`] to the host's fetch callback.
//! - The host settles the ticket (or clears the flag) once the request
//!   finishes, whatever the outcome.
//! - While the flag is raised, or the host reports no further pages, nothing
//!   is requested.
//!
//! The trigger never retries and never times out a fetch. A host that never
//! settles its ticket stops paging; that is a misuse of the protocol, not
//! something the trigger guards against.
//!
//! Pass/fail details of each observation are reported as a
//! [`TriggerOutcome`], and logged through the `log` facade at `trace`
//! (suppressed) and `debug` (fired) levels.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod flag;
mod trigger;

pub use flag::{FetchTicket, FetchingFlag};
pub use trigger::{InfiniteScroll, PagingInputs, Suppressed, TriggerOutcome, scroll_fraction};
