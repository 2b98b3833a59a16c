// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vigil_viewport --heading-base-level=0

//! Vigil Viewport: scroll and resize tracking for virtualized feeds.
//!
//! [`ViewportTracker`] is the only writer of a feed's
//! [`ViewportState`](vigil_virtual_list::ViewportState). Hosts forward their
//! scroll and container-resize notifications to it and recompute the visible
//! window after every event; the tracker itself does no range math.
//!
//! Alongside the raw state the tracker derives an "is scrolling" flag using a
//! cancel-and-reschedule [`ScrollDebounce`]: each scroll event replaces the one
//! pending timer, and the flag clears once a quiet period (150 ms by default,
//! [`DEFAULT_SCROLL_QUIET`]) passes without events.
//!
//! Timers come from the host through the [`TimerHost`] trait, so the crate
//! stays independent of any event loop. [`DeadlineTimer`] implements it on
//! top of an explicit clock for hosts that advance time themselves.
//!
//! The debounce owns exactly one timer handle. Call
//! [`ViewportTracker::release`] when the list is torn down so the host does
//! not keep a dangling timer.
//!
//! This crate is `no_std`.

#![no_std]

mod timer;
mod tracker;

pub use timer::{DEFAULT_SCROLL_QUIET, DeadlineTimer, ScrollDebounce, TimerHost, TimerId};
pub use tracker::{ScrollDirection, ViewportChange, ViewportTracker};
