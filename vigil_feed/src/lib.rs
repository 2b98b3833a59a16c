// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vigil_feed --heading-base-level=0

//! Vigil Feed: one virtualization engine per list.
//!
//! This crate wires the lower layers into a single object a UI binding can
//! drive from its event handlers:
//!
//! - [`vigil_virtual_list`] memoizes offsets and resolves the visible window.
//! - [`vigil_viewport`] records scroll and resize events and debounces the
//!   "is scrolling" flag through the host's timers.
//! - [`vigil_paging`] requests the next page when the viewport nears the end.
//! - [`vigil_grid`] provides the closed-form geometry behind [`VirtualGrid`].
//!
//! A [`VirtualFeed`] (or [`VirtualGrid`]) is created per list with a
//! [`FeedConfig`] and holds no global state, so any number of feeds can live
//! on one page. Paging goes through the [`PagingHost`] trait; lists without
//! paging pass [`NoPaging`].
//!
//! ```rust
//! use vigil_feed::{FeedConfig, PagingHost, VirtualFeed};
//! use vigil_paging::FetchTicket;
//! use vigil_viewport::{DeadlineTimer, TimerId};
//! use vigil_virtual_list::ItemExtent;
//!
//! struct Guestbook {
//!     pending: Option<FetchTicket>,
//! }
//!
//! impl PagingHost<f64> for Guestbook {
//!     fn has_next_page(&self) -> bool {
//!         true
//!     }
//!
//!     fn fetch_next_page(&mut self, ticket: FetchTicket) {
//!         // Start the request; settle the ticket when it completes.
//!         self.pending = Some(ticket);
//!     }
//! }
//!
//! let entries: Vec<String> = (0..200).map(|i| format!("Entry {i}")).collect();
//! let extent = ItemExtent::fixed(64.0);
//! let mut host = Guestbook { pending: None };
//! let mut timers = DeadlineTimer::new();
//!
//! let mut feed = VirtualFeed::<String, f64, TimerId>::new(640.0, FeedConfig::default());
//! feed.sync(&entries, &extent, &mut host).unwrap();
//! feed.on_scroll(11_000.0, &mut timers, &mut host);
//!
//! let pass = feed.render(&entries, |entry, _| entry.clone());
//! assert_eq!(pass.spacer_extent, 12_800.0);
//! assert_eq!(pass.children[0].unit, "Entry 166");
//! assert!(feed.is_scrolling());
//! assert!(host.pending.is_some());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod feed;
mod grid_feed;
mod host;

pub use config::FeedConfig;
pub use feed::{FeedDebugInfo, FeedUpdate, VirtualFeed};
pub use grid_feed::VirtualGrid;
pub use host::{NoPaging, PagingHost};
