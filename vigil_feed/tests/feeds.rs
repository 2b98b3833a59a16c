// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behaviour of feeds driven the way a UI binding drives them.

use std::time::Duration;

use vigil_feed::{FeedConfig, NoPaging, PagingHost, VirtualFeed};
use vigil_paging::{FetchTicket, TriggerOutcome};
use vigil_viewport::{DeadlineTimer, TimerId};
use vigil_virtual_list::{InvalidExtentHandling, ItemExtent, VisibleRange};

#[derive(Default)]
struct Remote {
    pages_left: usize,
    requests: usize,
    in_flight: Option<FetchTicket>,
}

impl PagingHost<f64> for Remote {
    fn has_next_page(&self) -> bool {
        self.pages_left > 0
    }

    fn fetch_next_page(&mut self, ticket: FetchTicket) {
        self.requests += 1;
        self.in_flight = Some(ticket);
    }
}

impl Remote {
    /// Delivers the in-flight page, appending `page` items.
    fn deliver(&mut self, items: &mut Vec<u32>, page: u32) {
        let next = u32::try_from(items.len()).unwrap();
        items.extend(next..next + page);
        self.pages_left -= 1;
        if let Some(ticket) = self.in_flight.take() {
            ticket.settle();
        }
    }
}

#[test]
fn hundred_thousand_tributes() {
    let items = vec![0_u8; 100_000];
    let mut timers = DeadlineTimer::new();
    let mut feed = VirtualFeed::<u8, f64, TimerId>::new(600.0, FeedConfig::default());
    feed.sync(&items, &ItemExtent::fixed(50.0), &mut NoPaging).unwrap();

    feed.on_scroll(127_500.0, &mut timers, &mut NoPaging);
    let window = feed.window().unwrap();
    assert_eq!(window.visible.start, 2_550);
    assert!((2_561..=2_562).contains(&window.visible.end));
    assert!(window.rendered.count() <= 12 + 2 * 5 + 2);

    let pass = feed.render(&items, |_, index| index);
    assert_eq!(pass.spacer_extent, 5_000_000.0);
    assert_eq!(pass.children.len(), window.rendered.count());
}

#[test]
fn feeds_do_not_share_state() {
    let wall: Vec<u8> = vec![0; 1_000];
    let guestbook: Vec<u8> = vec![0; 30];
    let mut timers = DeadlineTimer::new();
    let mut first = VirtualFeed::<u8, f64, TimerId>::new(500.0, FeedConfig::default());
    let mut second = VirtualFeed::<u8, f64, TimerId>::new(500.0, FeedConfig::default());
    let mut wall_host = Remote {
        pages_left: 3,
        ..Remote::default()
    };
    let mut guestbook_host = Remote {
        pages_left: 3,
        ..Remote::default()
    };

    first.sync(&wall, &ItemExtent::fixed(25.0), &mut wall_host).unwrap();
    second
        .sync(&guestbook, &ItemExtent::fixed(25.0), &mut guestbook_host)
        .unwrap();

    first.on_scroll(10_000.0, &mut timers, &mut wall_host);
    assert!(first.is_scrolling());
    assert!(!second.is_scrolling());
    assert_eq!(second.scroll_offset(), 0.0);

    // 30 items of 25 fill 750, so the guestbook sits at 500 / 750 and stays idle.
    assert_eq!(guestbook_host.requests, 0);
    assert!(!second.is_fetching());
    assert_eq!(wall_host.requests, 0);
    assert_eq!(second.visible_range(), Some(VisibleRange::new(0, 19)));
}

#[test]
fn paging_until_exhausted() {
    let mut items: Vec<u32> = (0..20).collect();
    let extent = ItemExtent::fixed(100.0);
    let mut timers = DeadlineTimer::new();
    let mut remote = Remote {
        pages_left: 2,
        ..Remote::default()
    };
    let mut feed = VirtualFeed::<u32, f64, TimerId>::new(500.0, FeedConfig::default());
    feed.sync(&items, &extent, &mut remote).unwrap();
    assert_eq!(remote.requests, 0);

    // 1500 + 500 = 2000 of 2000.
    let update = feed.on_scroll(1_500.0, &mut timers, &mut remote);
    assert_eq!(update.paging, TriggerOutcome::Fired);
    for offset in [1_450.0, 1_500.0, 1_480.0] {
        feed.on_scroll(offset, &mut timers, &mut remote);
    }
    assert_eq!(remote.requests, 1);

    remote.deliver(&mut items, 20);
    feed.sync(&items, &extent, &mut remote).unwrap();
    // 1980 of 4000 is below the threshold.
    assert_eq!(remote.requests, 1);

    feed.on_scroll(3_500.0, &mut timers, &mut remote);
    assert_eq!(remote.requests, 2);
    remote.deliver(&mut items, 20);
    feed.sync(&items, &extent, &mut remote).unwrap();

    feed.on_scroll(5_500.0, &mut timers, &mut remote);
    assert_eq!(remote.requests, 2);
    assert!(!feed.is_fetching());

    for handle in timers.advance_by(Duration::from_millis(150)) {
        feed.timer_fired(handle);
    }
    assert!(!feed.is_scrolling());
    feed.teardown(&mut timers);
    assert_eq!(timers.pending_count(), 0);
}

#[test]
fn shrinking_container_near_the_end() {
    let items = vec![(); 400];
    let mut feed = VirtualFeed::<(), f64, TimerId>::new(600.0, FeedConfig::default());
    let mut timers = DeadlineTimer::new();
    feed.sync(&items, &ItemExtent::fixed(30.0), &mut NoPaging).unwrap();
    feed.on_scroll(11_400.0, &mut timers, &mut NoPaging);
    let before = feed.window().unwrap();
    assert_eq!(before.visible.end, 399);

    feed.on_resize(300.0, &mut NoPaging);
    let after = feed.window().unwrap();
    assert!(after.visible.count() <= before.visible.count());
    assert!(before.rendered.covers(&after.rendered));
    assert_eq!(feed.scroll_offset(), 11_400.0);
}

#[test]
fn invalid_extents_can_be_rejected() {
    let items = vec![10.0, -4.0, 12.0];
    let extent = ItemExtent::from_fn(|_, size: &f64| *size);
    let config = FeedConfig::default().with_extent_handling(InvalidExtentHandling::Error);
    let mut feed = VirtualFeed::<f64, f64, TimerId>::new(100.0, config);

    let err = feed.sync(&items, &extent, &mut NoPaging).unwrap_err();
    assert_eq!(err.index, 1);
    assert_eq!(feed.total_extent(), 0.0);

    let clamped = FeedConfig::default().with_extent_handling(InvalidExtentHandling::Clamp);
    let mut feed = VirtualFeed::<f64, f64, TimerId>::new(100.0, clamped);
    feed.sync(&items, &extent, &mut NoPaging).unwrap();
    assert_eq!(feed.total_extent(), 22.0);
}
