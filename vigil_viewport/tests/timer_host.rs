// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives the tracker through a host timer that records every call, the way a
//! browser binding would forward to `setTimeout`/`clearTimeout`.

use std::time::Duration;

use vigil_viewport::{TimerHost, ViewportTracker};

#[derive(Default)]
struct RecordingHost {
    next: u32,
    live: Vec<u32>,
    scheduled: Vec<Duration>,
    cancelled: Vec<u32>,
}

impl TimerHost for RecordingHost {
    type Handle = u32;

    fn schedule(&mut self, delay: Duration) -> u32 {
        self.next += 1;
        self.live.push(self.next);
        self.scheduled.push(delay);
        self.next
    }

    fn cancel(&mut self, handle: u32) {
        self.live.retain(|&h| h != handle);
        self.cancelled.push(handle);
    }
}

#[test]
fn every_scroll_cancels_and_reschedules() {
    let mut host = RecordingHost::default();
    let mut tracker = ViewportTracker::with_quiet_period(800.0_f64, Duration::from_millis(90));

    for offset in [10.0, 20.0, 30.0, 30.0] {
        tracker.on_scroll(offset, &mut host);
        assert_eq!(host.live.len(), 1, "more than one live debounce timer");
    }

    assert_eq!(host.scheduled, vec![Duration::from_millis(90); 4]);
    assert_eq!(host.cancelled, vec![1, 2, 3]);
    assert_eq!(tracker.debounce().pending(), Some(4));
}

#[test]
fn only_the_live_timer_settles_scrolling() {
    let mut host = RecordingHost::default();
    let mut tracker = ViewportTracker::new(800.0_f64);

    tracker.on_scroll(100.0, &mut host);
    tracker.on_scroll(200.0, &mut host);

    // A host that raced and delivered the cancelled timer anyway.
    assert!(!tracker.timer_fired(1));
    assert!(tracker.is_scrolling());
    assert!(tracker.timer_fired(2));
    assert!(!tracker.is_scrolling());
}

#[test]
fn teardown_releases_the_timer() {
    let mut host = RecordingHost::default();
    let mut tracker = ViewportTracker::new(800.0_f64);
    tracker.on_scroll(5.0, &mut host);
    tracker.release(&mut host);

    assert!(host.live.is_empty());
    assert_eq!(host.cancelled, vec![1]);

    // Releasing twice does not reach the host again.
    tracker.release(&mut host);
    assert_eq!(host.cancelled.len(), 1);
}
