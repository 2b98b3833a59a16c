// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for a full scroll-event round trip through `vigil_feed`.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use vigil_feed::{FeedConfig, NoPaging, VirtualFeed};
use vigil_viewport::{DeadlineTimer, TimerId};
use vigil_virtual_list::ItemExtent;

fn bench_feed(c: &mut Criterion) {
    let mut group = c.benchmark_group("vigil_feed");
    group.sample_size(50);

    for &n in &[10_000_usize, 100_000] {
        let items: Vec<u32> = (0..n).map(|i| u32::try_from(i).unwrap_or(u32::MAX)).collect();
        let extent = ItemExtent::from_fn(|_, id: &u32| 48.0 + f64::from(id % 5) * 12.0);

        group.bench_function(format!("scroll_and_render(n={n})"), |b| {
            b.iter_batched(
                || {
                    let mut feed =
                        VirtualFeed::<u32, f64, TimerId>::new(900.0, FeedConfig::default());
                    let _ = feed.sync(&items, &extent, &mut NoPaging);
                    (feed, DeadlineTimer::new())
                },
                |(mut feed, mut timers)| {
                    let mut checksum = 0_u64;
                    for step in 0..120_u32 {
                        feed.on_scroll(f64::from(step) * 37.0, &mut timers, &mut NoPaging);
                        let pass = feed.render(&items, |id, _| *id);
                        checksum += pass
                            .children
                            .iter()
                            .map(|child| u64::from(child.unit))
                            .sum::<u64>();
                    }
                    black_box(checksum)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_feed);
criterion_main!(benches);
