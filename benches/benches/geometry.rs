// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for offset table construction and visible range resolution.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use vigil_grid::{GridLayout, resolve_rows};
use vigil_virtual_list::{
    InvalidExtentHandling, ItemExtent, OffsetCache, Overscan, ViewportState, compute_offsets,
    resolve_visible,
};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }
}

/// Entry heights between 40 and 295, like guestbook messages of varying length.
fn jagged_heights(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| 40.0 + f64::from(rng.next_u32() % 256)).collect()
}

fn bench_offsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("vigil_offsets");
    group.sample_size(50);

    for &n in &[1_000_usize, 10_000, 100_000] {
        let heights = jagged_heights(n, 0x5EED_0000_0000_0001);
        let measured = ItemExtent::from_fn(|_, h: &f64| *h);
        let fixed = ItemExtent::fixed(50.0);

        group.bench_function(format!("compute_fixed(n={n})"), |b| {
            b.iter(|| {
                let table = compute_offsets(&heights, &fixed, InvalidExtentHandling::Clamp);
                black_box(table)
            });
        });

        group.bench_function(format!("compute_measured(n={n})"), |b| {
            b.iter(|| {
                let table = compute_offsets(&heights, &measured, InvalidExtentHandling::Clamp);
                black_box(table)
            });
        });

        // Repeated syncs with an unchanged collection hit the memoized table.
        group.bench_function(format!("cache_sync_unchanged(n={n})"), |b| {
            b.iter_batched(
                || {
                    let mut cache = OffsetCache::new(InvalidExtentHandling::Clamp);
                    let _ = cache.sync(&heights, &measured);
                    cache
                },
                |mut cache| {
                    for _ in 0..64 {
                        let _ = black_box(cache.sync(&heights, &measured));
                    }
                    black_box(cache.rebuild_count())
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("vigil_resolve");

    for &n in &[1_000_usize, 100_000] {
        let heights = jagged_heights(n, 0x5EED_0000_0000_0002);
        let Ok(table) = compute_offsets(
            &heights,
            &ItemExtent::from_fn(|_, h: &f64| *h),
            InvalidExtentHandling::Clamp,
        ) else {
            continue;
        };
        let total: f64 = heights.iter().sum();
        let offsets: Vec<f64> = {
            let mut rng = Lcg::new(0x5EED_0000_0000_0003);
            (0..256)
                .map(|_| total * f64::from(rng.next_u32()) / f64::from(u32::MAX))
                .collect()
        };

        group.bench_function(format!("scroll_sweep(n={n})"), |b| {
            b.iter(|| {
                let mut rendered = 0;
                for &offset in &offsets {
                    let viewport = ViewportState::new(offset, 800.0);
                    if let Some(window) = resolve_visible(&table, &viewport, Overscan::Items(5)) {
                        rendered += window.rendered.count();
                    }
                }
                black_box(rendered)
            });
        });

        group.bench_function(format!("scroll_sweep_distance_overscan(n={n})"), |b| {
            b.iter(|| {
                let mut rendered = 0;
                for &offset in &offsets {
                    let viewport = ViewportState::new(offset, 800.0);
                    let overscan = Overscan::Distance(400.0);
                    if let Some(window) = resolve_visible(&table, &viewport, overscan) {
                        rendered += window.rendered.count();
                    }
                }
                black_box(rendered)
            });
        });
    }

    let layout = GridLayout::new(Size::new(180.0, 240.0), 12.0, 1_280.0);
    group.bench_function("grid_rows(n=100000)", |b| {
        b.iter(|| {
            let mut rows = 0;
            for step in 0..256_u32 {
                let viewport = ViewportState::new(f64::from(step) * 1_700.0, 900.0);
                let window = resolve_rows(&layout, 100_000, &viewport, Overscan::Items(2));
                if let Some(window) = window {
                    rows += window.rendered.count();
                }
            }
            black_box(rows)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_offsets, bench_resolve);
criterion_main!(benches);
