// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grids reflowing as the container width changes.

use kurbo::Size;
use vigil_grid::{GridLayout, materialize_grid, resolve_rows};
use vigil_virtual_list::{ExtentModel, Overscan, ViewportState};

#[test]
fn column_count_follows_container_width() {
    let mut layout = GridLayout::new(Size::new(200.0, 200.0), 20.0, 1_000.0);
    let expected = [
        (0.0, 1),
        (199.0, 1),
        (200.0, 1),
        (420.0, 2),
        (639.0, 2),
        (640.0, 3),
        (1_000.0, 4),
        (1_080.0, 5),
    ];
    for (width, columns) in expected {
        layout.set_container_width(width);
        assert_eq!(layout.columns(), columns, "width {width}");
    }
}

#[test]
fn every_item_is_placed_exactly_once() {
    let items: Vec<usize> = (0..257).collect();
    for width in [150.0, 430.0, 999.0, 2_500.0] {
        let layout = GridLayout::new(Size::new(90.0, 60.0), 8.0, width);
        let model = layout.row_model(items.len());
        let viewport = ViewportState::new(0.0, model.total_extent());
        let window = resolve_rows(&layout, items.len(), &viewport, Overscan::Items(0));
        let pass = materialize_grid(&items, &layout, window, |item, _| *item);

        let seen: Vec<usize> = pass.cells().map(|placed| placed.unit).collect();
        assert_eq!(seen, items, "width {width}");
        for placed in pass.cells() {
            assert!(placed.cell.rect.x1 <= layout.content_size(items.len()).width + 1e-9);
            assert_eq!(placed.cell.rect.size(), Size::new(90.0, 60.0));
        }
    }
}

#[test]
fn narrowing_the_grid_keeps_the_window_bounded() {
    let items = vec![(); 500];
    let mut layout = GridLayout::new(Size::new(100.0, 100.0), 0.0, 800.0);
    let viewport = ViewportState::new(3_000.0, 600.0);

    let wide = resolve_rows(&layout, items.len(), &viewport, Overscan::Items(2)).unwrap();
    layout.set_container_width(300.0);
    let narrow = resolve_rows(&layout, items.len(), &viewport, Overscan::Items(2)).unwrap();

    // More rows overall, but the viewport still spans the same number of them.
    assert_eq!(wide.visible.count(), narrow.visible.count());
    assert_eq!(narrow.visible.start, 30);
    assert!(narrow.rendered.end < layout.rows(items.len()));
}
