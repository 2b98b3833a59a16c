// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible range resolution.

use crate::{ExtentModel, Overscan, Scalar, ViewportState, VisibleRange, VisibleWindow};

/// Upper bound on the index nudges applied after the initial lookup.
///
/// Table lookups are exact; closed-form models can be one slot off after
/// floating-point division.
const MAX_CORRECTION_STEPS: usize = 4;

/// Resolves which items intersect `viewport`, plus overscan.
///
/// Finds the greatest index starting at or before the scroll offset with
/// [`ExtentModel::index_at_offset`], nudges it back onto the covering item if
/// the lookup overshot, then walks forward until the next item would start at
/// or past the end of the viewport. The strictly visible range is then widened
/// by `overscan` and clamped to the collection.
///
/// Runs in `O(log N)` model lookups regardless of how many items fall inside
/// the viewport, so long runs of zero-extent items (clamped invalid sizes, or
/// grid rows with no height) stay cheap to resolve. Materializing such a
/// window still visits every item in it.
///
/// - An empty model yields `None`.
/// - A non-positive container yields a single-item window at the scroll
///   position, without overscan.
/// - Scroll offsets past the end clamp to the last item; negative or NaN
///   offsets count as zero.
///
/// ```rust
/// use vigil_virtual_list::{
///     compute_offsets, resolve_visible, InvalidExtentHandling, ItemExtent, Overscan,
///     ViewportState, VisibleRange,
/// };
///
/// let items = vec![(); 100];
/// let table = compute_offsets(&items, &ItemExtent::fixed(20.0), InvalidExtentHandling::Clamp)
///     .unwrap();
/// let window = resolve_visible(&table, &ViewportState::new(95.0, 60.0), Overscan::Items(2))
///     .unwrap();
///
/// assert_eq!(window.visible, VisibleRange::new(4, 7));
/// assert_eq!(window.rendered, VisibleRange::new(2, 9));
/// ```
pub fn resolve_visible<M: ExtentModel>(
    model: &M,
    viewport: &ViewportState<M::Scalar>,
    overscan: Overscan<M::Scalar>,
) -> Option<VisibleWindow> {
    let len = model.len();
    if len == 0 {
        return None;
    }
    let last = len - 1;
    let zero = M::Scalar::ZERO;
    let scroll = viewport.scroll_offset.sanitize();
    let container = viewport.container_extent.sanitize();

    let mut start = model.index_at_offset(scroll).min(last);
    let mut steps = 0;
    while start > 0 && steps < MAX_CORRECTION_STEPS && model.offset_of(start) > scroll {
        start -= 1;
        steps += 1;
    }
    steps = 0;
    while start < last && steps < MAX_CORRECTION_STEPS && model.offset_of(start + 1) <= scroll {
        start += 1;
        steps += 1;
    }

    if container <= zero {
        let only = VisibleRange::single(start);
        return Some(VisibleWindow {
            visible: only,
            rendered: only,
        });
    }

    let limit = scroll + container;
    let end = last_starting_before(model, start, limit);
    let visible = VisibleRange::new(start, end);

    let rendered = match overscan {
        Overscan::Items(count) => visible.expand(count, count, len),
        Overscan::Distance(distance) => {
            let distance = distance.sanitize();
            let lead = if scroll > distance {
                scroll - distance
            } else {
                zero
            };
            let before = model.index_at_offset(lead).min(start);
            let after = model.index_at_offset(limit + distance).clamp(end, last);
            VisibleRange::new(before, after)
        }
    };

    Some(VisibleWindow { visible, rendered })
}

/// Greatest index in `from..len` whose start offset is `< limit`.
///
/// `model.offset_of(from)` must already be below `limit`.
fn last_starting_before<M: ExtentModel>(model: &M, from: usize, limit: M::Scalar) -> usize {
    // Invariant: offset_of(lo) < limit, and every index >= hi starts at or past it.
    let mut lo = from;
    let mut hi = model.len();
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if model.offset_of(mid) < limit {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}
