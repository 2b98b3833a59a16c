// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render windows: turning a resolved range into positioned host output.

use alloc::vec::Vec;
use core::convert::Infallible;

use crate::{ExtentModel, VisibleWindow};

/// Geometry of one materialized item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement<S> {
    /// Index into the item collection.
    pub index: usize,
    /// Start offset inside the spacer.
    pub offset: S,
    /// Extent along the scroll axis.
    pub extent: S,
}

/// One rendered unit positioned inside the spacer.
#[derive(Clone, Debug, PartialEq)]
pub struct Placed<R, S> {
    /// Where the unit goes.
    pub placement: Placement<S>,
    /// Whatever the host's render callback produced.
    pub unit: R,
}

/// Output of a materialization pass.
///
/// Hosts size a spacer to `spacer_extent` so native scrollbars reflect the
/// full content, then position each child absolutely at its offset.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPass<R, S> {
    /// Total content extent.
    pub spacer_extent: S,
    /// The window that was materialized, if any.
    pub window: Option<VisibleWindow>,
    /// Rendered children in index order.
    pub children: Vec<Placed<R, S>>,
}

impl<R, S> RenderPass<R, S> {
    /// Indices that were rendered, in order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.children.iter().map(|child| child.placement.index)
    }
}

/// Calls `f` with the placement of every index in `window.rendered`.
///
/// This is the allocation-free form of [`materialize`] for hosts that keep
/// their own child storage.
pub fn for_each_placement<M: ExtentModel>(
    model: &M,
    window: Option<VisibleWindow>,
    mut f: impl FnMut(Placement<M::Scalar>),
) {
    let Some(window) = window else {
        return;
    };
    let len = model.len();
    for index in window.rendered.indices() {
        if index >= len {
            break;
        }
        f(Placement {
            index,
            offset: model.offset_of(index),
            extent: model.extent_of(index),
        });
    }
}

/// Materializes `window` by calling `render_item(item, index)` for each index.
///
/// The callback is treated as pure; it may run again for the same item on a
/// later pass. Indices that fall outside `items` (the collection shrank
/// without a resync) are skipped. Panics raised by the callback unwind
/// through this function untouched.
pub fn materialize<T, M: ExtentModel, R>(
    items: &[T],
    model: &M,
    window: Option<VisibleWindow>,
    mut render_item: impl FnMut(&T, usize) -> R,
) -> RenderPass<R, M::Scalar> {
    let pass = try_materialize(items, model, window, |item, index| {
        Ok::<_, Infallible>(render_item(item, index))
    });
    match pass {
        Ok(pass) => pass,
        Err(never) => match never {},
    }
}

/// Like [`materialize`], with a fallible render callback.
///
/// # Errors
///
/// Returns the first error produced by `render_item`, unchanged. Items
/// rendered before the failure are dropped.
pub fn try_materialize<T, M: ExtentModel, R, E>(
    items: &[T],
    model: &M,
    window: Option<VisibleWindow>,
    mut render_item: impl FnMut(&T, usize) -> Result<R, E>,
) -> Result<RenderPass<R, M::Scalar>, E> {
    let mut children = Vec::with_capacity(window.map_or(0, |w| w.rendered.count()));
    let mut failure = None;
    for_each_placement(model, window, |placement| {
        if failure.is_some() {
            return;
        }
        let Some(item) = items.get(placement.index) else {
            return;
        };
        match render_item(item, placement.index) {
            Ok(unit) => children.push(Placed { placement, unit }),
            Err(err) => failure = Some(err),
        }
    });
    if let Some(err) = failure {
        return Err(err);
    }
    Ok(RenderPass {
        spacer_extent: model.total_extent(),
        window,
        children,
    })
}
