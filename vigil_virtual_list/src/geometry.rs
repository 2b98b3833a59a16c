// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset tables: cumulative start positions for every item.

use alloc::vec::Vec;

use crate::{ExtentError, ExtentModel, InvalidExtentHandling, ItemExtent, Scalar};

/// Prefix sums of item extents.
///
/// Holds `len + 1` entries: `offsets[i]` is where item `i` starts and the last
/// entry is the total extent. Entries are non-decreasing because every extent
/// is validated before it is accumulated.
#[derive(Clone, Debug, PartialEq)]
pub struct OffsetTable<S> {
    offsets: Vec<S>,
}

impl<S: Scalar> Default for OffsetTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scalar> OffsetTable<S> {
    /// Creates a table for an empty collection.
    #[must_use]
    pub fn new() -> Self {
        let mut offsets = Vec::with_capacity(1);
        offsets.push(S::ZERO);
        Self { offsets }
    }

    /// Returns all `len + 1` offsets.
    #[must_use]
    pub fn offsets(&self) -> &[S] {
        &self.offsets
    }
}

impl<S: Scalar> ExtentModel for OffsetTable<S> {
    type Scalar = S;

    fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    fn total_extent(&self) -> S {
        self.offsets[self.offsets.len() - 1]
    }

    fn offset_of(&self, index: usize) -> S {
        let last = self.offsets.len() - 1;
        self.offsets[index.min(last)]
    }

    fn index_at_offset(&self, offset: S) -> usize {
        let len = self.len();
        if len == 0 {
            return 0;
        }
        // Number of item starts at or before `offset`; offsets[0] == 0 so this
        // is at least one for any non-negative offset.
        let count = self.offsets[..len].partition_point(|&start| start <= offset);
        count.saturating_sub(1)
    }
}

/// Builds the offset table for `items` in one linear pass.
///
/// Every extent goes through `handling`, so a table is either entirely
/// validated-and-clamped or the build fails on the first invalid item.
///
/// # Errors
///
/// Returns [`ExtentError`] for the first invalid extent when `handling` is
/// [`InvalidExtentHandling::Error`].
///
/// ```rust
/// use vigil_virtual_list::{compute_offsets, ExtentModel, InvalidExtentHandling, ItemExtent};
///
/// let posts = ["short", "a much longer tribute", "mid length"];
/// let extent = ItemExtent::from_fn(|_, text: &&str| text.len() as f64 * 2.0);
/// let table = compute_offsets(&posts, &extent, InvalidExtentHandling::default()).unwrap();
///
/// assert_eq!(table.offsets(), &[0.0, 10.0, 52.0, 72.0]);
/// assert_eq!(table.total_extent(), 72.0);
/// ```
pub fn compute_offsets<T, S: Scalar>(
    items: &[T],
    extent: &ItemExtent<T, S>,
    handling: InvalidExtentHandling,
) -> Result<OffsetTable<S>, ExtentError<S>> {
    let mut offsets = Vec::with_capacity(items.len() + 1);
    let mut running = S::ZERO;
    offsets.push(running);
    for (index, item) in items.iter().enumerate() {
        let size = handling.check(index, extent.extent_of(index, item))?;
        running = running + size;
        offsets.push(running);
    }
    Ok(OffsetTable { offsets })
}

/// Memoizes an [`OffsetTable`] on `(collection length, extent policy)`.
///
/// [`OffsetCache::sync`] rebuilds the whole table when either key changes and
/// is a no-op otherwise; scroll events never touch it. Hosts that mutate items
/// in place without changing the length or the policy must call
/// [`OffsetCache::invalidate`] to pick up new sizes.
#[derive(Debug)]
pub struct OffsetCache<T, S> {
    table: OffsetTable<S>,
    key: Option<(usize, ItemExtent<T, S>)>,
    handling: InvalidExtentHandling,
    rebuilds: u64,
}

impl<T, S: Scalar> OffsetCache<T, S> {
    /// Creates an empty cache using `handling` for every rebuild.
    #[must_use]
    pub fn new(handling: InvalidExtentHandling) -> Self {
        Self {
            table: OffsetTable::new(),
            key: None,
            handling,
            rebuilds: 0,
        }
    }

    /// Returns the current table.
    #[must_use]
    pub fn table(&self) -> &OffsetTable<S> {
        &self.table
    }

    /// Returns the invalid-extent handling applied on rebuild.
    #[must_use]
    pub fn handling(&self) -> InvalidExtentHandling {
        self.handling
    }

    /// Changes the invalid-extent handling; the next sync rebuilds.
    pub fn set_handling(&mut self, handling: InvalidExtentHandling) {
        if self.handling != handling {
            self.handling = handling;
            self.key = None;
        }
    }

    /// Number of full rebuilds performed so far.
    #[must_use]
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Forces the next [`OffsetCache::sync`] to rebuild.
    pub fn invalidate(&mut self) {
        self.key = None;
    }

    /// Rebuilds the table if the length or the extent policy changed.
    ///
    /// Returns `true` when a rebuild happened. On error the previous table is
    /// kept and the next sync tries again.
    ///
    /// # Errors
    ///
    /// Propagates [`ExtentError`] from [`compute_offsets`].
    pub fn sync(&mut self, items: &[T], extent: &ItemExtent<T, S>) -> Result<bool, ExtentError<S>> {
        if let Some((len, cached)) = &self.key {
            if *len == items.len() && cached.same_policy(extent) {
                return Ok(false);
            }
        }
        self.key = None;
        self.table = compute_offsets(items, extent, self.handling)?;
        self.key = Some((items.len(), extent.clone()));
        self.rebuilds += 1;
        Ok(true)
    }
}
