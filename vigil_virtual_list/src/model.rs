// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Scalar;

/// A dense strip of items `0..len` with known start offsets.
///
/// Implementors answer prefix-sum queries: where an item starts, how large it
/// is, and which item covers a given offset. The resolver and materializer
/// only talk to this trait, so list tables and closed-form grid rows share one
/// code path.
///
/// Offsets must be non-decreasing in the index, with `offset_of(0) == 0` and
/// `offset_of(len) == total_extent()`.
pub trait ExtentModel {
    /// Scalar type for offsets and extents.
    type Scalar: Scalar;

    /// Number of items in the strip.
    fn len(&self) -> usize;

    /// Returns `true` if the strip has no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all item extents.
    fn total_extent(&self) -> Self::Scalar;

    /// Start offset of `index`, for `index` in `0..=len`.
    ///
    /// Indices past `len` return the total extent.
    fn offset_of(&self, index: usize) -> Self::Scalar;

    /// Extent of the item at `index`, or zero past the end.
    fn extent_of(&self, index: usize) -> Self::Scalar {
        if index >= self.len() {
            return Self::Scalar::ZERO;
        }
        self.offset_of(index + 1) - self.offset_of(index)
    }

    /// Greatest index whose start offset is `<= offset`, clamped to `0..len`.
    ///
    /// Returns `0` for an empty strip.
    fn index_at_offset(&self, offset: Self::Scalar) -> usize;
}
