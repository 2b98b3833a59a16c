// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction for extents, offsets, and scroll positions.
//!
//! Only `f32` and `f64` implement [`Scalar`]. Everything here is available in
//! `core`, so the trait works without `std` or `libm`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Coordinate type used along the scroll axis.
///
/// The engine only needs ordering, the four arithmetic operators, and a
/// handful of conversions to and from indices.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Converts an index or count, lossily for very large values.
    fn from_usize(value: usize) -> Self;

    /// Returns `true` if the value is neither NaN nor infinite.
    fn is_finite(self) -> bool;

    /// Returns the larger of `self` and `other`.
    fn max(self, other: Self) -> Self;

    /// Returns the smaller of `self` and `other`.
    fn min(self, other: Self) -> Self;

    /// Floors a value into an index.
    ///
    /// Negative values and NaN map to `0`; values past `usize::MAX` saturate.
    fn floor_to_usize(self) -> usize;

    /// Rounds a value up into an index, with the same saturation rules as
    /// [`Scalar::floor_to_usize`].
    fn ceil_to_usize(self) -> usize {
        let floor = self.floor_to_usize();
        if Self::from_usize(floor) < self {
            floor.saturating_add(1)
        } else {
            floor
        }
    }

    /// Maps NaN, infinities, and negative values to zero.
    ///
    /// Host-supplied positions and sizes go through this before they reach
    /// any index arithmetic.
    fn sanitize(self) -> Self {
        if self.is_finite() && self > Self::ZERO {
            self
        } else {
            Self::ZERO
        }
    }

    /// Returns half of the value.
    fn half(self) -> Self {
        self / (Self::ONE + Self::ONE)
    }
}

macro_rules! impl_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn from_usize(value: usize) -> Self {
                value as Self
            }

            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }

            fn max(self, other: Self) -> Self {
                <$ty>::max(self, other)
            }

            fn min(self, other: Self) -> Self {
                <$ty>::min(self, other)
            }

            fn floor_to_usize(self) -> usize {
                // Float-to-int `as` saturates and maps NaN to zero; truncation
                // equals floor once negatives are excluded.
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "Saturating conversion into an index, clamped by callers"
                )]
                {
                    if self > 0.0 { self as usize } else { 0 }
                }
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);
