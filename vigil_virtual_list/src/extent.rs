// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sizing policies for items along the scroll axis.

use alloc::rc::Rc;
use core::fmt;

use crate::Scalar;

/// How large each item is along the scroll axis.
///
/// An extent is either one constant shared by every item, or a function of
/// `(index, item)`. Functions must be deterministic and free of side effects:
/// the engine only re-evaluates them when the offset table is rebuilt, so a
/// function that answers differently for the same input shows up as visual
/// jitter rather than an error.
///
/// Identity matters for memoization. Two [`ItemExtent::Measured`] values are the
/// same policy only if they share the same `Rc` allocation; cloning an
/// `ItemExtent` keeps the identity, wrapping the same closure again does not.
pub enum ItemExtent<T, S> {
    /// Every item has the same extent.
    Fixed(S),
    /// Per-item extent computed from the index and the item.
    Measured(Rc<dyn Fn(usize, &T) -> S>),
}

impl<T, S: Scalar> ItemExtent<T, S> {
    /// Creates a constant extent.
    #[must_use]
    pub fn fixed(extent: S) -> Self {
        Self::Fixed(extent)
    }

    /// Wraps a per-item extent function.
    #[must_use]
    pub fn from_fn(f: impl Fn(usize, &T) -> S + 'static) -> Self {
        Self::Measured(Rc::new(f))
    }

    /// Evaluates the raw, unvalidated extent of one item.
    #[must_use]
    pub fn extent_of(&self, index: usize, item: &T) -> S {
        match self {
            Self::Fixed(extent) => *extent,
            Self::Measured(f) => f(index, item),
        }
    }

    /// Returns `true` if both values describe the same sizing policy.
    ///
    /// Fixed extents compare by value, functions by allocation.
    #[must_use]
    pub fn same_policy(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Fixed(a), Self::Fixed(b)) => a == b,
            (Self::Measured(a), Self::Measured(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T, S: Copy> Clone for ItemExtent<T, S> {
    fn clone(&self) -> Self {
        match self {
            Self::Fixed(extent) => Self::Fixed(*extent),
            Self::Measured(f) => Self::Measured(Rc::clone(f)),
        }
    }
}

impl<T, S: fmt::Debug> fmt::Debug for ItemExtent<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(extent) => f.debug_tuple("Fixed").field(extent).finish(),
            Self::Measured(func) => f
                .debug_tuple("Measured")
                .field(&Rc::as_ptr(func).cast::<()>())
                .finish(),
        }
    }
}

/// What to do with an extent that is negative, NaN, or infinite.
///
/// The chosen handling is applied to every item of a rebuild, so one table
/// never mixes asserted and clamped entries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum InvalidExtentHandling {
    /// Panic in debug builds, clamp to zero in release builds.
    #[default]
    DebugAssert,
    /// Clamp to zero in every build.
    Clamp,
    /// Abort the rebuild with an [`ExtentError`].
    Error,
}

impl InvalidExtentHandling {
    /// Validates one extent according to this handling.
    ///
    /// # Errors
    ///
    /// Returns [`ExtentError`] for invalid extents when the handling is
    /// [`InvalidExtentHandling::Error`].
    pub fn check<S: Scalar>(self, index: usize, extent: S) -> Result<S, ExtentError<S>> {
        if extent.is_finite() && extent >= S::ZERO {
            return Ok(extent);
        }
        match self {
            Self::DebugAssert => {
                debug_assert!(
                    false,
                    "item {index} has invalid extent {extent:?}; extents must be finite and non-negative"
                );
                Ok(S::ZERO)
            }
            Self::Clamp => Ok(S::ZERO),
            Self::Error => Err(ExtentError { index, extent }),
        }
    }
}

/// Error returned when an extent function yields an invalid size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExtentError<S> {
    /// Index of the offending item.
    pub index: usize,
    /// The value the extent function returned.
    pub extent: S,
}

impl<S: fmt::Debug> fmt::Display for ExtentError<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "item {} has extent {:?}; extents must be finite and non-negative",
            self.index, self.extent
        )
    }
}

impl<S: fmt::Debug> core::error::Error for ExtentError<S> {}
