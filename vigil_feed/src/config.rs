// Copyright 2026 the Vigil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use vigil_paging::InfiniteScroll;
use vigil_viewport::DEFAULT_SCROLL_QUIET;
use vigil_virtual_list::{InvalidExtentHandling, Overscan, Scalar};

/// Per-list engine configuration.
///
/// Every field has a working default: five items of overscan, paging at 80%
/// of the content, a 150 ms scroll-settle period, and invalid extents clamped
/// to zero after a debug assertion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FeedConfig<S> {
    /// Extra items (rows, for grids) materialized around the visible range.
    pub overscan: Overscan<S>,
    /// Scroll fraction in `[0, 1]` at which the next page is requested.
    pub end_threshold: S,
    /// Quiet period after which scrolling counts as settled.
    pub scroll_quiet: Duration,
    /// What to do when the sizing function returns an invalid extent.
    pub extent_handling: InvalidExtentHandling,
}

impl<S: Scalar> Default for FeedConfig<S> {
    fn default() -> Self {
        Self {
            overscan: Overscan::default(),
            end_threshold: InfiniteScroll::<S>::default_threshold(),
            scroll_quiet: DEFAULT_SCROLL_QUIET,
            extent_handling: InvalidExtentHandling::default(),
        }
    }
}

impl<S: Scalar> FeedConfig<S> {
    /// Returns the config with `overscan` replaced.
    #[must_use]
    pub fn with_overscan(mut self, overscan: Overscan<S>) -> Self {
        self.overscan = overscan;
        self
    }

    /// Returns the config with the end threshold replaced.
    #[must_use]
    pub fn with_end_threshold(mut self, threshold: S) -> Self {
        self.end_threshold = threshold;
        self
    }

    /// Returns the config with the scroll-settle quiet period replaced.
    #[must_use]
    pub fn with_scroll_quiet(mut self, quiet: Duration) -> Self {
        self.scroll_quiet = quiet;
        self
    }

    /// Returns the config with the invalid-extent handling replaced.
    #[must_use]
    pub fn with_extent_handling(mut self, handling: InvalidExtentHandling) -> Self {
        self.extent_handling = handling;
        self
    }
}
