// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strip where every entry has the same extent.

use crate::{ResizableStripModel, Scalar, StripModel};

/// A [`StripModel`] of `len` entries that all share one extent.
///
/// The grid uses this for its rows: every card has the same height, so a row
/// occupies `item_height + grid_space` along the scroll axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformStrip<S: Scalar> {
    len: usize,
    extent: S,
}

impl<S: Scalar> UniformStrip<S> {
    /// Creates a strip of `len` entries, each `extent` long.
    ///
    /// Negative extents are clamped to zero.
    #[must_use]
    pub fn new(len: usize, extent: S) -> Self {
        Self {
            len,
            extent: clamp_extent(extent),
        }
    }

    /// Sets the number of entries.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Sets the shared extent.
    pub fn set_extent(&mut self, extent: S) {
        debug_assert!(
            extent.is_finite(),
            "UniformStrip extents must be finite; got {extent:?}"
        );
        self.extent = clamp_extent(extent);
    }

    /// The shared extent.
    #[must_use]
    pub const fn extent(&self) -> S {
        self.extent
    }
}

fn clamp_extent<S: Scalar>(extent: S) -> S {
    if extent.is_sign_negative() {
        S::zero()
    } else {
        extent
    }
}

impl<S: Scalar> StripModel for UniformStrip<S> {
    type Scalar = S;

    fn len(&self) -> usize {
        self.len
    }

    fn total_extent(&mut self) -> S {
        S::from_usize(self.len) * self.extent
    }

    fn extent_of(&mut self, _index: usize) -> S {
        self.extent
    }

    fn offset_of(&mut self, index: usize) -> S {
        S::from_usize(index) * self.extent
    }

    fn index_at_offset(&mut self, offset: S) -> usize {
        if self.len == 0 || self.extent <= S::zero() {
            return 0;
        }
        let slot = (offset / self.extent).floor_to_isize().max(0);
        #[allow(
            clippy::cast_sign_loss,
            reason = "`slot` is non-negative after the `max(0)` above"
        )]
        let slot = slot as usize;
        slot.min(self.len - 1)
    }
}

impl<S: Scalar> ResizableStripModel for UniformStrip<S> {
    fn set_len(&mut self, len: usize) {
        Self::set_len(self, len);
    }
}
