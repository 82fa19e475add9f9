// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scroll-axis model: a dense strip of entries with known extents.

use crate::Scalar;

/// The slice of a strip that intersects the scroll window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleWindow<S: Scalar> {
    /// First entry to materialize (inclusive).
    pub start: usize,
    /// One past the last entry to materialize (exclusive).
    pub end: usize,
    /// Extent of everything before `start`.
    pub before_extent: S,
    /// Extent of everything after `end`.
    pub after_extent: S,
    /// Extent of the whole strip, i.e. the height of the scroll placeholder.
    pub content_extent: S,
}

impl<S: Scalar> VisibleWindow<S> {
    /// A window with nothing in it and no content.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            start: 0,
            end: 0,
            before_extent: S::zero(),
            after_extent: S::zero(),
            content_extent: S::zero(),
        }
    }

    /// Returns `true` if no entries are visible.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of visible entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }
}

/// A strip of entries indexed `0..len` along the scroll axis.
///
/// Offsets and extents share one coordinate space with the scroll offset and
/// viewport height. Queries take `&mut self` so implementations may cache.
pub trait StripModel {
    /// Coordinate type.
    type Scalar: Scalar;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the strip has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Extent of the whole strip.
    fn total_extent(&mut self) -> Self::Scalar;

    /// Extent of entry `index`. Never negative.
    fn extent_of(&mut self, index: usize) -> Self::Scalar;

    /// Start offset of entry `index`.
    ///
    /// `offset_of(0)` is zero and offsets never decrease with the index.
    fn offset_of(&mut self, index: usize) -> Self::Scalar;

    /// The entry whose start is at or before `offset`, clamped into range.
    fn index_at_offset(&mut self, offset: Self::Scalar) -> usize;
}

/// A [`StripModel`] whose entry count can change.
pub trait ResizableStripModel: StripModel {
    /// Resizes the strip to `len` entries.
    fn set_len(&mut self, len: usize);
}

/// Computes which entries of `model` intersect the scroll window.
///
/// The window spans
/// `[scroll_offset - overscan_before, scroll_offset + viewport_extent + overscan_after]`,
/// clipped to the content. Negative inputs are treated as zero. A window past
/// the end of the content is empty but still reports the padding around it.
pub fn compute_visible_window<M>(
    model: &mut M,
    scroll_offset: M::Scalar,
    viewport_extent: M::Scalar,
    overscan_before: M::Scalar,
    overscan_after: M::Scalar,
) -> VisibleWindow<M::Scalar>
where
    M: StripModel,
{
    let zero = <M::Scalar as Scalar>::zero();
    let len = model.len();
    if len == 0 {
        return VisibleWindow::empty();
    }

    let content_extent = model.total_extent().max(zero);
    if content_extent <= zero {
        return VisibleWindow::empty();
    }

    let top = (scroll_offset.max(zero) - overscan_before.max(zero)).max(zero);
    let bottom = (scroll_offset.max(zero) + viewport_extent.max(zero) + overscan_after.max(zero))
        .min(content_extent);

    if bottom <= top {
        return VisibleWindow {
            start: 0,
            end: 0,
            before_extent: top.min(content_extent),
            after_extent: (content_extent - top).max(zero),
            content_extent,
        };
    }

    let mut start = model.index_at_offset(top).min(len - 1);
    while start > 0 && model.offset_of(start) > top {
        start -= 1;
    }

    let mut end = start;
    while end < len && model.offset_of(end) < bottom {
        end += 1;
    }

    let before_extent = model.offset_of(start);
    let after_start = if end < len {
        model.offset_of(end)
    } else {
        content_extent
    };

    VisibleWindow {
        start,
        end,
        before_extent,
        after_extent: (content_extent - after_start).max(zero),
        content_extent,
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{StripModel, VisibleWindow, compute_visible_window};

    /// Variable-height strip used to exercise the window walk.
    #[derive(Debug)]
    struct Heights(Vec<f64>);

    impl StripModel for Heights {
        type Scalar = f64;

        fn len(&self) -> usize {
            self.0.len()
        }

        fn total_extent(&mut self) -> f64 {
            self.0.iter().sum()
        }

        fn extent_of(&mut self, index: usize) -> f64 {
            self.0.get(index).copied().unwrap_or(0.0)
        }

        fn offset_of(&mut self, index: usize) -> f64 {
            self.0.iter().take(index).sum()
        }

        fn index_at_offset(&mut self, offset: f64) -> usize {
            let mut pos = 0.0;
            for (i, h) in self.0.iter().enumerate() {
                if pos + h > offset {
                    return i;
                }
                pos += h;
            }
            self.0.len().saturating_sub(1)
        }
    }

    #[test]
    fn empty_strip_has_empty_window() {
        let mut strip = Heights(Vec::new());
        let window = compute_visible_window(&mut strip, 0.0, 500.0, 0.0, 0.0);
        assert_eq!(window, VisibleWindow::empty());
    }

    #[test]
    fn window_covers_partially_visible_entries() {
        let mut strip = Heights(alloc::vec![100.0, 100.0, 100.0, 100.0]);
        let window = compute_visible_window(&mut strip, 150.0, 100.0, 0.0, 0.0);
        assert_eq!(window.start, 1);
        assert_eq!(window.end, 3);
        assert_eq!(window.before_extent, 100.0);
        assert_eq!(window.after_extent, 100.0);
        assert_eq!(window.content_extent, 400.0);
    }

    #[test]
    fn overscan_only_extends_requested_side() {
        let mut strip = Heights(alloc::vec![10.0; 6]);
        let window = compute_visible_window(&mut strip, 20.0, 20.0, 0.0, 15.0);
        assert_eq!((window.start, window.end), (2, 6));
        let window = compute_visible_window(&mut strip, 20.0, 20.0, 15.0, 0.0);
        assert_eq!((window.start, window.end), (0, 4));
    }

    #[test]
    fn scrolled_past_content_is_empty() {
        let mut strip = Heights(alloc::vec![10.0, 10.0]);
        let window = compute_visible_window(&mut strip, 50.0, 10.0, 0.0, 0.0);
        assert!(window.is_empty());
        assert_eq!(window.content_extent, 20.0);
        assert_eq!(window.after_extent, 0.0);
    }
}
