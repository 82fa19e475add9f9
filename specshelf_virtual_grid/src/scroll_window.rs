// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll state over a [`StripModel`], with a cached visible window.

use crate::{Scalar, StripModel, VisibleWindow, compute_visible_window};

/// Where an entry should land when scrolling it into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Entry start at the top of the viewport.
    Start,
    /// Entry centered in the viewport.
    Center,
    /// Entry end at the bottom of the viewport.
    End,
    /// Smallest movement that makes the entry fully visible.
    Nearest,
}

/// Scroll offset, viewport height, and overscan for one strip.
///
/// The visible window is recomputed lazily: setters only mark it stale when
/// their input actually changed, and [`ScrollWindow::visible_window`] reuses the
/// cached result until then.
#[derive(Debug)]
pub struct ScrollWindow<M: StripModel> {
    model: M,
    scroll_offset: M::Scalar,
    viewport_extent: M::Scalar,
    overscan_before: M::Scalar,
    overscan_after: M::Scalar,
    stale: bool,
    cached: VisibleWindow<M::Scalar>,
}

impl<M: StripModel> ScrollWindow<M> {
    /// Creates a window scrolled to the top, with the same overscan on both sides.
    #[must_use]
    pub fn new(model: M, viewport_extent: M::Scalar, overscan: M::Scalar) -> Self {
        let zero = <M::Scalar as Scalar>::zero();
        Self {
            model,
            scroll_offset: zero,
            viewport_extent: viewport_extent.max(zero),
            overscan_before: overscan.max(zero),
            overscan_after: overscan.max(zero),
            stale: true,
            cached: VisibleWindow::empty(),
        }
    }

    /// The strip being scrolled.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the strip. Invalidates the cached window.
    pub fn model_mut(&mut self) -> &mut M {
        self.stale = true;
        &mut self.model
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> M::Scalar {
        self.scroll_offset
    }

    /// Moves the window. Negative offsets clamp to zero.
    ///
    /// Returns `true` if the offset changed.
    pub fn set_scroll_offset(&mut self, offset: M::Scalar) -> bool {
        let offset = offset.max(<M::Scalar as Scalar>::zero());
        if offset == self.scroll_offset {
            return false;
        }
        self.scroll_offset = offset;
        self.stale = true;
        true
    }

    /// Moves the window by `delta`.
    pub fn scroll_by(&mut self, delta: M::Scalar) -> bool {
        self.set_scroll_offset(self.scroll_offset + delta)
    }

    /// Current viewport height.
    #[must_use]
    pub const fn viewport_extent(&self) -> M::Scalar {
        self.viewport_extent
    }

    /// Changes the viewport height. Returns `true` if it changed.
    pub fn set_viewport_extent(&mut self, extent: M::Scalar) -> bool {
        let extent = extent.max(<M::Scalar as Scalar>::zero());
        if extent == self.viewport_extent {
            return false;
        }
        self.viewport_extent = extent;
        self.stale = true;
        true
    }

    /// Overscan before and after the viewport.
    #[must_use]
    pub const fn overscan(&self) -> (M::Scalar, M::Scalar) {
        (self.overscan_before, self.overscan_after)
    }

    /// Changes the overscan. Returns `true` if either side changed.
    pub fn set_overscan(&mut self, before: M::Scalar, after: M::Scalar) -> bool {
        let zero = <M::Scalar as Scalar>::zero();
        let (before, after) = (before.max(zero), after.max(zero));
        if before == self.overscan_before && after == self.overscan_after {
            return false;
        }
        self.overscan_before = before;
        self.overscan_after = after;
        self.stale = true;
        true
    }

    /// The entries intersecting the viewport plus overscan.
    pub fn visible_window(&mut self) -> VisibleWindow<M::Scalar> {
        if self.stale {
            self.cached = compute_visible_window(
                &mut self.model,
                self.scroll_offset,
                self.viewport_extent,
                self.overscan_before,
                self.overscan_after,
            );
            self.stale = false;
        }
        self.cached
    }

    /// Returns `true` if entry `index` overlaps the viewport (overscan excluded).
    pub fn is_partially_visible(&mut self, index: usize) -> bool {
        if index >= self.model.len() {
            return false;
        }
        let start = self.model.offset_of(index);
        let end = start + self.model.extent_of(index);
        end > self.scroll_offset && start < self.scroll_offset + self.viewport_extent
    }

    /// Returns `true` if entry `index` lies entirely inside the viewport.
    pub fn is_fully_visible(&mut self, index: usize) -> bool {
        if index >= self.model.len() {
            return false;
        }
        let start = self.model.offset_of(index);
        let end = start + self.model.extent_of(index);
        start >= self.scroll_offset && end <= self.scroll_offset + self.viewport_extent
    }

    /// Pulls the scroll offset back so the viewport does not run past the content.
    ///
    /// Useful after the content shrinks (fewer items, more columns).
    pub fn clamp_to_content(&mut self) -> bool {
        let zero = <M::Scalar as Scalar>::zero();
        let content = self.model.total_extent();
        let max_offset = (content - self.viewport_extent).max(zero);
        if self.scroll_offset > max_offset {
            self.set_scroll_offset(max_offset)
        } else {
            false
        }
    }

    /// Scrolls entry `index` (clamped to the last entry) into view.
    pub fn scroll_to(&mut self, index: usize, align: ScrollAlign) -> bool {
        let zero = <M::Scalar as Scalar>::zero();
        let len = self.model.len();
        if len == 0 {
            return self.set_scroll_offset(zero);
        }
        let index = index.min(len - 1);
        let start = self.model.offset_of(index);
        let end = start + self.model.extent_of(index);
        let viewport = self.viewport_extent;
        let two = <M::Scalar as Scalar>::from_usize(2);

        let target = match align {
            ScrollAlign::Start => start,
            ScrollAlign::End => (end - viewport).max(zero),
            ScrollAlign::Center => ((start + end) / two - viewport / two).max(zero),
            ScrollAlign::Nearest => {
                let top = self.scroll_offset;
                if start >= top && end <= top + viewport {
                    top
                } else if start < top {
                    start
                } else {
                    (end - viewport).max(zero)
                }
            }
        };
        self.set_scroll_offset(target)
    }
}

#[cfg(test)]
mod tests {
    use super::{ScrollAlign, ScrollWindow};
    use crate::UniformStrip;

    #[test]
    fn window_follows_scroll() {
        let mut window = ScrollWindow::new(UniformStrip::new(100, 10.0_f64), 50.0, 0.0);
        let visible = window.visible_window();
        assert_eq!((visible.start, visible.end), (0, 5));

        assert!(window.scroll_by(10.0));
        let visible = window.visible_window();
        assert_eq!((visible.start, visible.end), (1, 6));
    }

    #[test]
    fn unchanged_inputs_report_no_change() {
        let mut window = ScrollWindow::new(UniformStrip::new(10, 10.0_f64), 30.0, 5.0);
        assert!(!window.set_scroll_offset(0.0));
        assert!(!window.set_viewport_extent(30.0));
        assert!(!window.set_overscan(5.0, 5.0));
        assert!(window.set_overscan(8.0, 3.0));
        assert_eq!(window.overscan(), (8.0, 3.0));
        assert!(!window.set_scroll_offset(-20.0));
    }

    #[test]
    fn scroll_to_honors_alignment() {
        let mut window = ScrollWindow::new(UniformStrip::new(10, 10.0_f64), 30.0, 0.0);

        window.scroll_to(3, ScrollAlign::Start);
        assert_eq!(window.scroll_offset(), 30.0);

        window.scroll_to(3, ScrollAlign::End);
        assert_eq!(window.scroll_offset(), 10.0);

        window.scroll_to(3, ScrollAlign::Center);
        assert_eq!(window.scroll_offset(), 20.0);

        assert!(!window.scroll_to(3, ScrollAlign::Nearest));
        assert_eq!(window.scroll_offset(), 20.0);

        window.scroll_to(9, ScrollAlign::Nearest);
        assert_eq!(window.scroll_offset(), 70.0);
    }

    #[test]
    fn clamp_pulls_offset_back_inside_content() {
        let mut window = ScrollWindow::new(UniformStrip::new(5, 10.0_f64), 30.0, 0.0);
        window.set_scroll_offset(100.0);
        assert!(window.clamp_to_content());
        assert_eq!(window.scroll_offset(), 20.0);

        let mut short = ScrollWindow::new(UniformStrip::new(2, 10.0_f64), 30.0, 0.0);
        short.set_scroll_offset(10.0);
        short.clamp_to_content();
        assert_eq!(short.scroll_offset(), 0.0);
    }

    #[test]
    fn visibility_queries_ignore_overscan() {
        let mut window = ScrollWindow::new(UniformStrip::new(10, 10.0_f64), 30.0, 20.0);
        assert!(window.is_fully_visible(2));
        assert!(!window.is_partially_visible(4));
        window.scroll_by(5.0);
        assert!(window.is_partially_visible(0));
        assert!(!window.is_fully_visible(0));
        assert!(window.is_partially_visible(3));
        assert!(!window.is_partially_visible(10));
    }
}
