// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid controller: layout plus a row-virtualized scroll window.

use alloc::rc::{Rc, Weak};
use core::cell::{Cell, RefCell};
use core::ops::Range;

use crate::{
    CellAddress, CellPlacement, GridConfig, GridLayout, RowMajorCells, ScrollAlign, ScrollWindow,
    Subscription, UniformStrip, Viewport, ViewportSignal, VisibleWindow,
};

type Cells = RowMajorCells<UniformStrip<f64>>;

/// A virtualized grid over `item_count` equally sized cards.
///
/// Holds the geometry, the current viewport, and the scroll state, and keeps a
/// [`GridLayout`] in sync with them. Width, geometry, and item-count changes
/// trigger a layout pass; scroll and height changes only move the window.
/// Setters compare against the current value and skip work when nothing
/// changed, which [`VirtualGrid::layout_passes`] makes observable.
#[derive(Debug)]
pub struct VirtualGrid {
    config: GridConfig,
    viewport: Viewport,
    layout: GridLayout,
    window: ScrollWindow<Cells>,
    layout_passes: u64,
    /// Resize that arrived while the grid was borrowed.
    deferred: Rc<Cell<Option<Viewport>>>,
}

impl VirtualGrid {
    /// Lays out `item_count` cards in `viewport`, scrolled to the top.
    #[must_use]
    pub fn new(config: GridConfig, viewport: Viewport, item_count: usize) -> Self {
        let layout = GridLayout::compute(&config, viewport.width, item_count);
        let rows = UniformStrip::new(0, config.row_extent());
        let cells = RowMajorCells::new(rows, layout.column_count, item_count);
        Self {
            config,
            viewport,
            layout,
            window: ScrollWindow::new(cells, viewport.height, 0.0),
            layout_passes: 1,
            deferred: Rc::default(),
        }
    }

    /// The grid geometry.
    #[must_use]
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The current viewport.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The current layout.
    #[must_use]
    pub const fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Number of layout passes run so far, including the initial one.
    #[must_use]
    pub const fn layout_passes(&self) -> u64 {
        self.layout_passes
    }

    /// Height of the scroll placeholder for the whole virtual grid.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.layout.content_height(&self.config)
    }

    /// Current scroll offset from the top of the grid.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.window.scroll_offset()
    }

    /// Applies a new viewport size.
    ///
    /// A width change re-runs layout; a height change only widens or narrows
    /// the visible window. Returns `true` if anything changed.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        self.deferred.set(None);
        let width_changed = viewport.width != self.viewport.width;
        self.viewport = viewport;
        let height_changed = self.window.set_viewport_extent(viewport.height);
        if width_changed {
            self.relayout();
        }
        width_changed || height_changed
    }

    /// Changes the geometry. Returns `true` if it differed.
    pub fn set_config(&mut self, config: GridConfig) -> bool {
        if config == self.config {
            return false;
        }
        self.config = config;
        self.relayout();
        true
    }

    /// Changes the number of cards. Returns `true` if it differed.
    pub fn set_item_count(&mut self, item_count: usize) -> bool {
        if item_count == self.layout.item_count {
            return false;
        }
        self.layout.item_count = item_count;
        self.relayout();
        true
    }

    /// Replaces the card list wholesale.
    ///
    /// Unlike [`VirtualGrid::set_item_count`] this always runs a layout pass,
    /// since the cards at each index may be different even at equal length.
    pub fn replace_items(&mut self, item_count: usize) {
        self.layout.item_count = item_count;
        self.relayout();
    }

    /// Recomputes the layout from the current inputs and refreshes the window.
    ///
    /// Returns `true` if the resulting layout differs from the previous one.
    pub fn relayout(&mut self) -> bool {
        let next = GridLayout::compute(&self.config, self.viewport.width, self.layout.item_count);
        let changed = next != self.layout;
        self.layout = next;
        self.layout_passes += 1;

        let row_extent = self.config.row_extent();
        let cells = self.window.model_mut();
        cells.rows_mut().set_extent(row_extent);
        cells.set_columns(next.column_count);
        cells.set_len(next.item_count);
        changed
    }

    /// Scrolls to `offset` from the top. Returns `true` if it moved.
    pub fn set_scroll_offset(&mut self, offset: f64) -> bool {
        self.window.set_scroll_offset(offset)
    }

    /// Scrolls by `delta`. Returns `true` if it moved.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        self.window.scroll_by(delta)
    }

    /// Scrolls the row holding item `index` into view.
    pub fn scroll_to_item(&mut self, index: usize, align: ScrollAlign) -> bool {
        self.window.scroll_to(index, align)
    }

    /// Pulls the scroll offset back inside the content, e.g. after filtering.
    pub fn clamp_scroll_to_content(&mut self) -> bool {
        self.window.clamp_to_content()
    }

    /// Extra distance above and below the viewport to materialize.
    pub fn set_overscan(&mut self, before: f64, after: f64) -> bool {
        self.window.set_overscan(before, after)
    }

    /// Applies a resize delivered by [`VirtualGrid::follow_viewport`] while
    /// the grid was borrowed elsewhere.
    ///
    /// The window queries call this first, so hosts rarely need to. Returns
    /// `true` if a pending size changed anything.
    pub fn apply_deferred_resize(&mut self) -> bool {
        self.deferred
            .take()
            .is_some_and(|viewport| self.set_viewport(viewport))
    }

    /// Item index range of the rows intersecting the window.
    pub fn visible_window(&mut self) -> VisibleWindow<f64> {
        self.apply_deferred_resize();
        self.window.visible_window()
    }

    /// Rows intersecting `[scroll_offset, scroll_offset + height]` plus overscan.
    pub fn visible_rows(&mut self) -> Range<usize> {
        let window = self.visible_window();
        if window.is_empty() {
            return 0..0;
        }
        let columns = self.layout.column_count.get();
        window.start / columns..window.end.div_ceil(columns)
    }

    /// Placements for every occupied cell in the visible rows, in row-major order.
    ///
    /// Cells past the last item in a partial trailing row are omitted.
    pub fn visible_cells(&mut self) -> impl Iterator<Item = CellPlacement> + use<> {
        let rows = self.visible_rows();
        let layout = self.layout;
        let config = self.config;
        let columns = layout.column_count.get();
        rows.flat_map(move |row| {
            (0..columns).filter_map(move |column| {
                layout.place(&config, CellAddress::new(row, column))
            })
        })
    }

    /// Returns `true` if any part of item `index`'s row is on screen.
    pub fn is_item_visible(&mut self, index: usize) -> bool {
        self.apply_deferred_resize();
        self.window.is_partially_visible(index)
    }

    /// Subscribes `grid` to `signal` so every resize is applied to it.
    ///
    /// The listener holds the grid weakly; once the grid is dropped, or the
    /// returned [`Subscription`] is, notifications stop reaching it. A resize
    /// that arrives while the grid is borrowed is kept and applied by
    /// [`VirtualGrid::apply_deferred_resize`] on the next window query.
    ///
    /// # Panics
    ///
    /// If `grid` is mutably borrowed when called.
    #[must_use = "dropping the Subscription stops resize tracking"]
    pub fn follow_viewport(grid: &Rc<RefCell<Self>>, signal: &ViewportSignal) -> Subscription {
        let weak: Weak<RefCell<Self>> = Rc::downgrade(grid);
        let deferred = Rc::clone(&grid.borrow().deferred);
        signal.subscribe(move |viewport| {
            let Some(grid) = weak.upgrade() else {
                return;
            };
            match grid.try_borrow_mut() {
                Ok(mut grid) => {
                    grid.set_viewport(viewport);
                }
                Err(_) => deferred.set(Some(viewport)),
            }
        })
    }
}
