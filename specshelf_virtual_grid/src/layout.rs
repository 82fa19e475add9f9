// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column and cell geometry for a grid of equally sized cards.

use core::num::NonZeroUsize;

use kurbo::{Rect, Size};

/// Caller-supplied grid geometry.
///
/// All lengths are logical pixels. `item_height` and `item_min_width` must be
/// positive and `grid_space` non-negative; other values are a contract
/// violation and produce unspecified (but non-panicking) layouts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct GridConfig {
    /// Height of every card.
    pub item_height: f64,
    /// Narrowest a column may get, unless `num_columns` forces the count.
    pub item_min_width: f64,
    /// Horizontal and vertical gap between cards.
    pub grid_space: f64,
    /// Fixed column count that bypasses the width-based computation.
    pub num_columns: Option<NonZeroUsize>,
}

impl GridConfig {
    /// Geometry with no gap and a computed column count.
    #[must_use]
    pub const fn new(item_height: f64, item_min_width: f64) -> Self {
        Self {
            item_height,
            item_min_width,
            grid_space: 0.0,
            num_columns: None,
        }
    }

    /// Sets the gap between cards.
    #[must_use]
    pub const fn with_grid_space(mut self, grid_space: f64) -> Self {
        self.grid_space = grid_space;
        self
    }

    /// Forces the column count.
    #[must_use]
    pub const fn with_num_columns(mut self, num_columns: NonZeroUsize) -> Self {
        self.num_columns = Some(num_columns);
        self
    }

    /// Distance between the tops of consecutive rows.
    #[must_use]
    pub fn row_extent(&self) -> f64 {
        self.item_height + self.grid_space
    }

    /// Number of columns that fit in `width`.
    ///
    /// First guesses `floor(width / item_min_width)` columns, reserves the gaps
    /// that guess implies, and re-derives the count from the remaining width.
    /// That two-pass count can drop right after the guess steps up and
    /// reserves another gap, so the result is the largest two-pass count over
    /// all widths up to `width`: the current value, or the peak the previous
    /// guess reached just below its step. Earlier peaks are never larger.
    ///
    /// The count never drops below one, even when `width` is narrower than a
    /// single column.
    #[must_use]
    pub fn column_count(&self, width: f64) -> NonZeroUsize {
        if let Some(forced) = self.num_columns {
            return forced;
        }
        let min = self.item_min_width;
        if min.is_nan() || min <= 0.0 || !width.is_finite() {
            return NonZeroUsize::MIN;
        }
        let guess = floor_div(width, min);
        if guess < 1.0 {
            return NonZeroUsize::MIN;
        }
        let mut count = floor_div(width - self.grid_space * (guess - 1.0), min);
        if guess >= 2.0 {
            count = count.max(self.peak_below(guess - 1.0));
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "`count` is a whole number no larger than width / min"
        )]
        let count = count.max(1.0) as usize;
        NonZeroUsize::new(count).unwrap_or(NonZeroUsize::MIN)
    }

    /// Largest two-pass count while the guess is still `guess`, that is for
    /// widths strictly below `(guess + 1) * item_min_width`.
    fn peak_below(&self, guess: f64) -> f64 {
        let min = self.item_min_width;
        let step = (guess + 1.0) * min;
        let remaining = step - self.grid_space * (guess - 1.0);
        // `ceil(remaining / min) - 1`: the largest count reached before `step`.
        -floor_div(-remaining, min) - 1.0
    }

    /// Width of each column once `column_count` columns and their gaps share `width`.
    ///
    /// Exact, so fractional widths are expected. A forced column count that
    /// cannot fit yields zero rather than a negative width.
    #[must_use]
    pub fn item_width(&self, width: f64, column_count: NonZeroUsize) -> f64 {
        let columns = column_count.get() as f64;
        let gaps = self.grid_space * (columns - 1.0);
        ((width - gaps) / columns).max(0.0)
    }
}

impl Default for GridConfig {
    /// A 1×1 cell with no gap; real hosts always provide their own geometry.
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

fn floor_div(numerator: f64, denominator: f64) -> f64 {
    let quotient = numerator / denominator;
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        reason = "Layout widths are far below the range where this round trip is lossy"
    )]
    let truncated = quotient as i64 as f64;
    if truncated > quotient {
        truncated - 1.0
    } else {
        truncated
    }
}

/// Size of the scrolling container's visible area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Viewport {
    /// Width available to the grid.
    pub width: f64,
    /// Height of the visible window.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<Size> for Viewport {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

impl From<Viewport> for Size {
    fn from(viewport: Viewport) -> Self {
        Self::new(viewport.width, viewport.height)
    }
}

/// Row and column of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub column: usize,
}

impl CellAddress {
    /// Creates an address.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The cell that holds item `index` in a grid `columns` wide.
    #[must_use]
    pub const fn of(index: usize, columns: NonZeroUsize) -> Self {
        Self {
            row: index / columns.get(),
            column: index % columns.get(),
        }
    }

    /// `row * columns + column`. Only meaningful while below the item count.
    #[must_use]
    pub const fn item_index(self, columns: NonZeroUsize) -> usize {
        self.row * columns.get() + self.column
    }
}

/// Derived layout for one combination of width, geometry, and item count.
///
/// A pure function of its inputs: recompute it whenever any of them change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Columns per row.
    pub column_count: NonZeroUsize,
    /// Exact width of each card.
    pub item_width: f64,
    /// `ceil(item_count / column_count)`.
    pub row_count: usize,
    /// Number of items laid out.
    pub item_count: usize,
}

impl GridLayout {
    /// Lays out `item_count` items across `width`.
    #[must_use]
    pub fn compute(config: &GridConfig, width: f64, item_count: usize) -> Self {
        let column_count = config.column_count(width);
        Self {
            column_count,
            item_width: config.item_width(width, column_count),
            row_count: item_count.div_ceil(column_count.get()),
            item_count,
        }
    }

    /// Distance between the left edges of consecutive columns.
    #[must_use]
    pub fn column_extent(&self, config: &GridConfig) -> f64 {
        self.item_width + config.grid_space
    }

    /// Height of the scroll placeholder: `row_count * (item_height + grid_space)`.
    #[must_use]
    pub fn content_height(&self, config: &GridConfig) -> f64 {
        self.row_count as f64 * config.row_extent()
    }

    /// Geometry for the cell at `address`, or `None` if no item lives there.
    #[must_use]
    pub fn place(&self, config: &GridConfig, address: CellAddress) -> Option<CellPlacement> {
        if address.column >= self.column_count.get() {
            return None;
        }
        let index = address.item_index(self.column_count);
        if index >= self.item_count {
            return None;
        }
        let x = address.column as f64 * self.column_extent(config);
        let y = address.row as f64 * config.row_extent();
        let last_column = address.column + 1 == self.column_count.get();
        let last_row = address.row + 1 == self.row_count;
        let last_item = index + 1 >= self.item_count;
        Some(CellPlacement {
            address,
            index,
            rect: Rect::from_origin_size((x, y), (self.item_width, config.item_height)),
            margin_right: if last_column { 0.0 } else { config.grid_space },
            margin_bottom: if last_row || last_item {
                0.0
            } else {
                config.grid_space
            },
        })
    }

    /// Geometry for item `index`, or `None` past the end.
    #[must_use]
    pub fn place_item(&self, config: &GridConfig, index: usize) -> Option<CellPlacement> {
        self.place(config, CellAddress::of(index, self.column_count))
    }
}

/// Absolute position and trailing margins of one rendered card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement {
    /// Where the cell sits in the grid.
    pub address: CellAddress,
    /// Index of the item rendered in this cell.
    pub index: usize,
    /// Card bounds relative to the top-left of the grid content.
    pub rect: Rect,
    /// Gap after the card horizontally; zero in the last column.
    pub margin_right: f64,
    /// Gap below the card; zero in the last row and on the last item.
    pub margin_bottom: f64,
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroUsize;

    use super::{CellAddress, GridConfig, GridLayout};

    const CARDS: GridConfig = GridConfig::new(230.0, 400.0).with_grid_space(16.0);

    #[test]
    fn wide_viewport_reserves_gaps_before_counting() {
        let layout = GridLayout::compute(&CARDS, 1200.0, 10);
        assert_eq!(layout.column_count.get(), 2);
        assert_eq!(layout.item_width, 592.0);
        assert_eq!(layout.row_count, 5);
    }

    #[test]
    fn narrow_viewport_keeps_one_column() {
        let layout = GridLayout::compute(&CARDS, 250.0, 3);
        assert_eq!(layout.column_count.get(), 1);
        assert_eq!(layout.item_width, 250.0);
        assert_eq!(layout.row_count, 3);

        let unmeasured = GridLayout::compute(&CARDS, 0.0, 3);
        assert_eq!(unmeasured.column_count.get(), 1);
        assert_eq!(unmeasured.item_width, 0.0);
    }

    #[test]
    fn forced_columns_bypass_width() {
        let config = CARDS.with_num_columns(NonZeroUsize::new(4).unwrap());
        let layout = GridLayout::compute(&config, 1000.0, 9);
        assert_eq!(layout.column_count.get(), 4);
        assert_eq!(layout.item_width, (1000.0 - 48.0) / 4.0);
        assert_eq!(layout.row_count, 3);
    }

    #[test]
    fn item_width_is_not_rounded() {
        let config = GridConfig::new(100.0, 300.0).with_grid_space(10.0);
        let layout = GridLayout::compute(&config, 1001.0, 3);
        assert_eq!(layout.column_count.get(), 3);
        assert_eq!(layout.item_width, 327.0);
        let layout = GridLayout::compute(&config, 1000.0, 3);
        assert!((layout.item_width - 326.666_666).abs() < 1e-3);
    }

    #[test]
    fn count_holds_across_a_guess_step() {
        // The guess steps from two to three columns at width 30 and reserves a
        // second gap; the count must not fall back to one.
        let config = GridConfig::new(10.0, 10.0).with_grid_space(9.0);
        assert_eq!(config.column_count(29.0).get(), 2);
        assert_eq!(config.column_count(30.0).get(), 2);
    }

    #[test]
    fn count_stays_conservative_away_from_steps() {
        // Seven columns of 100 with six gaps of 50 would fit in 1000, but the
        // two-pass count reserves nine gaps.
        let config = GridConfig::new(100.0, 100.0).with_grid_space(50.0);
        assert_eq!(config.column_count(999.0).get(), 5);
        assert_eq!(config.column_count(1000.0).get(), 5);
        assert_eq!(CARDS.column_count(10_800.0).get(), 25);
    }

    #[test]
    fn very_wide_viewports_count_in_constant_time() {
        let config = GridConfig::new(10.0, 1.0).with_grid_space(1.0);
        assert_eq!(config.column_count(2.0e9).get(), 1);
        let config = GridConfig::new(10.0, 1.0).with_grid_space(0.5);
        assert_eq!(config.column_count(2.0e9).get(), 1_000_000_000);
    }

    #[test]
    fn trailing_row_cells_are_empty() {
        let config = GridConfig::new(100.0, 100.0).with_num_columns(NonZeroUsize::new(3).unwrap());
        let layout = GridLayout::compute(&config, 300.0, 7);
        assert_eq!(layout.row_count, 3);

        let last = layout.place(&config, CellAddress::new(2, 0)).unwrap();
        assert_eq!(last.index, 6);
        assert!(layout.place(&config, CellAddress::new(2, 1)).is_none());
        assert!(layout.place(&config, CellAddress::new(2, 2)).is_none());
        assert!(layout.place(&config, CellAddress::new(0, 3)).is_none());
    }

    #[test]
    fn margins_skip_trailing_edges() {
        let config = GridConfig::new(100.0, 100.0)
            .with_grid_space(8.0)
            .with_num_columns(NonZeroUsize::new(3).unwrap());
        let layout = GridLayout::compute(&config, 316.0, 5);

        let first = layout.place_item(&config, 0).unwrap();
        assert_eq!(first.margin_right, 8.0);
        assert_eq!(first.margin_bottom, 8.0);

        // Column 2 of row 0: last column, but the row below is partly filled.
        let corner = layout.place_item(&config, 2).unwrap();
        assert_eq!(corner.margin_right, 0.0);
        assert_eq!(corner.margin_bottom, 8.0);

        // Last item sits mid-row in the last row.
        let tail = layout.place_item(&config, 4).unwrap();
        assert_eq!(tail.margin_right, 8.0);
        assert_eq!(tail.margin_bottom, 0.0);
        assert_eq!(tail.rect.x0, 108.0);
        assert_eq!(tail.rect.y0, 108.0);
        assert_eq!(tail.rect.width(), 100.0);
        assert_eq!(tail.rect.height(), 100.0);
    }

    #[test]
    fn content_height_counts_a_gap_per_row() {
        let layout = GridLayout::compute(&CARDS, 1200.0, 3);
        assert_eq!(layout.content_height(&CARDS), 2.0 * 246.0);
        assert_eq!(GridLayout::compute(&CARDS, 1200.0, 0).content_height(&CARDS), 0.0);
    }

    #[test]
    fn addresses_round_trip_through_indices() {
        let columns = NonZeroUsize::new(3).unwrap();
        let address = CellAddress::of(7, columns);
        assert_eq!(address, CellAddress::new(2, 1));
        assert_eq!(address.item_index(columns), 7);
    }
}
