// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for grid layout invariants.
//!
//! 1. Enough width for one card always yields at least one column, and the
//!    columns plus their gaps never exceed the width.
//! 2. Row count is `ceil(n / columns)`; the last occupied cell is `n - 1`.
//! 3. Layout is a pure function of its inputs.
//! 4. Widening the viewport never removes a column.
//! 5. Trailing margins: none in the last column, none below the last item.
//! 6. Visible cells are in bounds, intersect the scroll window, and cover
//!    every occupied row that meets it.

use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use proptest::prelude::*;
use specshelf_virtual_grid::{CellAddress, GridConfig, GridLayout, Viewport, VirtualGrid};

fn config_strategy() -> impl Strategy<Value = GridConfig> {
    (1.0f64..500.0, 1.0f64..600.0, 0.0f64..64.0)
        .prop_map(|(height, min_width, space)| {
            GridConfig::new(height, min_width).with_grid_space(space)
        })
}

proptest! {
    #[test]
    fn columns_fit_at_minimum_width(config in config_strategy(), extra in 0.0f64..5_000.0) {
        let width = config.item_min_width + extra;
        let columns = config.column_count(width).get() as f64;
        prop_assert!(columns >= 1.0);
        let used = columns * config.item_min_width + config.grid_space * (columns - 1.0);
        prop_assert!(used <= width + 1e-6, "columns={columns} used={used} width={width}");
    }
}

proptest! {
    #[test]
    fn rows_cover_every_item(
        config in config_strategy(),
        width in 0.0f64..4_000.0,
        n in 0usize..5_000,
    ) {
        let layout = GridLayout::compute(&config, width, n);
        let columns = layout.column_count.get();
        prop_assert_eq!(layout.row_count, n.div_ceil(columns));
        if n > 0 {
            let last = CellAddress::of(n - 1, layout.column_count);
            prop_assert_eq!(last.row, layout.row_count - 1);
            prop_assert!(layout.place(&config, last).is_some());
            for column in last.column + 1..columns {
                prop_assert!(layout.place(&config, CellAddress::new(last.row, column)).is_none());
            }
        }
    }
}

proptest! {
    #[test]
    fn layout_is_idempotent(
        config in config_strategy(),
        width in 0.0f64..4_000.0,
        n in 0usize..1_000,
    ) {
        prop_assert_eq!(
            GridLayout::compute(&config, width, n),
            GridLayout::compute(&config, width, n)
        );
    }
}

proptest! {
    #[test]
    fn wider_never_means_fewer_columns(
        config in config_strategy(),
        width in 0.0f64..4_000.0,
        grow in 0.0f64..2_000.0,
    ) {
        let narrow = config.column_count(width);
        let wide = config.column_count(width + grow);
        prop_assert!(wide >= narrow, "width {width} -> {narrow}, width {} -> {wide}", width + grow);
    }
}

proptest! {
    #[test]
    fn trailing_margins_are_dropped(
        config in config_strategy(),
        columns in 1usize..8,
        n in 1usize..64,
    ) {
        let config = config.with_num_columns(NonZeroUsize::new(columns).unwrap());
        let layout = GridLayout::compute(&config, 2_000.0, n);
        for index in 0..n {
            let cell = layout.place_item(&config, index).unwrap();
            if cell.address.column + 1 == columns {
                prop_assert_eq!(cell.margin_right, 0.0);
            } else {
                prop_assert_eq!(cell.margin_right, config.grid_space);
            }
            if index == n - 1 || cell.address.row + 1 == layout.row_count {
                prop_assert_eq!(cell.margin_bottom, 0.0);
            }
        }
    }
}

proptest! {
    #[test]
    fn visible_cells_are_exactly_the_rows_in_the_window(
        config in config_strategy(),
        width in 0.0f64..3_000.0,
        height in 0.0f64..2_000.0,
        n in 0usize..2_000,
        scroll_fraction in 0.0f64..1.0,
    ) {
        let mut grid = VirtualGrid::new(config, Viewport::new(width, height), n);
        grid.set_scroll_offset(grid.content_height() * scroll_fraction);
        let scroll = grid.scroll_offset();
        let bottom = scroll + height;
        let extent = config.row_extent();

        let mut emitted = BTreeSet::new();
        for cell in grid.visible_cells() {
            prop_assert!(cell.index < n);
            prop_assert!(cell.rect.y0 < bottom + 1e-6);
            prop_assert!(cell.rect.y0 + extent > scroll - 1e-6);
            emitted.insert(cell.index);
        }

        if height > 1e-6 {
            let layout = grid.layout();
            let columns = layout.column_count.get();
            for row in 0..layout.row_count {
                let top = row as f64 * extent;
                if top < bottom - 1e-6 && top + extent > scroll + 1e-6 {
                    for index in (row * columns..(row + 1) * columns).take_while(|&i| i < n) {
                        prop_assert!(
                            emitted.contains(&index),
                            "row {row} at {top} lacks item {index}"
                        );
                    }
                }
            }
        }
    }
}
