// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wiring between the filtered catalog and the virtual grid.

use specshelf_virtual_grid::{CellPlacement, GridConfig, Viewport, VirtualGrid};

use crate::{CardView, Catalog, FilterOptions};

/// Card geometry used by the catalog page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardGrid(pub GridConfig);

impl Default for CardGrid {
    /// 230 tall, at least 400 wide, 16 apart.
    fn default() -> Self {
        Self(GridConfig::new(230.0, 400.0).with_grid_space(16.0))
    }
}

impl From<CardGrid> for GridConfig {
    fn from(grid: CardGrid) -> Self {
        grid.0
    }
}

/// A card ready to be placed.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleCard {
    /// Where the card goes.
    pub placement: CellPlacement,
    /// What it shows.
    pub card: CardView,
}

/// Message shown in place of the grid when nothing matches.
pub const EMPTY_MESSAGE: &str = "No specs found";

/// The catalog page: filters narrow the list, the grid virtualizes it.
///
/// Every change to the query or the filters replaces the grid's items and
/// pulls the scroll offset back inside the shorter or longer content.
#[derive(Debug)]
pub struct CatalogView {
    catalog: Catalog,
    grid: VirtualGrid,
}

impl CatalogView {
    /// Shows `catalog` in a grid of `config` cards sized to `viewport`.
    #[must_use]
    pub fn new(catalog: Catalog, config: impl Into<GridConfig>, viewport: Viewport) -> Self {
        let grid = VirtualGrid::new(config.into(), viewport, catalog.filtered_count());
        Self { catalog, grid }
    }

    /// The underlying catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The underlying grid.
    #[must_use]
    pub fn grid(&self) -> &VirtualGrid {
        &self.grid
    }

    /// Mutable access for scrolling and overscan.
    pub fn grid_mut(&mut self) -> &mut VirtualGrid {
        &mut self.grid
    }

    /// Replaces the search text. Returns `true` if the list was recomputed.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let changed = self.catalog.set_query(query);
        if changed {
            self.sync_grid();
        }
        changed
    }

    /// Replaces the filters. Returns `true` if the list was recomputed.
    pub fn set_filter(&mut self, filter: FilterOptions) -> bool {
        let changed = self.catalog.set_filter(filter);
        if changed {
            self.sync_grid();
        }
        changed
    }

    /// Applies a resize from the host.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        self.grid.set_viewport(viewport)
    }

    /// Scrolls the grid to `offset`.
    pub fn set_scroll_offset(&mut self, offset: f64) -> bool {
        self.grid.set_scroll_offset(offset)
    }

    /// `true` when nothing passes the query and filters, and the host should
    /// show [`EMPTY_MESSAGE`] instead of the grid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.filtered_count() == 0
    }

    /// Cards intersecting the scroll window, with their placements.
    pub fn visible_cards(&mut self) -> Vec<VisibleCard> {
        let catalog = &self.catalog;
        self.grid
            .visible_cells()
            .filter_map(|placement| {
                catalog.filtered_spec(placement.index).map(|spec| VisibleCard {
                    placement,
                    card: CardView::of(spec),
                })
            })
            .collect()
    }

    fn sync_grid(&mut self) {
        let count = self.catalog.filtered_count();
        self.grid.replace_items(count);
        self.grid.clamp_scroll_to_content();
        tracing::debug!(
            message = "Grid items replaced",
            items = count,
            rows = self.grid.layout().row_count,
            columns = self.grid.layout().column_count.get(),
        );
    }
}

#[cfg(test)]
mod tests {
    use specshelf_virtual_grid::Viewport;

    use super::{CardGrid, CatalogView};
    use crate::{Catalog, RawSpec};

    fn catalog(n: usize) -> Catalog {
        let records = (0..n)
            .map(|i| RawSpec {
                file_id: format!("doc-{i}"),
                title: format!("Spec {i:04}"),
                status: "active".into(),
                ..RawSpec::default()
            })
            .collect();
        Catalog::new(records, Vec::new())
    }

    #[test]
    fn only_visible_cards_are_built() {
        let mut view =
            CatalogView::new(catalog(500), CardGrid::default(), Viewport::new(1200.0, 500.0));
        assert_eq!(view.grid().layout().column_count.get(), 2);
        assert_eq!(view.grid().layout().item_width, 592.0);

        let cards = view.visible_cards();
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0].card.file_id, "doc-0");
        assert_eq!(cards[0].placement.margin_right, 16.0);
        assert_eq!(cards[1].placement.margin_right, 0.0);
    }

    #[test]
    fn narrowing_the_list_resets_the_grid() {
        let mut view =
            CatalogView::new(catalog(500), CardGrid::default(), Viewport::new(1200.0, 500.0));
        view.set_scroll_offset(40_000.0);
        assert!(view.set_query("Spec 000"));
        assert_eq!(view.catalog().filtered_count(), 10);
        assert_eq!(view.grid().layout().row_count, 5);
        // 5 rows of 246 in a 500 tall viewport: scrolled back to 730.
        assert_eq!(view.grid().scroll_offset(), 5.0 * 246.0 - 500.0);
        assert!(!view.visible_cards().is_empty());
        assert!(!view.set_query("Spec 000"));
    }

    #[test]
    fn nothing_matching_shows_the_empty_state() {
        let mut view =
            CatalogView::new(catalog(3), CardGrid::default(), Viewport::new(1200.0, 500.0));
        view.set_query("search");
        assert!(view.is_empty());
        assert!(view.visible_cards().is_empty());
        assert_eq!(view.grid().content_height(), 0.0);
    }
}
