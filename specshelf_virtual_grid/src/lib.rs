// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=specshelf_virtual_grid --heading-base-level=0

//! Specshelf Virtual Grid: layout and windowing for large grids of equal-sized cards.
//!
//! Given a card count, a viewport, and a [`GridConfig`] (card height, minimum
//! card width, gap, optional forced column count), this crate decides:
//!
//! - how many columns fit and how wide each card is ([`GridLayout`]),
//! - where each card sits and which trailing margins it carries ([`CellPlacement`]),
//! - which rows intersect the scroll window, so that only those cards are
//!   materialized ([`VirtualGrid::visible_cells`]).
//!
//! It renders nothing itself. The host positions one node per returned
//! [`CellPlacement`] inside a placeholder [`VirtualGrid::content_height`] tall,
//! and calls back into the grid when scroll position, viewport size, or the card
//! list changes.
//!
//! ## Minimal example
//!
//! ```rust
//! use specshelf_virtual_grid::{GridConfig, Viewport, VirtualGrid};
//!
//! // 230px tall cards, at least 400px wide, 16px apart.
//! let config = GridConfig::new(230.0, 400.0).with_grid_space(16.0);
//! let mut grid = VirtualGrid::new(config, Viewport::new(1200.0, 800.0), 1_000);
//!
//! // Two 592px columns fit in 1200px once the gap is reserved.
//! assert_eq!(grid.layout().column_count.get(), 2);
//! assert_eq!(grid.layout().item_width, 592.0);
//!
//! grid.set_scroll_offset(5_000.0);
//! for cell in grid.visible_cells() {
//!     // Host code: place card `cell.index` at `cell.rect`, with
//!     // `cell.margin_right` / `cell.margin_bottom` trailing space.
//!     assert!(cell.rect.y1 > 5_000.0 - 230.0);
//! }
//! ```
//!
//! ## Resize tracking
//!
//! A [`ViewportSignal`] fans resize events out to listeners. Each listener is
//! held by a [`Subscription`] guard and removed when the guard drops, so
//! teardown never depends on someone remembering to unsubscribe:
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use specshelf_virtual_grid::{GridConfig, Viewport, ViewportSignal, VirtualGrid};
//!
//! let grid = Rc::new(RefCell::new(VirtualGrid::new(
//!     GridConfig::new(230.0, 400.0),
//!     Viewport::new(800.0, 600.0),
//!     12,
//! )));
//! let resize = ViewportSignal::new();
//! let _tracking = VirtualGrid::follow_viewport(&grid, &resize);
//!
//! resize.notify(Viewport::new(1600.0, 600.0));
//! assert_eq!(grid.borrow().layout().column_count.get(), 4);
//! ```
//!
//! ## Lower-level pieces
//!
//! The grid is built from a small 1D virtualization core that also works for
//! plain lists: [`StripModel`] describes entries along the scroll axis,
//! [`UniformStrip`] gives every entry the same extent, [`RowMajorCells`]
//! flattens rows into cells, [`compute_visible_window`] finds what intersects
//! the viewport, and [`ScrollWindow`] keeps scroll state with a cached result.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support in `kurbo`.
//! - `libm`: `no_std` floating point through `libm` for `kurbo`.
//! - `serde`: `Deserialize`/`Serialize` for [`GridConfig`] and [`Viewport`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod layout;
mod row_major;
mod scalar;
mod scroll_window;
mod signal;
mod strip;
mod uniform;
mod virtual_grid;

pub use layout::{CellAddress, CellPlacement, GridConfig, GridLayout, Viewport};
pub use row_major::RowMajorCells;
pub use scalar::Scalar;
pub use scroll_window::{ScrollAlign, ScrollWindow};
pub use signal::{Subscription, ViewportSignal};
pub use strip::{ResizableStripModel, StripModel, VisibleWindow, compute_visible_window};
pub use uniform::UniformStrip;
pub use virtual_grid::VirtualGrid;
