// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=specshelf_catalog --heading-base-level=0

//! Specshelf Catalog: the spec list behind the card grid.
//!
//! - [`RawSpec`] is a record as it arrives in the item feed; [`Spec::from_raw`]
//!   normalizes it so that every display field has a value (`Unknown title`,
//!   `Unknown` index, status, type, or team).
//! - [`parse_authors`] and [`unify_authors`] tidy author names.
//! - [`filter_and_sort`] applies a free-text query and [`FilterOptions`] and
//!   orders the survivors by date, name, or index.
//! - [`Catalog`] holds the loaded specs with the current query and filters,
//!   and [`CatalogView`] feeds its filtered list into a
//!   [`VirtualGrid`](specshelf_virtual_grid::VirtualGrid), producing a
//!   [`CardView`] for each visible card.
//!
//! ```rust
//! use specshelf_catalog::{CardGrid, Catalog, CatalogView};
//! use specshelf_virtual_grid::Viewport;
//!
//! let feed = r#"{"specs": [
//!     {"title": "Snap refresh", "status": "active", "index": "SN001",
//!      "lastUpdated": "2024-01-01T00:00:00Z"},
//!     {"title": "", "status": "bogus"}
//! ], "teams": []}"#;
//! let catalog = Catalog::from_json(feed)?;
//! let mut view = CatalogView::new(catalog, CardGrid::default(), Viewport::new(1200.0, 800.0));
//!
//! let cards = view.visible_cards();
//! assert_eq!(cards[0].card.last_edited, "Last edit: 1 Jan 2024");
//! assert_eq!(cards[1].card.title, "Unknown title");
//! assert_eq!(cards[1].card.status_label, "Unknown");
//!
//! view.set_query("refresh");
//! assert_eq!(view.catalog().count_label(), "1 specs");
//! # Ok::<(), specshelf_catalog::CatalogError>(())
//! ```

mod authors;
mod card;
mod catalog;
mod error;
mod filter;
mod spec;
mod view;

pub use authors::{fold_name, parse_authors, unify_authors};
pub use card::{CardAction, CardView, MoreSpecDetails, display_date};
pub use catalog::Catalog;
pub use error::CatalogError;
pub use filter::{
    FilterOptions, SortBy, collate, compare, filter_and_sort, matches_query, sorted_options,
};
pub use spec::{
    MIN_INDEX_LEN, RawSpec, Spec, SpecStatus, SpecType, StatusTone, UNKNOWN, UNKNOWN_TITLE,
    parse_date,
};
pub use view::{CardGrid, CatalogView, EMPTY_MESSAGE, VisibleCard};
