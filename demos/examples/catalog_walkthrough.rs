// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Catalog walkthrough: load a feed, filter it, virtualize it, open a card.
//!
//! This example shows how to combine:
//! - `specshelf_catalog` for normalization, search, filters, and card text,
//! - `specshelf_virtual_grid` for column fitting and the visible window,
//! - `specshelf_details` for the detail panel and its focus trap.
//!
//! Run:
//! - `cargo run -p specshelf_demos --example catalog_walkthrough`
//! - `RUST_LOG=debug cargo run -p specshelf_demos --example catalog_walkthrough -- path/to/shelf.json`

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context as _;
use specshelf_catalog::{Catalog, CatalogView, EMPTY_MESSAGE, MoreSpecDetails, SortBy};
use specshelf_demos::{LocalDetailSource, ShelfConfig, bundled_config, init_tracing};
use specshelf_details::{
    DetailPanel, DetailSource, FocusTrap, Focusable, HttpDetailSource, LOADING_LABEL,
    OPEN_DOCUMENT_LABEL, PanelView, RETRY_HINT, TrapOutcome,
};
use specshelf_virtual_grid::{Viewport, ViewportSignal};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config_path = std::env::args_os()
        .nth(1)
        .map_or_else(bundled_config, Into::into);
    let config = ShelfConfig::load(&config_path)?;
    let mut catalog = Catalog::from_json(&config.read_feed()?).context("loading spec feed")?;
    catalog.set_filter(config.filter.clone());
    println!("teams: {}", catalog.teams().join(", "));
    println!("authors: {}", catalog.authors().join(", "));

    let view = Rc::new(RefCell::new(CatalogView::new(catalog, config.grid, config.viewport)));
    let resize = ViewportSignal::new();
    let _tracking = {
        let view = Rc::clone(&view);
        resize.subscribe(move |viewport| {
            view.borrow_mut().set_viewport(viewport);
        })
    };

    print_page("initial", &mut view.borrow_mut());

    resize.notify(Viewport::new(700.0, 720.0));
    print_page("narrow window", &mut view.borrow_mut());

    view.borrow_mut().set_query("snap");
    print_page("search \"snap\"", &mut view.borrow_mut());

    view.borrow_mut().set_query("no such spec");
    print_page("search \"no such spec\"", &mut view.borrow_mut());

    {
        let mut view = view.borrow_mut();
        view.set_query("");
        let mut by_name = view.catalog().filter().clone();
        by_name.sort_by = SortBy::Name;
        view.set_filter(by_name);
    }
    resize.notify(Viewport::new(1280.0, 300.0));
    view.borrow_mut().set_scroll_offset(260.0);
    print_page("sorted by name, scrolled", &mut view.borrow_mut());

    let request = view
        .borrow_mut()
        .visible_cards()
        .first()
        .map(|visible| visible.card.details_request())
        .context("no card to open")?;
    let mut panel = DetailPanel::new();
    match &config.details_dir {
        Some(dir) => show_details(&mut panel, &LocalDetailSource::new(dir), request).await,
        None => {
            let source = HttpDetailSource::new(&config.details)?;
            show_details(&mut panel, &source, request).await;
        }
    }

    let trap = FocusTrap::new([
        Focusable::enabled("close"),
        Focusable::enabled("notifications"),
        Focusable::enabled("open-document"),
    ]);
    if let TrapOutcome::Redirect(target) = trap.on_key("Tab", false, Some("open-document")) {
        println!("tab from the last control wraps to {target:?}");
    }
    panel.close();
    println!("modal open after close: {}", panel.is_modal_open());
    Ok(())
}

fn print_page(label: &str, view: &mut CatalogView) {
    let layout = view.grid().layout();
    println!(
        "\n== {label}: {} ({} columns of {:.0}px, {} rows)",
        view.catalog().count_label(),
        layout.column_count,
        layout.item_width,
        layout.row_count,
    );
    if view.is_empty() {
        println!("   {EMPTY_MESSAGE}");
        return;
    }
    for visible in view.visible_cards() {
        let card = &visible.card;
        println!(
            "   [{},{}] {} · {} · {} | {} ({:?}) | {} | {}",
            visible.placement.address.row,
            visible.placement.address.column,
            card.index,
            card.folder_name,
            card.type_label,
            card.title,
            card.tone,
            card.last_edited,
            card.comments,
        );
    }
}

async fn show_details<S: DetailSource>(
    panel: &mut DetailPanel,
    source: &S,
    request: MoreSpecDetails,
) {
    println!("\n== details for {}: {LOADING_LABEL}", request.file_id);
    panel.load(source, request).await;
    match panel.view() {
        Some(PanelView::Loaded(loaded)) => {
            println!("   {} · {} · {}", loaded.index, loaded.folder_name, loaded.type_label);
            println!("   {} [{}]", loaded.title, loaded.status);
            if let Some(warning) = &loaded.status_warning {
                println!("   warning: {warning}");
            }
            println!("   Authors: {}", loaded.authors);
            println!("   {} · {}", loaded.last_edited, loaded.created);
            println!("   {} chars of HTML", loaded.html.len());
            println!("   {OPEN_DOCUMENT_LABEL}: {}", loaded.url);
        }
        Some(PanelView::Failed { message }) => println!("   {message}\n   {RETRY_HINT}"),
        Some(PanelView::Loading) | None => {}
    }
}
