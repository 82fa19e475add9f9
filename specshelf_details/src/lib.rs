// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=specshelf_details --heading-base-level=0

//! Specshelf Details: the side panel that previews one spec.
//!
//! Activating a card hands a [`MoreSpecDetails`](specshelf_catalog::MoreSpecDetails)
//! to [`DetailPanel::open`], which switches to a loading state and returns a
//! [`FetchTicket`]. The host fetches through a [`DetailSource`] (normally
//! [`HttpDetailSource`], `GET {base_url}/spec/{fileID}`) and hands the
//! outcome to [`DetailPanel::resolve`]. Outcomes for anything but the latest
//! ticket, or arriving after [`DetailPanel::close`], are dropped.
//!
//! Failures surface as [`DetailError`]. The panel shows the backend's own
//! message when the error body carried one and [`FALLBACK_MESSAGE`]
//! otherwise.
//!
//! [`FocusTrap`] keeps Tab navigation inside the open panel.
//!
//! ```rust
//! use specshelf_catalog::MoreSpecDetails;
//! use specshelf_details::{DetailPanel, PanelView, interpret_response};
//!
//! let mut panel = DetailPanel::new();
//! let stale = panel.open(MoreSpecDetails { file_id: "a".into(), ..Default::default() });
//! let current = panel.open(MoreSpecDetails { file_id: "b".into(), ..Default::default() });
//!
//! assert!(panel.resolve(current, interpret_response(404, br#"{"message": "Error 404"}"#)));
//! assert!(!panel.resolve(stale, interpret_response(500, b"")));
//! assert_eq!(panel.view(), Some(PanelView::Failed { message: "Error 404".into() }));
//! ```

mod error;
mod focus;
mod panel;
mod source;
mod wire;

pub use error::{DetailError, FALLBACK_MESSAGE};
pub use focus::{FocusTrap, Focusable, Navigation, TrapOutcome};
pub use panel::{
    DetailPanel, FetchTicket, LOADING_LABEL, LoadedView, OPEN_DOCUMENT_LABEL, PanelState,
    PanelView, RETRY_HINT, UNKNOWN_STATUS_WARNING,
};
pub use source::{DetailClientConfig, DetailSource, HttpDetailSource, interpret_response};
pub use wire::{ErrorBody, Metadata, SpecDetails};
