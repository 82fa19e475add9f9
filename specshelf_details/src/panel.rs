// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The detail side panel: open, fetch, show, close.

use specshelf_catalog::{MoreSpecDetails, StatusTone, display_date};

use crate::{DetailError, DetailSource, SpecDetails};

/// Text shown while a fetch is in flight.
pub const LOADING_LABEL: &str = "Loading...";

/// Second line of the error screen.
pub const RETRY_HINT: &str = "Please refresh the page.";

/// Caption of the link to the source document.
pub const OPEN_DOCUMENT_LABEL: &str = "Open in Google Docs";

/// Warning shown for an unknown status when the backend gives no reason.
pub const UNKNOWN_STATUS_WARNING: &str = "This spec's status is missing or not recognized.";

/// Identifies one fetch started by [`DetailPanel::open`].
///
/// Only the ticket from the most recent `open` can resolve the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    generation: u64,
}

/// Where the panel is in its lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PanelState {
    /// Not shown.
    #[default]
    Closed,
    /// Shown, waiting for the fetch.
    Loading,
    /// Shown with an error screen.
    Failed {
        /// Text for the error screen.
        message: String,
    },
    /// Shown with the document.
    Loaded(SpecDetails),
}

/// Render-ready content of an open panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    /// The loader.
    Loading,
    /// The error screen. No document section is shown.
    Failed {
        /// Server message or the generic fallback.
        message: String,
    },
    /// The document.
    Loaded(Box<LoadedView>),
}

/// Everything the loaded panel shows, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedView {
    /// Spec index.
    pub index: String,
    /// Team folder, from the card that opened the panel.
    pub folder_name: String,
    /// Type label.
    pub type_label: String,
    /// Title.
    pub title: String,
    /// Status as written.
    pub status: String,
    /// Status badge colour.
    pub tone: StatusTone,
    /// Present when the status is `unknown`.
    pub status_warning: Option<String>,
    /// Authors joined with `", "`.
    pub authors: String,
    /// `Last edit: ...`, from the card that opened the panel.
    pub last_edited: String,
    /// `Created: 1 Jan 2024`.
    pub created: String,
    /// Document body. Trusted backend output, inserted as is.
    pub html: String,
    /// Link to the source document.
    pub url: String,
}

/// Controller for the detail panel.
///
/// Opening the panel starts a fetch identified by a [`FetchTicket`]. A result
/// is applied only if its ticket belongs to the latest `open` and the panel
/// has not been closed since, so a slow response for a previous card never
/// replaces the current one.
#[derive(Debug, Default)]
pub struct DetailPanel {
    generation: u64,
    request: Option<MoreSpecDetails>,
    state: PanelState,
}

impl DetailPanel {
    /// A closed panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the panel for `request` and starts loading.
    pub fn open(&mut self, request: MoreSpecDetails) -> FetchTicket {
        self.generation += 1;
        tracing::debug!(
            message = "Opening spec details",
            file_id = %request.file_id,
            generation = self.generation,
        );
        self.request = Some(request);
        self.state = PanelState::Loading;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Applies the outcome of the fetch for `ticket`.
    ///
    /// Returns `false`, leaving the panel untouched, when the ticket is stale,
    /// already resolved, or the panel was closed.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        result: Result<SpecDetails, DetailError>,
    ) -> bool {
        if ticket.generation != self.generation || self.state != PanelState::Loading {
            tracing::debug!(
                message = "Discarded stale spec details",
                ticket = ticket.generation,
                current = self.generation,
            );
            return false;
        }
        self.state = match result {
            Ok(details) => {
                tracing::debug!(message = "Spec details loaded", url = %details.url);
                PanelState::Loaded(details)
            }
            Err(err) => {
                tracing::warn!(message = "Spec details failed", error = %err);
                PanelState::Failed {
                    message: err.display_message().to_owned(),
                }
            }
        };
        true
    }

    /// Opens the panel for `request`, fetches from `source`, and applies the
    /// result.
    pub async fn load<S>(&mut self, source: &S, request: MoreSpecDetails) -> bool
    where
        S: DetailSource,
    {
        let file_id = request.file_id.clone();
        let ticket = self.open(request);
        let result = source.fetch(&file_id).await;
        self.resolve(ticket, result)
    }

    /// Hides the panel. Any fetch still in flight is ignored when it lands.
    pub fn close(&mut self) {
        if self.request.take().is_some() {
            self.generation += 1;
            tracing::debug!(message = "Closed spec details");
        }
        self.state = PanelState::Closed;
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// The card request the panel is showing, if open.
    #[must_use]
    pub fn request(&self) -> Option<&MoreSpecDetails> {
        self.request.as_ref()
    }

    /// `true` while the panel covers the page, so the host can lock
    /// background scrolling.
    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.request.is_some()
    }

    /// What to render, or `None` when closed.
    #[must_use]
    pub fn view(&self) -> Option<PanelView> {
        let request = self.request.as_ref()?;
        Some(match &self.state {
            PanelState::Closed => return None,
            PanelState::Loading => PanelView::Loading,
            PanelState::Failed { message } => PanelView::Failed {
                message: message.clone(),
            },
            PanelState::Loaded(details) => {
                PanelView::Loaded(Box::new(LoadedView::new(details, request)))
            }
        })
    }
}

impl LoadedView {
    fn new(details: &SpecDetails, request: &MoreSpecDetails) -> Self {
        let meta = &details.metadata;
        let status_warning = meta.status.eq_ignore_ascii_case("unknown").then(|| {
            meta.status_message
                .clone()
                .unwrap_or_else(|| UNKNOWN_STATUS_WARNING.to_owned())
        });
        Self {
            index: meta.index.clone(),
            folder_name: request.folder_name.clone(),
            type_label: meta.spec_type.clone(),
            title: meta.title.clone(),
            status: meta.status.clone(),
            tone: StatusTone::of_label(&meta.status),
            status_warning,
            authors: meta.authors.join(", "),
            last_edited: request.last_edited.clone(),
            created: format!("Created: {}", display_date(meta.created)),
            html: details.html.clone(),
            url: details.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use specshelf_catalog::{MoreSpecDetails, StatusTone, parse_date};

    use super::{DetailPanel, FetchTicket, PanelState, PanelView};
    use crate::{DetailError, DetailSource, Metadata, SpecDetails, interpret_response};

    fn request(file_id: &str) -> MoreSpecDetails {
        MoreSpecDetails {
            file_id: file_id.into(),
            folder_name: "test_folder".into(),
            last_edited: "Last edit: 2 Feb 2024".into(),
        }
    }

    fn details(status: &str) -> SpecDetails {
        SpecDetails {
            html: "<div>test html content</div>".into(),
            metadata: Metadata {
                index: "index".into(),
                spec_type: "Process".into(),
                title: "test_title".into(),
                status: status.into(),
                authors: vec!["test_author".into(), "other".into()],
                created: parse_date("2024-01-01"),
                status_message: None,
            },
            url: "https://www.test.test".into(),
        }
    }

    /// Canned HTTP responses keyed by file id.
    struct Canned(HashMap<&'static str, (u16, &'static str)>);

    impl DetailSource for Canned {
        async fn fetch(&self, file_id: &str) -> Result<SpecDetails, DetailError> {
            match self.0.get(file_id) {
                Some((status, body)) => interpret_response(*status, body.as_bytes()),
                None => Err(DetailError::Transport("connection refused".into())),
            }
        }
    }

    fn canned() -> Canned {
        Canned(HashMap::from([
            (
                "ok",
                (
                    200,
                    r#"{"html": "<p>body</p>", "url": "https://docs.example/ok",
                        "metadata": {"index": "AB123", "type": "Standard", "title": "Okay",
                                     "status": "unknown", "statusMessage": "Incorrect",
                                     "authors": ["Ana"], "created": "2024-01-01T00:00:00Z"}}"#,
                ),
            ),
            ("missing", (404, r#"{"message": "Error 404"}"#)),
            ("broken", (500, "Internal Server Error")),
        ]))
    }

    #[test]
    fn opening_shows_the_loader() {
        let mut panel = DetailPanel::new();
        assert_eq!(panel.view(), None);
        assert!(!panel.is_modal_open());

        panel.open(request("a"));
        assert!(panel.is_modal_open());
        assert_eq!(panel.view(), Some(PanelView::Loading));
    }

    #[test]
    fn loaded_view_formats_metadata() {
        let mut panel = DetailPanel::new();
        let ticket = panel.open(request("a"));
        assert!(panel.resolve(ticket, Ok(details("active"))));

        let Some(PanelView::Loaded(view)) = panel.view() else {
            panic!("expected a loaded view, got {:?}", panel.view());
        };
        assert_eq!(view.html, "<div>test html content</div>");
        assert_eq!(view.url, "https://www.test.test");
        assert_eq!(view.created, "Created: 1 Jan 2024");
        assert_eq!(view.last_edited, "Last edit: 2 Feb 2024");
        assert_eq!(view.folder_name, "test_folder");
        assert_eq!(view.authors, "test_author, other");
        assert_eq!(view.tone, StatusTone::Positive);
        assert_eq!(view.status_warning, None);
    }

    #[test]
    fn unknown_status_carries_a_warning() {
        let mut panel = DetailPanel::new();
        let ticket = panel.open(request("a"));
        panel.resolve(ticket, Ok(details("unknown")));
        let Some(PanelView::Loaded(view)) = panel.view() else {
            panic!("expected a loaded view");
        };
        assert_eq!(view.status, "unknown");
        assert_eq!(view.tone, StatusTone::Negative);
        assert!(view.status_warning.is_some());
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut panel = DetailPanel::new();
        let first = panel.open(request("a"));
        let second = panel.open(request("b"));
        assert_ne!(first, second);

        assert!(!panel.resolve(first, Ok(details("active"))));
        assert_eq!(panel.state(), &PanelState::Loading);

        assert!(panel.resolve(second, Ok(details("drafting"))));
        assert!(!panel.resolve(second, Ok(details("active"))));
        let Some(PanelView::Loaded(view)) = panel.view() else {
            panic!("expected a loaded view");
        };
        assert_eq!(view.status, "drafting");
    }

    #[test]
    fn closing_drops_in_flight_results() {
        let mut panel = DetailPanel::new();
        let ticket: FetchTicket = panel.open(request("a"));
        panel.close();
        assert!(!panel.is_modal_open());
        assert!(!panel.resolve(ticket, Ok(details("active"))));
        assert_eq!(panel.state(), &PanelState::Closed);
        assert_eq!(panel.view(), None);
    }

    #[tokio::test]
    async fn load_shows_backend_errors_without_a_document() {
        let source = canned();
        let mut panel = DetailPanel::new();
        assert!(panel.load(&source, request("missing")).await);
        assert_eq!(
            panel.view(),
            Some(PanelView::Failed {
                message: "Error 404".into()
            })
        );
    }

    #[tokio::test]
    async fn load_falls_back_for_unreadable_failures() {
        let source = canned();
        let mut panel = DetailPanel::new();
        panel.load(&source, request("broken")).await;
        assert_eq!(
            panel.view(),
            Some(PanelView::Failed {
                message: "Error. Something went wrong.".into()
            })
        );

        panel.load(&source, request("offline")).await;
        assert_eq!(
            panel.view(),
            Some(PanelView::Failed {
                message: "Error. Something went wrong.".into()
            })
        );
    }

    #[tokio::test]
    async fn load_uses_the_backend_status_message() {
        let source = canned();
        let mut panel = DetailPanel::new();
        panel.load(&source, request("ok")).await;
        let Some(PanelView::Loaded(view)) = panel.view() else {
            panic!("expected a loaded view");
        };
        assert_eq!(view.title, "Okay");
        assert_eq!(view.status_warning.as_deref(), Some("Incorrect"));
        assert_eq!(view.html, "<p>body</p>");
    }

    #[tokio::test]
    async fn slower_earlier_fetch_loses() {
        let source = canned();
        let mut panel = DetailPanel::new();
        let earlier = panel.open(request("missing"));
        let later = panel.open(request("ok"));
        let (earlier_result, later_result) =
            tokio::join!(source.fetch("missing"), source.fetch("ok"));

        assert!(panel.resolve(later, later_result));
        assert!(!panel.resolve(earlier, earlier_result));
        assert!(matches!(panel.view(), Some(PanelView::Loaded(_))));
    }
}
