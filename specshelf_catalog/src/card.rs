// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display descriptors for spec cards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Spec, StatusTone, UNKNOWN};

/// Formats a date the way cards and the detail panel show it: `1 Jan 2024`.
#[must_use]
pub fn display_date(date: Option<DateTime<Utc>>) -> String {
    date.map_or_else(
        || UNKNOWN.to_owned(),
        |date| date.format("%-d %b %Y").to_string(),
    )
}

/// What the detail panel needs from the card that opened it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoreSpecDetails {
    /// Document to fetch.
    #[serde(rename = "fileID")]
    pub file_id: String,
    /// Team folder, shown in the panel header.
    pub folder_name: String,
    /// Pre-formatted "Last edit: ..." text.
    pub last_edited: String,
}

/// Result of activating a card's title link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Open the detail panel in place.
    OpenDetails,
    /// Let the link navigate to the document.
    FollowLink,
}

impl CardAction {
    /// A click opens the panel unless a modifier asks for the link itself.
    #[must_use]
    pub const fn for_click(meta: bool, ctrl: bool) -> Self {
        if meta || ctrl {
            Self::FollowLink
        } else {
            Self::OpenDetails
        }
    }

    /// Enter on the focused title opens the panel; other keys do nothing.
    #[must_use]
    pub fn for_key(key: &str) -> Option<Self> {
        (key == "Enter").then_some(Self::OpenDetails)
    }
}

/// Everything a card shows, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Spec index.
    pub index: String,
    /// Team folder.
    pub folder_name: String,
    /// Type label.
    pub type_label: String,
    /// Status as written.
    pub status_label: String,
    /// Status badge colour.
    pub tone: StatusTone,
    /// Title, also the link text.
    pub title: String,
    /// Document id for the detail panel.
    pub file_id: String,
    /// Link target.
    pub file_url: String,
    /// Authors joined with `", "`.
    pub authors: String,
    /// `Last edit: 1 Jan 2024`.
    pub last_edited: String,
    /// `10 comments 5 unresolved`.
    pub comments: String,
}

impl CardView {
    /// Builds the descriptor for `spec`.
    #[must_use]
    pub fn of(spec: &Spec) -> Self {
        Self {
            index: spec.index.clone(),
            folder_name: spec.folder_name.clone(),
            type_label: spec.spec_type.label().to_owned(),
            status_label: spec.status_label.clone(),
            tone: spec.tone(),
            title: spec.title.clone(),
            file_id: spec.file_id.clone(),
            file_url: spec.file_url.clone(),
            authors: spec.authors.join(", "),
            last_edited: format!("Last edit: {}", display_date(spec.last_updated)),
            comments: format!(
                "{} comments {} unresolved",
                spec.number_of_comments, spec.open_comments
            ),
        }
    }

    /// Request for the detail panel when this card is activated.
    #[must_use]
    pub fn details_request(&self) -> MoreSpecDetails {
        MoreSpecDetails {
            file_id: self.file_id.clone(),
            folder_name: self.folder_name.clone(),
            last_edited: self.last_edited.clone(),
        }
    }
}
