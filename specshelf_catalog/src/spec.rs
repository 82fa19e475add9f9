// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spec records: the wire shape from the item feed and the normalized shape
//! the catalog works with.

use core::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::authors::parse_authors;

/// Display text for any field that could not be recognized.
pub const UNKNOWN: &str = "Unknown";

/// Display text for a spec without a title.
pub const UNKNOWN_TITLE: &str = "Unknown title";

/// Shortest index that is accepted as a real spec index (e.g. `AB123`).
pub const MIN_INDEX_LEN: usize = 5;

/// Lifecycle status of a spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecStatus {
    /// Implemented or in force.
    Active,
    /// Signed off.
    Approved,
    /// Early notes.
    Braindump,
    /// Done.
    Completed,
    /// Being written.
    Drafting,
    /// Superseded.
    Obsolete,
    /// Waiting for reviewers.
    #[serde(rename = "pending review")]
    PendingReview,
    /// Turned down.
    Rejected,
    /// Missing or unrecognized.
    Unknown,
}

impl SpecStatus {
    /// Every recognized status, excluding [`SpecStatus::Unknown`].
    pub const KNOWN: [Self; 8] = [
        Self::Active,
        Self::Approved,
        Self::Braindump,
        Self::Completed,
        Self::Drafting,
        Self::Obsolete,
        Self::PendingReview,
        Self::Rejected,
    ];

    /// Parses a status case-insensitively; anything unrecognized is `Unknown`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        Self::KNOWN
            .into_iter()
            .find(|status| status.as_str() == lower)
            .unwrap_or(Self::Unknown)
    }

    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Approved => "approved",
            Self::Braindump => "braindump",
            Self::Completed => "completed",
            Self::Drafting => "drafting",
            Self::Obsolete => "obsolete",
            Self::PendingReview => "pending review",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        }
    }

    /// Colour family for status badges.
    #[must_use]
    pub const fn tone(self) -> StatusTone {
        match self {
            Self::Approved | Self::Completed | Self::Active => StatusTone::Positive,
            Self::PendingReview => StatusTone::Caution,
            Self::Drafting | Self::Braindump => StatusTone::Neutral,
            Self::Rejected | Self::Obsolete | Self::Unknown => StatusTone::Negative,
        }
    }
}

impl fmt::Display for SpecStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge colour family for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    /// Approved, completed, active.
    Positive,
    /// Anything pending.
    Caution,
    /// Drafting, braindump.
    Neutral,
    /// Rejected, obsolete, unknown.
    Negative,
}

impl StatusTone {
    /// Classifies a free-form status string.
    ///
    /// Unlike [`SpecStatus::parse`] this accepts any status starting with
    /// "pending" as cautionary, and treats unrecognized text as neutral.
    #[must_use]
    pub fn of_label(label: &str) -> Self {
        let lower = label.trim().to_lowercase();
        match lower.as_str() {
            "approved" | "completed" | "active" => Self::Positive,
            "rejected" | "obsolete" | "unknown" => Self::Negative,
            _ if lower.starts_with("pending") => Self::Caution,
            _ => Self::Neutral,
        }
    }
}

/// Kind of spec document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpecType {
    /// How something is built.
    Implementation,
    /// What a product must do.
    #[serde(rename = "Product Requirement")]
    ProductRequirement,
    /// A convention to follow.
    Standard,
    /// Background reading.
    Informational,
    /// How the team works.
    Process,
    /// Missing or unrecognized.
    Unknown,
}

impl SpecType {
    /// Every recognized type, excluding [`SpecType::Unknown`].
    pub const KNOWN: [Self; 5] = [
        Self::Implementation,
        Self::ProductRequirement,
        Self::Standard,
        Self::Informational,
        Self::Process,
    ];

    /// Parses a type by its exact label; anything else is `Unknown`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|kind| kind.label() == raw)
            .unwrap_or(Self::Unknown)
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Implementation => "Implementation",
            Self::ProductRequirement => "Product Requirement",
            Self::Standard => "Standard",
            Self::Informational => "Informational",
            Self::Process => "Process",
            Self::Unknown => UNKNOWN,
        }
    }
}

impl fmt::Display for SpecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A spec as it arrives in the item feed.
///
/// Every field is optional on the wire; missing values are normalized later by
/// [`Spec::from_raw`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSpec {
    /// Team folder the document lives in.
    pub folder_name: String,
    /// Document file name.
    pub file_name: String,
    /// Document id used for detail lookups.
    #[serde(rename = "fileID")]
    pub file_id: String,
    /// Link to the document.
    #[serde(rename = "fileURL")]
    pub file_url: String,
    /// Spec index such as `AB123`.
    pub index: String,
    /// Document title.
    pub title: String,
    /// Free-form status.
    pub status: String,
    /// Author names, either as a list or as one comma-separated string.
    #[serde(deserialize_with = "deserialize_authors")]
    pub authors: Vec<String>,
    /// Free-form type.
    #[serde(rename = "type")]
    pub spec_type: String,
    /// Creation time.
    #[serde(deserialize_with = "deserialize_lenient_date")]
    pub created: Option<DateTime<Utc>>,
    /// Last modification time.
    #[serde(deserialize_with = "deserialize_lenient_date")]
    pub last_updated: Option<DateTime<Utc>>,
    /// Total comment count.
    pub number_of_comments: u32,
    /// Unresolved comment count.
    pub open_comments: u32,
}

/// A spec after normalization; every display field is populated.
#[derive(Debug, Clone, PartialEq)]
pub struct Spec {
    /// Team folder, or `Unknown`.
    pub folder_name: String,
    /// Document file name.
    pub file_name: String,
    /// Document id used for detail lookups.
    pub file_id: String,
    /// Link to the document.
    pub file_url: String,
    /// Spec index, or `Unknown` when shorter than [`MIN_INDEX_LEN`].
    pub index: String,
    /// Title, or `Unknown title`.
    pub title: String,
    /// Parsed status.
    pub status: SpecStatus,
    /// Status as written in the feed when recognized, `Unknown` otherwise.
    pub status_label: String,
    /// Parsed type.
    pub spec_type: SpecType,
    /// Author names.
    pub authors: Vec<String>,
    /// Creation time, if the feed had a parseable one.
    pub created: Option<DateTime<Utc>>,
    /// Last modification time, if the feed had a parseable one.
    pub last_updated: Option<DateTime<Utc>>,
    /// Total comment count.
    pub number_of_comments: u32,
    /// Unresolved comment count.
    pub open_comments: u32,
}

impl Spec {
    /// Normalizes a feed record.
    ///
    /// Never fails: anything missing or unrecognized is replaced with a
    /// fallback display value.
    #[must_use]
    pub fn from_raw(raw: RawSpec) -> Self {
        let title = if raw.title.trim().is_empty() {
            UNKNOWN_TITLE.to_owned()
        } else {
            raw.title
        };
        let index = if raw.index.chars().count() >= MIN_INDEX_LEN {
            raw.index
        } else {
            UNKNOWN.to_owned()
        };
        let status = SpecStatus::parse(&raw.status);
        let status_label = if status == SpecStatus::Unknown {
            UNKNOWN.to_owned()
        } else {
            raw.status
        };
        let folder_name = if raw.folder_name.is_empty() {
            UNKNOWN.to_owned()
        } else {
            raw.folder_name
        };
        let spec_type = SpecType::parse(&raw.spec_type);
        if status == SpecStatus::Unknown || spec_type == SpecType::Unknown {
            tracing::trace!(
                message = "Normalized unrecognized spec fields",
                file_id = %raw.file_id,
                status = ?status,
                spec_type = ?spec_type,
            );
        }

        Self {
            folder_name,
            file_name: raw.file_name,
            file_id: raw.file_id,
            file_url: raw.file_url,
            index,
            title,
            status,
            status_label,
            spec_type,
            authors: raw.authors,
            created: raw.created,
            last_updated: raw.last_updated,
            number_of_comments: raw.number_of_comments,
            open_comments: raw.open_comments,
        }
    }

    /// Badge tone for this spec's status label.
    #[must_use]
    pub fn tone(&self) -> StatusTone {
        StatusTone::of_label(&self.status_label)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AuthorsField {
    List(Vec<String>),
    Joined(String),
}

fn deserialize_authors<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<AuthorsField>::deserialize(deserializer)? {
        Some(AuthorsField::List(list)) => list
            .into_iter()
            .map(|author| author.trim().to_owned())
            .filter(|author| !author.is_empty())
            .collect(),
        Some(AuthorsField::Joined(joined)) => parse_authors(&joined),
        None => Vec::new(),
    })
}

fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

/// Parses the date formats seen in the feed: RFC 3339, `YYYY-MM-DD HH:MM:SS`
/// (taken as UTC), and bare `YYYY-MM-DD`.
#[must_use]
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
