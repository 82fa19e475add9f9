// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Payloads of the `/spec/{fileID}` endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use specshelf_catalog::parse_date;

/// A rendered spec document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecDetails {
    /// Document body as HTML, rendered by the backend.
    pub html: String,
    /// Header fields.
    pub metadata: Metadata,
    /// Link to the source document.
    pub url: String,
}

/// Header fields of a rendered spec.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    /// Spec index.
    pub index: String,
    /// Type label.
    #[serde(rename = "type")]
    pub spec_type: String,
    /// Title.
    pub title: String,
    /// Status as written in the document.
    pub status: String,
    /// Author names.
    pub authors: Vec<String>,
    /// Creation time; unparseable values are dropped.
    #[serde(deserialize_with = "lenient_date")]
    pub created: Option<DateTime<Utc>>,
    /// Explanation attached to an unrecognized status.
    pub status_message: Option<String>,
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .as_deref()
        .and_then(parse_date))
}

/// Body of a non-success response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub message: String,
}
