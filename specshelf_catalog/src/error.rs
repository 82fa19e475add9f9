// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors produced while loading or configuring a catalog.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// The item feed was not valid JSON or had the wrong shape.
    #[error("malformed spec feed: {0}")]
    Feed(#[from] serde_json::Error),

    /// A sort key other than `date`, `name`, or `index`.
    #[error("unknown sort key {0:?}, expected one of date, name, index")]
    UnknownSortKey(String),
}
