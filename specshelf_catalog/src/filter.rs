// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Search, categorical filters, and ordering.

use core::cmp::Ordering;
use core::str::FromStr;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::authors::fold_name;
use crate::{CatalogError, Spec, SpecStatus, SpecType};

/// Sort key for the filtered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Most recently updated first.
    #[default]
    Date,
    /// Title, ascending.
    Name,
    /// Spec index, ascending.
    Index,
}

impl FromStr for SortBy {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "name" => Ok(Self::Name),
            "index" => Ok(Self::Index),
            other => Err(CatalogError::UnknownSortKey(other.to_owned())),
        }
    }
}

/// Structured filters chosen by the user.
///
/// Sets are OR-within-field: an empty set accepts everything. Fields combine
/// with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    /// Only specs from this team folder.
    pub team: Option<String>,
    /// Only specs listing this author.
    pub author: Option<String>,
    /// Accepted statuses.
    pub status: BTreeSet<SpecStatus>,
    /// Accepted types.
    #[serde(rename = "type")]
    pub spec_type: BTreeSet<SpecType>,
    /// Ordering of the result.
    pub sort_by: SortBy,
}

impl FilterOptions {
    /// Returns `true` if `spec` passes every categorical filter.
    #[must_use]
    pub fn accepts(&self, spec: &Spec) -> bool {
        (self.status.is_empty() || self.status.contains(&spec.status))
            && (self.spec_type.is_empty() || self.spec_type.contains(&spec.spec_type))
            && self
                .team
                .as_deref()
                .is_none_or(|team| team.is_empty() || spec.folder_name == team)
            && self.author.as_deref().is_none_or(|author| {
                author.is_empty() || spec.authors.iter().any(|a| a == author)
            })
    }
}

/// Returns `true` if `spec` matches the free-text `query`.
///
/// Matching is a case-insensitive substring test against the title, the
/// index, and each author. A blank query matches everything.
#[must_use]
pub fn matches_query(spec: &Spec, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    spec.title.to_lowercase().contains(&needle)
        || spec.index.to_lowercase().contains(&needle)
        || spec
            .authors
            .iter()
            .any(|author| author.to_lowercase().contains(&needle))
}

/// Narrows `specs` by `query` and `options`, then orders the result.
///
/// Sorting is stable: specs with equal keys keep their relative input order.
/// Specs without a last-updated date sort after dated ones under
/// [`SortBy::Date`].
#[must_use]
pub fn filter_and_sort<'a>(
    specs: &'a [Spec],
    query: &str,
    options: &FilterOptions,
) -> Vec<&'a Spec> {
    let mut kept: Vec<&Spec> = specs
        .iter()
        .filter(|spec| options.accepts(spec) && matches_query(spec, query))
        .collect();
    kept.sort_by(|a, b| compare(a, b, options.sort_by));
    kept
}

/// Ordering used by [`filter_and_sort`].
#[must_use]
pub fn compare(a: &Spec, b: &Spec, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Date => match (a.last_updated, b.last_updated) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortBy::Name => collate(&a.title, &b.title),
        SortBy::Index => collate(&a.index, &b.index),
    }
}

/// Dictionary ordering of display text.
///
/// Letters compare first with case and accents ignored. Ties are broken by
/// accents (plain before accented), then by case (lowercase first), and
/// finally by the raw text, so only identical strings compare equal.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    fold_name(a)
        .cmp(&fold_name(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| lowercase_first(a, b))
        .then_with(|| a.cmp(b))
}

fn lowercase_first(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .find(|(x, y)| x != y)
        .map_or(Ordering::Equal, |(x, y)| y.is_lowercase().cmp(&x.is_lowercase()))
}

/// Distinct, non-empty values in collated order, for filter drop-downs.
#[must_use]
pub fn sorted_options<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options: Vec<String> = values
        .into_iter()
        .map(|value| value.as_ref().trim().to_owned())
        .filter(|value| !value.is_empty())
        .collect();
    options.sort_by(|a, b| collate(a, b));
    options.dedup();
    options
}
