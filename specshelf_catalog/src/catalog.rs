// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The loaded spec collection together with the user's current query and
//! filters.

use serde::Deserialize;

use crate::filter::{compare, matches_query};
use crate::{CatalogError, FilterOptions, RawSpec, Spec, sorted_options, unify_authors};

#[derive(Deserialize)]
#[serde(untagged)]
enum Feed {
    Bundle {
        specs: Vec<RawSpec>,
        #[serde(default)]
        teams: Vec<String>,
    },
    List(Vec<RawSpec>),
}

/// Normalized specs plus the derived filtered view.
///
/// The filtered order is recomputed eagerly whenever the query or the filters
/// change, and only then.
#[derive(Debug, Clone)]
pub struct Catalog {
    specs: Vec<Spec>,
    teams: Vec<String>,
    authors: Vec<String>,
    query: String,
    filter: FilterOptions,
    filtered: Vec<usize>,
}

impl Catalog {
    /// Builds a catalog from feed records.
    ///
    /// When `teams` is empty, the team list is taken from the records' folder
    /// names.
    #[must_use]
    pub fn new(records: Vec<RawSpec>, teams: Vec<String>) -> Self {
        let teams = if teams.is_empty() {
            sorted_options(records.iter().map(|raw| raw.folder_name.as_str()))
        } else {
            sorted_options(teams)
        };
        let mut specs: Vec<Spec> = records.into_iter().map(Spec::from_raw).collect();
        unify_authors(&mut specs);
        let authors = sorted_options(specs.iter().flat_map(|spec| spec.authors.iter()));
        tracing::info!(
            message = "Loaded spec catalog",
            specs = specs.len(),
            teams = teams.len(),
            authors = authors.len(),
        );

        let mut catalog = Self {
            specs,
            teams,
            authors,
            query: String::new(),
            filter: FilterOptions::default(),
            filtered: Vec::new(),
        };
        catalog.refilter();
        catalog
    }

    /// Parses an item feed.
    ///
    /// Accepts either `{"specs": [...], "teams": [...]}` or a bare list of
    /// specs.
    pub fn from_json(feed: &str) -> Result<Self, CatalogError> {
        Ok(match serde_json::from_str::<Feed>(feed)? {
            Feed::Bundle { specs, teams } => Self::new(specs, teams),
            Feed::List(specs) => Self::new(specs, Vec::new()),
        })
    }

    /// Every spec, in feed order.
    #[must_use]
    pub fn specs(&self) -> &[Spec] {
        &self.specs
    }

    /// Team filter choices.
    #[must_use]
    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    /// Author filter choices.
    #[must_use]
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// Current free-text query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current filters.
    #[must_use]
    pub fn filter(&self) -> &FilterOptions {
        &self.filter
    }

    /// Replaces the query. Returns `true` if it differed.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.query {
            return false;
        }
        self.query = query;
        self.refilter();
        true
    }

    /// Replaces the filters. Returns `true` if they differed.
    pub fn set_filter(&mut self, filter: FilterOptions) -> bool {
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        self.refilter();
        true
    }

    /// Specs passing the query and filters, in sorted order.
    pub fn filtered(&self) -> impl ExactSizeIterator<Item = &Spec> + '_ {
        self.filtered.iter().map(|&index| &self.specs[index])
    }

    /// The spec at `position` in the filtered order.
    #[must_use]
    pub fn filtered_spec(&self, position: usize) -> Option<&Spec> {
        self.filtered
            .get(position)
            .and_then(|&index| self.specs.get(index))
    }

    /// Number of specs passing the query and filters.
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Result count as shown above the grid, e.g. `12 specs`.
    #[must_use]
    pub fn count_label(&self) -> String {
        format!("{} specs", self.filtered.len())
    }

    /// Looks a spec up by index, ignoring the case of `index`.
    ///
    /// Used to resolve short links such as `/spec/ab123`.
    #[must_use]
    pub fn find_by_index(&self, index: &str) -> Option<&Spec> {
        let wanted = index.to_uppercase();
        self.specs.iter().find(|spec| spec.index == wanted)
    }

    fn refilter(&mut self) {
        let specs = &self.specs;
        let mut filtered: Vec<usize> = specs
            .iter()
            .enumerate()
            .filter(|(_, spec)| self.filter.accepts(spec) && matches_query(spec, &self.query))
            .map(|(index, _)| index)
            .collect();
        filtered.sort_by(|&a, &b| compare(&specs[a], &specs[b], self.filter.sort_by));
        tracing::debug!(
            message = "Recomputed filtered specs",
            query = %self.query,
            sort_by = ?self.filter.sort_by,
            matched = filtered.len(),
            total = specs.len(),
        );
        self.filtered = filtered;
    }
}
