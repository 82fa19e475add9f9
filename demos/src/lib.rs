// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared setup for the Specshelf demos.
//!
//! Run:
//! - `cargo run -p specshelf_demos --example catalog_walkthrough`
//! - `RUST_LOG=debug cargo run -p specshelf_demos --example catalog_walkthrough -- demos/shelf.json`

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;
use specshelf_catalog::{CardGrid, FilterOptions};
use specshelf_details::{
    DetailClientConfig, DetailError, DetailSource, SpecDetails, interpret_response,
};
use specshelf_virtual_grid::{GridConfig, Viewport};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Demo settings, read from a JSON file.
///
/// Relative paths are resolved against the directory holding the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfConfig {
    /// Item feed to load.
    pub feed: PathBuf,
    /// Directory of canned detail responses, `{fileID}.json` each. When
    /// absent, details are fetched over HTTP using `details`.
    #[serde(default)]
    pub details_dir: Option<PathBuf>,
    /// HTTP settings for the details endpoint.
    #[serde(default)]
    pub details: DetailClientConfig,
    /// Card geometry.
    #[serde(default = "default_grid")]
    pub grid: GridConfig,
    /// Initial viewport.
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    /// Initial filters.
    #[serde(default)]
    pub filter: FilterOptions,
}

fn default_grid() -> GridConfig {
    CardGrid::default().into()
}

fn default_viewport() -> Viewport {
    Viewport::new(1280.0, 720.0)
}

impl ShelfConfig {
    /// Reads and parses `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading shelf config {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing shelf config {}", path.display()))?;
        if let Some(base) = path.parent() {
            config.feed = base.join(&config.feed);
            config.details_dir = config.details_dir.map(|dir| base.join(dir));
        }
        Ok(config)
    }

    /// Reads the item feed named by this config.
    pub fn read_feed(&self) -> anyhow::Result<String> {
        std::fs::read_to_string(&self.feed)
            .with_context(|| format!("reading spec feed {}", self.feed.display()))
    }
}

/// Path of the bundled config.
#[must_use]
pub fn bundled_config() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("shelf.json")
}

/// Installs a console subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_filter(filter))
        .init();
}

/// [`DetailSource`] serving `{dir}/{fileID}.json` from disk.
///
/// A missing file answers like the backend does for an unknown document.
#[derive(Debug, Clone)]
pub struct LocalDetailSource {
    dir: PathBuf,
}

impl LocalDetailSource {
    /// Serves files from `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DetailSource for LocalDetailSource {
    async fn fetch(&self, file_id: &str) -> Result<SpecDetails, DetailError> {
        let path = self.dir.join(format!("{file_id}.json"));
        tracing::debug!(message = "Reading canned spec details", path = %path.display());
        match tokio::fs::read(&path).await {
            Ok(body) => interpret_response(200, &body),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                interpret_response(404, br#"{"message": "Error 404"}"#)
            }
            Err(err) => Err(DetailError::Transport(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use specshelf_catalog::Catalog;
    use specshelf_details::{DetailPanel, DetailSource, PanelView};

    use super::{LocalDetailSource, ShelfConfig, bundled_config};

    #[test]
    fn bundled_config_loads_with_defaults() {
        let config = ShelfConfig::load(&bundled_config()).unwrap();
        assert_eq!(config.grid.item_height, 230.0);
        assert_eq!(config.grid.item_min_width, 400.0);
        assert_eq!(config.grid.grid_space, 16.0);
        assert!(config.feed.ends_with("data/specs.json"));

        let catalog = Catalog::from_json(&config.read_feed().unwrap()).unwrap();
        assert!(catalog.specs().len() >= 10);
    }

    #[tokio::test]
    async fn canned_details_load_and_missing_ones_404() {
        let config = ShelfConfig::load(&bundled_config()).unwrap();
        let source = LocalDetailSource::new(config.details_dir.unwrap());
        assert!(source.fetch("doc-snap-refresh").await.is_ok());

        let mut panel = DetailPanel::new();
        let request = specshelf_catalog::MoreSpecDetails {
            file_id: "no-such-doc".into(),
            ..Default::default()
        };
        panel.load(&source, request).await;
        assert_eq!(
            panel.view(),
            Some(PanelView::Failed {
                message: "Error 404".into()
            })
        );
    }
}
