// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where spec details come from.

use core::future::Future;
use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{DetailError, ErrorBody, SpecDetails};

/// Fetches the rendered document for a spec.
pub trait DetailSource {
    /// Fetches details for `file_id`.
    fn fetch(&self, file_id: &str) -> impl Future<Output = Result<SpecDetails, DetailError>> + Send;
}

/// Connection settings for [`HttpDetailSource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailClientConfig {
    /// Scheme, host, and optional path prefix; `/spec/{fileID}` is appended.
    pub base_url: String,
    /// Whole-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for DetailClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_owned(),
            timeout_ms: 10_000,
            user_agent: concat!("specshelf/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

/// Decodes an HTTP response from the details endpoint.
///
/// A success status must carry a [`SpecDetails`] body. Any other status is
/// expected to carry an [`ErrorBody`], whose message is surfaced as
/// [`DetailError::Backend`]; when it does not, the result is
/// [`DetailError::Decode`].
pub fn interpret_response(status: u16, body: &[u8]) -> Result<SpecDetails, DetailError> {
    if (200..300).contains(&status) {
        return serde_json::from_slice(body)
            .map_err(|source| DetailError::Decode { status, source });
    }
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody { message }) => Err(DetailError::Backend { status, message }),
        Err(source) => Err(DetailError::Decode { status, source }),
    }
}

/// [`DetailSource`] backed by the details HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpDetailSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDetailSource {
    /// Builds a client from `config`.
    pub fn new(config: &DetailClientConfig) -> Result<Self, DetailError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Endpoint URL for `file_id`.
    #[must_use]
    pub fn url_for(&self, file_id: &str) -> String {
        format!("{}/spec/{file_id}", self.base_url)
    }
}

impl DetailSource for HttpDetailSource {
    async fn fetch(&self, file_id: &str) -> Result<SpecDetails, DetailError> {
        let url = self.url_for(file_id);
        tracing::debug!(message = "Fetching spec details", url = %url);
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        tracing::debug!(
            message = "Spec details response",
            url = %url,
            status,
            bytes = body.len(),
        );
        interpret_response(status, &body)
    }
}
