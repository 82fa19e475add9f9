// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Shown whenever a failure carries no server-provided explanation.
pub const FALLBACK_MESSAGE: &str = "Error. Something went wrong.";

/// Why a detail fetch failed.
#[derive(thiserror::Error, Debug)]
pub enum DetailError {
    /// The backend answered with a non-success status and an error body.
    #[error("backend returned {status}: {message}")]
    Backend {
        /// HTTP status code.
        status: u16,
        /// Message from the error body.
        message: String,
    },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// A response arrived but its body could not be understood.
    #[error("could not decode response (status {status}): {source}")]
    Decode {
        /// HTTP status code.
        status: u16,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

impl DetailError {
    /// Text for the panel's error screen.
    ///
    /// Backend messages are shown verbatim; everything else gets
    /// [`FALLBACK_MESSAGE`].
    #[must_use]
    pub fn display_message(&self) -> &str {
        match self {
            Self::Backend { message, .. } if !message.is_empty() => message,
            _ => FALLBACK_MESSAGE,
        }
    }
}

impl From<reqwest::Error> for DetailError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
