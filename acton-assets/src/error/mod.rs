//! Error types and error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::requirements::AssetKind;

/// Asset helper error type
#[derive(Debug, Error)]
pub enum AssetError {
    /// An identifier was empty or whitespace only
    #[error("Blank {kind} source cannot be turned into a tag")]
    BlankSource {
        /// Which tag helper rejected the source
        kind: AssetKind,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Template rendering error
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

impl From<figment::Error> for AssetError {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl IntoResponse for AssetError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Asset rendering failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Template rendering failed",
        )
            .into_response()
    }
}
