// =============================================================================
// Folio Web - Content API Client
// =============================================================================
// Table of Contents:
// 1. Error Types
// 2. API Client
// =============================================================================

use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;

// -----------------------------------------------------------------------------
// 1. Error Types
// -----------------------------------------------------------------------------

/// Content API error types.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialize(String),
}

// -----------------------------------------------------------------------------
// 2. API Client
// -----------------------------------------------------------------------------

/// HTTP client for durable content saves.
pub struct ContentApi {
    base_url: String,
}

impl ContentApi {
    /// Create a new content API client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Durably save one content subsection. Callers on the edit path treat
    /// this as fire-and-forget and only log the result.
    pub async fn save_section(
        &self,
        section: &str,
        subsection: &str,
        value: &Value,
    ) -> Result<(), ApiError> {
        let url = format!("{}/api/content/{}/{}", self.base_url, section, subsection);

        let response = Request::put(&url)
            .header("Content-Type", "application/json")
            .json(value)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        match status {
            200..=299 => Ok(()),
            _ => {
                let message = response.text().await.unwrap_or_default();
                Err(ApiError::Server { status, message })
            }
        }
    }
}
