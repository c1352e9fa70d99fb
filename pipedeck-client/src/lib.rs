//! Pipedeck HTTP Client
//!
//! A small, type-safe client for the Pipedeck web application's JSON API.
//!
//! # Example
//!
//! ```no_run
//! use pipedeck_client::PipedeckClient;
//! use pipedeck_core::dto::pipeline::CreatePipeline;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PipedeckClient::new("http://localhost:5000");
//!
//!     let created = client.create_pipeline(&CreatePipeline {
//!         name: "Nightly ETL".to_string(),
//!         template: "Data Engineering".to_string(),
//!         ..Default::default()
//!     }).await?;
//!
//!     println!("Created pipeline: {}", created.pipeline.id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod designs;
mod pipelines;
mod templates;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the Pipedeck API
///
/// Deleting or deploying an unknown pipeline id still succeeds, and design
/// submissions come back with `persisted: false`; neither is reported as an
/// error.
#[derive(Debug, Clone)]
pub struct PipedeckClient {
    /// Base URL of the server (e.g., "http://localhost:5000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl PipedeckClient {
    /// Create a new client
    ///
    /// # Example
    /// ```
    /// use pipedeck_client::PipedeckClient;
    ///
    /// let client = PipedeckClient::new("http://localhost:5000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a client around a preconfigured `reqwest::Client`
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that the server is up
    pub async fn health(&self) -> Result<()> {
        let response = self.client.get(self.url("/health")).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::from_body(status.as_u16(), "Health check failed"));
        }

        Ok(())
    }

    fn url(&self, path: &str) -> String {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Request to {}", url);
        url
    }

    /// Turn a response into `T`, or into [`ClientError`] for non-2xx statuses
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_body(status.as_u16(), &body));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PipedeckClient::new("http://localhost:5000");
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = PipedeckClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/api/pipelines"), "http://localhost:5000/api/pipelines");
    }

    #[test]
    fn test_client_with_custom_client() {
        let client = PipedeckClient::with_client("http://localhost:5000", Client::new());
        assert_eq!(client.base_url(), "http://localhost:5000");
    }
}
