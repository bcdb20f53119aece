//! HTTP data source.
//!
//! Thin client over the portfolio backend: `GET {base}/projects` for
//! reads, `POST {base}/messages` for writes. Non-2xx responses are
//! turned into `Transport` errors carrying the status code; failures
//! without a response (connect error, timeout) carry no status.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{PortfolioError, PortfolioResult};
use crate::source::DataSource;
use crate::types::{NewMessage, ProjectRecord, SubmitAck};

/// Per-request timeout; a hung backend must not leave the UI loading forever
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the portfolio backend
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. "http://localhost:5000/api")
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transport(err: reqwest::Error) -> PortfolioError {
        PortfolioError::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl DataSource for ApiClient {
    async fn fetch_projects(&self) -> PortfolioResult<Vec<ProjectRecord>> {
        let url = format!("{}/projects", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(Self::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortfolioError::Transport {
                status: Some(status.as_u16()),
                message: format!("projects request failed: {status}"),
            });
        }

        response
            .json::<Vec<ProjectRecord>>()
            .await
            .map_err(|e| PortfolioError::Serialization(e.to_string()))
    }

    async fn submit_message(&self, msg: NewMessage) -> PortfolioResult<SubmitAck> {
        let url = format!("{}/messages", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&msg)
            .send()
            .await
            .map_err(Self::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortfolioError::Transport {
                status: Some(status.as_u16()),
                message: format!("messages request failed: {status}"),
            });
        }

        response
            .json::<SubmitAck>()
            .await
            .map_err(|e| PortfolioError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:5000/api/");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_without_status() {
        // Nothing listens on this port; the connect failure must map to
        // Transport with no status code.
        let client = ApiClient::new("http://127.0.0.1:1");
        let err = client.fetch_projects().await.unwrap_err();
        assert!(matches!(
            err,
            PortfolioError::Transport { status: None, .. }
        ));
    }
}
