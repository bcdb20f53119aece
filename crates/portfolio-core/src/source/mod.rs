//! Data sources for the portfolio app.
//!
//! One capability, two variants: an in-memory mock that simulates
//! network latency and a real HTTP client. The renderer only ever sees
//! the `DataSource` trait, so which variant is active is purely a
//! configuration choice.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::PortfolioResult;
use crate::types::{NewMessage, ProjectRecord, SubmitAck};

mod mock;
mod remote;

pub use mock::{seed_projects, MockStore, FETCH_DELAY, SUBMIT_DELAY};
pub use remote::ApiClient;

/// Capability set shared by both data-source variants.
///
/// Neither operation retries or backs off; retry is a user-triggered
/// action at the presentation layer.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the full project collection, in display order
    async fn fetch_projects(&self) -> PortfolioResult<Vec<ProjectRecord>>;

    /// Submit a contact message, returning an acknowledgment
    async fn submit_message(&self, msg: NewMessage) -> PortfolioResult<SubmitAck>;
}

/// Which data-source variant to run with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// In-memory mock with simulated latency
    Mock,
    /// Real HTTP backend at the given base URL
    Remote { base_url: String },
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::Mock
    }
}

/// Build the configured data-source variant
pub fn build_source(config: SourceConfig) -> Arc<dyn DataSource> {
    match config {
        SourceConfig::Mock => Arc::new(MockStore::new()),
        SourceConfig::Remote { base_url } => Arc::new(ApiClient::new(base_url)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_mock() {
        assert_eq!(SourceConfig::default(), SourceConfig::Mock);
    }

    #[tokio::test(start_paused = true)]
    async fn test_build_source_mock_serves_seed_data() {
        let source = build_source(SourceConfig::Mock);
        let projects = source.fetch_projects().await.unwrap();
        assert_eq!(projects.len(), 3);
    }
}
