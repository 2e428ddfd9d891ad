//! Dependency initialization and wiring for the word search application.

use std::env;
use std::sync::Arc;
use tracing::info;

use crate::service::QueryReporter;
use crate::ReportingError;
use word_search_repository::{OpenSearchClient, SearchEngineClient};

/// Default OpenSearch URL.
const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Default index the reporter queries.
const DEFAULT_SEARCH_INDEX: &str = "words";

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured reporter ready to run.
    pub reporter: QueryReporter,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: OpenSearch server URL (default: http://localhost:9200)
    /// - `SEARCH_INDEX`: index the reporter queries (default: words)
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(ReportingError)` - If initialization fails
    pub async fn new() -> Result<Self, ReportingError> {
        let opensearch_url =
            env::var("OPENSEARCH_URL").unwrap_or_else(|_| DEFAULT_OPENSEARCH_URL.to_string());
        let search_index =
            env::var("SEARCH_INDEX").unwrap_or_else(|_| DEFAULT_SEARCH_INDEX.to_string());

        info!(
            opensearch_url = %opensearch_url,
            search_index = %search_index,
            "Initializing dependencies"
        );

        // Initialize OpenSearch client
        let search_client = OpenSearchClient::new(&opensearch_url).await.map_err(|e| {
            ReportingError::config(format!("Failed to create OpenSearch client: {}", e))
        })?;

        // Verify OpenSearch is reachable
        let healthy = search_client
            .health_check()
            .await
            .map_err(|e| ReportingError::config(format!("OpenSearch health check failed: {}", e)))?;

        if !healthy {
            return Err(ReportingError::config("OpenSearch cluster is unhealthy"));
        }

        info!("OpenSearch connection verified");

        let reporter = QueryReporter::new(Arc::new(search_client), search_index);

        Ok(Self { reporter })
    }
}
