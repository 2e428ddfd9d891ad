//! Query reporter service.
//!
//! Verifies the target index exists, runs a term query against it, and
//! prints the matched `word` values to standard output.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::service::report::render_report;
use word_search_repository::{SearchEngineClient, SearchError};
use word_search_shared::{SearchResponse, TermQuery};

/// Reporter that queries a fixed index and prints matched field values.
///
/// Holds a handle to the search backend and the index name for its
/// lifetime; each `run` call is a single-pass request/response operation
/// with no retained state. Multiple reporters may share one client handle.
pub struct QueryReporter {
    client: Arc<dyn SearchEngineClient>,
    index: String,
}

impl QueryReporter {
    /// Create a new reporter targeting the given index.
    pub fn new(client: Arc<dyn SearchEngineClient>, index: impl Into<String>) -> Self {
        Self {
            client,
            index: index.into(),
        }
    }

    /// Run a term query and print the report.
    ///
    /// Checks that the target index exists, matches documents where `key`
    /// equals `value` (capped at `size` hits), and prints one `word: <value>`
    /// line per hit between two banner lines.
    ///
    /// # Arguments
    ///
    /// * `key` - Field name to match; must not be empty
    /// * `value` - The scalar the field must equal exactly
    /// * `size` - Maximum number of hits to retrieve; must be at least 1
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The report was printed
    /// * `Err(SearchError::InvalidQuery)` - Empty key or zero size
    /// * `Err(SearchError::IndexNotFound)` - The index does not exist; no
    ///   query is issued
    /// * `Err(SearchError)` - Any backend failure, propagated unchanged
    #[instrument(skip(self, value), fields(index = %self.index, key = %key, size = size))]
    pub async fn run(
        &self,
        key: &str,
        value: impl Into<Value>,
        size: u32,
    ) -> Result<(), SearchError> {
        if key.is_empty() {
            return Err(SearchError::invalid_query("key must not be empty"));
        }
        if size == 0 {
            return Err(SearchError::invalid_query("size must be at least 1"));
        }

        if !self.client.index_exists(&self.index).await? {
            return Err(SearchError::index_not_found(self.index.clone()));
        }

        let query = TermQuery::new(key, value, size);
        let response = self.client.search(&self.index, &query).await?;

        debug!(hits = response.len(), total = response.total, "Query completed");

        self.print_response(&response);
        Ok(())
    }

    /// Print the rendered report to standard output.
    fn print_response(&self, response: &SearchResponse) {
        print!("{}", render_report(response));
    }
}
