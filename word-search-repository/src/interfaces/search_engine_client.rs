//! Search engine client trait definition.
//!
//! This module defines the abstract interface for search engine operations,
//! allowing for different backend implementations (OpenSearch, in-memory, etc.).

use async_trait::async_trait;

use crate::errors::SearchError;
use word_search_shared::{SearchResponse, TermQuery};

/// Abstract interface for search engine operations.
///
/// This trait defines the operations required to interact with a search
/// engine. Implementations can be swapped for different backends (OpenSearch,
/// in-memory fake, etc.) enabling easy testing and potential future
/// migrations.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
/// A single client handle may be shared by multiple callers; implementations
/// own their connection lifecycle.
///
/// # Error Handling
///
/// All methods return `Result<T, SearchError>` for consistent error handling.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Check whether the named index exists in the search engine.
    ///
    /// # Arguments
    ///
    /// * `index` - The index name to check
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The index exists
    /// * `Ok(false)` - The index does not exist
    /// * `Err(SearchError)` - If the check fails to execute
    async fn index_exists(&self, index: &str) -> Result<bool, SearchError>;

    /// Execute a term query against the named index.
    ///
    /// Matches documents where the query's field equals its value exactly,
    /// returning at most `query.size` hits in backend order.
    ///
    /// # Arguments
    ///
    /// * `index` - The index to query
    /// * `query` - The term query (field, value, result-size cap)
    ///
    /// # Returns
    ///
    /// * `Ok(SearchResponse)` - The matched hits and total count
    /// * `Err(SearchError)` - If the search fails
    ///
    /// # Example
    ///
    /// ```ignore
    /// let query = TermQuery::new("word", "value", 10);
    /// let response = client.search("words", &query).await?;
    /// println!("Found {} results", response.total);
    /// ```
    async fn search(&self, index: &str, query: &TermQuery) -> Result<SearchResponse, SearchError>;

    /// Check if the search engine is healthy and reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the search engine is healthy
    /// * `Ok(false)` - If the search engine is unhealthy
    /// * `Err(SearchError)` - If the health check fails to execute
    async fn health_check(&self) -> Result<bool, SearchError>;
}
