//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    cluster::ClusterHealthParts,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::IndicesExistsParts,
    OpenSearch, SearchParts,
};
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use crate::opensearch::queries::build_term_query;
use word_search_shared::{SearchHit, SearchResponse, TermQuery};

/// OpenSearch client implementation.
///
/// Provides exact-match term search capabilities using OpenSearch as the
/// backend.
///
/// # Example
///
/// ```ignore
/// let client = OpenSearchClient::new("http://localhost:9200").await?;
///
/// let query = TermQuery::new("word", "value", 10);
/// let response = client.search("words", &query).await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client connected to the specified URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://localhost:9200")
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchError)` - If connection setup fails
    pub async fn new(url: &str) -> Result<Self, SearchError> {
        let parsed_url = Url::parse(url).map_err(|e| SearchError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(url = %url, "Created OpenSearch client");

        Ok(Self { client })
    }

    /// Parse an OpenSearch search response body into a `SearchResponse`.
    ///
    /// Reads the hit array from `hits.hits` and the total match count from
    /// `hits.total.value`, falling back to the hit count when the total is
    /// absent.
    fn parse_response(body: &Value) -> Result<SearchResponse, SearchError> {
        let hits_value = body["hits"]["hits"].clone();
        if hits_value.is_null() {
            return Err(SearchError::parse("Response is missing hits.hits"));
        }

        let hits: Vec<SearchHit> = serde_json::from_value(hits_value)
            .map_err(|e| SearchError::parse(format!("Malformed hit array: {}", e)))?;

        let total = body["hits"]["total"]["value"]
            .as_u64()
            .map(|v| v as usize)
            .unwrap_or(hits.len());

        Ok(SearchResponse::new(hits, total))
    }
}

#[async_trait]
impl SearchEngineClient for OpenSearchClient {
    /// Check whether the named index exists.
    ///
    /// Maps HTTP 200 to `true` and 404 to `false`; any other status is a
    /// query error.
    async fn index_exists(&self, index: &str) -> Result<bool, SearchError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status_code();
        match status.as_u16() {
            200 => Ok(true),
            404 => Ok(false),
            _ => {
                let error_body = response.text().await.unwrap_or_default();
                error!(status = %status, body = %error_body, "Index existence check failed");
                Err(SearchError::query(format!(
                    "Existence check failed with status {}: {}",
                    status, error_body
                )))
            }
        }
    }

    /// Execute a term query against the named index.
    async fn search(&self, index: &str, query: &TermQuery) -> Result<SearchResponse, SearchError> {
        let body = build_term_query(query);

        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::query(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Search request failed");
            return Err(SearchError::query(format!(
                "Search failed with status {}: {}",
                status, error_body
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        let parsed = Self::parse_response(&response_body)?;

        debug!(
            index = %index,
            key = %query.key,
            hits = parsed.len(),
            total = parsed.total,
            "Search completed"
        );

        Ok(parsed)
    }

    /// Check cluster health; a `red` status is unhealthy.
    async fn health_check(&self) -> Result<bool, SearchError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            return Ok(false);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        Ok(body["status"].as_str().map(|s| s != "red").unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_response() {
        let body = json!({
            "hits": {
                "total": { "value": 1 },
                "hits": [
                    { "_source": { "word": "value" } }
                ]
            }
        });

        let response = OpenSearchClient::parse_response(&body).unwrap();

        assert_eq!(response.len(), 1);
        assert_eq!(response.total, 1);
        assert_eq!(response.hits[0].field("word"), Some(&json!("value")));
    }

    #[test]
    fn test_parse_response_empty() {
        let body = json!({
            "hits": {
                "total": { "value": 0 },
                "hits": []
            }
        });

        let response = OpenSearchClient::parse_response(&body).unwrap();

        assert!(response.is_empty());
        assert_eq!(response.total, 0);
    }

    #[test]
    fn test_parse_response_total_exceeds_hits() {
        let body = json!({
            "hits": {
                "total": { "value": 25 },
                "hits": [
                    { "_source": { "word": "first" } },
                    { "_source": { "word": "second" } }
                ]
            }
        });

        let response = OpenSearchClient::parse_response(&body).unwrap();

        assert_eq!(response.len(), 2);
        assert_eq!(response.total, 25);
    }

    #[test]
    fn test_parse_response_missing_total() {
        let body = json!({
            "hits": {
                "hits": [
                    { "_source": { "word": "value" } }
                ]
            }
        });

        let response = OpenSearchClient::parse_response(&body).unwrap();

        // Falls back to the hit count
        assert_eq!(response.total, 1);
    }

    #[test]
    fn test_parse_response_missing_hits() {
        let body = json!({ "took": 3 });

        let result = OpenSearchClient::parse_response(&body);

        assert!(matches!(result, Err(SearchError::ParseError(_))));
    }

    #[test]
    fn test_parse_response_malformed_hits() {
        let body = json!({
            "hits": {
                "hits": [ "not-an-object" ]
            }
        });

        let result = OpenSearchClient::parse_response(&body);

        assert!(matches!(result, Err(SearchError::ParseError(_))));
    }
}
