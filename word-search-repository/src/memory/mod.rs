//! In-memory fake implementation of the search engine client.
//!
//! This module provides a seedable fake backend implementing
//! `SearchEngineClient`, swapped in for tests in place of the network-backed
//! OpenSearch client. Each test constructs and owns its own instance; there
//! is no process-wide registry.
//!
//! The fake records incoming requests so tests can assert how the service
//! layer drove the client (call counts, forwarded query parameters).

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use word_search_shared::{SearchHit, SearchResponse, TermQuery};

/// Seedable in-memory search backend.
///
/// Documents live in a per-index vector and keep their insertion order,
/// which is also the order hits come back in. Term matching is exact JSON
/// equality on the queried field.
///
/// # Example
///
/// ```ignore
/// let client = InMemorySearchClient::new();
/// client.create_index("words");
/// client.index_document("words", source);
///
/// let response = client.search("words", &TermQuery::new("word", "value", 10)).await?;
/// ```
#[derive(Default)]
pub struct InMemorySearchClient {
    indices: RwLock<HashMap<String, Vec<Map<String, Value>>>>,
    searches: RwLock<Vec<(String, TermQuery)>>,
    exists_calls: AtomicUsize,
    fail_searches: AtomicBool,
    unhealthy: AtomicBool,
}

impl InMemorySearchClient {
    /// Create an empty client with no indices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the named index if it does not already exist.
    pub fn create_index(&self, index: impl Into<String>) {
        let mut indices = self.indices.write().unwrap_or_else(|e| e.into_inner());
        indices.entry(index.into()).or_default();
    }

    /// Add a document to the named index, creating the index if needed.
    pub fn index_document(&self, index: impl Into<String>, source: Map<String, Value>) {
        let mut indices = self.indices.write().unwrap_or_else(|e| e.into_inner());
        indices.entry(index.into()).or_default().push(source);
    }

    /// Make subsequent `search` calls fail with a query error.
    pub fn fail_searches(&self) {
        self.fail_searches.store(true, Ordering::SeqCst);
    }

    /// Make subsequent `health_check` calls report unhealthy.
    pub fn set_unhealthy(&self) {
        self.unhealthy.store(true, Ordering::SeqCst);
    }

    /// Number of `search` calls received.
    pub fn search_count(&self) -> usize {
        self.searches
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// Number of `index_exists` calls received.
    pub fn exists_count(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }

    /// The most recent `search` call: target index and the query as received.
    pub fn last_search(&self) -> Option<(String, TermQuery)> {
        self.searches
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }
}

#[async_trait]
impl SearchEngineClient for InMemorySearchClient {
    async fn index_exists(&self, index: &str) -> Result<bool, SearchError> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        let indices = self.indices.read().unwrap_or_else(|e| e.into_inner());
        Ok(indices.contains_key(index))
    }

    async fn search(&self, index: &str, query: &TermQuery) -> Result<SearchResponse, SearchError> {
        self.searches
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push((index.to_string(), query.clone()));

        if self.fail_searches.load(Ordering::SeqCst) {
            return Err(SearchError::query("Injected search failure"));
        }

        let indices = self.indices.read().unwrap_or_else(|e| e.into_inner());
        let documents = indices
            .get(index)
            .ok_or_else(|| SearchError::query(format!("No such index: {}", index)))?;

        let matched: Vec<&Map<String, Value>> = documents
            .iter()
            .filter(|doc| doc.get(&query.key) == Some(&query.value))
            .collect();

        let total = matched.len();
        let hits = matched
            .into_iter()
            .take(query.size as usize)
            .map(|source| SearchHit::new(source.clone()))
            .collect();

        Ok(SearchResponse::new(hits, total))
    }

    async fn health_check(&self) -> Result<bool, SearchError> {
        Ok(!self.unhealthy.load(Ordering::SeqCst))
    }
}
