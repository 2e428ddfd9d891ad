//! Request and response types for search operations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An exact-equality query on a single field.
///
/// Constructed per invocation and handed to the search backend; never
/// persisted. `value` can be any JSON scalar (string, number, bool).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermQuery {
    /// The field name to match on.
    pub key: String,
    /// The value the field must equal exactly.
    pub value: Value,
    /// Maximum number of hits to retrieve.
    pub size: u32,
}

impl TermQuery {
    /// Create a new term query.
    pub fn new(key: impl Into<String>, value: impl Into<Value>, size: u32) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            size,
        }
    }
}

/// A single matched record returned by a query.
///
/// Carries the document's source mapping (field name to value), taken from
/// the backend's `_source` member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// The document source fields.
    #[serde(rename = "_source")]
    pub source: Map<String, Value>,
}

impl SearchHit {
    /// Create a hit from a source mapping.
    pub fn new(source: Map<String, Value>) -> Self {
        Self { source }
    }

    /// Look up a source field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.source.get(name)
    }
}

/// The ordered sequence of hits returned by a query.
///
/// `hits` is bounded by the query's `size`; `total` is the backend's
/// uncapped match count and may exceed `hits.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matched records, in backend order.
    pub hits: Vec<SearchHit>,
    /// Total number of matching documents.
    pub total: usize,
}

impl SearchResponse {
    /// Create a response from hits and a total count.
    pub fn new(hits: Vec<SearchHit>, total: usize) -> Self {
        Self { hits, total }
    }

    /// Create an empty response.
    pub fn empty() -> Self {
        Self {
            hits: Vec::new(),
            total: 0,
        }
    }

    /// Number of hits in this response.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Whether the response holds no hits.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
