//! OpenSearch query builders.
//!
//! This module provides functions to build OpenSearch query bodies from
//! term query parameters.

use serde_json::{json, Map, Value};

use word_search_shared::TermQuery;

/// Build an OpenSearch request body from a TermQuery.
///
/// Produces an exact-equality `term` clause on the query's field, with the
/// result-size cap set at the top level of the body.
pub fn build_term_query(query: &TermQuery) -> Value {
    let mut term = Map::new();
    term.insert(query.key.clone(), query.value.clone());

    json!({
        "query": {
            "term": term
        },
        "size": query.size
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_term_query() {
        let query = TermQuery::new("key", "value", 1);
        let body = build_term_query(&query);

        assert_eq!(body["query"]["term"]["key"], "value");
        assert_eq!(body["size"], 1);
    }

    #[test]
    fn test_build_term_query_numeric_value() {
        let query = TermQuery::new("count", 42, 5);
        let body = build_term_query(&query);

        assert_eq!(body["query"]["term"]["count"], 42);
        assert_eq!(body["size"], 5);
    }

    #[test]
    fn test_build_term_query_single_clause() {
        let query = TermQuery::new("word", "tree", 10);
        let body = build_term_query(&query);

        // The term clause carries exactly one field
        let term = body["query"]["term"].as_object().unwrap();
        assert_eq!(term.len(), 1);
    }
}
