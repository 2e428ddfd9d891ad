//! # Word Search Shared
//!
//! Shared types and data structures for the word search system.
//!
//! This crate defines the value objects exchanged between the service layer
//! and the search backend implementations.

mod types;

pub use types::{SearchHit, SearchResponse, TermQuery};
