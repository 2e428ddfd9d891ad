//! Error types for the word search repository.

mod search_error;

pub use search_error::SearchError;
