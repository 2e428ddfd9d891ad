//! # Word Search
//!
//! Main library for the word search application.
//!
//! This crate provides the query reporter service along with the
//! configuration and wiring for running it against an OpenSearch backend.

pub mod config;
pub mod service;

pub use config::Dependencies;
pub use service::QueryReporter;

use thiserror::Error;

/// Errors that can occur during application startup or execution.
#[derive(Error, Debug)]
pub enum ReportingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] word_search_repository::SearchError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ReportingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
