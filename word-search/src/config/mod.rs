//! Configuration for the word search application.

mod dependencies;

pub use dependencies::Dependencies;
