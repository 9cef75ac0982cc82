use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for streetsearch
#[derive(Debug, Error)]
pub enum StreetSearchError {
    #[error("No suggestion source configured.\n\nPass --endpoint <URL> or --local <FILE>, or set [source] in the config file.")]
    NoSource,

    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Invalid config file {path}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("Invalid suggestion file {path}: {reason}")]
    InvalidSuggestionFile { path: PathBuf, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("Failed to start search worker: {0}")]
    Worker(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
