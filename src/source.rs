//! Suggestion sources
//!
//! A source turns the typed text into an ordered list of suggestion items.
//! The remote endpoint is the normal source; the local file source serves the
//! same contract offline.

mod http;
mod local;
mod sorting;

use thiserror::Error;

pub use http::HttpSource;
pub use local::LocalSource;
pub use sorting::{natural_key, sort_naturally};

use crate::config::SourceConfig;
use crate::error::StreetSearchError;
use crate::suggestion::SuggestionItem;

/// Errors that can occur while fetching suggestions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Transport failure (connection refused, reset, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// No response within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// The endpoint answered with a non-success status
    #[error("Suggestion source returned HTTP {code}")]
    Status { code: u16 },

    /// The body was not a JSON array of `{id, label}` records
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Suggestion source implementations
#[derive(Debug)]
pub enum SuggestionSource {
    /// Remote HTTP endpoint
    Http(HttpSource),
    /// JSON file loaded into memory
    Local(LocalSource),
}

impl SuggestionSource {
    /// Create a source from configuration
    ///
    /// A configured `local_file` takes precedence over `endpoint`.
    pub fn from_config(config: &SourceConfig) -> Result<Self, StreetSearchError> {
        if let Some(path) = &config.local_file {
            return Ok(SuggestionSource::Local(LocalSource::from_path(
                path,
                config.limit,
            )?));
        }

        match config.endpoint.as_deref().filter(|e| !e.trim().is_empty()) {
            Some(endpoint) => Ok(SuggestionSource::Http(HttpSource::new(endpoint, config)?)),
            None => Err(StreetSearchError::NoSource),
        }
    }

    /// Fetch suggestions for the given text
    pub async fn fetch(&self, term: &str) -> Result<Vec<SuggestionItem>, SourceError> {
        match self {
            SuggestionSource::Http(source) => source.fetch(term).await,
            SuggestionSource::Local(source) => Ok(source.search(term)),
        }
    }

    /// Short description for the status line
    pub fn describe(&self) -> String {
        match self {
            SuggestionSource::Http(source) => source.endpoint().to_string(),
            SuggestionSource::Local(source) => format!("{} (offline)", source.path().display()),
        }
    }
}
