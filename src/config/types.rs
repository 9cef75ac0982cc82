// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_TERM_PARAM: &str = "term";
pub const DEFAULT_LIMIT_PARAM: &str = "limit";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_MIN_LENGTH: usize = 2;
pub const DEFAULT_MAX_VISIBLE: usize = 10;

/// Suggestion source section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Remote endpoint, e.g. `http://localhost:5000/streets`
    pub endpoint: Option<String>,
    /// Query-string key carrying the typed text
    pub term_param: String,
    /// Query-string key carrying the limit hint
    pub limit_param: String,
    pub limit: Option<u32>,
    pub timeout_ms: u64,
    /// Offline source: JSON array of `{id, label}` records
    pub local_file: Option<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            endpoint: None,
            term_param: DEFAULT_TERM_PARAM.to_string(),
            limit_param: DEFAULT_LIMIT_PARAM.to_string(),
            limit: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            local_file: None,
        }
    }
}

/// Autocomplete behavior section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    /// Minimum trimmed query length before a request is issued
    pub min_length: usize,
    /// Rows shown in the suggestion list before it scrolls
    pub max_visible: usize,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            min_length: DEFAULT_MIN_LENGTH,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
}
