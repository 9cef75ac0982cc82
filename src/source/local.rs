//! Offline suggestion source backed by a JSON file

use std::fs;
use std::path::{Path, PathBuf};

use super::sorting::sort_naturally;
use crate::error::StreetSearchError;
use crate::suggestion::{SuggestionItem, parse_items};

#[derive(Debug)]
pub struct LocalSource {
    path: PathBuf,
    /// Items in natural label order
    items: Vec<SuggestionItem>,
    limit: Option<u32>,
}

impl LocalSource {
    pub fn from_path(path: &Path, limit: Option<u32>) -> Result<Self, StreetSearchError> {
        let contents = fs::read_to_string(path)?;
        let items = parse_items(&contents).map_err(|e| StreetSearchError::InvalidSuggestionFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(path.to_path_buf(), items, limit))
    }

    pub fn new(path: PathBuf, mut items: Vec<SuggestionItem>, limit: Option<u32>) -> Self {
        sort_naturally(&mut items);
        Self { path, items, limit }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Case-insensitive substring match on the label, natural order, limited
    pub fn search(&self, term: &str) -> Vec<SuggestionItem> {
        let needle = term.trim().to_lowercase();
        let limit = self.limit.map(|l| l as usize).unwrap_or(usize::MAX);

        self.items
            .iter()
            .filter(|item| item.label.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod local_tests;
