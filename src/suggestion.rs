//! Suggestion items returned by a suggestion source

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a suggestion, kept exactly as the source sent it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuggestionId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for SuggestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionId::Number(n) => write!(f, "{}", n),
            SuggestionId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for SuggestionId {
    fn from(value: i64) -> Self {
        SuggestionId::Number(value.into())
    }
}

impl From<i32> for SuggestionId {
    fn from(value: i32) -> Self {
        SuggestionId::Number(value.into())
    }
}

impl From<&str> for SuggestionId {
    fn from(value: &str) -> Self {
        SuggestionId::Text(value.to_string())
    }
}

/// One candidate street: a machine id and its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub id: SuggestionId,
    pub label: String,
}

impl SuggestionItem {
    pub fn new(id: impl Into<SuggestionId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl SuggestionItem {
    /// Label safe to place in a terminal cell or a single-line input
    ///
    /// Control characters (newlines, ESC starting an ANSI sequence, ...) are
    /// replaced with spaces so a label can never move the cursor, restyle the
    /// terminal or split the input into several lines.
    pub fn display_label(&self) -> Cow<'_, str> {
        if self.label.chars().any(char::is_control) {
            Cow::Owned(
                self.label
                    .chars()
                    .map(|c| if c.is_control() { ' ' } else { c })
                    .collect(),
            )
        } else {
            Cow::Borrowed(&self.label)
        }
    }
}

/// Decode a source response body: a JSON array of `{id, label}` records
pub fn parse_items(body: &str) -> Result<Vec<SuggestionItem>, serde_json::Error> {
    serde_json::from_str(body)
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
