//! One-shot suggestion lookup for scripts
//!
//! Applies the same minimum-length rule as the interactive input, fetches
//! once and formats the items.

use clap::ValueEnum;

use crate::markup::render_list_html;
use crate::source::{SourceError, SuggestionSource};
use crate::suggestion::SuggestionItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// `id<TAB>label` per line
    #[default]
    Plain,
    /// JSON array of `{id, label}`
    Json,
    /// Escaped `<ul><li><div>label</div></li>...</ul>`
    Html,
}

/// Fetch suggestions for `text`, or nothing when it is below `min_length`
pub async fn lookup(
    source: &SuggestionSource,
    text: &str,
    min_length: usize,
) -> Result<Vec<SuggestionItem>, SourceError> {
    if text.trim().chars().count() < min_length {
        log::debug!("Lookup text {:?} below minimum length {}", text, min_length);
        return Ok(Vec::new());
    }
    source.fetch(text).await
}

pub fn format_items(items: &[SuggestionItem], format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => items
            .iter()
            .map(|item| format!("{}\t{}\n", item.id, item.display_label()))
            .collect(),
        OutputFormat::Json => {
            // Serializing plain strings and numbers cannot fail
            serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string()) + "\n"
        }
        OutputFormat::Html => render_list_html(items) + "\n",
    }
}

#[cfg(test)]
#[path = "lookup_tests.rs"]
mod lookup_tests;
