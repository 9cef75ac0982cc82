//! HTML rendering of suggestion list entries
//!
//! Labels come from the suggestion source and are treated as untrusted text.
//! Every label goes through `escape_html` before it reaches markup.

use crate::suggestion::SuggestionItem;

/// Escape text for insertion into HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render one list entry: the label wrapped in a `div` inside an `li`
pub fn render_item_html(item: &SuggestionItem) -> String {
    format!("<li><div>{}</div></li>", escape_html(&item.label))
}

/// Render a full suggestion list
pub fn render_list_html(items: &[SuggestionItem]) -> String {
    let mut html = String::from("<ul>");
    for item in items {
        html.push_str(&render_item_html(item));
    }
    html.push_str("</ul>");
    html
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod markup_tests;
