//! Tests for one-shot lookup

use super::*;
use crate::source::LocalSource;
use crate::test_utils::test_helpers::main_and_maple;
use insta::assert_snapshot;
use std::path::PathBuf;

fn local() -> SuggestionSource {
    SuggestionSource::Local(LocalSource::new(
        PathBuf::from("streets.json"),
        main_and_maple(),
        None,
    ))
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

#[test]
fn test_short_text_returns_nothing() {
    let items = block_on(lookup(&local(), "M", 2)).unwrap();
    assert!(items.is_empty());
}

#[test]
fn test_lookup_fetches_matches() {
    let items = block_on(lookup(&local(), "map", 2)).unwrap();
    assert_eq!(items, vec![SuggestionItem::new(9, "Maple Ave")]);
}

#[test]
fn test_format_plain() {
    assert_eq!(
        format_items(&main_and_maple(), OutputFormat::Plain),
        "7\tMain St\n9\tMaple Ave\n"
    );
}

#[test]
fn test_format_plain_neutralises_control_characters() {
    let items = vec![SuggestionItem::new(1, "Evil\nRd")];
    assert_eq!(format_items(&items, OutputFormat::Plain), "1\tEvil Rd\n");
}

#[test]
fn test_format_json_round_trips_ids() {
    let out = format_items(&main_and_maple(), OutputFormat::Json);
    let parsed: Vec<SuggestionItem> = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, main_and_maple());
}

#[test]
fn test_format_html_escapes() {
    let items = vec![SuggestionItem::new(1, "<b>Bold</b> St")];
    assert_snapshot!(
        format_items(&items, OutputFormat::Html).trim_end(),
        @"<ul><li><div>&lt;b&gt;Bold&lt;/b&gt; St</div></li></ul>"
    );
}
