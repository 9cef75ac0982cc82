//! Tests for app rendering

use crate::suggestion::SuggestionItem;
use crate::test_utils::test_helpers::{main_and_maple, test_app};
use crate::worker::SearchResponse;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render(app: &mut crate::app::App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 14)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_empty_form() {
    let (mut app, _requests, _responses) = test_app();
    let output = render(&mut app);

    assert!(output.contains("Street ID"));
    assert!(output.contains("(none)"));
    assert!(output.contains("ready"));
    assert!(output.contains("localhost:5000"));
}

#[test]
fn test_querying_shows_searching() {
    let (mut app, _requests, _responses) = test_app();
    app.street.set_text("Ma");
    let output = render(&mut app);
    assert!(output.contains("searching"));
}

#[test]
fn test_committed_id_is_shown() {
    let (mut app, _requests, responses) = test_app();
    app.street.set_text("Ma");
    responses
        .send(SearchResponse::Suggestions {
            items: main_and_maple(),
            request_id: 1,
        })
        .unwrap();
    app.tick();
    app.street.select(1);

    let output = render(&mut app);

    assert!(output.contains("Maple Ave"));
    assert!(output.contains('9'));
    assert!(!output.contains("(none)"));
}

#[test]
fn test_popup_overlays_fields() {
    let (mut app, _requests, responses) = test_app();
    app.street.set_text("St");
    responses
        .send(SearchResponse::Suggestions {
            items: vec![
                SuggestionItem::new(1, "State St"),
                SuggestionItem::new(2, "Stony Island Ave"),
            ],
            request_id: 1,
        })
        .unwrap();
    app.tick();

    let output = render(&mut app);

    assert!(output.contains("Stony Island Ave"));
    assert!(app.street.popup_area().is_some());
}
