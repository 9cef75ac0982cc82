//! Tests for app_events

use crate::suggestion::SuggestionId;
use crate::test_utils::test_helpers::{key, key_with_mods, main_and_maple, test_app};
use crate::worker::{SearchRequest, SearchResponse};
use ratatui::crossterm::event::{Event, KeyCode, KeyModifiers};

fn press(app: &mut crate::app::App, code: KeyCode) {
    app.handle_event(Event::Key(key(code)));
}

fn type_text(app: &mut crate::app::App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

#[test]
fn test_ctrl_c_quits_without_submission() {
    let (mut app, _requests, _responses) = test_app();
    type_text(&mut app, "Main");

    app.handle_event(Event::Key(key_with_mods(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )));

    assert!(app.should_quit());
    assert!(app.submission().is_none());
}

#[test]
fn test_esc_with_list_closed_quits() {
    let (mut app, _requests, _responses) = test_app();
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
    assert!(app.submission().is_none());
}

#[test]
fn test_enter_with_list_closed_submits_fields() {
    let (mut app, _requests, _responses) = test_app();
    type_text(&mut app, "Unknown Rd");

    press(&mut app, KeyCode::Enter);

    assert!(app.should_quit());
    let submission = app.submission().unwrap();
    assert_eq!(submission.label, "Unknown Rd");
    assert_eq!(submission.id, None);
}

#[test]
fn test_select_then_submit_carries_id() {
    let (mut app, mut requests, responses) = test_app();
    type_text(&mut app, "Ma");
    let mut last_id = 0;
    while let Ok(SearchRequest::Query { request_id, .. }) = requests.try_recv() {
        last_id = request_id;
    }
    responses
        .send(SearchResponse::Suggestions {
            items: main_and_maple(),
            request_id: last_id,
        })
        .unwrap();
    assert!(app.tick());

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert!(!app.should_quit(), "first Enter commits the suggestion");

    press(&mut app, KeyCode::Enter);

    let submission = app.submission().unwrap();
    assert_eq!(submission.label, "Maple Ave");
    assert_eq!(submission.id, Some(SuggestionId::from(9)));
}

#[test]
fn test_paste_event_searches() {
    let (mut app, mut requests, _responses) = test_app();

    app.handle_event(Event::Paste("Halsted".to_string()));

    assert_eq!(app.street.text(), "Halsted");
    assert_eq!(
        requests.try_recv().unwrap(),
        SearchRequest::Query {
            term: "Halsted".to_string(),
            request_id: 1
        }
    );
}

#[test]
fn test_tick_without_responses_changes_nothing() {
    let (mut app, _requests, _responses) = test_app();
    assert!(!app.tick());
}
