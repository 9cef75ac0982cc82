//! Tests for autocomplete popup rendering

use super::*;
use crate::config::AutocompleteConfig;
use crate::suggestion::SuggestionItem;
use crate::test_utils::test_helpers::main_and_maple;
use crate::worker::{SearchResponse, request_channel};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use std::sync::mpsc;

const TEST_WIDTH: u16 = 60;
const TEST_HEIGHT: u16 = 12;

fn open_state(items: Vec<SuggestionItem>, max_visible: usize) -> AutocompleteState {
    let (request_tx, _request_rx) = request_channel();
    let (_response_tx, response_rx) = mpsc::channel();
    let mut state = AutocompleteState::new(&AutocompleteConfig {
        min_length: 2,
        max_visible,
    });
    state.set_channels(request_tx, response_rx);
    state.on_input_changed("Ma");
    state.handle_response(SearchResponse::Suggestions {
        items,
        request_id: 1,
    });
    state
}

fn render(state: &mut AutocompleteState) -> (String, Option<Rect>) {
    let mut terminal = Terminal::new(TestBackend::new(TEST_WIDTH, TEST_HEIGHT)).unwrap();
    let mut area = None;
    terminal
        .draw(|f| {
            let input_area = Rect::new(0, 0, TEST_WIDTH, 3);
            area = render_popup(state, f, input_area);
        })
        .unwrap();
    (terminal.backend().to_string(), area)
}

#[test]
fn test_closed_state_renders_nothing() {
    let mut state = AutocompleteState::new(&AutocompleteConfig::default());
    let (output, area) = render(&mut state);
    assert!(area.is_none());
    assert!(!output.contains("Streets"));
}

#[test]
fn test_one_row_per_item_below_input() {
    let mut state = open_state(main_and_maple(), 10);
    let (output, area) = render(&mut state);

    let area = area.unwrap();
    assert_eq!(area.y, 3);
    assert_eq!(area.height, 4);
    assert!(output.contains("Main St"));
    assert!(output.contains("Maple Ave"));
    assert!(output.contains("Streets"));
}

#[test]
fn test_focused_row_has_marker() {
    let mut state = open_state(main_and_maple(), 10);
    state.focus_index(1);
    let (output, _) = render(&mut state);

    let focused_line = output.lines().find(|l| l.contains("Maple Ave")).unwrap();
    assert!(focused_line.contains("► Maple Ave"));
    let other_line = output.lines().find(|l| l.contains("Main St")).unwrap();
    assert!(!other_line.contains('►'));
}

#[test]
fn test_script_label_is_shown_as_text() {
    let mut state = open_state(vec![SuggestionItem::new(1, "<script>x</script>")], 10);
    let (output, _) = render(&mut state);
    assert!(output.contains("<script>x</script>"));
}

#[test]
fn test_escape_sequence_in_label_is_neutralised() {
    let mut state = open_state(vec![SuggestionItem::new(1, "Evil\x1b[31m Rd")], 10);
    let (output, _) = render(&mut state);
    assert!(!output.contains('\x1b'));
    assert!(output.contains("Evil [31m Rd"));
}

#[test]
fn test_long_list_shows_window_and_position() {
    let items: Vec<SuggestionItem> = (1..=8)
        .map(|i| SuggestionItem::new(i, format!("{}th St", i)))
        .collect();
    let mut state = open_state(items, 3);
    let (output, area) = render(&mut state);

    assert_eq!(area.unwrap().height, 5);
    assert!(output.contains("1-3 of 8"));
    assert!(output.contains("3th St"));
    assert!(!output.contains("4th St"));
}

#[test]
fn test_width_is_capped() {
    let mut state = open_state(vec![SuggestionItem::new(1, "X".repeat(200))], 10);
    let (_, area) = render(&mut state);
    assert!(area.unwrap().width <= MAX_POPUP_WIDTH);
}

#[test]
fn test_short_terminal_scrolls_focus_into_view() {
    let items: Vec<SuggestionItem> = (0..10)
        .map(|i| SuggestionItem::new(i, format!("Street {}", i)))
        .collect();
    let mut state = open_state(items, 10);
    state.focus_previous();
    assert_eq!(state.focused_index(), Some(9));

    let (output, area) = render(&mut state);

    // 12 rows minus a 3-row input leaves 9 rows: two borders and seven entries
    assert_eq!(area.unwrap().height, 9);
    assert_eq!(state.window_rows(), 7);
    assert!(output.contains("► Street 9"));
    assert!(output.contains("4-10 of 10"));
    assert!(!output.contains("Street 2"));
}

#[test]
fn test_window_grows_back_with_room() {
    let items: Vec<SuggestionItem> = (0..10)
        .map(|i| SuggestionItem::new(i, format!("Street {}", i)))
        .collect();
    let mut state = open_state(items, 10);
    render(&mut state);
    assert_eq!(state.window_rows(), 7);

    let mut terminal = Terminal::new(TestBackend::new(TEST_WIDTH, 30)).unwrap();
    terminal
        .draw(|f| {
            render_popup(&mut state, f, Rect::new(0, 0, TEST_WIDTH, 3));
        })
        .unwrap();
    assert_eq!(state.window_rows(), 10);
}

#[test]
fn test_no_room_below_input_renders_nothing() {
    let mut state = open_state(main_and_maple(), 10);
    let mut terminal = Terminal::new(TestBackend::new(TEST_WIDTH, 4)).unwrap();
    let mut area = Some(Rect::default());
    terminal
        .draw(|f| {
            area = render_popup(&mut state, f, Rect::new(0, 0, TEST_WIDTH, 3));
        })
        .unwrap();
    assert!(area.is_none());
}

#[test]
fn test_huge_max_visible_is_clamped() {
    let mut state = open_state(main_and_maple(), usize::MAX);
    assert_eq!(state.max_visible(), usize::from(u16::MAX));

    let (_, area) = render(&mut state);
    assert_eq!(area.unwrap().height, 4);
}
