//! Autocomplete popup rendering
//!
//! Each suggestion is one list row holding its label. Labels are drawn as
//! plain spans, never interpreted, with control characters neutralised.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::AutocompleteState;
use crate::widgets::popup;

pub const MAX_POPUP_WIDTH: u16 = 60;
const MIN_POPUP_WIDTH: u16 = 20;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;

/// Render the suggestion list under the input field
///
/// The list window is first shrunk to the rows that fit between the input
/// and the bottom of the frame. Returns the area the popup occupies, or None
/// when nothing is shown.
pub fn render_popup(
    state: &mut AutocompleteState,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<Rect> {
    if !state.is_open() {
        return None;
    }

    let room = frame
        .area()
        .bottom()
        .saturating_sub(input_area.bottom())
        .saturating_sub(POPUP_BORDER_HEIGHT);
    if room == 0 {
        return None;
    }
    state.fit_window(usize::from(room));

    let state = &*state;
    let visible = state.visible_items();
    if visible.is_empty() {
        return None;
    }

    let rows = u16::try_from(visible.len()).unwrap_or(u16::MAX);
    let popup_height = rows.saturating_add(POPUP_BORDER_HEIGHT);
    let max_label_width = state
        .items()
        .iter()
        .map(|item| item.display_label().width())
        .max()
        .unwrap_or(0)
        .min(usize::from(MAX_POPUP_WIDTH));
    let popup_width = (max_label_width as u16 + POPUP_PADDING).clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);

    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }

    let focused = state.focused_index();
    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(row, item)| {
            let index = state.scroll_offset() + row;
            let label = item.display_label().into_owned();

            let line = if Some(index) == focused {
                Line::from(Span::styled(
                    format!("► {}", label),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", label),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };

            ListItem::new(line)
        })
        .collect();

    let title = if state.items().len() > visible.len() {
        format!(
            " {}-{} of {} ",
            state.scroll_offset() + 1,
            state.scroll_offset() + visible.len(),
            state.items().len()
        )
    } else {
        " Streets ".to_string()
    };

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, popup_area);
    Some(popup_area)
}
