//! Key and mouse handling for the street search component

use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::StreetSearch;
use crate::widgets::popup;

impl StreetSearch {
    /// Handle a key press
    ///
    /// Returns true if the component consumed the key. Enter, Tab and Esc are
    /// left to the surrounding form when the list is closed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.autocomplete.is_open() {
            match key.code {
                KeyCode::Down => {
                    self.autocomplete.focus_next();
                    self.preview_focused();
                    return true;
                }
                KeyCode::Up => {
                    self.autocomplete.focus_previous();
                    self.preview_focused();
                    return true;
                }
                KeyCode::Enter | KeyCode::Tab => {
                    if let Some(index) = self.autocomplete.focused_index() {
                        return self.select(index);
                    }
                    if key.code == KeyCode::Enter {
                        self.dismiss();
                        return true;
                    }
                    return false;
                }
                KeyCode::Esc => {
                    self.dismiss();
                    return true;
                }
                _ => {}
            }
        } else if key.code == KeyCode::Down {
            // Reopen the list for the current text
            let text = self.fields.text().to_string();
            return self.autocomplete.search_again(&text);
        }

        if matches!(key.code, KeyCode::Enter | KeyCode::Tab | KeyCode::Esc) {
            return false;
        }

        if self.fields.handle_input(key) {
            let text = self.fields.text().to_string();
            self.autocomplete.on_input_changed(&text);
        }
        true
    }

    /// Handle a mouse event: hover focuses an entry, click commits it
    ///
    /// A click outside the open list closes it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if !self.autocomplete.is_open() {
            return false;
        }
        let Some(area) = self.popup_area else {
            return false;
        };

        let row = entry_row(area, mouse);
        match mouse.kind {
            MouseEventKind::Moved => match row.and_then(|r| self.autocomplete.item_at_row(r)) {
                Some(index) if self.autocomplete.focused_index() != Some(index) => self.focus(index),
                _ => false,
            },
            MouseEventKind::Down(MouseButton::Left) => {
                match row.and_then(|r| self.autocomplete.item_at_row(r)) {
                    Some(index) => self.select(index),
                    None if !contains(area, mouse) => {
                        self.dismiss();
                        true
                    }
                    None => false,
                }
            }
            MouseEventKind::ScrollDown if contains(area, mouse) => {
                self.autocomplete.focus_next();
                self.preview_focused();
                true
            }
            MouseEventKind::ScrollUp if contains(area, mouse) => {
                self.autocomplete.focus_previous();
                self.preview_focused();
                true
            }
            _ => false,
        }
    }
}

/// Row inside the list borders under the cursor, if any
fn entry_row(area: ratatui::layout::Rect, mouse: MouseEvent) -> Option<usize> {
    let inner = popup::inset_rect(area, 1, 1);
    if contains(inner, mouse) {
        Some(usize::from(mouse.row - inner.y))
    } else {
        None
    }
}

fn contains(area: ratatui::layout::Rect, mouse: MouseEvent) -> bool {
    mouse.column >= area.x
        && mouse.column < area.x.saturating_add(area.width)
        && mouse.row >= area.y
        && mouse.row < area.y.saturating_add(area.height)
}

#[cfg(test)]
#[path = "street_search_events_tests.rs"]
mod street_search_events_tests;
