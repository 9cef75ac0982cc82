//! Search field state
//!
//! The visible street text and the hidden street id. The hidden id is either
//! empty or the id of the last committed suggestion; any edit of the text
//! clears it.

use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

use crate::suggestion::{SuggestionId, SuggestionItem};

pub struct SearchFields {
    pub textarea: TextArea<'static>,
    hidden_id: Option<SuggestionId>,
}

impl SearchFields {
    pub fn new() -> Self {
        Self {
            textarea: styled_textarea(String::new()),
            hidden_id: None,
        }
    }

    /// Current visible text
    pub fn text(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    pub fn hidden_id(&self) -> Option<&SuggestionId> {
        self.hidden_id.as_ref()
    }

    /// Feed a key to the text input
    ///
    /// Returns true if the visible text changed, in which case the hidden id
    /// has been cleared.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        let before = self.text().to_string();
        self.textarea.input(key);

        // Single-line field: fold any inserted line break back into one line
        if self.textarea.lines().len() > 1 {
            let joined = self.textarea.lines().join(" ");
            self.replace_text(&joined);
        }

        let changed = self.text() != before;
        if changed {
            self.hidden_id = None;
        }
        changed
    }

    /// Insert pasted text at the cursor; line breaks become spaces
    pub fn paste(&mut self, text: &str) -> bool {
        let single_line: String = text
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        if single_line.is_empty() {
            return false;
        }
        self.textarea.insert_str(&single_line);
        self.hidden_id = None;
        true
    }

    /// Programmatic edit, same effect on the hidden id as typing
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.text() == text {
            return false;
        }
        self.replace_text(text);
        self.hidden_id = None;
        true
    }

    /// Show a focused suggestion's label without touching the hidden id
    pub fn preview(&mut self, item: &SuggestionItem) {
        self.replace_text(&item.display_label());
    }

    /// Put back text the user typed, leaving the hidden id as it is
    pub fn restore(&mut self, text: &str) {
        self.replace_text(text);
    }

    /// Commit a suggestion: label and id are written together
    pub fn commit(&mut self, item: &SuggestionItem) {
        self.replace_text(&item.display_label());
        self.hidden_id = Some(item.id.clone());
    }

    fn replace_text(&mut self, text: &str) {
        self.textarea = styled_textarea(text.to_string());
        self.textarea.move_cursor(CursorMove::End);
    }
}

fn styled_textarea(text: String) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text]);

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Street ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("Type at least two characters");

    textarea
}

impl Default for SearchFields {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod fields_tests;
