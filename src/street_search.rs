//! Street search component
//!
//! One instance drives one street input: it owns the visible text, the hidden
//! street id and the suggestion dropdown. The surrounding form reads
//! `text()` and `hidden_id()`.

mod street_search_events;

use std::sync::mpsc::Receiver;

use ratatui::{Frame, layout::Rect};

use crate::autocomplete::{AutocompleteState, SearchPhase, render_popup};
use crate::config::AutocompleteConfig;
use crate::fields::SearchFields;
use crate::suggestion::{SuggestionId, SuggestionItem};
use crate::worker::{RequestSender, SearchResponse};

pub struct StreetSearch {
    fields: SearchFields,
    autocomplete: AutocompleteState,
    /// Where the dropdown was last drawn, for mouse hit-testing
    popup_area: Option<Rect>,
}

impl StreetSearch {
    /// Attach the component to a fresh input wired to a search worker
    pub fn new(
        config: &AutocompleteConfig,
        request_tx: RequestSender,
        response_rx: Receiver<SearchResponse>,
    ) -> Self {
        let mut autocomplete = AutocompleteState::new(config);
        autocomplete.set_channels(request_tx, response_rx);
        Self {
            fields: SearchFields::new(),
            autocomplete,
            popup_area: None,
        }
    }

    pub fn text(&self) -> &str {
        self.fields.text()
    }

    pub fn hidden_id(&self) -> Option<&SuggestionId> {
        self.fields.hidden_id()
    }

    pub fn phase(&self) -> SearchPhase {
        self.autocomplete.phase()
    }

    pub fn is_open(&self) -> bool {
        self.autocomplete.is_open()
    }

    pub fn items(&self) -> &[SuggestionItem] {
        self.autocomplete.items()
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.autocomplete.focused_index()
    }

    /// Replace the text as if the user had typed it
    pub fn set_text(&mut self, text: &str) {
        if self.fields.set_text(text) {
            self.autocomplete.on_input_changed(text);
        }
    }

    /// Insert pasted text at the cursor, as typing would
    pub fn paste(&mut self, text: &str) {
        if self.fields.paste(text) {
            let text = self.fields.text().to_string();
            self.autocomplete.on_input_changed(&text);
        }
    }

    /// Apply responses delivered by the worker; true if the list changed
    ///
    /// A previewed label belongs to the list it came from: when a response
    /// replaces or closes that list, the typed text comes back.
    pub fn poll(&mut self) -> bool {
        let previewing = self.autocomplete.focused_index().is_some();
        let changed = self.autocomplete.poll_responses();
        if changed && previewing && self.autocomplete.focused_index().is_none() {
            let typed = self.autocomplete.typed_term().to_string();
            self.fields.restore(&typed);
        }
        changed
    }

    /// Focus an entry: preview its label, hidden id untouched
    pub fn focus(&mut self, index: usize) -> bool {
        if !self.autocomplete.focus_index(index) {
            return false;
        }
        self.preview_focused();
        true
    }

    /// Commit an entry: label and hidden id together, list closed
    pub fn select(&mut self, index: usize) -> bool {
        let Some(item) = self.autocomplete.items().get(index).cloned() else {
            return false;
        };
        if !self.autocomplete.is_open() {
            return false;
        }

        self.fields.commit(&item);
        self.autocomplete.close_after_commit(self.fields.text());
        log::debug!("Committed street {} ({})", item.id, item.label);
        true
    }

    /// Close the list and put back the text the user typed
    pub fn dismiss(&mut self) {
        let typed = self.autocomplete.typed_term().to_string();
        self.autocomplete.dismiss();
        if self.fields.text() != typed {
            self.fields.restore(&typed);
        }
    }

    fn preview_focused(&mut self) {
        match self.autocomplete.focused_item().cloned() {
            Some(item) => self.fields.preview(&item),
            None => {
                let typed = self.autocomplete.typed_term().to_string();
                self.fields.restore(&typed);
            }
        }
    }

    /// Render the input field into `area`
    pub fn render_input(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.fields.textarea, area);
    }

    /// Render the dropdown under `input_area`; draw this after other widgets
    pub fn render_popup(&mut self, frame: &mut Frame, input_area: Rect) {
        self.popup_area = render_popup(&mut self.autocomplete, frame, input_area);
    }

    pub fn popup_area(&self) -> Option<Rect> {
        self.popup_area
    }
}
