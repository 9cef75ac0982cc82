use std::sync::mpsc::Receiver;

use crate::config::AutocompleteConfig;
use crate::suggestion::SuggestionItem;
use crate::worker::{RequestSender, SearchRequest, SearchResponse};

/// Where the component is in its request cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Querying { request_id: u64 },
}

/// Upper bound for `max_visible`; a terminal has at most `u16::MAX` rows
const MAX_VISIBLE_LIMIT: usize = u16::MAX as usize;

pub struct AutocompleteState {
    min_length: usize,
    max_visible: usize,
    /// Rows the popup last had room for, at most `max_visible`
    window_rows: usize,
    items: Vec<SuggestionItem>,
    open: bool,
    focused: Option<usize>,
    scroll_offset: usize,
    /// What the user typed, restored when focus leaves the list
    typed_term: String,
    /// Text of the most recent request, to skip re-querying unchanged text
    last_searched: Option<String>,
    /// Incremented for each new request; only the latest may fill the list
    request_id: u64,
    in_flight_request_id: Option<u64>,
    request_tx: Option<RequestSender>,
    response_rx: Option<Receiver<SearchResponse>>,
}

impl AutocompleteState {
    pub fn new(config: &AutocompleteConfig) -> Self {
        Self {
            min_length: config.min_length,
            max_visible: config.max_visible.clamp(1, MAX_VISIBLE_LIMIT),
            window_rows: config.max_visible.clamp(1, MAX_VISIBLE_LIMIT),
            items: Vec::new(),
            open: false,
            focused: None,
            scroll_offset: 0,
            typed_term: String::new(),
            last_searched: None,
            request_id: 0,
            in_flight_request_id: None,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: RequestSender,
        response_rx: Receiver<SearchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn phase(&self) -> SearchPhase {
        match self.in_flight_request_id {
            Some(request_id) => SearchPhase::Querying { request_id },
            None => SearchPhase::Idle,
        }
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn items(&self) -> &[SuggestionItem] {
        &self.items
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused_item(&self) -> Option<&SuggestionItem> {
        self.focused.and_then(|i| self.items.get(i))
    }

    pub fn typed_term(&self) -> &str {
        &self.typed_term
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Rows of the list that fit on screen
    pub fn window_rows(&self) -> usize {
        self.window_rows
    }

    /// Shrink the list window to the rows the popup actually has
    ///
    /// Called by the renderer each frame so focus never lands on a row that
    /// is not drawn.
    pub fn fit_window(&mut self, available_rows: usize) {
        self.window_rows = available_rows.clamp(1, self.max_visible);
        if self.scroll_offset + self.window_rows > self.items.len() {
            self.scroll_offset = self.items.len().saturating_sub(self.window_rows);
        }
        self.keep_focus_visible();
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Items currently inside the visible window of the list
    pub fn visible_items(&self) -> &[SuggestionItem] {
        let end = (self.scroll_offset + self.window_rows).min(self.items.len());
        &self.items[self.scroll_offset.min(end)..end]
    }

    /// React to a change of the input text
    ///
    /// Below the minimum length nothing is requested and the list closes.
    /// Returns true if a request was sent.
    pub fn on_input_changed(&mut self, text: &str) -> bool {
        self.typed_term = text.to_string();

        if text.trim().chars().count() < self.min_length {
            self.abandon_in_flight();
            self.last_searched = None;
            self.close();
            return false;
        }

        if self.last_searched.as_deref() == Some(text) {
            return false;
        }

        self.send_query(text)
    }

    /// Search the current text again even if it was already searched
    pub fn search_again(&mut self, text: &str) -> bool {
        self.last_searched = None;
        self.on_input_changed(text)
    }

    fn send_query(&mut self, text: &str) -> bool {
        let Some(tx) = &self.request_tx else {
            return false;
        };

        let request_id = self.request_id.wrapping_add(1);
        if tx
            .send(SearchRequest::Query {
                term: text.to_string(),
                request_id,
            })
            .is_err()
        {
            log::debug!("Search worker is gone, request for {:?} dropped", text);
            return false;
        }

        self.request_id = request_id;
        self.in_flight_request_id = Some(request_id);
        self.last_searched = Some(text.to_string());
        true
    }

    /// Stop waiting for the in-flight request, if any
    fn abandon_in_flight(&mut self) {
        if let Some(request_id) = self.in_flight_request_id.take()
            && let Some(tx) = &self.request_tx
            && tx.send(SearchRequest::Cancel { request_id }).is_ok()
        {
            log::debug!("Sent cancel for request {}", request_id);
        }
    }

    /// Apply all responses the worker has delivered so far
    ///
    /// Returns true if any response changed the list.
    pub fn poll_responses(&mut self) -> bool {
        let responses: Vec<SearchResponse> = match &self.response_rx {
            Some(rx) => rx.try_iter().collect(),
            None => return false,
        };

        let mut changed = false;
        for response in responses {
            changed |= self.handle_response(response);
        }
        changed
    }

    /// Apply one response if it answers the latest request
    ///
    /// Responses to any earlier request are discarded. Returns true if the
    /// response was applied.
    pub fn handle_response(&mut self, response: SearchResponse) -> bool {
        let request_id = response.request_id();
        if self.in_flight_request_id != Some(request_id) {
            log::debug!(
                "Discarding stale response {} (current: {})",
                request_id,
                self.request_id
            );
            return false;
        }
        self.in_flight_request_id = None;

        match response {
            SearchResponse::Suggestions { items, .. } => {
                self.items = items;
                self.focused = None;
                self.scroll_offset = 0;
                self.open = !self.items.is_empty();
                true
            }
            SearchResponse::Failed { error, .. } => {
                log::debug!("No suggestions for request {}: {}", request_id, error);
                self.close();
                true
            }
            SearchResponse::Cancelled { .. } => false,
        }
    }

    /// Move focus down; past the last item focus returns to the input
    pub fn focus_next(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.focused = match self.focused {
            None => Some(0),
            Some(i) if i + 1 < self.items.len() => Some(i + 1),
            Some(_) => None,
        };
        self.keep_focus_visible();
        true
    }

    /// Move focus up; above the first item focus returns to the input
    pub fn focus_previous(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.focused = match self.focused {
            None => self.items.len().checked_sub(1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
        self.keep_focus_visible();
        true
    }

    /// Focus an item by its index in the full list
    pub fn focus_index(&mut self, index: usize) -> bool {
        if !self.open || index >= self.items.len() {
            return false;
        }
        self.focused = Some(index);
        self.keep_focus_visible();
        true
    }

    /// Index of the item shown on the given row of the visible window
    pub fn item_at_row(&self, row: usize) -> Option<usize> {
        if row >= self.window_rows {
            return None;
        }
        let index = self.scroll_offset + row;
        (index < self.items.len()).then_some(index)
    }

    /// Close the list and drop its items
    pub fn close(&mut self) {
        self.open = false;
        self.items.clear();
        self.focused = None;
        self.scroll_offset = 0;
    }

    /// Close and stop waiting for any in-flight request
    pub fn dismiss(&mut self) {
        self.abandon_in_flight();
        self.close();
    }

    /// Close after a commit
    ///
    /// A response still in flight is abandoned so it cannot reopen the list
    /// over the committed value, and the committed text is not searched again.
    pub fn close_after_commit(&mut self, committed_text: &str) {
        self.dismiss();
        self.typed_term = committed_text.to_string();
        self.last_searched = Some(committed_text.to_string());
    }

    fn keep_focus_visible(&mut self) {
        match self.focused {
            Some(i) if i < self.scroll_offset => self.scroll_offset = i,
            Some(i) if i >= self.scroll_offset + self.window_rows => {
                self.scroll_offset = i + 1 - self.window_rows;
            }
            None => self.scroll_offset = 0,
            _ => {}
        }
    }
}
