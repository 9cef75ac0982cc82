//! Street search form
//!
//! Hosts one street search component plus the read-only hidden id field.

mod app_events;
mod app_render;

use crate::street_search::StreetSearch;
use crate::suggestion::SuggestionId;

/// Street chosen when the form was accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub label: String,
    pub id: Option<SuggestionId>,
}

/// Application state
pub struct App {
    pub street: StreetSearch,
    /// Where suggestions come from, shown in the status line
    source_label: String,
    should_quit: bool,
    submission: Option<Submission>,
}

impl App {
    pub fn new(street: StreetSearch, source_label: String) -> Self {
        Self {
            street,
            source_label,
            should_quit: false,
            submission: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The accepted form values, if the user submitted rather than quit
    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// Apply pending search responses; call once per frame
    pub fn tick(&mut self) -> bool {
        self.street.poll()
    }

    fn submit(&mut self) {
        self.submission = Some(Submission {
            label: self.street.text().to_string(),
            id: self.street.hidden_id().cloned(),
        });
        self.should_quit = true;
    }
}

#[cfg(test)]
#[path = "app/app_events_tests.rs"]
mod app_events_tests;

#[cfg(test)]
#[path = "app/app_render_tests.rs"]
mod app_render_tests;
