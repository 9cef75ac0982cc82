//! Suggestion dropdown: request sequencing, focus tracking and rendering

mod autocomplete_render;
mod autocomplete_state;

pub use autocomplete_render::{MAX_POPUP_WIDTH, render_popup};
pub use autocomplete_state::{AutocompleteState, SearchPhase};


#[cfg(test)]
#[path = "autocomplete/autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
