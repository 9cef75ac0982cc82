pub mod app;
pub mod autocomplete;
pub mod cli;
pub mod config;
pub mod error;
pub mod fields;
pub mod logging;
pub mod lookup;
pub mod markup;
pub mod source;
pub mod street_search;
pub mod suggestion;
pub mod widgets;
pub mod worker;
