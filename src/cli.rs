//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::lookup::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "streetsearch",
    version,
    about = "Street search with type-ahead suggestions"
)]
pub struct Cli {
    /// Suggestion endpoint, e.g. http://localhost:5000/streets
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Serve suggestions from a JSON file of {id, label} records instead
    #[arg(long, global = true, value_name = "FILE", conflicts_with = "endpoint")]
    pub local: Option<PathBuf>,

    /// Minimum number of characters before suggestions are requested
    #[arg(long, global = true, value_name = "N")]
    pub min_length: Option<usize>,

    /// Maximum number of suggestions to ask for
    #[arg(long, global = true, value_name = "N")]
    pub limit: Option<u32>,

    /// Config file (default: ~/.config/streetsearch/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch suggestions once and print them
    Lookup {
        /// Text to search for, sent exactly as given
        text: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
}

impl Cli {
    /// Apply command-line flags on top of the loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint = Some(endpoint.clone());
            config.source.local_file = None;
        }
        if let Some(path) = &self.local {
            config.source.local_file = Some(path.clone());
        }
        if let Some(min_length) = self.min_length {
            config.autocomplete.min_length = min_length;
        }
        if let Some(limit) = self.limit {
            config.source.limit = Some(limit);
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
