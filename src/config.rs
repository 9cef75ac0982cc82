//! Configuration loading
//!
//! Reads `~/.config/streetsearch/config.toml`. A missing file means defaults;
//! a file that exists but does not parse is reported to the caller.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{AutocompleteConfig, Config, SourceConfig};

use crate::error::StreetSearchError;

const CONFIG_DIR: &str = "streetsearch";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from an explicit path, or from the default location
pub fn load_config(explicit: Option<&Path>) -> Result<Config, StreetSearchError> {
    match explicit {
        Some(path) => load_config_from_path(path, true),
        None => match config_path() {
            Some(path) => load_config_from_path(&path, false),
            None => Ok(Config::default()),
        },
    }
}

/// Load a config file. When `required` is false a missing file yields defaults.
pub fn load_config_from_path(path: &Path, required: bool) -> Result<Config, StreetSearchError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound && !required => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(StreetSearchError::Io(e)),
    };

    parse_config_toml(&contents).map_err(|reason| StreetSearchError::InvalidConfig {
        path: path.to_path_buf(),
        reason,
    })
}

pub fn parse_config_toml(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.message().to_string())
}
