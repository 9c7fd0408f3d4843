use std::fs;
use std::io;
use std::path::Path;

use pypp_logging::{pypp_info, pypp_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the report splits, filters and ranks tokens.
///
/// Stored as RON; every field is optional in the file:
///
/// ```ron
/// (delimiter: ';', top: 5, lowercase: true)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub delimiter: char,
    /// Pieces kept per line; 0 keeps all.
    pub at_most: usize,
    /// Ranked rows printed; 0 prints all.
    pub top: usize,
    pub lowercase: bool,
    /// Drop the empty tokens produced by consecutive delimiters.
    pub skip_empty: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            delimiter: ' ',
            at_most: 0,
            top: 10,
            lowercase: false,
            skip_empty: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

pub fn parse_settings(text: &str) -> Result<ReportSettings, SettingsError> {
    Ok(ron::from_str(text)?)
}

pub fn read_settings(path: &Path) -> Result<ReportSettings, SettingsError> {
    let content = fs::read_to_string(path)?;
    parse_settings(&content)
}

/// Settings from `path`, or the defaults when no path is given or the file
/// cannot be used.
pub fn load_settings(path: Option<&Path>) -> ReportSettings {
    let Some(path) = path else {
        return ReportSettings::default();
    };

    match read_settings(path) {
        Ok(settings) => {
            pypp_info!("Loaded settings from {:?}", path);
            settings
        }
        Err(err) => {
            pypp_warn!("Failed to load settings from {:?}: {}", path, err);
            ReportSettings::default()
        }
    }
}
