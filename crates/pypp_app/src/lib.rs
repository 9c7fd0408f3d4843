//! Pypp app: turns a text file into a ranked token report.
mod report;
mod settings;

pub use report::{count_tokens, render_report};
pub use settings::{load_settings, parse_settings, read_settings, ReportSettings, SettingsError};
