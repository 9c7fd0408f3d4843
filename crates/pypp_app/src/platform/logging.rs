//! Platform logging initialization for the `pypp` binary.
//!
//! Logs go to stderr so the report on stdout stays clean. The level comes from
//! `PYPP_LOG` (`error`, `warn`, `info`, `debug`, `trace`, `off`).

use std::env;

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, ConfigBuilder, TermLogger, TerminalMode};

const LEVEL_ENV: &str = "PYPP_LOG";

/// Initialize the terminal logger. Safe to call more than once.
pub fn initialize() {
    let level = level_from_env();
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        build_config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]);
}

fn level_from_env() -> LevelFilter {
    match env::var(LEVEL_ENV) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            eprintln!("Warning: ignoring invalid {LEVEL_ENV}={value:?}");
            LevelFilter::Warn
        }),
        Err(_) => LevelFilter::Warn,
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
