use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use pypp_app::{count_tokens, load_settings, render_report};
use pypp_io::{is_placeholder, read_lines};
use pypp_logging::{pypp_info, pypp_warn};

use super::logging;

const USAGE: &str = "usage: pypp <input-file> [settings.ron]";

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize();

    let mut args = env::args_os().skip(1);
    let Some(input) = args.next().map(PathBuf::from) else {
        bail!(USAGE);
    };
    let settings_path = args.next().map(PathBuf::from);
    if args.next().is_some() {
        bail!(USAGE);
    }

    let settings = load_settings(settings_path.as_deref());
    pypp_info!("Counting tokens in {:?} with {:?}", input, settings);

    let lines = read_lines(&input);
    if is_placeholder(&lines) {
        pypp_warn!("No lines to count in {:?}", input);
    }

    let counter = count_tokens(&lines, &settings);
    let report = render_report(&counter, settings.top);

    io::stdout()
        .lock()
        .write_all(report.as_bytes())
        .context("failed to write report")?;
    Ok(())
}
