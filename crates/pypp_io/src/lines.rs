use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use pypp_logging::{pypp_debug, pypp_warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("could not open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Non-empty lines of the file at `path`, without `\n` or `\r\n` terminators.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
/// Returns an empty `Vec` when the file has no non-empty lines.
pub fn try_read_lines(path: &Path) -> Result<Vec<String>, ReadError> {
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).split(b'\n') {
        let mut bytes = line?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        if !bytes.is_empty() {
            lines.push(String::from_utf8_lossy(&bytes).into_owned());
        }
    }
    Ok(lines)
}

/// Like [`try_read_lines`], but never fails and never returns an empty `Vec`.
///
/// Errors are logged and, like a file without usable lines, produce a single
/// empty-string placeholder.
pub fn read_lines(path: &Path) -> Vec<String> {
    let lines = match try_read_lines(path) {
        Ok(lines) => lines,
        Err(err) => {
            pypp_warn!("Failed to read lines: {}", err);
            Vec::new()
        }
    };
    if lines.is_empty() {
        pypp_debug!("No usable lines in {:?}, returning placeholder", path);
        return vec![String::new()];
    }
    lines
}

/// True for the single-empty-line result [`read_lines`] uses as a fallback.
pub fn is_placeholder(lines: &[String]) -> bool {
    matches!(lines, [only] if only.is_empty())
}
