use thiserror::Error;

use crate::strip::trim;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("token index {index} out of range ({len} tokens)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Split `source` on every `delimiter`, trimming surrounding whitespace from
/// each piece.
///
/// Consecutive delimiters yield empty pieces (`"a,,b"` gives `["a", "", "b"]`),
/// and an empty `source` yields no pieces at all. When `at_most` is non-zero
/// only the first `at_most` pieces are returned; the rest of the input is
/// dropped, not re-joined into a final piece.
pub fn split(source: &str, delimiter: char, at_most: usize) -> Vec<String> {
    if source.is_empty() {
        return Vec::new();
    }
    let limit = if at_most == 0 { usize::MAX } else { at_most };
    source
        .split(delimiter)
        .take(limit)
        .map(|piece| trim(piece).to_string())
        .collect()
}

/// [`split`] on newlines, unlimited.
pub fn split_lines(source: &str) -> Vec<String> {
    split(source, '\n', 0)
}

/// Split `source` and return the piece at `index`.
pub fn split_then_get_at(
    source: &str,
    delimiter: char,
    index: usize,
) -> Result<String, SplitError> {
    let mut pieces = split(source, delimiter, 0);
    let len = pieces.len();
    if index >= len {
        return Err(SplitError::IndexOutOfRange { index, len });
    }
    Ok(pieces.swap_remove(index))
}
