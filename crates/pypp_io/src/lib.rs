//! Pypp IO: reads text files into lines for the tokenizer.
mod lines;

pub use lines::{is_placeholder, read_lines, try_read_lines, ReadError};
