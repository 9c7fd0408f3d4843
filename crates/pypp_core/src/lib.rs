//! Pypp core: pure text trimming/splitting and the frequency counter.
mod counter;
mod split;
mod strip;
mod zip;

pub use counter::{Count, Counter};
pub use split::{split, split_lines, split_then_get_at, SplitError};
pub use strip::{
    is_alpha, is_digit, is_space, lstrip, lstrip_alpha, lstrip_digit, rstrip, rstrip_alpha,
    rstrip_digit, strip, trim,
};
