use pretty_assertions::assert_eq;
use pypp_core::{split, split_lines, split_then_get_at, SplitError};

const SAMPLE: &str = "foo;ba, r,  ,dead, c;ode$be; ef";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn splits_on_every_delimiter_and_trims_pieces() {
    assert_eq!(
        split(SAMPLE, ',', 0),
        strings(&["foo;ba", "r", "", "dead", "c;ode$be; ef"])
    );
    assert_eq!(
        split(SAMPLE, ';', 0),
        strings(&["foo", "ba, r,  ,dead, c", "ode$be", "ef"])
    );
    assert_eq!(
        split(SAMPLE, '$', 0),
        strings(&["foo;ba, r,  ,dead, c;ode", "be; ef"])
    );
}

#[test]
fn consecutive_delimiters_keep_empty_pieces() {
    assert_eq!(split("a,,b,", ',', 0), strings(&["a", "", "b", ""]));
    assert_eq!(split(",", ',', 0), strings(&["", ""]));
}

#[test]
fn empty_source_yields_no_pieces() {
    assert_eq!(split("", ',', 0), Vec::<String>::new());
    assert_eq!(split("", ',', 3), Vec::<String>::new());
}

#[test]
fn missing_delimiter_yields_whole_source() {
    assert_eq!(split(SAMPLE, '@', 0), strings(&[SAMPLE]));
    assert_eq!(split("  padded  ", '@', 0), strings(&["padded"]));
}

#[test]
fn at_most_truncates_leading_pieces() {
    assert_eq!(split(SAMPLE, ',', 2), strings(&["foo;ba", "r"]));
    assert_eq!(split(SAMPLE, ',', 1), strings(&["foo;ba"]));
}

#[test]
fn at_most_beyond_piece_count_is_unlimited() {
    assert_eq!(split(SAMPLE, '$', 5), split(SAMPLE, '$', 0));
    assert_eq!(split(SAMPLE, ',', 5), split(SAMPLE, ',', 0));
}

#[test]
fn split_lines_uses_same_policy() {
    assert_eq!(
        split_lines("first \n\n  second\nthird\n"),
        strings(&["first", "", "second", "third", ""])
    );
}

#[test]
fn get_at_is_bounds_checked() {
    assert_eq!(split_then_get_at(SAMPLE, ',', 3).unwrap(), "dead");
    assert_eq!(
        split_then_get_at(SAMPLE, ',', 5),
        Err(SplitError::IndexOutOfRange { index: 5, len: 5 })
    );
    assert_eq!(
        split_then_get_at("", ',', 0),
        Err(SplitError::IndexOutOfRange { index: 0, len: 0 })
    );
}
