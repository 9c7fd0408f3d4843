//! Predicate-driven trimming.
//!
//! All functions borrow the input and return a subslice of it; call
//! `to_owned()` when an independent copy is needed.

/// ASCII whitespace as classified by the C locale, vertical tab included.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Remove the longest prefix of `s` whose characters all satisfy `pred`.
pub fn lstrip<P>(s: &str, pred: P) -> &str
where
    P: Fn(char) -> bool,
{
    s.trim_start_matches(|c: char| pred(c))
}

/// Remove the longest suffix of `s` whose characters all satisfy `pred`.
pub fn rstrip<P>(s: &str, pred: P) -> &str
where
    P: Fn(char) -> bool,
{
    s.trim_end_matches(|c: char| pred(c))
}

/// Strip both ends: trailing characters first, then leading ones.
pub fn strip<P>(s: &str, pred: P) -> &str
where
    P: Fn(char) -> bool,
{
    lstrip(rstrip(s, &pred), &pred)
}

/// Whitespace [`strip`].
pub fn trim(s: &str) -> &str {
    strip(s, is_space)
}

pub fn lstrip_digit(s: &str) -> &str {
    lstrip(s, is_digit)
}

pub fn rstrip_digit(s: &str) -> &str {
    rstrip(s, is_digit)
}

pub fn lstrip_alpha(s: &str) -> &str {
    lstrip(s, is_alpha)
}

pub fn rstrip_alpha(s: &str) -> &str {
    rstrip(s, is_alpha)
}

#[cfg(test)]
mod tests {
    use super::{is_alpha, is_space};

    #[test]
    fn space_class_matches_c_locale() {
        for c in [' ', '\t', '\n', '\x0B', '\x0C', '\r'] {
            assert!(is_space(c), "{c:?} should be whitespace");
        }
        assert!(!is_space('\u{A0}'));
    }

    #[test]
    fn alpha_is_ascii_only() {
        assert!(is_alpha('q'));
        assert!(is_alpha('Q'));
        assert!(!is_alpha('é'));
        assert!(!is_alpha('7'));
    }
}
