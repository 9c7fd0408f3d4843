use std::fmt::Write;

use pypp_core::{split, Counter};
use pypp_logging::pypp_debug;

use crate::settings::ReportSettings;

/// Split every line with the configured policy and count the tokens.
pub fn count_tokens(lines: &[String], settings: &ReportSettings) -> Counter<String> {
    let tokens = lines
        .iter()
        .flat_map(|line| split(line, settings.delimiter, settings.at_most))
        .filter(|token| !(settings.skip_empty && token.is_empty()))
        .map(|token| {
            if settings.lowercase {
                token.to_lowercase()
            } else {
                token
            }
        });

    let counter: Counter<String> = tokens.collect();
    pypp_debug!(
        "Counted {} tokens ({} distinct) from {} lines",
        counter.total(),
        counter.len(),
        lines.len()
    );
    counter
}

/// Ranked table of the `top` most common tokens followed by a totals line.
pub fn render_report(counter: &Counter<String>, top: usize) -> String {
    let mut out = String::new();
    for (rank, (token, count)) in pypp_core::zip!(1.., counter.most_common(top)) {
        let _ = writeln!(&mut out, "{rank:>4}  {count:>6}  {token}");
    }
    let _ = writeln!(
        &mut out,
        "total: {} tokens, {} distinct",
        counter.total(),
        counter.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::render_report;
    use pypp_core::Counter;

    #[test]
    fn empty_counter_renders_only_totals() {
        let counter: Counter<String> = Counter::new();
        assert_eq!(render_report(&counter, 3), "total: 0 tokens, 0 distinct\n");
    }

    #[test]
    fn rows_are_numbered_from_one() {
        let counter: Counter<String> = ["b", "a", "b"].iter().map(|s| s.to_string()).collect();
        let report = render_report(&counter, 0);
        let mut lines = report.lines();
        assert_eq!(lines.next(), Some("   1       2  b"));
        assert_eq!(lines.next(), Some("   2       1  a"));
        assert_eq!(lines.next(), Some("total: 3 tokens, 2 distinct"));
        assert_eq!(lines.next(), None);
    }
}
