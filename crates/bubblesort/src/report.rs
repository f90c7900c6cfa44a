//! Before/after console report for one sort run.

use bubblesort_core::{bubble_sort_with, SortStats};
use tracing::debug;

use crate::SortOptions;

/// Label printed before the unsorted input.
pub const GIVEN_LABEL: &str = "Given Array: ";
/// Label printed before the sorted output.
pub const SORTED_LABEL: &str = "Sorted Array: ";

/// Input, output and counters of one sort run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortReport {
    pub given: Vec<i32>,
    pub sorted: Vec<i32>,
    pub stats: SortStats,
}

/// Sort a copy of `values`, keeping the original for the "given" line.
pub fn sort_report(values: &[i32], options: &SortOptions) -> SortReport {
    let mut sorted = values.to_vec();
    let stats = bubble_sort_with(&mut sorted, options.strategy);
    debug!(
        len = values.len(),
        passes = stats.passes,
        comparisons = stats.comparisons,
        exchanges = stats.exchanges,
        "sorted"
    );
    SortReport {
        given: values.to_vec(),
        sorted,
        stats,
    }
}

/// Append `label` followed by each value and a tab.
pub fn render_line(out: &mut String, label: &str, values: &[i32]) {
    out.push_str(label);
    for value in values {
        out.push_str(&format!("{value}\t"));
    }
}

/// Render the report the way the binary prints it.
///
/// The sorted line carries no trailing newline unless stats follow it.
pub fn format_report(report: &SortReport, options: &SortOptions) -> String {
    let mut out = String::new();
    render_line(&mut out, GIVEN_LABEL, &report.given);
    out.push('\n');
    render_line(&mut out, SORTED_LABEL, &report.sorted);
    if options.show_stats {
        let s = &report.stats;
        out.push_str(&format!(
            "\npasses={} comparisons={} exchanges={}",
            s.passes, s.comparisons, s.exchanges
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Strategy, DEFAULT_VALUES};

    #[test]
    fn default_report_matches_reference_output() {
        let options = SortOptions::default();
        let report = sort_report(&DEFAULT_VALUES, &options);
        assert_eq!(
            format_report(&report, &options),
            "Given Array: 60\t7\t8\t3\t20\t\nSorted Array: 3\t7\t8\t20\t60\t"
        );
    }

    #[test]
    fn empty_input_prints_bare_labels() {
        let options = SortOptions::default();
        let report = sort_report(&[], &options);
        assert_eq!(
            format_report(&report, &options),
            "Given Array: \nSorted Array: "
        );
    }

    #[test]
    fn given_line_keeps_input_order() {
        let report = sort_report(&[3, -1, 2], &SortOptions::default());
        assert_eq!(report.given, vec![3, -1, 2]);
        assert_eq!(report.sorted, vec![-1, 2, 3]);
    }

    #[test]
    fn stats_line_appended_on_request() {
        let options = SortOptions {
            strategy: Strategy::EarlyExit,
            show_stats: true,
        };
        let report = sort_report(&[1, 1, 2], &options);
        assert_eq!(
            format_report(&report, &options),
            "Given Array: 1\t1\t2\t\nSorted Array: 1\t1\t2\t\npasses=1 comparisons=2 exchanges=0"
        );
    }

    #[test]
    fn render_line_negative_values() {
        let mut out = String::new();
        render_line(&mut out, "x: ", &[-5, 0]);
        assert_eq!(out, "x: -5\t0\t");
    }

    #[test]
    fn render_line_appends_to_existing_text() {
        let mut out = String::from("head\n");
        render_line(&mut out, "a: ", &[1]);
        render_line(&mut out, " b: ", &[i32::MIN, i32::MAX]);
        assert_eq!(out, "head\na: 1\t b: -2147483648\t2147483647\t");
    }
}
