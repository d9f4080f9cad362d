//! Report module: derives the final comparison figures and prints them.

use crate::driver::ComparisonOutcome;

/// The benchmark's sole output: both means plus their signed difference.
/// Derived from the accumulated samples, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub first_label: String,
    pub second_label: String,
    pub first_mean_ns: u128,
    pub second_mean_ns: u128,
    /// `first_mean_ns - second_mean_ns`, sign preserved.
    pub difference_ns: i128,
}

impl Report {
    pub fn from_outcome(outcome: &ComparisonOutcome) -> Self {
        let first_mean_ns = outcome.first.mean_ns();
        let second_mean_ns = outcome.second.mean_ns();
        Self {
            first_label: outcome.first.label().to_string(),
            second_label: outcome.second.label().to_string(),
            first_mean_ns,
            second_mean_ns,
            difference_ns: first_mean_ns as i128 - second_mean_ns as i128,
        }
    }
}

/// Print the three report lines to stdout.
pub fn print_report(report: &Report) {
    println!(
        "{} average execution time: {} nanoseconds",
        report.first_label, report.first_mean_ns
    );
    println!(
        "{} average execution time: {} nanoseconds",
        report.second_label, report.second_mean_ns
    );
    println!(
        "Performance difference ({} - {}): {} nanoseconds",
        report.first_label, report.second_label, report.difference_ns
    );
}
