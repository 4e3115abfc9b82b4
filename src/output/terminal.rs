// Colored terminal output for duplicate reports.

use colored::Colorize;

use crate::detect::DuplicateReport;

/// Display the duplicate report. Scores print with two decimals, matching
/// what the report stores.
pub fn display_report(report: &DuplicateReport) {
    if report.is_empty() {
        println!(
            "\n{} ({} documents scanned)",
            "No duplicates detected.".green(),
            report.documents_scanned
        );
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Duplicates ({} pairs, {} documents scanned) ===",
            report.pairs.len(),
            report.documents_scanned
        )
        .bold()
    );

    for pair in &report.pairs {
        println!(
            "  - \"{}\" and \"{}\" have a similarity of {}",
            pair.title_a,
            pair.title_b,
            format!("{:.2}", pair.score).yellow().bold()
        );
    }
}
