//! Formatting for diagnostics reports

use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::runner::DiagnosticsReport;
use crate::build_info;
use crate::gesture::{GesturePhase, TouchMode};

/// Formats a report as a table of expected and observed classifier output,
/// followed by a summary
pub fn format_report(report: &DiagnosticsReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Scenario", "Checks", "Expected", "Observed", "Status", "Duration"]);

    for (scenario, result) in &report.results {
        builder.push_record([
            scenario.name.clone(),
            scenario.description.clone(),
            format_output(&scenario.expected_events, scenario.expected_mode),
            format_output(&result.observed_events, result.observed_mode),
            result.status.as_colored_str(),
            format!("{:.2?}", result.duration),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    format!(
        "Build: {}\n{}\n{}",
        build_info::version_string(),
        table,
        format_summary(report)
    )
}

/// Renders emitted phases and final mode, e.g. `Start, End → SingleTouchActive`
fn format_output(events: &[GesturePhase], mode: TouchMode) -> String {
    let phases = if events.is_empty() {
        "(none)".to_string()
    } else {
        events
            .iter()
            .map(|phase| format!("{phase:?}"))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("{phases} → {mode:?}")
}

fn format_summary(report: &DiagnosticsReport) -> String {
    let verdict = if report.is_healthy() {
        "Classifier OK".green().bold()
    } else {
        "Classifier FAILING".red().bold()
    };

    let mut summary = format!(
        "\n{} {}/{} scenarios passed\n",
        verdict, report.passed, report.total
    );
    for (scenario, result) in &report.results {
        if !result.status.is_pass() {
            summary.push_str(&format!("  {} {}\n", "✗".red(), scenario.name));
        }
    }
    summary
}

/// Prints a report to stdout, with details for failing scenarios
pub fn print_report(report: &DiagnosticsReport) {
    println!("{}", format_report(report));

    for (scenario, result) in &report.results {
        if let Some(details) = &result.details {
            println!("\n{} Details:", scenario.name.bold());
            println!("{}", details);
        }
    }
}
