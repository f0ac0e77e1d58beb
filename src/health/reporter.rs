//! Terminal rendering of health reports

use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::check::CheckStatus;
use super::runner::HealthCheckReport;

/// Render the report as a table followed by a summary
pub fn format_report(report: &HealthCheckReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Check", "Status", "Time", "Summary"]);

    for outcome in &report.outcomes {
        let result = &outcome.result;
        builder.push_record([
            outcome.name.clone(),
            result.status.as_colored_str(),
            format!("{:.2?}", result.duration),
            result.message.clone(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    format!("{table}\n{}", format_summary(report))
}

fn format_summary(report: &HealthCheckReport) -> String {
    let mut lines = vec![
        format!("\n{}", "Summary".bold().underline()),
        format!("  Checks run: {}", report.total()),
        format!("  {} Passed: {}", "✓".green(), report.passed()),
    ];

    if report.warned() > 0 {
        lines.push(format!("  {} Warned: {}", "⚠".yellow(), report.warned()));
    }
    if report.failed() > 0 {
        lines.push(format!("  {} Failed: {}", "✗".red(), report.failed()));
    }

    let verdict = match report.status() {
        CheckStatus::Pass => "Overall: HEALTHY".green().bold(),
        CheckStatus::Warn => "Overall: HEALTHY (with warnings)".yellow().bold(),
        CheckStatus::Fail => "Overall: UNHEALTHY".red().bold(),
    };
    lines.push(format!("\n  {verdict}"));

    lines.join("\n") + "\n"
}

/// Print the report and the details of every check to stdout
pub fn print_report(report: &HealthCheckReport) {
    println!("{}", format_report(report));

    for outcome in &report.outcomes {
        let Some(details) = &outcome.result.details else {
            continue;
        };

        match outcome.description {
            Some(description) => println!("\n{} ({description}):", outcome.name.bold()),
            None => println!("\n{}:", outcome.name.bold()),
        }
        println!("{details}");
    }
}
