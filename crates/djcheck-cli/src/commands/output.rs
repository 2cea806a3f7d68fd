//! Shared output formatting for lint results.

use anyhow::{Context, Result};
use colored::Colorize;
use djcheck_core::{IssueDiagnostic, LintResult};
use miette::{GraphicalReportHandler, GraphicalTheme};
use std::path::Path;

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `root` is the directory report paths are relative to; the `pretty` format
/// reads source snippets from it.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Pretty => return print_pretty(result, root),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for report in &result.reports {
        println!("{}", report.path.display().to_string().bold());
        for issue in &report.issues {
            println!(
                "  {}:{}  {} {}",
                issue.line(),
                issue.column(),
                issue.code().red(),
                issue.description()
            );
        }
        println!();
    }

    print_summary(result);
}

fn print_summary(result: &LintResult) {
    let mut summary = format!(
        "Found {} issue(s) in {} file(s)",
        result.issue_count(),
        result.files_checked
    );
    if result.files_skipped > 0 {
        summary.push_str(&format!(", {} file(s) skipped", result.files_skipped));
    }

    if result.has_issues() {
        println!("{}", summary.red());
    } else {
        println!("{}", summary.green());
    }
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for (path, issue) in result.issues() {
        println!("{}:{issue}", path.display());
    }
}

fn print_pretty(result: &LintResult, root: &Path) -> Result<()> {
    let theme = if colored::control::SHOULD_COLORIZE.should_colorize() {
        GraphicalTheme::unicode()
    } else {
        GraphicalTheme::unicode_nocolor()
    };
    let handler = GraphicalReportHandler::new_themed(theme);

    for report in &result.reports {
        let file = root.join(&report.path);
        let source = std::fs::read_to_string(&file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let name = report.path.display().to_string();

        for issue in &report.issues {
            let diagnostic = IssueDiagnostic::new(issue, &name, source.clone());
            let mut rendered = String::new();
            handler
                .render_report(&mut rendered, &diagnostic)
                .context("Failed to render diagnostic")?;
            println!("{rendered}");
        }
    }

    print_summary(result);
    Ok(())
}
