//! Shared output formatting for lint results.

use anyhow::{Context, Result};
use go_structural_core::{LintResult, Report, Severity};
use std::fmt::Write;
use std::io;

use crate::OutputFormat;

/// Write lint results to `out` in the specified format.
///
/// A closed or failing writer is an error, not a panic.
pub fn write(out: &mut impl io::Write, result: &LintResult, format: OutputFormat) -> Result<()> {
    let rendered = render(result, format)?;
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .context("encoding output")
}

/// Render lint results in the specified format.
pub fn render(result: &LintResult, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => render_json(result)?,
        OutputFormat::Text => render_text(result),
        OutputFormat::Compact => render_compact(result),
    };
    Ok(rendered)
}

fn render_json(result: &LintResult) -> Result<String> {
    let mut json = Report::from(result).to_pretty_json()?;
    json.push('\n');
    Ok(json)
}

fn render_text(result: &LintResult) -> String {
    let (errors, warnings) = result.count_by_severity();
    let mut out = String::new();

    for violation in &result.violations {
        let severity_indicator = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
        };

        let _ = writeln!(
            out,
            "{} at {}:{}",
            violation.rule, violation.file, violation.line
        );
        let _ = writeln!(out, "  {}: {}", severity_indicator, violation.message);
        if let Some(suggestion) = &violation.suggestion {
            let _ = writeln!(out, "  = help: {suggestion}");
        }
        out.push('\n');
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    let _ = writeln!(
        out,
        "{}Found {} error(s), {} warning(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, result.files_checked
    );

    out
}

fn render_compact(result: &LintResult) -> String {
    result
        .violations
        .iter()
        .map(|violation| format!("{violation}\n"))
        .collect()
}
