//! Check command implementation.

use anyhow::Result;
use go_structural_core::Analyzer;
use go_structural_ts::GoParser;
use std::io;
use std::path::PathBuf;

use crate::OutputFormat;

/// How a completed check run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No error-severity violations.
    Pass,
    /// At least one error-severity violation.
    ViolationsFound,
}

/// Runs every check over `paths` and prints the report to stdout.
pub fn run(paths: &[PathBuf], format: OutputFormat) -> Result<Outcome> {
    run_with_output(paths, format, &mut io::stdout().lock())
}

/// Runs every check over `paths` and writes the report to `out`.
///
/// Nothing is written when the run fails: a batch that did not fully parse
/// produces no report.
pub fn run_with_output(
    paths: &[PathBuf],
    format: OutputFormat,
    out: &mut impl io::Write,
) -> Result<Outcome> {
    let analyzer = Analyzer::builder(GoParser::new())
        .paths(paths.iter().cloned())
        .build();

    tracing::info!("Checking {:?}", analyzer.paths());

    let result = analyzer.analyze()?;

    super::output::write(out, &result, format)?;

    if result.has_errors() {
        Ok(Outcome::ViolationsFound)
    } else {
        Ok(Outcome::Pass)
    }
}
