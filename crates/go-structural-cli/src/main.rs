//! go-structural CLI tool.
//!
//! Usage:
//! ```bash
//! go-structural [OPTIONS] [PATH]...
//! go-structural --list-rules
//! ```
//!
//! Exit codes: 0 = pass, 1 = violations found, 2 = tool error.

use clap::Parser;
use go_structural_core::AnalyzerError;
use miette::GraphicalReportHandler;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::check::Outcome;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "GO_STRUCTURAL_LOG";

/// Deterministic structural checks for Go source files
#[derive(Parser)]
#[command(name = "go-structural")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files or directories to check
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "json", env = "GO_STRUCTURAL_FORMAT")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// List available rules and exit
    #[arg(long)]
    list_rules: bool,
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON report.
    #[default]
    Json,
    /// Human-readable text output.
    Text,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if cli.list_rules {
        commands::list_rules::run();
        return ExitCode::SUCCESS;
    }

    match commands::check::run(&cli.paths, cli.format) {
        Ok(Outcome::Pass) => ExitCode::SUCCESS,
        Ok(Outcome::ViolationsFound) => ExitCode::from(1),
        Err(err) => {
            report_error(&err);
            ExitCode::from(2)
        }
    }
}

/// Logs go to stderr; stdout carries the report.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn report_error(err: &anyhow::Error) {
    if let Some(parse) = err
        .downcast_ref::<AnalyzerError>()
        .and_then(AnalyzerError::as_parse_error)
    {
        let mut rendered = String::new();
        if GraphicalReportHandler::new()
            .render_report(&mut rendered, parse)
            .is_ok()
        {
            eprint!("{rendered}");
        }
    }

    eprintln!("go-structural: {err:#}");
}
