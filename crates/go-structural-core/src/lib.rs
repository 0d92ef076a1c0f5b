//! # go-structural-core
//!
//! Deterministic structural checks for Go source files.
//!
//! This crate holds the rule engine and the plumbing around it:
//!
//! - [`SourceFile`] and friends: the language-neutral syntax model
//! - [`Checker`] and [`run`]: the fixed, ordered set of checks
//! - [`SourceParser`]: the seam a parsing backend plugs into
//! - [`Analyzer`]: discovery, parsing and checking over a batch of paths
//! - [`Violation`] and [`Report`]: findings and the JSON output schema
//!
//! ## Example
//!
//! ```ignore
//! use go_structural_core::{Analyzer, Report};
//! use go_structural_ts::GoParser;
//!
//! let result = Analyzer::builder(GoParser::new())
//!     .path("./internal")
//!     .build()
//!     .analyze()?;
//!
//! println!("{}", Report::from(&result).to_pretty_json()?);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod checker;
mod error;
mod parser;
mod report;
mod section;
mod syntax;
mod types;

pub mod checks;
pub mod discovery;

pub use analyzer::{Analyzer, AnalyzerBuilder};
pub use checker::{run, Checker, ALL_CHECKERS};
pub use error::{AnalyzerError, ParseError};
pub use parser::SourceParser;
pub use report::{Report, Summary, TOOL_NAME, VERSION};
pub use section::SectionKind;
pub use syntax::{DeclKind, Declaration, FuncDecl, ParamGroup, SourceFile, TypeSpec};
pub use types::{LintResult, Severity, Violation};
