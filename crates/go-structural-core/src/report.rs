//! Machine-readable report written at the end of a run.

use crate::types::{LintResult, Violation};
use serde::{Deserialize, Serialize};

/// Tool name written into every report.
pub const TOOL_NAME: &str = "go-structural";

/// Tool version written into every report.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Top-level report structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Tool name.
    pub tool: String,
    /// Tool version.
    pub version: String,
    /// True iff no error-severity violation was found.
    pub pass: bool,
    /// Every violation, in file order then checker order.
    pub violations: Vec<Violation>,
    /// Aggregate counts.
    pub summary: Summary,
}

/// Aggregate counts for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of files checked.
    pub files_checked: usize,
    /// Number of error-severity violations.
    pub errors: usize,
    /// Number of warning-severity violations.
    pub warnings: usize,
}

impl Report {
    /// Serializes the report as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&LintResult> for Report {
    fn from(result: &LintResult) -> Self {
        let (errors, warnings) = result.count_by_severity();
        Self {
            tool: TOOL_NAME.to_owned(),
            version: VERSION.to_owned(),
            pass: errors == 0,
            violations: result.violations.clone(),
            summary: Summary {
                files_checked: result.files_checked,
                errors,
                warnings,
            },
        }
    }
}
