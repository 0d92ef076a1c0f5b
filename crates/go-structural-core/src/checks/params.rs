//! Limits the number of formal parameters a function may declare.
//!
//! Long parameter lists are hard to call correctly; past the limit an
//! options struct or functional options read better.

use crate::syntax::SourceFile;
use crate::types::{Severity, Violation};

/// Rule id for the parameter count check.
pub const NAME: &str = "param-count";

/// Flags functions and methods with more than `max_params` parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterCountChecker {
    max_params: usize,
    rule: &'static str,
}

impl ParameterCountChecker {
    /// Creates a checker allowing at most `max_params` parameters.
    #[must_use]
    pub const fn new(max_params: usize, rule: &'static str) -> Self {
        Self { max_params, rule }
    }

    /// Rule id this checker reports under.
    #[must_use]
    pub const fn rule(&self) -> &'static str {
        self.rule
    }

    /// Maximum number of parameters allowed.
    #[must_use]
    pub const fn max_params(&self) -> usize {
        self.max_params
    }

    /// Checks every function and method in `file`.
    ///
    /// Receivers and type parameters are not counted.
    #[must_use]
    pub fn check(&self, file: &SourceFile, filename: &str) -> Vec<Violation> {
        file.functions()
            .filter_map(|(line, func)| {
                let count = func.param_count();
                (count > self.max_params).then(|| {
                    Violation::new(
                        self.rule,
                        filename,
                        line,
                        Severity::Error,
                        format!(
                            "{}() has {count} parameters (max {})",
                            func.name, self.max_params
                        ),
                    )
                    .with_suggestion("Use options pattern or config struct")
                })
            })
            .collect()
    }
}
