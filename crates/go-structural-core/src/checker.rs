//! Checker dispatch over the fixed rule set.

use crate::checks::{ordering, params, prefix};
use crate::checks::{DeclarationOrderingChecker, NamingPrefixChecker, ParameterCountChecker};
use crate::syntax::SourceFile;
use crate::types::Violation;

/// The checks run against every file, in reporting order.
pub static ALL_CHECKERS: [Checker; 3] = [
    Checker::NamingPrefix(NamingPrefixChecker::new("Get", prefix::NAME)),
    Checker::ParameterCount(ParameterCountChecker::new(4, params::NAME)),
    Checker::DeclarationOrdering(DeclarationOrderingChecker::new(ordering::NAME)),
];

/// A structural check over one parsed file.
///
/// The set of checks is closed; dispatch is an exhaustive match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checker {
    /// Flags names starting with a forbidden prefix.
    NamingPrefix(NamingPrefixChecker),
    /// Flags functions with too many parameters.
    ParameterCount(ParameterCountChecker),
    /// Flags top-level declarations out of section order.
    DeclarationOrdering(DeclarationOrderingChecker),
}

impl Checker {
    /// Returns the rule id violations are reported under.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NamingPrefix(c) => c.rule(),
            Self::ParameterCount(c) => c.rule(),
            Self::DeclarationOrdering(c) => c.rule(),
        }
    }

    /// Returns a brief description of what this checker enforces.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NamingPrefix(_) => "Forbids a redundant prefix on function and method names",
            Self::ParameterCount(_) => "Limits the number of parameters a function may take",
            Self::DeclarationOrdering(_) => {
                "Requires imports, const, var, interface, type, func section order"
            }
        }
    }

    /// Runs the check against `file`, reporting violations under `filename`.
    #[must_use]
    pub fn check(&self, file: &SourceFile, filename: &str) -> Vec<Violation> {
        match self {
            Self::NamingPrefix(c) => c.check(file, filename),
            Self::ParameterCount(c) => c.check(file, filename),
            Self::DeclarationOrdering(c) => c.check(file, filename),
        }
    }
}

/// Runs every check in [`ALL_CHECKERS`] against one parsed file.
///
/// Violations are grouped by checker, in checker order, and in source order
/// within each checker. A clean file yields an empty `Vec`.
#[must_use]
pub fn run(file: &SourceFile, filename: &str) -> Vec<Violation> {
    ALL_CHECKERS
        .iter()
        .flat_map(|checker| checker.check(file, filename))
        .collect()
}
