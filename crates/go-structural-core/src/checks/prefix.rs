//! Flags functions and methods named with a redundant prefix.
//!
//! # Rationale
//!
//! Go convention drops `Get` from accessors: `u.Name()` rather than
//! `u.GetName()`. The check fires only when the prefix is followed by an
//! uppercase letter, so words that merely start with the prefix
//! (`Getaway`, `GettysburgAddress`) are left alone.

use crate::syntax::SourceFile;
use crate::types::{Severity, Violation};

/// Rule id for the Get-prefix naming check.
pub const NAME: &str = "no-get-prefix";

/// Flags declarations whose name is `prefix` followed by an uppercase letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingPrefixChecker {
    prefix: &'static str,
    rule: &'static str,
}

impl NamingPrefixChecker {
    /// Creates a checker for `prefix` reporting under `rule`.
    #[must_use]
    pub const fn new(prefix: &'static str, rule: &'static str) -> Self {
        Self { prefix, rule }
    }

    /// Rule id this checker reports under.
    #[must_use]
    pub const fn rule(&self) -> &'static str {
        self.rule
    }

    /// Checks every function and method in `file`.
    #[must_use]
    pub fn check(&self, file: &SourceFile, filename: &str) -> Vec<Violation> {
        file.functions()
            .filter_map(|(line, func)| {
                let suffix = self.rename_target(&func.name)?;
                Some(
                    Violation::new(
                        self.rule,
                        filename,
                        line,
                        Severity::Error,
                        format!("{}() should be {suffix}()", func.name),
                    )
                    .with_suggestion(format!("Rename to {suffix}()")),
                )
            })
            .collect()
    }

    /// Returns the name with the prefix stripped when it matches the
    /// pattern: prefix, then an uppercase character.
    fn rename_target<'n>(&self, name: &'n str) -> Option<&'n str> {
        let suffix = name.strip_prefix(self.prefix)?;
        suffix
            .chars()
            .next()
            .is_some_and(char::is_uppercase)
            .then_some(suffix)
    }
}
