//! Enforces the canonical top-level section order of a file.
//!
//! Expected order: imports, constants, variables, interfaces, types,
//! functions. This is strict section grouping: all types come before all
//! functions, so a method placed directly under its receiver type is flagged
//! once another type follows it.

use crate::section::SectionKind;
use crate::syntax::{DeclKind, Declaration, SourceFile};
use crate::types::{Severity, Violation};

/// Rule id for the section ordering check.
pub const NAME: &str = "file-ordering";

/// Initializer functions may appear anywhere after the imports.
const INIT_FUNC: &str = "init";

/// Verifies that top-level declarations follow the canonical section order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationOrderingChecker {
    rule: &'static str,
}

impl DeclarationOrderingChecker {
    /// Creates a checker reporting under `rule`.
    #[must_use]
    pub const fn new(rule: &'static str) -> Self {
        Self { rule }
    }

    /// Rule id this checker reports under.
    #[must_use]
    pub const fn rule(&self) -> &'static str {
        self.rule
    }

    /// Walks the declarations in source order, tracking the highest section
    /// seen so far.
    ///
    /// Each declaration below that high-water mark is reported against it.
    /// The mark only ever rises, so a violation never masks later
    /// regressions: each one is reported against the true maximum.
    #[must_use]
    pub fn check(&self, file: &SourceFile, filename: &str) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut highest = SectionKind::None;

        for decl in &file.declarations {
            if is_init_func(decl) {
                continue;
            }

            let section = SectionKind::of(decl);
            if section < highest {
                violations.push(Violation::new(
                    self.rule,
                    filename,
                    decl.line,
                    Severity::Error,
                    format!("{section} section appears after {highest} section"),
                ));
            } else if section > highest {
                highest = section;
            }
        }

        violations
    }
}

fn is_init_func(decl: &Declaration) -> bool {
    matches!(&decl.kind, DeclKind::Func(func) if func.name == INIT_FUNC)
}
