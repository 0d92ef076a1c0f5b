//! Canonical top-level section order and declaration classification.

use crate::syntax::{DeclKind, Declaration};

/// Category of a top-level declaration, ordered by where it belongs in a
/// file: imports, constants, variables, interfaces, types, functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum SectionKind {
    /// Unclassified; also the state before any declaration is seen.
    #[default]
    None,
    /// Import declarations.
    Import,
    /// Constant declarations.
    Const,
    /// Variable declarations.
    Var,
    /// Type declarations made up only of interface types.
    Interface,
    /// All other type declarations.
    Type,
    /// Function and method declarations.
    Func,
}

impl SectionKind {
    /// Classifies a declaration into its section.
    ///
    /// A `type` block counts as [`SectionKind::Interface`] only if every spec
    /// in it is an interface. A grouped block mixing interfaces and concrete
    /// types is classified as [`SectionKind::Type`] as a whole; ungrouped
    /// declarations avoid the ambiguity.
    #[must_use]
    pub fn of(decl: &Declaration) -> Self {
        match &decl.kind {
            DeclKind::Import => Self::Import,
            DeclKind::Const => Self::Const,
            DeclKind::Var => Self::Var,
            DeclKind::Type { specs } => {
                if specs.iter().all(|s| s.is_interface) {
                    Self::Interface
                } else {
                    Self::Type
                }
            }
            DeclKind::Func(_) => Self::Func,
        }
    }

    /// Human-readable section name used in messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Import => "imports",
            Self::Const => "constants",
            Self::Var => "variables",
            Self::Interface => "interfaces",
            Self::Type => "types",
            Self::Func => "functions",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
