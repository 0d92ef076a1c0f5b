//! Language-neutral view of a parsed Go source file.
//!
//! Parser adapters (see [`crate::SourceParser`]) lower their concrete syntax
//! trees into these types. Checkers only ever see this model, so they stay
//! independent of the parsing backend.

/// A parsed source file: its package name and top-level declarations in
/// source order.
///
/// `package` is descriptive only; no checker reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFile {
    /// Package name from the `package` clause.
    pub package: String,
    /// Top-level declarations, in source order.
    pub declarations: Vec<Declaration>,
}

impl SourceFile {
    /// Creates an empty file for the given package.
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            declarations: Vec::new(),
        }
    }

    /// Appends a declaration.
    #[must_use]
    pub fn with_declaration(mut self, line: usize, kind: DeclKind) -> Self {
        self.declarations.push(Declaration { line, kind });
        self
    }

    /// Iterates over function and method declarations with their lines.
    pub fn functions(&self) -> impl Iterator<Item = (usize, &FuncDecl)> {
        self.declarations.iter().filter_map(|d| match &d.kind {
            DeclKind::Func(func) => Some((d.line, func)),
            _ => None,
        })
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Line of the declaration keyword (1-indexed).
    pub line: usize,
    /// What was declared.
    pub kind: DeclKind,
}

/// Kind of top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    /// `import "fmt"` or a grouped import block.
    Import,
    /// `const` declaration or block.
    Const,
    /// `var` declaration or block.
    Var,
    /// `type` declaration or block.
    Type {
        /// Specs in the declaration; a grouped block carries several.
        specs: Vec<TypeSpec>,
    },
    /// Function or method declaration.
    Func(FuncDecl),
}

/// One type definition or alias inside a `type` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    /// Declared type name.
    pub name: String,
    /// Line of the spec (1-indexed).
    pub line: usize,
    /// Whether the underlying type is an interface literal.
    pub is_interface: bool,
}

impl TypeSpec {
    /// Creates a type spec.
    #[must_use]
    pub fn new(name: impl Into<String>, line: usize, is_interface: bool) -> Self {
        Self {
            name: name.into(),
            line,
            is_interface,
        }
    }
}

/// A function or method declaration.
///
/// Checkers treat functions and methods alike. `receiver` only records
/// which one this is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    /// Function or method name.
    pub name: String,
    /// Receiver type text for methods (e.g., `*User`), `None` for functions.
    pub receiver: Option<String>,
    /// Formal parameters, grouped as written.
    pub params: Vec<ParamGroup>,
}

impl FuncDecl {
    /// Creates a free function declaration.
    #[must_use]
    pub fn function(name: impl Into<String>, params: Vec<ParamGroup>) -> Self {
        Self {
            name: name.into(),
            receiver: None,
            params,
        }
    }

    /// Creates a method declaration on `receiver`.
    #[must_use]
    pub fn method(
        name: impl Into<String>,
        receiver: impl Into<String>,
        params: Vec<ParamGroup>,
    ) -> Self {
        Self {
            name: name.into(),
            receiver: Some(receiver.into()),
            params,
        }
    }

    /// Counts individual formal parameters.
    ///
    /// Every name in a group counts once (`a, b int` is two); a group with
    /// no names is a single unnamed parameter.
    #[must_use]
    pub fn param_count(&self) -> usize {
        self.params.iter().map(|g| g.names.len().max(1)).sum()
    }
}

/// Parameters sharing one type annotation (`a, b string`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamGroup {
    /// Parameter names; empty for an unnamed parameter.
    pub names: Vec<String>,
}

impl ParamGroup {
    /// A group of named parameters.
    #[must_use]
    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// A single unnamed parameter.
    #[must_use]
    pub fn unnamed() -> Self {
        Self::default()
    }
}
