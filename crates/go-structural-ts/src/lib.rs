//! # go-structural-ts
//!
//! Tree-sitter powered Go parsing for go-structural.
//!
//! [`GoParser`] implements [`go_structural_core::SourceParser`]: it parses
//! Go source with `tree-sitter-go` and lowers the concrete syntax tree into
//! the [`go_structural_core::SourceFile`] model the checks run against.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod go;

pub use go::GoParser;
