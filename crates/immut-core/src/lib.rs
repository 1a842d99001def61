//! Core analysis engine for immut
//!
//! immut decides, for every `let` binding in a JavaScript/TypeScript file,
//! whether rewriting it to `const` preserves program behavior, and proposes
//! the minimal keyword edit when it does. The crate is organized around a
//! small pipeline: [`parser`] turns source text into an AST, [`semantic`]
//! builds scopes, bindings, and a parent-linked [`syntax`] index from it,
//! [`mutability`] runs the convertibility analysis, and [`rules`] packages
//! the results as diagnostics with optional fixes.

pub mod analysis;
pub mod config;
pub mod diagnostic;
pub mod disable_comments;
pub mod mutability;
pub mod parser;
pub mod rules;
pub mod semantic;
pub mod syntax;
pub mod visitor;

pub use analysis::AnalysisEngine;
pub use diagnostic::{Diagnostic, Fix, apply_fixes};
pub use parser::ParsedFile;
