//! Semantic analysis module
//!
//! Scope tree, binding table with classified references, and the binder that
//! builds both (plus the syntax index) from a parsed module.

pub mod binder;
pub mod bindings;
pub mod scope;

pub use binder::{Binder, SemanticModel};
pub use bindings::{
    Access, BindingTable, DeclarationKind, Definition, Reference, UnresolvedReference, Variable,
    VariableId,
};
pub use scope::{AncestorIter, Scope, ScopeId, ScopeKind, ScopeTree};
