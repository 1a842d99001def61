//! Binding table: variables, definitions, and classified references
//!
//! Each variable belongs to exactly one scope and owns its references in
//! traversal order. References carry the scope they occur *from*, which may
//! differ from the declaring scope, and a read/write classification.

use std::collections::HashMap;

use id_arena::{Arena, Id};

use super::scope::{ScopeId, ScopeTree};
use crate::syntax::NodeId;

pub type VariableId = Id<Variable>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Var,
    Let,
    Const,
    Function,
    Class,
    Parameter,
    Import,
    CatchParam,
}

/// How a reference uses its variable. Compound updates (`x += 1`, `x++`)
/// both read and write; the analysis treats them as writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
    ReadWrite,
}

impl Access {
    pub fn is_read(&self) -> bool {
        matches!(self, Access::Read | Access::ReadWrite)
    }

    pub fn is_write(&self) -> bool {
        matches!(self, Access::Write | Access::ReadWrite)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Reference {
    pub node: NodeId,
    pub from_scope: ScopeId,
    pub access: Access,
}

#[derive(Debug, Clone, Copy)]
pub struct Definition {
    pub kind: DeclarationKind,
    /// The identifier node introducing the binding.
    pub name_node: NodeId,
    /// Enclosing `VariableDeclaration` node for var/let/const definitions.
    pub declaration: Option<NodeId>,
}

#[derive(Debug)]
pub struct Variable {
    pub id: VariableId,
    pub name: String,
    pub scope: ScopeId,
    pub exported: bool,
    pub definitions: Vec<Definition>,
    pub references: Vec<Reference>,
}

impl Variable {
    pub fn declaration_kind(&self) -> Option<DeclarationKind> {
        self.definitions.first().map(|d| d.kind)
    }
}

#[derive(Debug, Clone)]
pub struct UnresolvedReference {
    pub name: String,
    pub node: NodeId,
    pub scope: ScopeId,
}

pub struct BindingTable {
    arena: Arena<Variable>,
    by_scope: HashMap<ScopeId, HashMap<String, VariableId>>,
}

impl Default for BindingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingTable {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            by_scope: HashMap::new(),
        }
    }

    /// Declare a binding, merging repeated `var` definitions of the same name
    /// in the same scope into one variable.
    pub fn declare(
        &mut self,
        name: &str,
        scope: ScopeId,
        definition: Definition,
        exported: bool,
    ) -> VariableId {
        if let Some(&existing) = self.by_scope.get(&scope).and_then(|m| m.get(name)) {
            let variable = &mut self.arena[existing];
            variable.definitions.push(definition);
            variable.exported |= exported;
            return existing;
        }

        let id = self.arena.alloc_with_id(|id| Variable {
            id,
            name: name.to_string(),
            scope,
            exported,
            definitions: vec![definition],
            references: Vec::new(),
        });

        self.by_scope
            .entry(scope)
            .or_default()
            .insert(name.to_string(), id);

        id
    }

    /// Resolve a name from `scope` by walking the scope chain outward.
    pub fn lookup(&self, name: &str, scope: ScopeId, scope_tree: &ScopeTree) -> Option<VariableId> {
        let mut current = Some(scope);
        while let Some(scope_id) = current {
            if let Some(&id) = self.by_scope.get(&scope_id).and_then(|m| m.get(name)) {
                return Some(id);
            }
            current = scope_tree.get(scope_id).parent;
        }
        None
    }

    pub fn get(&self, id: VariableId) -> &Variable {
        &self.arena[id]
    }

    pub fn get_mut(&mut self, id: VariableId) -> &mut Variable {
        &mut self.arena[id]
    }

    pub fn add_reference(&mut self, id: VariableId, reference: Reference) {
        self.arena[id].references.push(reference);
    }

    pub fn mark_exported(&mut self, name: &str, scope: ScopeId) -> bool {
        if let Some(&id) = self.by_scope.get(&scope).and_then(|m| m.get(name)) {
            self.arena[id].exported = true;
            true
        } else {
            false
        }
    }

    /// All variables in declaration (traversal) order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.arena.iter().map(|(_, v)| v)
    }

    pub fn variables_in_scope(&self, scope: ScopeId) -> impl Iterator<Item = &Variable> {
        self.by_scope
            .get(&scope)
            .into_iter()
            .flat_map(|m| m.values().map(|&id| &self.arena[id]))
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }
}
