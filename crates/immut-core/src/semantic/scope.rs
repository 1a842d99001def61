//! Scope tree for lexical regions
//!
//! Nested program scopes (global, function, block, ...) with non-owning
//! parent links. Variables themselves live in the binding table, keyed by
//! scope id.

use id_arena::{Arena, Id};

use crate::syntax::TextRange;

pub type ScopeId = Id<Scope>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Global,
    Module,
    Function,
    ArrowFunction,
    Block,
    For,
    While,
    Switch,
    Try,
    Catch,
    Class,
    StaticBlock,
}

impl ScopeKind {
    /// Scopes that `var` declarations hoist to.
    pub fn is_var_boundary(&self) -> bool {
        matches!(
            self,
            ScopeKind::Global
                | ScopeKind::Module
                | ScopeKind::Function
                | ScopeKind::ArrowFunction
                | ScopeKind::StaticBlock
        )
    }

    /// Top-level scopes where exported bindings suppress conversion.
    pub fn is_top_level(&self) -> bool {
        matches!(self, ScopeKind::Global | ScopeKind::Module)
    }
}

#[derive(Debug)]
pub struct Scope {
    pub id: ScopeId,
    pub kind: ScopeKind,
    pub parent: Option<ScopeId>,
    pub children: Vec<ScopeId>,
    pub range: TextRange,
}

pub struct ScopeTree {
    arena: Arena<Scope>,
    root: Option<ScopeId>,
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn create_scope(
        &mut self,
        kind: ScopeKind,
        parent: Option<ScopeId>,
        range: TextRange,
    ) -> ScopeId {
        let id = self.arena.alloc_with_id(|id| Scope {
            id,
            kind,
            parent,
            children: Vec::new(),
            range,
        });

        if let Some(parent_id) = parent {
            self.arena[parent_id].children.push(id);
        }

        if self.root.is_none() {
            self.root = Some(id);
        }

        id
    }

    pub fn root(&self) -> Option<ScopeId> {
        self.root
    }

    pub fn get(&self, id: ScopeId) -> &Scope {
        &self.arena[id]
    }

    pub fn parent(&self, id: ScopeId) -> Option<&Scope> {
        self.arena[id].parent.map(|p| &self.arena[p])
    }

    pub fn children(&self, id: ScopeId) -> impl Iterator<Item = &Scope> {
        self.arena[id].children.iter().map(|&c| &self.arena[c])
    }

    pub fn ancestors(&self, id: ScopeId) -> AncestorIter<'_> {
        AncestorIter {
            tree: self,
            current: Some(id),
        }
    }

    pub fn is_descendant_of(&self, scope: ScopeId, ancestor: ScopeId) -> bool {
        self.ancestors(scope).any(|s| s.id == ancestor)
    }
}

pub struct AncestorIter<'a> {
    tree: &'a ScopeTree,
    current: Option<ScopeId>,
}

impl<'a> Iterator for AncestorIter<'a> {
    type Item = &'a Scope;

    fn next(&mut self) -> Option<Self::Item> {
        let current_id = self.current?;
        let scope = &self.tree.arena[current_id];
        self.current = scope.parent;
        Some(scope)
    }
}
