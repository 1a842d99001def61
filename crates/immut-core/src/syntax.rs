//! Syntax node index with byte ranges and parent back-references
//!
//! The swc AST carries spans but no parent links, so the binder lowers the
//! constructs relevant to mutability analysis into this arena-backed index.
//! Upward and downward walks are explicit loops.

use id_arena::{Arena, Id};

pub type NodeId = Id<SyntaxNode>;

/// Half-open byte range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRange {
    pub start: u32,
    pub end: u32,
}

impl TextRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        let start = self.start as usize;
        let end = self.end as usize;
        if start <= end && end <= source.len() {
            Some(&source[start..end])
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKeyword {
    Var,
    Let,
    Const,
}

impl BindingKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            BindingKeyword::Var => "var",
            BindingKeyword::Let => "let",
            BindingKeyword::Const => "const",
        }
    }
}

/// Tagged node kinds, one case per construct the analysis inspects.
///
/// Statement forms outside this set are recorded as `OtherStatement` so that
/// upward walks still stop at statement boundaries; everything else lands in
/// `Unsupported`, which no analysis step ever treats as convertible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Program,
    Identifier(String),
    ObjectPattern,
    ArrayPattern { elements: usize },
    AssignmentPattern,
    RestElement,
    Property,
    VariableDeclarator { has_init: bool },
    VariableDeclaration { keyword: BindingKeyword },
    AssignmentExpression,
    MemberExpression,
    CallExpression { callee: Option<String> },
    ExpressionStatement,
    BlockStatement,
    StaticBlock,
    SwitchCase,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    OtherStatement,
    Unsupported,
}

impl NodeKind {
    /// Pattern-shaped nodes that host/anchor walks pass through.
    pub fn is_pattern(&self) -> bool {
        matches!(
            self,
            NodeKind::ObjectPattern
                | NodeKind::ArrayPattern { .. }
                | NodeKind::AssignmentPattern
                | NodeKind::RestElement
                | NodeKind::Property
        )
    }

    /// Statement-level nodes; upward searches never cross these.
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeKind::ExpressionStatement
                | NodeKind::BlockStatement
                | NodeKind::ForStatement
                | NodeKind::ForInStatement
                | NodeKind::ForOfStatement
                | NodeKind::OtherStatement
        )
    }
}

#[derive(Debug)]
pub struct SyntaxNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub range: TextRange,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

pub struct SyntaxIndex {
    arena: Arena<SyntaxNode>,
}

impl Default for SyntaxIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxIndex {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    pub fn insert(&mut self, kind: NodeKind, range: TextRange, parent: Option<NodeId>) -> NodeId {
        let id = self.arena.alloc_with_id(|id| SyntaxNode {
            id,
            kind,
            range,
            parent,
            children: Vec::new(),
        });

        if let Some(parent_id) = parent {
            self.arena[parent_id].children.push(id);
        }

        id
    }

    pub fn get(&self, id: NodeId) -> &SyntaxNode {
        &self.arena[id]
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.arena[id].kind
    }

    pub fn range(&self, id: NodeId) -> TextRange {
        self.arena[id].range
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.arena[id].children
    }

    pub fn identifier_name(&self, id: NodeId) -> Option<&str> {
        match &self.arena[id].kind {
            NodeKind::Identifier(name) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn ancestors(&self, id: NodeId) -> NodeAncestors<'_> {
        NodeAncestors {
            index: self,
            current: self.arena[id].parent,
        }
    }

    /// Depth-first walk over the subtree rooted at `id`, excluding `id`
    /// itself. Implemented with an explicit stack.
    pub fn descendants(&self, id: NodeId) -> NodeDescendants<'_> {
        let mut stack: Vec<NodeId> = self.arena[id].children.to_vec();
        stack.reverse();
        NodeDescendants { index: self, stack }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }
}

pub struct NodeAncestors<'a> {
    index: &'a SyntaxIndex,
    current: Option<NodeId>,
}

impl<'a> Iterator for NodeAncestors<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let current_id = self.current?;
        let node = &self.index.arena[current_id];
        self.current = node.parent;
        Some(node)
    }
}

pub struct NodeDescendants<'a> {
    index: &'a SyntaxIndex,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for NodeDescendants<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.index.arena[id];
        for &child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}
