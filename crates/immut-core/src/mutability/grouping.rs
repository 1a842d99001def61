//! Destructuring grouper
//!
//! Partitions the write references of the variables under analysis by the
//! destructuring host (declarator or assignment expression) they belong to.
//! Each write contributes its variable's canonical rewrite identifier, or
//! `None` when the variable is not convertible; the `None` entries stay in
//! the group so "all members convertible" checks see the full pattern.

use std::collections::HashMap;

use super::convertible::convertible_identifier;
use crate::semantic::{SemanticModel, VariableId};
use crate::syntax::{NodeId, NodeKind, SyntaxIndex};

/// Host node -> ordered member entries, in first-insertion order. Groups of
/// one declaration are contiguous because variables are visited in
/// declaration order.
pub(crate) struct DestructuringGroups {
    order: Vec<NodeId>,
    members: HashMap<NodeId, Vec<Option<NodeId>>>,
}

impl DestructuringGroups {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            members: HashMap::new(),
        }
    }

    fn push(&mut self, host: NodeId, entry: Option<NodeId>) {
        let slot = self.members.entry(host).or_default();
        if slot.is_empty() {
            self.order.push(host);
        }
        slot.push(entry);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (NodeId, &[Option<NodeId>])> {
        self.order
            .iter()
            .map(|host| (*host, self.members[host].as_slice()))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }
}

pub(crate) fn group_by_destructuring(
    model: &SemanticModel,
    variables: &[VariableId],
    ignore_read_before_assign: bool,
) -> DestructuringGroups {
    let mut groups = DestructuringGroups::new();

    for &variable_id in variables {
        let variable = model.bindings.get(variable_id);
        let identifier = convertible_identifier(model, variable, ignore_read_before_assign);

        let mut previous: Option<NodeId> = None;
        for reference in &variable.references {
            // A reference annotating the same identifier node as the one
            // before it is a duplicate classification, not a new use.
            if previous == Some(reference.node) {
                continue;
            }
            previous = Some(reference.node);

            if reference.access.is_write() {
                if let Some(host) = destructuring_host(&model.syntax, reference.node) {
                    groups.push(host, identifier);
                }
            }
        }
    }

    groups
}

/// Walk parent links upward through pattern-shaped nodes until a declarator
/// or assignment expression is reached. Any other terminus means the write
/// belongs to no rewritable host (for-of heads, update expressions, ...).
pub(crate) fn destructuring_host(syntax: &SyntaxIndex, identifier: NodeId) -> Option<NodeId> {
    let mut node = syntax.parent(identifier)?;
    while syntax.kind(node).is_pattern() {
        node = syntax.parent(node)?;
    }

    match syntax.kind(node) {
        NodeKind::VariableDeclarator { .. } | NodeKind::AssignmentExpression => Some(node),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutability::analyzable_variables;
    use crate::parser::ParsedFile;
    use crate::semantic::Binder;

    fn groups_of(code: &str) -> (ParsedFile, usize, Vec<Vec<bool>>) {
        let parsed = ParsedFile::from_source("test.js", code);
        let module = parsed.module().expect("parse failed");
        let model = Binder::bind(&parsed, module);
        let variables = analyzable_variables(&model);
        let groups = group_by_destructuring(&model, &variables, false);
        let count = groups.len();
        let shape: Vec<Vec<bool>> = groups
            .iter()
            .map(|(_, members)| members.iter().map(|m| m.is_some()).collect())
            .collect();
        (parsed, count, shape)
    }

    #[test]
    fn simple_declarator_forms_its_own_group() {
        let (_, count, shape) = groups_of("let x = 1;");
        assert_eq!(count, 1);
        assert_eq!(shape, vec![vec![true]]);
    }

    #[test]
    fn multi_declarator_declaration_forms_one_group_per_declarator() {
        let (_, count, _) = groups_of("let a = 1, b = 2;");
        assert_eq!(count, 2);
    }

    #[test]
    fn destructuring_members_share_one_group() {
        let (_, count, shape) = groups_of("let { a, b } = obj;");
        assert_eq!(count, 1);
        assert_eq!(shape, vec![vec![true, true]]);
    }

    #[test]
    fn non_convertible_member_stays_in_group_as_none() {
        let (_, count, shape) = groups_of("let [a, b] = pair(); b = 2;");
        // The declarator group keeps b's slot as None; b's reassignment forms
        // a second group under the assignment expression.
        assert_eq!(count, 2);
        assert_eq!(shape[0], vec![true, false]);
        assert_eq!(shape[1], vec![false]);
    }

    #[test]
    fn for_of_head_writes_have_no_host() {
        let (_, count, _) = groups_of("let x; for (x of list) { use(x); }");
        assert_eq!(count, 0);
    }

    #[test]
    fn assignment_writes_group_under_the_assignment() {
        let (_, count, shape) = groups_of("let x; x = 5;");
        assert_eq!(count, 1);
        assert_eq!(shape, vec![vec![true]]);
    }
}
