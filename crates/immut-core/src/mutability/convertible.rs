//! Per-variable convertibility analysis
//!
//! A `let` binding can become `const` when it has exactly one write, that
//! write happens in the binding's own declaring scope, and the write's
//! enclosing construct can structurally carry a declaration. Anything the
//! analysis cannot positively classify counts as not convertible.

use super::grouping::destructuring_host;
use crate::semantic::{ScopeId, SemanticModel, Variable};
use crate::syntax::{NodeId, NodeKind, SyntaxIndex};

/// Returns the identifier node to anchor the rewrite on, or `None` when the
/// variable must stay mutable.
pub(crate) fn convertible_identifier(
    model: &SemanticModel,
    variable: &Variable,
    ignore_read_before_assign: bool,
) -> Option<NodeId> {
    // An externally visible top-level binding may be reassigned by code this
    // analysis cannot see.
    if variable.exported && model.scopes.get(variable.scope).kind.is_top_level() {
        return None;
    }

    let mut writer: Option<(NodeId, ScopeId)> = None;
    let mut read_before_init = false;

    for reference in &variable.references {
        if reference.access.is_write() {
            if let Some((writer_node, _)) = writer {
                if writer_node != reference.node {
                    // Reassigned.
                    return None;
                }
            }

            if let Some(host) = destructuring_host(&model.syntax, reference.node) {
                if matches!(model.syntax.kind(host), NodeKind::AssignmentExpression)
                    && assignment_pattern_forbids(model, host, variable, reference.from_scope)
                {
                    return None;
                }
            }

            writer = Some((reference.node, reference.from_scope));
        } else if writer.is_none() {
            if ignore_read_before_assign {
                return None;
            }
            read_before_init = true;
        }
    }

    let (writer_node, writer_scope) = writer?;
    if writer_scope != variable.scope {
        return None;
    }
    if !can_become_declaration(&model.syntax, writer_node) {
        return None;
    }

    if read_before_init {
        // The value must be visible at the original declaration site, so the
        // rewrite anchors there instead of at the sole write.
        variable.definitions.first().map(|d| d.name_node)
    } else {
        Some(writer_node)
    }
}

/// The writer is a declarator, or an assignment expression whose statement
/// sits directly inside a block, static block, switch case, or program root.
fn can_become_declaration(syntax: &SyntaxIndex, identifier: NodeId) -> bool {
    let mut node = match syntax.parent(identifier) {
        Some(parent) => parent,
        None => return false,
    };
    while syntax.kind(node).is_pattern() {
        match syntax.parent(node) {
            Some(parent) => node = parent,
            None => return false,
        }
    }

    match syntax.kind(node) {
        NodeKind::VariableDeclarator { .. } => true,
        NodeKind::AssignmentExpression => {
            let Some(statement) = syntax.parent(node) else {
                return false;
            };
            if !matches!(syntax.kind(statement), NodeKind::ExpressionStatement) {
                return false;
            }
            matches!(
                syntax.parent(statement).map(|host| syntax.kind(host)),
                Some(
                    NodeKind::BlockStatement
                        | NodeKind::StaticBlock
                        | NodeKind::SwitchCase
                        | NodeKind::Program
                )
            )
        }
        _ => false,
    }
}

/// Destructuring validation at the point of an assignment write: the pattern
/// must not capture a binding from a scope enclosing the variable's own, and
/// must not contain property-write targets anywhere in its structure.
fn assignment_pattern_forbids(
    model: &SemanticModel,
    host: NodeId,
    variable: &Variable,
    from_scope: ScopeId,
) -> bool {
    let Some(&left) = model.syntax.children(host).first() else {
        return false;
    };
    if !matches!(
        model.syntax.kind(left),
        NodeKind::ObjectPattern | NodeKind::ArrayPattern { .. }
    ) {
        return false;
    }

    has_outer_member(model, left, variable, from_scope)
        || has_non_identifier_target(&model.syntax, left)
}

/// Direct identifier members resolving to a binding declared strictly
/// outside the variable's scope change meaning when the group is rewritten.
fn has_outer_member(
    model: &SemanticModel,
    pattern: NodeId,
    variable: &Variable,
    from_scope: ScopeId,
) -> bool {
    let mut names: Vec<&str> = Vec::new();

    match model.syntax.kind(pattern) {
        NodeKind::ObjectPattern => {
            for &prop in model.syntax.children(pattern) {
                if matches!(model.syntax.kind(prop), NodeKind::Property) {
                    if let Some(&value) = model.syntax.children(prop).first() {
                        if let Some(name) = model.syntax.identifier_name(value) {
                            names.push(name);
                        }
                    }
                }
            }
        }
        NodeKind::ArrayPattern { .. } => {
            for &element in model.syntax.children(pattern) {
                if let Some(name) = model.syntax.identifier_name(element) {
                    names.push(name);
                }
            }
        }
        _ => return false,
    }

    names.iter().any(|name| {
        model
            .bindings
            .lookup(name, from_scope, &model.scopes)
            .map(|id| {
                let resolved = model.bindings.get(id);
                resolved.scope != variable.scope
                    && model.scopes.is_descendant_of(variable.scope, resolved.scope)
            })
            .unwrap_or(false)
    })
}

/// Iterative descent over the pattern's target positions. Default values are
/// not targets and are skipped; member expressions and unclassifiable shapes
/// disqualify.
fn has_non_identifier_target(syntax: &SyntaxIndex, pattern: NodeId) -> bool {
    let mut stack = vec![pattern];

    while let Some(node) = stack.pop() {
        match syntax.kind(node) {
            NodeKind::MemberExpression | NodeKind::Unsupported => return true,
            NodeKind::ObjectPattern => {
                for &child in syntax.children(node) {
                    if matches!(
                        syntax.kind(child),
                        NodeKind::Property | NodeKind::RestElement
                    ) {
                        stack.push(child);
                    }
                }
            }
            NodeKind::ArrayPattern { .. } | NodeKind::Property | NodeKind::RestElement => {
                stack.extend(syntax.children(node));
            }
            NodeKind::AssignmentPattern => {
                if let Some(&target) = syntax.children(node).first() {
                    stack.push(target);
                }
            }
            _ => {}
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParsedFile;
    use crate::semantic::Binder;

    fn anchor_of(code: &str, name: &str, ignore_read_before_assign: bool) -> Option<String> {
        let parsed = ParsedFile::from_source("test.js", code);
        let module = parsed.module().expect("parse failed");
        let model = Binder::bind(&parsed, module);
        let variable = model
            .bindings
            .variables()
            .find(|v| v.name == name)
            .unwrap_or_else(|| panic!("variable '{}' not found", name));

        convertible_identifier(&model, variable, ignore_read_before_assign).map(|node| {
            let range = model.syntax.range(node);
            format!(
                "{}@{}",
                model.syntax.identifier_name(node).unwrap_or_default(),
                range.start
            )
        })
    }

    fn convertible(code: &str, name: &str) -> bool {
        anchor_of(code, name, false).is_some()
    }

    #[test]
    fn initialized_and_never_reassigned() {
        assert!(convertible("let x = 1; foo(x);", "x"));
    }

    #[test]
    fn reassignment_disqualifies() {
        assert!(!convertible("let x = 1; x = 2;", "x"));
        assert!(!convertible("let x = 1; x += 2;", "x"));
        assert!(!convertible("let x = 1; x++;", "x"));
    }

    #[test]
    fn sole_write_in_nested_scope_disqualifies() {
        assert!(!convertible("let x; { x = 0; } foo(x);", "x"));
        assert!(!convertible("let a; function f() { a = 1; }", "a"));
    }

    #[test]
    fn write_in_own_scope_statement_position_qualifies() {
        assert!(convertible("let x; x = 0;", "x"));
        assert!(convertible("{ let x; x = 0; foo(x); }", "x"));
    }

    #[test]
    fn write_in_non_statement_position_disqualifies() {
        assert!(!convertible("let a; while (a = foo());", "a"));
        assert!(!convertible("let a; do {} while (a = foo());", "a"));
        assert!(!convertible("let a; if (cond) a = 0;", "a"));
        assert!(!convertible("let a; for (;; ++a);", "a"));
    }

    #[test]
    fn for_of_assignment_head_disqualifies() {
        assert!(!convertible("let x; for (x of array) { x; }", "x"));
    }

    #[test]
    fn exported_top_level_binding_disqualifies() {
        assert!(!convertible("export let config = 1;", "config"));
        assert!(!convertible("/* exported state */ let state = 1;", "state"));
    }

    #[test]
    fn member_expression_in_pattern_disqualifies() {
        assert!(!convertible(
            "let predicate; [typeNode.returnType, predicate] = foo();",
            "predicate"
        ));
        assert!(!convertible(
            "let predicate; [[typeNode.returnType], predicate] = foo();",
            "predicate"
        ));
        assert!(!convertible(
            "let a; const b = {}; ({ a, c: b.c } = func());",
            "a"
        ));
    }

    #[test]
    fn default_values_are_not_targets() {
        // The member expression lives in a default value, not a target.
        assert!(convertible("let a; ({ a = obj.fallback } = src);", "a"));
    }

    #[test]
    fn outer_scope_member_disqualifies() {
        assert!(!convertible("let a; { let b; ({ a, b } = obj); }", "b"));
        assert!(!convertible("let a; { let b; ([a, b] = obj); }", "b"));
    }

    #[test]
    fn same_scope_destructuring_assignment_qualifies() {
        assert!(convertible("let a; let b; ({ a, b } = obj);", "a"));
        assert!(convertible("let a; let b; ({ a, b } = obj);", "b"));
    }

    #[test]
    fn read_before_init_anchors_at_declaration() {
        let anchor = anchor_of("let x; function foo() { bar(x); } x = 0;", "x", false);
        // Byte 4 is the declaration identifier, not the later assignment.
        assert_eq!(anchor.as_deref(), Some("x@4"));
    }

    #[test]
    fn write_first_anchors_at_the_write() {
        let anchor = anchor_of("let x; x = 5; console.log(x);", "x", false);
        assert_eq!(anchor.as_deref(), Some("x@7"));
    }

    #[test]
    fn ignore_read_before_assign_disqualifies_early_reads() {
        assert!(anchor_of("let x; function foo() { bar(x); } x = 0;", "x", true).is_none());
    }

    #[test]
    fn uninitialized_without_writes_disqualifies() {
        assert!(!convertible("let x;", "x"));
        assert!(!convertible("let x; foo(x);", "x"));
    }
}
