//! Report aggregator
//!
//! Walks the destructuring groups of one analysis invocation and decides,
//! per group, whether reports carry the keyword fix. A multi-declarator
//! declaration only gets its fix once every binding slot across all of its
//! declarators has been judged eligible; the running count resets whenever
//! the groups move on to a different declaration.

use super::fixer::{initializer_timing_ok, keyword_fix};
use super::{DestructuringMode, MutabilityOptions};
use crate::diagnostic::Fix;
use crate::semantic::SemanticModel;
use crate::syntax::{NodeId, NodeKind, SyntaxIndex};

#[derive(Debug, Clone)]
pub struct Report {
    /// The identifier the report points at.
    pub node: NodeId,
    pub fix: Option<Fix>,
}

pub(crate) struct GroupChecker<'a> {
    model: &'a SemanticModel,
    source: &'a str,
    options: &'a MutabilityOptions,
    report_count: usize,
    checked_declarator: Option<NodeId>,
    checked_name: Option<String>,
    reports: Vec<Report>,
}

impl<'a> GroupChecker<'a> {
    pub(crate) fn new(
        model: &'a SemanticModel,
        source: &'a str,
        options: &'a MutabilityOptions,
    ) -> Self {
        Self {
            model,
            source,
            options,
            report_count: 0,
            checked_declarator: None,
            checked_name: None,
            reports: Vec::new(),
        }
    }

    pub(crate) fn check_group(&mut self, members: &[Option<NodeId>]) {
        if members.is_empty() {
            return;
        }

        let eligible: Vec<NodeId> = members.iter().copied().flatten().collect();
        if eligible.is_empty() {
            return;
        }
        if self.options.destructuring == DestructuringMode::All && eligible.len() != members.len() {
            return;
        }

        let declaration = find_up_declaration(&self.model.syntax, eligible[0]);

        let fix = declaration.and_then(|decl| {
            let declarators = self.model.syntax.children(decl).to_vec();
            if declarators.is_empty() {
                return None;
            }

            let first = declarators[0];
            let name = self.declarator_display_name(first);
            if self.checked_declarator != Some(first) || self.checked_name != name {
                self.checked_declarator = Some(first);
                self.checked_name = name;
                self.report_count = 0;
            }

            let mut should_fix = initializer_timing_ok(&self.model.syntax, decl)
                && eligible.len() == members.len();

            if declarators.len() != 1 {
                self.report_count += eligible.len();
                should_fix =
                    should_fix && self.report_count == total_binding_slots(&self.model.syntax, decl);
            }

            if should_fix {
                keyword_fix(self.source, &self.model.syntax, decl)
            } else {
                None
            }
        });

        for &node in &eligible {
            if self.initializer_is_ignored(node) {
                continue;
            }
            self.reports.push(Report {
                node,
                fix: fix.clone(),
            });
        }
    }

    pub(crate) fn into_reports(self) -> Vec<Report> {
        self.reports
    }

    /// Name identifying the first declarator: its own identifier, or the
    /// initializer's identifier when the declarator binds a pattern.
    fn declarator_display_name(&self, declarator: NodeId) -> Option<String> {
        let children = self.model.syntax.children(declarator);
        let &target = children.first()?;

        if let Some(name) = self.model.syntax.identifier_name(target) {
            return Some(name.to_string());
        }

        if matches!(
            self.model.syntax.kind(target),
            NodeKind::ObjectPattern | NodeKind::ArrayPattern { .. }
        ) {
            if let Some(&init) = children.get(1) {
                if let Some(name) = self.model.syntax.identifier_name(init) {
                    return Some(name.to_string());
                }
            }
        }

        None
    }

    /// Bindings whose declarator initializer is a call to a configured
    /// opt-out callee are neither reported nor fixed.
    fn initializer_is_ignored(&self, node: NodeId) -> bool {
        if self.options.ignored_initializers.is_empty() {
            return false;
        }

        let syntax = &self.model.syntax;
        let mut current = node;
        let declarator = loop {
            let Some(parent) = syntax.parent(current) else {
                return false;
            };
            if syntax.kind(parent).is_pattern() {
                current = parent;
                continue;
            }
            if matches!(syntax.kind(parent), NodeKind::VariableDeclarator { .. }) {
                break parent;
            }
            return false;
        };

        let Some(&init) = syntax.children(declarator).get(1) else {
            return false;
        };
        match syntax.kind(init) {
            NodeKind::CallExpression {
                callee: Some(path),
            } => self
                .options
                .ignored_initializers
                .iter()
                .any(|ignored| ignored == path),
            _ => false,
        }
    }
}

/// Nearest enclosing declaration of a report anchor; the walk never crosses
/// a statement boundary.
fn find_up_declaration(syntax: &SyntaxIndex, from: NodeId) -> Option<NodeId> {
    let mut current = from;
    loop {
        if matches!(syntax.kind(current), NodeKind::VariableDeclaration { .. }) {
            return Some(current);
        }
        if syntax.kind(current).is_statement() {
            return None;
        }
        current = syntax.parent(current)?;
    }
}

/// Binding slots across all declarators: object patterns count their
/// properties (rest included), array patterns count element slots including
/// holes, plain identifiers count one.
fn total_binding_slots(syntax: &SyntaxIndex, declaration: NodeId) -> usize {
    let mut total = 0;
    for &declarator in syntax.children(declaration) {
        let Some(&target) = syntax.children(declarator).first() else {
            total += 1;
            continue;
        };
        total += match syntax.kind(target) {
            NodeKind::ObjectPattern => syntax
                .children(target)
                .iter()
                .filter(|&&child| {
                    matches!(
                        syntax.kind(child),
                        NodeKind::Property | NodeKind::RestElement
                    )
                })
                .count(),
            NodeKind::ArrayPattern { elements } => *elements,
            _ => 1,
        };
    }
    total
}
