//! Scope-aware mutability analysis
//!
//! Decides, for every `let` binding, whether rewriting it to `const`
//! preserves behavior, and plans the keyword replacement when a whole
//! declaration qualifies. The pipeline runs in four steps: per-variable
//! convertibility ([`convertible`]), grouping of write references by their
//! destructuring host ([`grouping`]), fix planning ([`fixer`]), and the
//! stateful per-declaration aggregation that emits reports ([`reporter`]).
//!
//! All state lives in the current invocation; analyzing a file never leaks
//! into the next one.

pub(crate) mod convertible;
pub(crate) mod fixer;
pub(crate) mod grouping;
pub(crate) mod reporter;

use crate::semantic::{DeclarationKind, Definition, SemanticModel, VariableId};
use crate::syntax::NodeKind;

pub use reporter::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DestructuringMode {
    /// Report members of a destructuring pattern individually.
    #[default]
    Any,
    /// Only report when every member of the pattern qualifies.
    All,
}

#[derive(Debug, Clone, Default)]
pub struct MutabilityOptions {
    pub destructuring: DestructuringMode,
    /// Treat a read that occurs before the first write as disqualifying.
    pub ignore_read_before_assign: bool,
    /// Callee paths whose call results opt a binding out of reporting
    /// entirely (e.g. `ref`, `$state`, `Object.seal`).
    pub ignored_initializers: Vec<String>,
}

/// Run the full analysis over one bound file and return the report set.
pub fn convertible_bindings(
    model: &SemanticModel,
    source: &str,
    options: &MutabilityOptions,
) -> Vec<Report> {
    let variables = analyzable_variables(model);
    let groups =
        grouping::group_by_destructuring(model, &variables, options.ignore_read_before_assign);

    let mut checker = reporter::GroupChecker::new(model, source, options);
    for (_, members) in groups.iter() {
        checker.check_group(members);
    }
    checker.into_reports()
}

/// `let` bindings outside classic `for (let i = ...)` heads.
fn analyzable_variables(model: &SemanticModel) -> Vec<VariableId> {
    model
        .bindings
        .variables()
        .filter(|variable| {
            variable
                .definitions
                .iter()
                .any(|d| d.kind == DeclarationKind::Let && !is_classic_for_init(model, d))
        })
        .map(|variable| variable.id)
        .collect()
}

fn is_classic_for_init(model: &SemanticModel, definition: &Definition) -> bool {
    let Some(declaration) = definition.declaration else {
        return false;
    };
    match model.syntax.parent(declaration) {
        Some(parent) => matches!(model.syntax.kind(parent), NodeKind::ForStatement),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParsedFile;
    use crate::semantic::Binder;

    fn analyze(code: &str, options: &MutabilityOptions) -> (ParsedFile, Vec<String>, usize) {
        let parsed = ParsedFile::from_source("test.js", code);
        let module = parsed.module().expect("parse failed");
        let model = Binder::bind(&parsed, module);
        let reports = convertible_bindings(&model, parsed.source(), options);
        let fixes = reports.iter().filter(|r| r.fix.is_some()).count();
        let names = reports
            .iter()
            .map(|r| {
                model
                    .syntax
                    .identifier_name(r.node)
                    .unwrap_or_default()
                    .to_string()
            })
            .collect();
        (parsed, names, fixes)
    }

    fn reported(code: &str) -> Vec<String> {
        analyze(code, &MutabilityOptions::default()).1
    }

    #[test]
    fn classic_for_heads_are_not_analyzed() {
        assert!(reported("for (let i = 0, end = 10; i < end; ++i) {}").is_empty());
    }

    #[test]
    fn for_of_heads_are_analyzed() {
        assert_eq!(reported("for (let x of [1,2,3]) { foo(x); }"), vec!["x"]);
    }

    #[test]
    fn state_does_not_leak_between_invocations() {
        // A partial multi-declarator group in one run must not poison the
        // eligible-member count of a later run.
        let partial = "let a = 1, b = 2; b = 3;";
        let complete = "let a = 1, b = 2;";

        let (_, _, fixes_before) = analyze(complete, &MutabilityOptions::default());
        let _ = analyze(partial, &MutabilityOptions::default());
        let (_, _, fixes_after) = analyze(complete, &MutabilityOptions::default());

        assert_eq!(fixes_before, fixes_after);
    }

    #[test]
    fn destructuring_mode_all_requires_every_member() {
        let code = "let [a, b] = pair(); b = 2;";

        let any = analyze(code, &MutabilityOptions::default());
        assert_eq!(any.1, vec!["a"]);
        assert_eq!(any.2, 0);

        let all = analyze(
            code,
            &MutabilityOptions {
                destructuring: DestructuringMode::All,
                ..Default::default()
            },
        );
        assert!(all.1.is_empty());
    }

    #[test]
    fn ignored_initializers_suppress_members() {
        let options = MutabilityOptions {
            ignored_initializers: vec!["ref".to_string()],
            ..Default::default()
        };

        let (_, names, _) = analyze("let count = ref(0);", &options);
        assert!(names.is_empty());

        let (_, names, fixes) = analyze("let count = ref(0), limit = 10;", &options);
        assert_eq!(names, vec!["limit"]);
        assert_eq!(fixes, 1);
    }
}
