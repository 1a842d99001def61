//! prefer-const rule (M001): Require const declarations for variables never reassigned
//!
//! Runs the scope-aware mutability analysis: a `let` binding with exactly one
//! write, no reassignment, and same-scope initialization is reported, and the
//! declaration keyword is rewritten to `const` when the whole declaration
//! qualifies.

use crate::diagnostic::Diagnostic;
use crate::mutability::{self, MutabilityOptions};
use crate::parser::ParsedFile;
use crate::rules::{Rule, RuleMetadata, Severity};
use crate::semantic::Binder;
use crate::visitor::VisitorContext;

pub struct PreferConst {
    metadata: RuleMetadata,
    options: MutabilityOptions,
}

impl PreferConst {
    pub fn new() -> Self {
        Self::with_options(MutabilityOptions::default())
    }

    pub fn with_options(options: MutabilityOptions) -> Self {
        Self {
            metadata: RuleMetadata {
                id: "M001",
                name: "prefer-const",
                description: "Require const declarations for variables that are never reassigned",
                severity: Severity::Warning,
                docs_url: None,
                examples: Some(
                    "// Bad\nlet x = 1;\nconsole.log(x);\n\n// Good\nconst x = 1;\nconsole.log(x);",
                ),
            },
            options,
        }
    }
}

impl Default for PreferConst {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for PreferConst {
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, file: &ParsedFile) -> Vec<Diagnostic> {
        let Some(module) = file.module() else {
            return Vec::new();
        };

        let model = Binder::bind(file, module);
        let reports = mutability::convertible_bindings(&model, file.source(), &self.options);

        let ctx = VisitorContext::new(file);
        let filename = &file.metadata().filename;

        reports
            .into_iter()
            .map(|report| {
                let range = model.syntax.range(report.node);
                let name = model
                    .syntax
                    .identifier_name(report.node)
                    .unwrap_or_default()
                    .to_string();
                let (line, column) = ctx.range_to_location(range);

                let mut diagnostic = Diagnostic::new(
                    "M001",
                    Severity::Warning,
                    format!("'{}' is never reassigned. Use 'const' instead", name),
                    filename,
                    line,
                    column,
                )
                .with_end(line, column + name.len())
                .with_suggestion(format!("Replace 'let {}' with 'const {}'", name, name));

                if let Some(fix) = report.fix {
                    diagnostic = diagnostic.with_fix(fix);
                }

                diagnostic
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::apply_fixes;
    use crate::mutability::DestructuringMode;

    fn run_prefer_const(code: &str) -> Vec<Diagnostic> {
        let file = ParsedFile::from_source("test.js", code);
        let rule = PreferConst::new();
        rule.check(&file)
    }

    fn run_with_options(code: &str, options: MutabilityOptions) -> Vec<Diagnostic> {
        let file = ParsedFile::from_source("test.js", code);
        let rule = PreferConst::with_options(options);
        rule.check(&file)
    }

    fn assert_clean(cases: &[&str]) {
        for code in cases {
            let diagnostics = run_prefer_const(code);
            assert!(
                diagnostics.is_empty(),
                "expected no diagnostics for `{}`, got: {:?}",
                code,
                diagnostics.iter().map(|d| &d.message).collect::<Vec<_>>()
            );
        }
    }

    fn assert_reported(cases: &[(&str, usize)]) {
        for (code, expected) in cases {
            let diagnostics = run_prefer_const(code);
            assert_eq!(
                diagnostics.len(),
                *expected,
                "wrong diagnostic count for `{}`: {:?}",
                code,
                diagnostics.iter().map(|d| &d.message).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn detects_never_reassigned_let() {
        let diagnostics = run_prefer_const("let x = 1; console.log(x);");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule_id, "M001");
        assert!(diagnostics[0].message.contains("'x'"));
        assert!(diagnostics[0].message.contains("never reassigned"));
    }

    #[test]
    fn leaves_mutable_code_alone() {
        assert_clean(&[
            "var x = 0;",
            "let x;",
            "let x; { x = 0; } foo(x);",
            "let x = 0; x = 1;",
            "const x = 0;",
            "for (let i = 0, end = 10; i < end; ++i) {}",
            "for (let i in [1,2,3]) { i = 0; }",
            "for (let x of [1,2,3]) { x = 0; }",
            "(function(x = 0) { })();",
        ]);
    }

    #[test]
    fn loop_and_conditional_writes_do_not_qualify() {
        assert_clean(&[
            "let a; while (a = foo());",
            "let a; do {} while (a = foo());",
            "let a; for (; a = foo(); );",
            "let a; for (;; ++a);",
            "let a; if (true) a = 0; foo(a);",
            "let x; for (x of array) { x; }",
        ]);
    }

    #[test]
    fn cross_scope_initialization_does_not_qualify() {
        assert_clean(&[
            "let a; function foo() { if (a) {} a = bar(); }",
            "let a; for (const x of [1,2,3]) { a = foo(); }",
            "let x; for (const a of [1,2,3]) { x = foo(); bar(x); }",
            "(function() { let x; { x = 0; foo(x); } })();",
        ]);
    }

    #[test]
    fn destructuring_with_member_targets_does_not_qualify() {
        assert_clean(&[
            "let predicate; [typeNode.returnType, predicate] = foo();",
            "let predicate; [typeNode.returnType, ...predicate] = foo();",
            "let predicate; [typeNode.returnType,, predicate] = foo();",
            "let predicate; [[typeNode.returnType, predicate]] = foo();",
            "let predicate; [typeNode.returnType, [predicate]] = foo();",
            "let predicate; [, [typeNode.returnType, predicate]] = foo();",
            "let a; const b = {}; ({ a, c: b.c } = func());",
        ]);
    }

    #[test]
    fn destructuring_with_outer_members_does_not_qualify() {
        assert_clean(&[
            "let a; { let b; ({ a, b } = obj); }",
            "let a; { let b; ([ a, b ] = obj); }",
            "var a; { var b; ({ a, b } = obj); }",
        ]);
    }

    #[test]
    fn exported_top_level_bindings_are_skipped() {
        assert_clean(&[
            "/*exported a*/ let a; function init() { a = foo(); }",
            "/*exported a*/ let a = 1;",
            "export let version = 3;",
        ]);
    }

    #[test]
    fn reports_single_write_bindings() {
        assert_reported(&[
            ("let x = 1; foo(x);", 1),
            ("for (let i in [1,2,3]) { foo(i); }", 1),
            ("for (let x of [1,2,3]) { foo(x); }", 1),
            ("(function() { let x = 1; foo(x); })();", 1),
            ("let x; x = 0;", 1),
            ("switch (a) { case 0: let x; x = 0; }", 1),
            ("{ let x; x = 0; foo(x); }", 1),
            ("let x; function foo() { bar(x); } x = 0;", 1),
            ("let x = 0; { let x = 1; foo(x); } x = 0;", 1),
            ("let [a] = [1];", 1),
            ("let {a} = obj;", 1),
            ("let { name, ...rest } = obj; rest = {};", 1),
        ]);
    }

    #[test]
    fn reports_each_qualifying_binding_in_groups() {
        assert_reported(&[
            ("let x = 'x', y = 'y';", 2),
            ("let x = 'x', y = 'y'; x = 1;", 1),
            ("let x = 1, y = 'y'; let z = 1;", 3),
            ("let { foo, bar } = baz;", 2),
            ("let {a = 0, b} = obj; b = 0; foo(a, b);", 1),
            ("let {a: {b, c}} = {a: {b: 1, c: 2}}; b = 3;", 1),
            ("let [x = -1, y] = [1,2]; y = 0;", 1),
            ("let { a, b, c } = obj; let { x, y, z } = other; x = 2;", 5),
            ("let x = 'x', y = 'y'; function f() { let a = 1, b = 2; foo(a, b); }", 4),
        ]);
    }

    #[test]
    fn inner_shadowing_binding_is_reported_alone() {
        let code = r#"
let x = 1;
function foo() {
    let x = 2;
    x = 3;
}
console.log(x);
"#;
        let diagnostics = run_prefer_const(code);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'x'"));
    }

    #[test]
    fn fix_replaces_only_the_keyword() {
        let diagnostics = run_prefer_const("let x = 1;");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].fixes.len(), 1);

        let fix = &diagnostics[0].fixes[0];
        assert_eq!(fix.title, "Replace 'let' with 'const'");
        assert_eq!(fix.replacement, "const");
        assert_eq!(fix.apply("let x = 1;"), "const x = 1;");
    }

    #[test]
    fn assignment_only_write_reports_without_fix() {
        let diagnostics = run_prefer_const("let x; x = 5; console.log(x);");

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].fixes.is_empty());
    }

    #[test]
    fn partial_multi_declarator_reports_without_fix() {
        let diagnostics = run_prefer_const("let x = 'x', y = 'y'; x = 1;");

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'y'"));
        assert!(diagnostics[0].fixes.is_empty());
    }

    #[test]
    fn complete_multi_declarator_gets_one_fix() {
        let diagnostics = run_prefer_const("let x = 'x', y = 'y';");

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].fixes.is_empty());
        assert_eq!(diagnostics[1].fixes.len(), 1);
    }

    #[test]
    fn for_of_head_gets_fix() {
        let code = "for (let item of items) { use(item); }";
        let diagnostics = run_prefer_const(code);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].fixes.len(), 1);
        assert_eq!(
            diagnostics[0].fixes[0].apply(code),
            "for (const item of items) { use(item); }"
        );
    }

    #[test]
    fn partial_destructuring_reports_without_fix_by_default() {
        let diagnostics = run_prefer_const("let [a, b] = pair(); b = 2;");

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'a'"));
        assert!(diagnostics[0].fixes.is_empty());
    }

    #[test]
    fn all_mode_suppresses_partial_destructuring() {
        let diagnostics = run_with_options(
            "let [a, b] = pair(); b = 2;",
            MutabilityOptions {
                destructuring: DestructuringMode::All,
                ..Default::default()
            },
        );

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn ignore_read_before_assign_option() {
        let code = "let x; function foo() { bar(x); } x = 0;";

        assert_eq!(run_prefer_const(code).len(), 1);

        let diagnostics = run_with_options(
            code,
            MutabilityOptions {
                ignore_read_before_assign: true,
                ..Default::default()
            },
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn ignored_initializers_option() {
        let options = MutabilityOptions {
            ignored_initializers: vec!["ref".to_string()],
            ..Default::default()
        };

        assert!(run_with_options("let count = ref(0);", options.clone()).is_empty());
        assert_eq!(run_with_options("let count = mk(0);", options).len(), 1);
    }

    #[test]
    fn applying_fixes_is_idempotent() {
        let code = "let a = 1;\nlet { b, c } = obj;\nfor (let item of list) { use(item); }\n";
        let diagnostics = run_prefer_const(code);
        assert!(!diagnostics.is_empty());

        let fixes: Vec<_> = diagnostics
            .iter()
            .flat_map(|d| d.fixes.iter().cloned())
            .collect();
        let rewritten = apply_fixes(code, &fixes);

        assert_eq!(
            rewritten,
            "const a = 1;\nconst { b, c } = obj;\nfor (const item of list) { use(item); }\n"
        );
        assert!(run_prefer_const(&rewritten).is_empty());
    }

    #[test]
    fn fix_preserves_comments_around_keyword() {
        let code = "let /* mutable? no */ x = 1;";
        let diagnostics = run_prefer_const(code);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].fixes[0].apply(code),
            "const /* mutable? no */ x = 1;"
        );
    }

    #[test]
    fn metadata_is_correct() {
        let rule = PreferConst::new();
        let metadata = rule.metadata();

        assert_eq!(metadata.id, "M001");
        assert_eq!(metadata.name, "prefer-const");
        assert_eq!(metadata.severity, Severity::Warning);
    }

    #[test]
    fn location_points_at_the_identifier() {
        let diagnostics = run_prefer_const("let value = 1;");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 1);
        assert_eq!(diagnostics[0].column, 5);
        assert_eq!(diagnostics[0].end_column, 10);
    }
}
