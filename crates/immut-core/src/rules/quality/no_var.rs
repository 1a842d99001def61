//! no-var rule (M002): Disallow var declarations, use let or const instead

use crate::declare_rule;
use crate::diagnostic::Diagnostic;
use crate::mutability::fixer;
use crate::parser::ParsedFile;
use crate::rules::{Rule, RuleMetadata, Severity};
use crate::semantic::Binder;
use crate::syntax::{BindingKeyword, NodeKind};
use crate::visitor::VisitorContext;

declare_rule!(
    NoVar,
    id = "M002",
    name = "no-var",
    description = "Disallow var declarations, use let or const instead",
    severity = Warning,
    examples = "// Bad\nvar x = 1;\nvar name = 'test';\n\n// Good\nlet x = 1;\nconst name = 'test';"
);

impl Rule for NoVar {
    fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    fn check(&self, file: &ParsedFile) -> Vec<Diagnostic> {
        let Some(module) = file.module() else {
            return Vec::new();
        };

        let model = Binder::bind(file, module);
        let ctx = VisitorContext::new(file);
        let filename = &file.metadata().filename;
        let mut diagnostics = Vec::new();
        let mut seen = std::collections::HashSet::new();

        for variable in model.bindings.variables() {
            for definition in &variable.definitions {
                let Some(declaration) = definition.declaration else {
                    continue;
                };
                if !matches!(
                    model.syntax.kind(declaration),
                    NodeKind::VariableDeclaration {
                        keyword: BindingKeyword::Var
                    }
                ) {
                    continue;
                }
                if !seen.insert(declaration) {
                    continue;
                }

                let range = model.syntax.range(declaration);
                let (line, column) = ctx.range_to_location(range);

                let mut diagnostic = Diagnostic::new(
                    "M002",
                    Severity::Warning,
                    "Unexpected var, use let or const instead",
                    filename,
                    line,
                    column,
                )
                .with_end(line, column + 3)
                .with_suggestion("Replace 'var' with 'let' or 'const'");

                if let Some(anchor) = fixer::keyword_anchor(file.source(), &model.syntax, declaration)
                {
                    diagnostic = diagnostic.with_fix(crate::diagnostic::Fix::replace(
                        "Replace 'var' with 'let'",
                        anchor,
                        "let",
                    ));
                }

                diagnostics.push(diagnostic);
            }
        }

        diagnostics
    }
}
