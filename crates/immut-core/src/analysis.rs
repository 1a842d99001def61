//! Analysis engine for code analysis and diagnostic generation
//!
//! Ties the parser, rule registry, and disable directives together for CLI
//! and other consumers.

use tracing::{debug, trace};

use crate::config::Config;
use crate::diagnostic::Diagnostic;
use crate::disable_comments::DisableDirectives;
use crate::parser::ParsedFile;
use crate::rules::quality::{NoVar, PreferConst};
use crate::rules::{RuleRegistry, Severity};

pub struct AnalysisEngine {
    registry: RuleRegistry,
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self {
            registry: create_default_registry(&Config::default()),
        }
    }

    pub fn with_config(config: &Config) -> Self {
        let mut registry = create_default_registry(config);
        registry.configure(&config.rules);
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn analyze(&self, file: &ParsedFile) -> Vec<Diagnostic> {
        let filename = &file.metadata().filename;
        debug!(file = %filename, "analyzing");

        let disable_directives = DisableDirectives::from_source(file.source());
        let mut diagnostics = Vec::new();

        for error in file.errors() {
            let diagnostic = Diagnostic::new(
                "PARSE",
                Severity::Error,
                &error.message,
                filename,
                error.line,
                error.column,
            );
            if !disable_directives.is_disabled(diagnostic.line, &diagnostic.rule_id) {
                diagnostics.push(diagnostic);
            }
        }

        for diagnostic in self.registry.run_all(file) {
            if disable_directives.is_disabled(diagnostic.line, &diagnostic.rule_id) {
                trace!(
                    rule = %diagnostic.rule_id,
                    line = diagnostic.line,
                    "suppressed by disable directive"
                );
                continue;
            }
            diagnostics.push(diagnostic);
        }

        debug!(
            file = %filename,
            count = diagnostics.len(),
            "analysis finished"
        );
        diagnostics
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn create_default_registry(config: &Config) -> RuleRegistry {
    let mut registry = RuleRegistry::new();

    registry.register(Box::new(PreferConst::with_options(
        config.rules.prefer_const.clone().into(),
    )));
    registry.register(Box::new(NoVar::new()));

    registry
}
