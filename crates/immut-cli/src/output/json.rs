//! JSON output formatter for diagnostic display
//!
//! Provides structured JSON output for programmatic integration.

use immut_core::analysis::AnalysisEngine;
use immut_core::diagnostic::{Diagnostic, Fix};
use immut_core::rules::Severity;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Serialize)]
pub struct JsonOutput {
    pub version: &'static str,
    pub metadata: JsonMetadata,
    pub summary: JsonSummary,
    pub diagnostics: Vec<JsonDiagnostic>,
}

#[derive(Serialize)]
pub struct JsonMetadata {
    pub immut_version: &'static str,
    pub analyzed_path: String,
}

#[derive(Serialize)]
pub struct JsonSummary {
    pub total_files: usize,
    pub files_with_issues: usize,
    pub total_diagnostics: usize,
    pub fixable: usize,
    pub by_severity: SeverityCounts,
}

#[derive(Serialize)]
pub struct SeverityCounts {
    pub error: usize,
    pub warning: usize,
    pub info: usize,
    pub hint: usize,
}

#[derive(Serialize)]
pub struct JsonDiagnostic {
    pub rule_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_name: Option<String>,
    pub severity: String,
    pub message: String,
    pub location: JsonLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fixes: Vec<JsonFix>,
}

#[derive(Serialize)]
pub struct JsonLocation {
    pub file: String,
    pub start: JsonPosition,
    pub end: JsonPosition,
}

#[derive(Serialize)]
pub struct JsonPosition {
    pub line: usize,
    pub column: usize,
}

#[derive(Serialize)]
pub struct JsonFix {
    pub title: String,
    pub range: [u32; 2],
    pub replacement: String,
}

impl From<&Fix> for JsonFix {
    fn from(fix: &Fix) -> Self {
        Self {
            title: fix.title.clone(),
            range: [fix.range.start, fix.range.end],
            replacement: fix.replacement.clone(),
        }
    }
}

pub struct JsonFormatter<'a> {
    engine: &'a AnalysisEngine,
}

impl<'a> JsonFormatter<'a> {
    pub fn new(engine: &'a AnalysisEngine) -> Self {
        Self { engine }
    }

    pub fn format(
        &self,
        diagnostics: &[Diagnostic],
        total_files: usize,
        analyzed_path: &str,
    ) -> String {
        let output = self.build_output(diagnostics, total_files, analyzed_path);
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }

    fn build_output(
        &self,
        diagnostics: &[Diagnostic],
        total_files: usize,
        analyzed_path: &str,
    ) -> JsonOutput {
        let files_with_issues: HashSet<&str> =
            diagnostics.iter().map(|d| d.file.as_str()).collect();

        JsonOutput {
            version: "1",
            metadata: JsonMetadata {
                immut_version: env!("CARGO_PKG_VERSION"),
                analyzed_path: analyzed_path.to_string(),
            },
            summary: JsonSummary {
                total_files,
                files_with_issues: files_with_issues.len(),
                total_diagnostics: diagnostics.len(),
                fixable: diagnostics.iter().filter(|d| d.has_fix()).count(),
                by_severity: SeverityCounts {
                    error: count_severity(diagnostics, Severity::Error),
                    warning: count_severity(diagnostics, Severity::Warning),
                    info: count_severity(diagnostics, Severity::Info),
                    hint: count_severity(diagnostics, Severity::Hint),
                },
            },
            diagnostics: diagnostics
                .iter()
                .map(|d| self.to_json_diagnostic(d))
                .collect(),
        }
    }

    fn to_json_diagnostic(&self, diag: &Diagnostic) -> JsonDiagnostic {
        let rule_name = self
            .engine
            .registry()
            .get_rule(&diag.rule_id)
            .map(|rule| rule.metadata().name.to_string());

        JsonDiagnostic {
            rule_id: diag.rule_id.clone(),
            rule_name,
            severity: severity_name(&diag.severity).to_string(),
            message: diag.message.clone(),
            location: JsonLocation {
                file: diag.file.clone(),
                start: JsonPosition {
                    line: diag.line,
                    column: diag.column,
                },
                end: JsonPosition {
                    line: diag.end_line,
                    column: diag.end_column,
                },
            },
            suggestion: diag.suggestion.clone(),
            fixes: diag.fixes.iter().map(JsonFix::from).collect(),
        }
    }
}

fn count_severity(diagnostics: &[Diagnostic], severity: Severity) -> usize {
    diagnostics.iter().filter(|d| d.severity == severity).count()
}

fn severity_name(severity: &Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
        Severity::Hint => "hint",
    }
}
