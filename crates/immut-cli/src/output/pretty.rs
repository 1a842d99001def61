//! Pretty formatter for human-readable terminal output
//!
//! Displays diagnostics with colors, source code context, and summary.

use colored::{ColoredString, Colorize};
use immut_core::diagnostic::Diagnostic;
use immut_core::rules::Severity;
use std::collections::HashMap;
use std::fs;

pub struct PrettyFormatter {
    sources: HashMap<String, String>,
}

impl Default for PrettyFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl PrettyFormatter {
    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
        }
    }

    pub fn with_sources(sources: HashMap<String, String>) -> Self {
        Self { sources }
    }

    pub fn format(&self, diagnostics: &[Diagnostic]) -> String {
        let mut output = String::new();

        for diag in diagnostics {
            output.push_str(&self.format_diagnostic(diag));
            output.push('\n');
        }

        if !diagnostics.is_empty() {
            output.push_str(&self.format_summary(diagnostics));
        }

        output
    }

    fn format_diagnostic(&self, diag: &Diagnostic) -> String {
        let mut lines = Vec::new();

        let severity_str = self.colorize_severity(&diag.severity);
        lines.push(format!(
            "{}[{}]: {}",
            severity_str,
            diag.rule_id.dimmed(),
            diag.message
        ));

        lines.push(format!(
            "  {} {}:{}:{}",
            "-->".blue(),
            diag.file,
            diag.line,
            diag.column
        ));

        if let Some(source_line) = self.get_source_line(&diag.file, diag.line) {
            let line_num_width = diag.line.to_string().len();
            let padding = " ".repeat(line_num_width);

            lines.push(format!("{} {}", padding, "|".blue()));
            lines.push(format!(
                "{} {} {}",
                diag.line.to_string().blue(),
                "|".blue(),
                source_line
            ));

            let caret_padding = " ".repeat(diag.column.saturating_sub(1));
            let caret_len = if diag.end_column > diag.column && diag.end_line == diag.line {
                diag.end_column - diag.column
            } else {
                1
            };
            lines.push(format!(
                "{} {} {}{}",
                padding,
                "|".blue(),
                caret_padding,
                "^".repeat(caret_len).red()
            ));
            lines.push(format!("{} {}", padding, "|".blue()));
        }

        if let Some(suggestion) = &diag.suggestion {
            let padding = " ".repeat(diag.line.to_string().len());
            lines.push(format!(
                "{} {} {} {}",
                padding,
                "=".blue(),
                "suggestion:".green(),
                suggestion
            ));
        }

        lines.join("\n")
    }

    fn colorize_severity(&self, severity: &Severity) -> ColoredString {
        match severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
            Severity::Info => "info".blue().bold(),
            Severity::Hint => "hint".cyan().bold(),
        }
    }

    fn get_source_line(&self, file: &str, line: usize) -> Option<String> {
        if line == 0 {
            return None;
        }

        if let Some(source) = self.sources.get(file) {
            return source.lines().nth(line - 1).map(|s| s.to_string());
        }

        if let Ok(content) = fs::read_to_string(file) {
            return content.lines().nth(line - 1).map(|s| s.to_string());
        }

        None
    }

    fn format_summary(&self, diagnostics: &[Diagnostic]) -> String {
        let error_count = diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
            .count();
        let warning_count = diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
            .count();
        let fixable_count = diagnostics.iter().filter(|d| d.has_fix()).count();

        let mut summary = format!(
            "{} {} problem{} ({} error{}, {} warning{})\n",
            "×".red().bold(),
            diagnostics.len(),
            if diagnostics.len() == 1 { "" } else { "s" },
            error_count,
            if error_count == 1 { "" } else { "s" },
            warning_count,
            if warning_count == 1 { "" } else { "s" },
        );

        if fixable_count > 0 {
            summary.push_str(&format!(
                "  {} {} fixable with `immut check --fix`\n",
                "→".green(),
                fixable_count
            ));
        }

        summary
    }
}
