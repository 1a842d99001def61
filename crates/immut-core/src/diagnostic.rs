//! Diagnostic reporting for analysis results
//!
//! Diagnostics carry a location for display plus optional byte-exact fixes.
//! A fix replaces one range of the original source; the analysis only ever
//! proposes fixes, applying them is the caller's decision.

use crate::rules::Severity;
use crate::syntax::TextRange;

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub rule_id: String,
    pub severity: Severity,
    pub message: String,
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub end_line: usize,
    pub end_column: usize,
    pub suggestion: Option<String>,
    pub fixes: Vec<Fix>,
}

impl Diagnostic {
    pub fn new(
        rule_id: &str,
        severity: Severity,
        message: impl Into<String>,
        file: &str,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            severity,
            message: message.into(),
            file: file.to_string(),
            line,
            column,
            end_line: line,
            end_column: column,
            suggestion: None,
            fixes: Vec::new(),
        }
    }

    pub fn with_end(mut self, line: usize, column: usize) -> Self {
        self.end_line = line;
        self.end_column = column;
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fixes.push(fix);
        self
    }

    pub fn has_fix(&self) -> bool {
        !self.fixes.is_empty()
    }
}

/// A proposed text replacement: one byte range, one replacement string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub title: String,
    pub range: TextRange,
    pub replacement: String,
}

impl Fix {
    pub fn replace(
        title: impl Into<String>,
        range: TextRange,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            range,
            replacement: replacement.into(),
        }
    }

    pub fn apply(&self, source: &str) -> String {
        let start = (self.range.start as usize).min(source.len());
        let end = (self.range.end as usize).min(source.len()).max(start);

        let mut out = String::with_capacity(source.len() + self.replacement.len());
        out.push_str(&source[..start]);
        out.push_str(&self.replacement);
        out.push_str(&source[end..]);
        out
    }
}

/// Apply several fixes to one source text. Fixes are selected front to back,
/// dropping any that overlap an already-selected range, then applied back to
/// front so earlier ranges stay valid.
pub fn apply_fixes(source: &str, fixes: &[Fix]) -> String {
    let mut ordered: Vec<&Fix> = fixes.iter().collect();
    ordered.sort_by_key(|f| (f.range.start, f.range.end));

    let mut selected: Vec<&Fix> = Vec::new();
    let mut last_end = 0u32;
    for fix in ordered {
        if selected.is_empty() || fix.range.start >= last_end {
            last_end = fix.range.end.max(last_end);
            selected.push(fix);
        }
    }

    let mut result = source.to_string();
    for fix in selected.iter().rev() {
        result = fix.apply(&result);
    }
    result
}
