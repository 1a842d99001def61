//! Inline disable comment directives for suppressing diagnostics
//!
//! Supports ESLint-style disable comments:
//! - `// immut-disable-next-line M001` - disable M001 for the next line
//! - `// immut-disable-line M001` - disable M001 for the current line
//! - `// immut-disable-next-line` - disable all rules for the next line
//! - `// immut-disable-line` - disable all rules for the current line
//! - `// immut-disable-next-line M001, M002` - disable multiple rules

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisableDirective {
    pub line: usize,
    pub rule_ids: Vec<String>,
}

impl DisableDirective {
    pub fn new(line: usize, rule_ids: Vec<String>) -> Self {
        Self { line, rule_ids }
    }

    pub fn for_all_rules(line: usize) -> Self {
        Self {
            line,
            rule_ids: Vec::new(),
        }
    }

    pub fn disables_all(&self) -> bool {
        self.rule_ids.is_empty()
    }

    pub fn disables_rule(&self, rule_id: &str) -> bool {
        self.rule_ids.is_empty() || self.rule_ids.iter().any(|id| id == rule_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DisableDirectives {
    by_line: HashMap<usize, DisableDirective>,
}

impl DisableDirectives {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_source(source: &str) -> Self {
        let mut directives = Self::new();

        for (line_idx, line) in source.lines().enumerate() {
            let line_num = line_idx + 1;

            if let Some(comment_start) = line.find("//") {
                let comment = line[comment_start + 2..].trim();

                if let Some(rest) = comment.strip_prefix("immut-disable-next-line") {
                    directives.insert(DisableDirective::new(line_num + 1, parse_rule_ids(rest)));
                } else if let Some(rest) = comment.strip_prefix("immut-disable-line") {
                    directives.insert(DisableDirective::new(line_num, parse_rule_ids(rest)));
                }
            }
        }

        directives
    }

    fn insert(&mut self, directive: DisableDirective) {
        self.by_line.insert(directive.line, directive);
    }

    pub fn is_disabled(&self, line: usize, rule_id: &str) -> bool {
        self.by_line
            .get(&line)
            .is_some_and(|directive| directive.disables_rule(rule_id))
    }

    pub fn is_empty(&self) -> bool {
        self.by_line.is_empty()
    }
}

fn parse_rule_ids(rest: &str) -> Vec<String> {
    rest.split(',')
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect()
}
