//! Visitor context providing file information during analysis.

use swc_common::Span;

use crate::parser::ParsedFile;
use crate::syntax::TextRange;

pub struct VisitorContext<'a> {
    file: &'a ParsedFile,
}

impl<'a> VisitorContext<'a> {
    pub fn new(file: &'a ParsedFile) -> Self {
        Self { file }
    }

    pub fn file(&self) -> &ParsedFile {
        self.file
    }

    pub fn span_to_location(&self, span: Span) -> (usize, usize) {
        self.range_to_location(self.file.range_of(span))
    }

    /// 1-based line and column of a byte offset range's start.
    pub fn range_to_location(&self, range: TextRange) -> (usize, usize) {
        let source = self.file.source();
        let start = (range.start as usize).min(source.len());

        if source.is_empty() || start == 0 {
            return (1, 1);
        }

        let prefix = &source[..start];
        let line = prefix.matches('\n').count() + 1;
        let last_newline = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = start - last_newline + 1;

        (line, column)
    }

    pub fn get_source_text(&self, range: TextRange) -> Option<&str> {
        self.file.text_of(range)
    }
}
