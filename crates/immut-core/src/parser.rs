//! Parser module for JavaScript/TypeScript source code
//!
//! Integrates with SWC for parsing source files into an AST. Spans coming
//! out of swc are offset by the source file's position inside its source
//! map; `ParsedFile::range_of` normalizes them back to byte offsets into the
//! original string so downstream fix ranges are byte-exact.

use std::ops::Range;
use std::sync::OnceLock;

use swc_common::sync::Lrc;
use swc_common::{FileName, SourceMap, Span, Spanned};
use swc_ecma_parser::{EsSyntax, StringInput, Syntax, TsSyntax, lexer::Lexer, parse_file_as_module};

use crate::syntax::TextRange;

pub use swc_ecma_ast::{EsVersion, Module};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    JavaScript,
    TypeScript,
    Jsx,
    Tsx,
}

pub fn detect_language(filename: &str) -> Language {
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();

    match ext.as_str() {
        "ts" | "mts" | "cts" => Language::TypeScript,
        "tsx" => Language::Tsx,
        "jsx" => Language::Jsx,
        _ => Language::JavaScript,
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{message} at {line}:{column}")]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub range: TextRange,
    pub message: String,
}

#[derive(Debug)]
pub struct ParseResult {
    pub module: Option<Module>,
    pub errors: Vec<ParseError>,
    /// Byte position of the file start inside the source map; subtract this
    /// from span offsets to index into the source string.
    pub span_base: u32,
}

impl ParseResult {
    pub fn is_ok(&self) -> bool {
        self.module.is_some()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub filename: String,
    pub language: Language,
    pub line_count: usize,
    pub has_errors: bool,
}

pub struct ParsedFile {
    source: String,
    metadata: FileMetadata,
    ast_module: Option<Module>,
    errors: Vec<ParseError>,
    span_base: u32,
    line_ranges: OnceLock<Vec<Range<usize>>>,
}

impl std::fmt::Debug for ParsedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedFile")
            .field("metadata", &self.metadata)
            .field("has_module", &self.ast_module.is_some())
            .field("error_count", &self.errors.len())
            .finish()
    }
}

impl ParsedFile {
    pub fn from_source(filename: &str, source: &str) -> Self {
        let language = detect_language(filename);
        let parser = Parser::for_file(filename);
        let parse_result = parser.parse_module_recovering(source);

        let line_count = if source.is_empty() {
            0
        } else {
            source.lines().count()
        };

        let metadata = FileMetadata {
            filename: filename.to_string(),
            language,
            line_count,
            has_errors: parse_result.has_errors(),
        };

        Self {
            source: source.to_string(),
            metadata,
            ast_module: parse_result.module,
            errors: parse_result.errors,
            span_base: parse_result.span_base,
            line_ranges: OnceLock::new(),
        }
    }

    pub fn metadata(&self) -> &FileMetadata {
        &self.metadata
    }

    pub fn module(&self) -> Option<&Module> {
        self.ast_module.as_ref()
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Normalize a swc span to a byte range into `source()`.
    pub fn range_of(&self, span: Span) -> TextRange {
        TextRange::new(
            span.lo.0.saturating_sub(self.span_base),
            span.hi.0.saturating_sub(self.span_base),
        )
    }

    pub fn text_of(&self, range: TextRange) -> Option<&str> {
        range.slice(&self.source)
    }

    pub fn get_line(&self, line_number: usize) -> Option<&str> {
        if line_number == 0 {
            return None;
        }

        let ranges = self.line_ranges.get_or_init(|| self.build_line_ranges());
        let index = line_number - 1;

        ranges.get(index).map(|range| &self.source[range.clone()])
    }

    fn build_line_ranges(&self) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut start = 0;

        for (i, c) in self.source.char_indices() {
            if c == '\n' {
                ranges.push(start..i);
                start = i + 1;
            }
        }

        if start < self.source.len() || (start == 0 && !self.source.is_empty()) {
            ranges.push(start..self.source.len());
        }

        ranges
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParserBuilder {
    jsx: bool,
    typescript: bool,
    decorators: bool,
}

impl ParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jsx(mut self, enabled: bool) -> Self {
        self.jsx = enabled;
        self
    }

    pub fn typescript(mut self, enabled: bool) -> Self {
        self.typescript = enabled;
        self
    }

    pub fn decorators(mut self, enabled: bool) -> Self {
        self.decorators = enabled;
        self
    }

    pub fn build(self) -> Parser {
        let syntax = if self.typescript {
            Syntax::Typescript(TsSyntax {
                tsx: self.jsx,
                decorators: self.decorators,
                ..Default::default()
            })
        } else {
            Syntax::Es(EsSyntax {
                jsx: self.jsx,
                decorators: self.decorators,
                ..Default::default()
            })
        };

        Parser { syntax }
    }
}

#[derive(Debug, Clone)]
pub struct Parser {
    syntax: Syntax,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            syntax: Syntax::Es(Default::default()),
        }
    }

    pub fn for_file(filename: &str) -> Self {
        match detect_language(filename) {
            Language::JavaScript => Self::new(),
            Language::TypeScript => Self::builder().typescript(true).build(),
            Language::Jsx => Self::builder().jsx(true).build(),
            Language::Tsx => Self::builder().typescript(true).jsx(true).build(),
        }
    }

    pub fn builder() -> ParserBuilder {
        ParserBuilder::new()
    }

    pub fn parse_module(&self, code: &str) -> Result<Module, ParseError> {
        let source_map: Lrc<SourceMap> = Default::default();
        let fm = source_map
            .new_source_file(FileName::Custom("input.js".into()).into(), code.to_string());
        let base = fm.start_pos.0;

        let lexer = Lexer::new(
            self.syntax,
            Default::default(),
            StringInput::from(&*fm),
            None,
        );

        let mut parser = swc_ecma_parser::Parser::new_from(lexer);

        parser.parse_module().map_err(|e| {
            let span = e.span();
            let loc = source_map.lookup_char_pos(span.lo);
            ParseError {
                line: loc.line,
                column: loc.col_display,
                range: TextRange::new(
                    span.lo.0.saturating_sub(base),
                    span.hi.0.saturating_sub(base),
                ),
                message: e.kind().msg().to_string(),
            }
        })
    }

    pub fn parse_module_recovering(&self, code: &str) -> ParseResult {
        let source_map: Lrc<SourceMap> = Default::default();
        let fm = source_map
            .new_source_file(FileName::Custom("input.js".into()).into(), code.to_string());
        let base = fm.start_pos.0;

        let mut recovered_errors = Vec::new();

        let result = parse_file_as_module(
            &fm,
            self.syntax,
            EsVersion::latest(),
            None,
            &mut recovered_errors,
        );

        let to_parse_error = |e: &swc_ecma_parser::error::Error| {
            let span = e.span();
            let loc = source_map.lookup_char_pos(span.lo);
            ParseError {
                line: loc.line,
                column: loc.col_display,
                range: TextRange::new(
                    span.lo.0.saturating_sub(base),
                    span.hi.0.saturating_sub(base),
                ),
                message: e.kind().msg().to_string(),
            }
        };

        let mut errors: Vec<ParseError> = recovered_errors.iter().map(to_parse_error).collect();

        match result {
            Ok(module) => ParseResult {
                module: Some(module),
                errors,
                span_base: base,
            },
            Err(e) => {
                errors.push(to_parse_error(&e));
                ParseResult {
                    module: None,
                    errors,
                    span_base: base,
                }
            }
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
