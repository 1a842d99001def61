//! Fix planner
//!
//! Plans the textual rewrite for an eligible declaration: find the
//! declaration's own introducing keyword token (scanning only its range,
//! skipping comments) and replace exactly that token with `const`. If the
//! token cannot be located, the caller reports without a fix rather than
//! guessing an edit.

use crate::diagnostic::Fix;
use crate::syntax::{NodeId, NodeKind, SyntaxIndex, TextRange};

/// Converting a declaration is only safe when every binding receives a value
/// at declaration time: either the declaration is a for-in/for-of head (the
/// loop assigns on entry), or every declarator carries an initializer.
pub(crate) fn initializer_timing_ok(syntax: &SyntaxIndex, declaration: NodeId) -> bool {
    if let Some(parent) = syntax.parent(declaration) {
        if matches!(
            syntax.kind(parent),
            NodeKind::ForInStatement | NodeKind::ForOfStatement
        ) {
            return true;
        }
    }

    syntax
        .children(declaration)
        .iter()
        .all(|&declarator| matches!(syntax.kind(declarator), NodeKind::VariableDeclarator { has_init: true }))
}

/// Locate the declaration's own introducing keyword token.
pub(crate) fn keyword_anchor(
    source: &str,
    syntax: &SyntaxIndex,
    declaration: NodeId,
) -> Option<TextRange> {
    let NodeKind::VariableDeclaration { keyword } = syntax.kind(declaration) else {
        return None;
    };
    find_keyword_token(source, syntax.range(declaration), keyword.as_str())
}

/// Plan the keyword replacement for a declaration, or `None` when the anchor
/// token cannot be found.
pub(crate) fn keyword_fix(source: &str, syntax: &SyntaxIndex, declaration: NodeId) -> Option<Fix> {
    let NodeKind::VariableDeclaration { keyword } = syntax.kind(declaration) else {
        return None;
    };

    let anchor = keyword_anchor(source, syntax, declaration)?;
    Some(Fix::replace(
        format!("Replace '{}' with 'const'", keyword.as_str()),
        anchor,
        "const",
    ))
}

/// Scan the given range token-wise for the first word equal to `keyword`,
/// skipping whitespace and line/block comments. Returns the token's range in
/// whole-source coordinates.
fn find_keyword_token(source: &str, range: TextRange, keyword: &str) -> Option<TextRange> {
    let text = range.slice(source)?;
    let bytes = text.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        let c = bytes[i];

        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        if c == b'/' && i + 1 < bytes.len() {
            match bytes[i + 1] {
                b'/' => {
                    while i < bytes.len() && bytes[i] != b'\n' {
                        i += 1;
                    }
                    continue;
                }
                b'*' => {
                    i += 2;
                    while i + 1 < bytes.len() && !(bytes[i] == b'*' && bytes[i + 1] == b'/') {
                        i += 1;
                    }
                    i = (i + 2).min(bytes.len());
                    continue;
                }
                _ => {}
            }
        }

        if c == b'_' || c == b'$' || c.is_ascii_alphabetic() {
            let start = i;
            while i < bytes.len()
                && (bytes[i] == b'_' || bytes[i] == b'$' || bytes[i].is_ascii_alphanumeric())
            {
                i += 1;
            }
            if &text[start..i] == keyword {
                return Some(TextRange::new(
                    range.start + start as u32,
                    range.start + i as u32,
                ));
            }
        } else {
            i += 1;
        }
    }

    None
}
