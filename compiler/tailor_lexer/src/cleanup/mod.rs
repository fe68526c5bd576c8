//! Raw-text normalization applied before a document is parsed for real.
//!
//! Loading a document is two passes: normalize line endings and expand tabs,
//! tokenize, then rebuild the text with [`merge_split_whitespace`] and
//! tokenize again. The second pass sees text without comments and without
//! the stray indentation a skipped comment leaves behind.

use tailor_ir::TokenStream;

/// Rewrite `\r\n` line endings as `\n`.
///
/// Emitted whitespace only ever uses `\n`, so the preserved head of a
/// document must not keep `\r\n` either.
pub fn normalize_newlines(source: &str) -> String {
    if !source.contains('\r') {
        return source.to_string();
    }
    source.replace("\r\n", "\n")
}

/// Expand every tab to spaces up to the next multiple of `tab_width`.
///
/// Columns count chars and reset after `\n`. A `tab_width` of zero is
/// treated as one.
pub fn expand_tabs(source: &str, tab_width: usize) -> String {
    if !source.contains('\t') {
        return source.to_string();
    }
    let tab_width = tab_width.max(1);
    let mut result = String::with_capacity(source.len() + source.len() / 8);
    let mut column = 0;

    for c in source.chars() {
        match c {
            '\t' => {
                let spaces = tab_width - (column % tab_width);
                result.push_str(&" ".repeat(spaces));
                column += spaces;
            }
            '\n' => {
                result.push('\n');
                column = 0;
            }
            _ => {
                result.push(c);
                column += 1;
            }
        }
    }

    result
}

/// `\n+ +`: one or more newlines, then one or more spaces.
fn is_indented_break(text: &str) -> bool {
    let rest = text.trim_start_matches('\n');
    rest.len() < text.len() && !rest.is_empty() && rest.bytes().all(|b| b == b' ')
}

/// `\n +`: exactly one newline, then one or more spaces.
fn is_single_indented_break(text: &str) -> bool {
    text.strip_prefix('\n')
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b == b' '))
}

/// Rebuild the source from its tokens, dropping everything the lexer
/// skipped.
///
/// When a comment sat on its own line, the lexer emits the whitespace before
/// and after it as two adjacent hidden tokens. If the first looks like an
/// indented line break and the second like a single indented line break,
/// the second is dropped so the comment's line disappears cleanly:
/// `"\n    "` followed by `"\n    "` becomes `"\n    "`.
pub fn merge_split_whitespace(stream: &TokenStream) -> String {
    let mut result = String::with_capacity(stream.source().len());
    let mut i = 0;
    while i < stream.len() {
        let text = stream.text(i);
        result.push_str(text);
        if is_indented_break(text) {
            let next = stream.get(i + 1);
            if next.is_some_and(|t| !t.is_real()) && is_single_indented_break(stream.text(i + 1)) {
                i += 1;
            }
        }
        i += 1;
    }
    result
}
