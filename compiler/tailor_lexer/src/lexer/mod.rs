//! Logos-driven tokenizer.
//!
//! Whitespace runs become single hidden tokens. Comments are skipped by the
//! logos definition, so the whitespace on either side of a comment shows up
//! as two adjacent hidden tokens (see [`crate::cleanup::merge_split_whitespace`]).
//! Every stream ends with a real, zero-width `EOF` token.

use logos::Logos;
use tailor_ir::{Channel, FrontendError, Span, Token, TokenStream, TokenType};

use crate::RawToken;

/// Tracks line and column while walking forward through the source.
///
/// Columns count chars, not bytes, so multi-byte identifiers and string
/// contents do not skew indentation.
struct Position<'a> {
    source: &'a str,
    offset: usize,
    line: u32,
    column: u32,
}

impl<'a> Position<'a> {
    fn new(source: &'a str) -> Self {
        Position {
            source,
            offset: 0,
            line: 1,
            column: 0,
        }
    }

    /// Advance to byte `target`, which must not be behind the current offset.
    fn advance_to(&mut self, target: usize) {
        let Some(skipped) = self.source.get(self.offset..target) else {
            return;
        };
        for c in skipped.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
        self.offset = target;
    }
}

/// Tokenize `source`.
///
/// Fails on the first byte sequence no token rule accepts.
pub fn lex(source: &str) -> Result<TokenStream, FrontendError> {
    let mut stream = TokenStream::with_capacity(source.to_string(), source.len() / 3);
    let mut position = Position::new(source);
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        position.advance_to(range.start);
        let Ok(kind) = result else {
            return Err(FrontendError::Lex {
                line: position.line,
                column: position.column,
                text: lexer.slice().to_string(),
            });
        };
        let channel = if kind == RawToken::Whitespace {
            Channel::Hidden
        } else {
            Channel::Default
        };
        stream.push(Token::new(
            kind.token_type(),
            Span::from_range(range.clone()),
            channel,
            position.line,
            position.column,
        ));
        position.advance_to(range.end);
    }

    position.advance_to(source.len());
    stream.push(Token::new(
        TokenType::EOF,
        Span::from_range(source.len()..source.len()),
        Channel::Default,
        position.line,
        position.column,
    ));
    Ok(stream)
}
