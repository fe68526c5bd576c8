use pretty_assertions::assert_eq;

use super::*;
use crate::Channel::{Default as Real, Hidden};

const IDENT: TokenType = TokenType::new(1);
const SEMI: TokenType = TokenType::new(2);
const WS: TokenType = TokenType::new(3);

/// "a \n  ;" tokenized by hand: `a`, ` \n  `, `;`, EOF.
fn sample() -> TokenStream {
    let mut stream = TokenStream::new("a \n  ;".to_string());
    stream.push(Token::new(IDENT, Span::new(0, 1), Real, 1, 0));
    stream.push(Token::new(WS, Span::new(1, 5), Hidden, 1, 1));
    stream.push(Token::new(SEMI, Span::new(5, 6), Real, 2, 2));
    stream.push(Token::new(TokenType::EOF, Span::new(6, 6), Real, 2, 3));
    stream
}

#[test]
fn token_type_reserved_values() {
    assert!(TokenType::EOF.is_eof());
    assert!(!TokenType::NONE.is_eof());
    assert_eq!(TokenType::new(7).raw(), 7);
}

#[test]
fn text_of_each_token() {
    let stream = sample();
    assert_eq!(stream.text(0), "a");
    assert_eq!(stream.text(1), " \n  ");
    assert_eq!(stream.text(2), ";");
    assert_eq!(stream.text(3), "");
    assert_eq!(stream.text(99), "");
}

#[test]
fn real_indices_skip_hidden() {
    assert_eq!(sample().real_indices(), vec![0, 2, 3]);
}

#[test]
fn hidden_text_before_real_token() {
    let stream = sample();
    assert_eq!(stream.hidden_text_before(2), " \n  ");
    assert_eq!(stream.hidden_text_before(0), "");
    assert_eq!(stream.hidden_text_before(3), "");
}

#[test]
fn hidden_before_collects_consecutive_runs() {
    let mut stream = TokenStream::new("a\n  \n b".to_string());
    stream.push(Token::new(IDENT, Span::new(0, 1), Real, 1, 0));
    stream.push(Token::new(WS, Span::new(1, 4), Hidden, 1, 1));
    stream.push(Token::new(WS, Span::new(4, 6), Hidden, 2, 2));
    stream.push(Token::new(IDENT, Span::new(6, 7), Real, 3, 1));
    assert_eq!(stream.hidden_before(3).len(), 2);
    assert_eq!(stream.hidden_text_before(3), "\n  \n ");
}

#[test]
fn text_through_is_byte_prefix() {
    let stream = sample();
    assert_eq!(stream.text_through(0), "a");
    assert_eq!(stream.text_through(2), "a \n  ;");
    assert_eq!(stream.text_through(42), "a \n  ;");
}

#[test]
fn eof_detection() {
    let stream = sample();
    assert!(stream.is_eof(3));
    assert!(!stream.is_eof(2));
    assert!(!stream.is_eof(10));
}
