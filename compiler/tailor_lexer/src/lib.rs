//! Reference frontend for brace-structured languages.
//!
//! Tailor's engine only needs a token stream and a parse tree. This crate
//! supplies both for Java-like sources so the formatter can be trained and
//! run without an external grammar:
//!
//! - [`lexer`]: logos-generated tokenizer; whitespace on the hidden channel,
//!   comments skipped
//! - [`parser`]: delimiter-driven structural parser (statements, blocks,
//!   parenthesized lists)
//! - [`cleanup`]: raw-text normalization run before features are extracted
//!
//! [`BraceFrontend`] bundles lexer and parser behind the
//! [`tailor_ir::Frontend`] contract.

pub mod cleanup;
pub mod lexer;
pub mod parser;
mod raw_token;
mod stack;

pub use cleanup::{expand_tabs, merge_split_whitespace, normalize_newlines};
pub use lexer::lex;
pub use parser::{parse, Rule};
pub use raw_token::RawToken;

use tailor_ir::{Frontend, FrontendError, Parsed, RuleType, TokenStream, TokenType};

/// [`Frontend`] for Java-like brace-structured sources.
#[derive(Clone, Copy, Debug, Default)]
pub struct BraceFrontend;

impl BraceFrontend {
    pub fn new() -> Self {
        BraceFrontend
    }
}

impl Frontend for BraceFrontend {
    fn tokenize(&self, source: &str) -> Result<TokenStream, FrontendError> {
        lex(source)
    }

    fn parse(&self, source: &str) -> Result<Parsed, FrontendError> {
        let tokens = lex(source)?;
        let tree = parse(&tokens)?;
        Ok(Parsed { tokens, tree })
    }

    fn token_name(&self, ty: TokenType) -> String {
        if ty.is_eof() {
            return "EOF".to_string();
        }
        RawToken::from_token_type(ty).map_or_else(|| format!("<{}>", ty.raw()), |k| format!("{k:?}"))
    }

    fn rule_name(&self, rule: RuleType) -> String {
        Rule::from_rule_type(rule).map_or_else(|| format!("<{}>", rule.raw()), |r| format!("{r:?}"))
    }
}
