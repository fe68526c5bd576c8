//! The grammar frontend contract.
//!
//! The formatting engine never tokenizes or parses by itself. A frontend
//! turns text into a [`TokenStream`] and a [`ParseTree`] and can name the
//! opaque tags it hands out so diagnostics stay readable.

use crate::{FrontendError, ParseTree, RuleType, TokenStream, TokenType};

/// Output of [`Frontend::parse`].
#[derive(Clone, Debug)]
pub struct Parsed {
    pub tokens: TokenStream,
    pub tree: ParseTree,
}

/// A tokenizer + parser pair for one language.
///
/// Requirements on implementations:
/// - whitespace tokens go on the hidden channel, comments are skipped or
///   hidden, everything else is real;
/// - the stream ends with a real `TokenType::EOF` token;
/// - every real token of the stream appears exactly once as a tree leaf.
pub trait Frontend: Send + Sync {
    /// Tokenize without building a tree.
    fn tokenize(&self, source: &str) -> Result<TokenStream, FrontendError>;

    /// Tokenize and parse.
    fn parse(&self, source: &str) -> Result<Parsed, FrontendError>;

    /// Human-readable name of a token type.
    fn token_name(&self, ty: TokenType) -> String;

    /// Human-readable name of a rule type.
    fn rule_name(&self, rule: RuleType) -> String;
}
