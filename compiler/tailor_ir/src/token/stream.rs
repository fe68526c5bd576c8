//! Token stream owning its source text.

use super::{Token, TokenType};

/// All tokens of a document, hidden ones included, plus the text they index.
///
/// Tokens are stored in source order and tile the source except for input
/// the lexer skipped (comments). The last token is always `EOF` once the
/// frontend finishes the stream.
#[derive(Clone, Default)]
pub struct TokenStream {
    source: String,
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Create an empty stream over `source`.
    pub fn new(source: String) -> Self {
        TokenStream {
            source,
            tokens: Vec::new(),
        }
    }

    /// Create with pre-allocated token capacity.
    pub fn with_capacity(source: String, capacity: usize) -> Self {
        TokenStream {
            source,
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// The text the token spans index into.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Text of a token.
    #[inline]
    pub fn token_text(&self, token: &Token) -> &str {
        self.source.get(token.span.to_range()).unwrap_or("")
    }

    /// Text of the token at `index`, or `""` when out of range.
    pub fn text(&self, index: usize) -> &str {
        self.tokens.get(index).map_or("", |t| self.token_text(t))
    }

    /// Indices of tokens on the default channel, in order.
    pub fn real_indices(&self) -> Vec<usize> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_real())
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether the token at `index` is the end-of-file marker.
    pub fn is_eof(&self, index: usize) -> bool {
        self.tokens.get(index).is_some_and(|t| t.ty == TokenType::EOF)
    }

    /// The run of hidden tokens immediately preceding `index`.
    ///
    /// Empty when the previous token is real or `index` is the first token.
    pub fn hidden_before(&self, index: usize) -> &[Token] {
        let end = index.min(self.tokens.len());
        let start = self.tokens[..end]
            .iter()
            .rposition(Token::is_real)
            .map_or(0, |p| p + 1);
        &self.tokens[start..end]
    }

    /// Concatenated text of [`hidden_before`](Self::hidden_before).
    pub fn hidden_text_before(&self, index: usize) -> String {
        self.hidden_before(index)
            .iter()
            .map(|t| self.token_text(t))
            .collect()
    }

    /// Source text from the start of the document through the end of the
    /// token at `index`, byte for byte.
    pub fn text_through(&self, index: usize) -> &str {
        match self.tokens.get(index) {
            Some(t) => self.source.get(..t.span.end as usize).unwrap_or(&self.source),
            None => &self.source,
        }
    }
}

impl std::fmt::Debug for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStream")
            .field("tokens", &self.tokens.len())
            .field("bytes", &self.source.len())
            .finish()
    }
}
