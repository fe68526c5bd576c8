//! Token types shared by every frontend.
//!
//! Tokens carry an opaque [`TokenType`] tag assigned by the frontend, a byte
//! span into the owning [`TokenStream`]'s source, and a channel. Whitespace
//! lives on the hidden channel; everything the parser sees is on the default
//! channel ("real" tokens).

mod stream;

pub use stream::TokenStream;

use std::fmt;

use super::Span;

/// Opaque token type tag.
///
/// `0` is reserved for "no token" (used by feature columns that look past
/// the ends of the stream) and `u16::MAX` marks end of file.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TokenType(u16);

impl TokenType {
    /// Absent token.
    pub const NONE: TokenType = TokenType(0);

    /// End-of-file marker.
    pub const EOF: TokenType = TokenType(u16::MAX);

    #[inline]
    pub const fn new(raw: u16) -> Self {
        TokenType(raw)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn is_eof(self) -> bool {
        self.0 == u16::MAX
    }
}

impl fmt::Debug for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TokenType::NONE => write!(f, "TokenType::NONE"),
            TokenType::EOF => write!(f, "TokenType::EOF"),
            TokenType(raw) => write!(f, "TokenType({raw})"),
        }
    }
}

/// Which consumer a token is meant for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Channel {
    /// Real tokens, the ones the parser structures.
    Default,
    /// Whitespace and other trivia kept only for layout.
    Hidden,
}

/// A token with its position in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub ty: TokenType,
    pub span: Span,
    pub channel: Channel,
    /// 1-based line of the first byte.
    pub line: u32,
    /// 0-based column (in chars) of the first byte.
    pub column: u32,
}

impl Token {
    #[inline]
    pub fn new(ty: TokenType, span: Span, channel: Channel, line: u32, column: u32) -> Self {
        Token {
            ty,
            span,
            channel,
            line,
            column,
        }
    }

    /// Whether the token is on the default channel.
    #[inline]
    pub fn is_real(&self) -> bool {
        self.channel == Channel::Default
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} @ {} ({}:{}{})",
            self.ty,
            self.span,
            self.line,
            self.column,
            if self.is_real() { "" } else { ", hidden" }
        )
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenType};
    crate::static_assert_size!(TokenType, 2);
    // TokenType (2) + Span (8) + Channel (1) + line (4) + column (4), padded
    crate::static_assert_size!(Token, 20);
}

#[cfg(test)]
mod tests;
