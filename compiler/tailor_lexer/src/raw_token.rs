//! Token kinds recognized by the logos lexer.

use logos::Logos;
use tailor_ir::TokenType;

/// Raw token kind produced by logos.
///
/// `>>` and `>>>` are deliberately not tokens: generic closers such as
/// `List<List<T>>` lex as separate `>` tokens, and shifts are two of them.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"//[^\n]*|/\*([^*]|\*+[^*/])*\*+/")]
pub enum RawToken {
    // === Trivia ===
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    // === Literals and names ===
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,
    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][+-]?[0-9]+)?[lLfFdD]?")]
    #[regex(r"0[xX][0-9a-fA-F_]+[lL]?")]
    Number,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r#""""([^"]|"[^"]|""[^"])*""""#)]
    StringLit,
    #[regex(r"'([^'\\\n]|\\.)*'")]
    CharLit,

    // === Keywords ===
    #[token("abstract")]
    Abstract,
    #[token("assert")]
    Assert,
    #[token("boolean")]
    Boolean,
    #[token("break")]
    Break,
    #[token("byte")]
    Byte,
    #[token("case")]
    Case,
    #[token("catch")]
    Catch,
    #[token("char")]
    Char,
    #[token("class")]
    Class,
    #[token("continue")]
    Continue,
    #[token("default")]
    DefaultKw,
    #[token("do")]
    Do,
    #[token("double")]
    Double,
    #[token("else")]
    Else,
    #[token("enum")]
    Enum,
    #[token("extends")]
    Extends,
    #[token("false")]
    False,
    #[token("final")]
    Final,
    #[token("finally")]
    Finally,
    #[token("float")]
    Float,
    #[token("for")]
    For,
    #[token("if")]
    If,
    #[token("implements")]
    Implements,
    #[token("import")]
    Import,
    #[token("instanceof")]
    Instanceof,
    #[token("int")]
    Int,
    #[token("interface")]
    Interface,
    #[token("long")]
    Long,
    #[token("new")]
    New,
    #[token("null")]
    Null,
    #[token("package")]
    Package,
    #[token("private")]
    Private,
    #[token("protected")]
    Protected,
    #[token("public")]
    Public,
    #[token("return")]
    Return,
    #[token("short")]
    Short,
    #[token("static")]
    Static,
    #[token("super")]
    Super,
    #[token("switch")]
    Switch,
    #[token("synchronized")]
    Synchronized,
    #[token("this")]
    This,
    #[token("throw")]
    Throw,
    #[token("throws")]
    Throws,
    #[token("true")]
    True,
    #[token("try")]
    Try,
    #[token("void")]
    Void,
    #[token("while")]
    While,

    // === Delimiters ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,
    #[token("@")]
    At,
    #[token("::")]
    ColonColon,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,
    #[token("->")]
    Arrow,

    // === Operators ===
    #[token("=")]
    Assign,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("<<")]
    Shl,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("&=")]
    AmpEq,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,
    #[token("<<=")]
    ShlEq,
    #[token(">>=")]
    ShrEq,
    #[token(">>>=")]
    UshrEq,
}

impl RawToken {
    /// Every kind, in declaration order: `ALL[k as usize] == k`.
    pub const ALL: [RawToken; 100] = [
        RawToken::Whitespace,
        RawToken::Ident,
        RawToken::Number,
        RawToken::StringLit,
        RawToken::CharLit,
        RawToken::Abstract,
        RawToken::Assert,
        RawToken::Boolean,
        RawToken::Break,
        RawToken::Byte,
        RawToken::Case,
        RawToken::Catch,
        RawToken::Char,
        RawToken::Class,
        RawToken::Continue,
        RawToken::DefaultKw,
        RawToken::Do,
        RawToken::Double,
        RawToken::Else,
        RawToken::Enum,
        RawToken::Extends,
        RawToken::False,
        RawToken::Final,
        RawToken::Finally,
        RawToken::Float,
        RawToken::For,
        RawToken::If,
        RawToken::Implements,
        RawToken::Import,
        RawToken::Instanceof,
        RawToken::Int,
        RawToken::Interface,
        RawToken::Long,
        RawToken::New,
        RawToken::Null,
        RawToken::Package,
        RawToken::Private,
        RawToken::Protected,
        RawToken::Public,
        RawToken::Return,
        RawToken::Short,
        RawToken::Static,
        RawToken::Super,
        RawToken::Switch,
        RawToken::Synchronized,
        RawToken::This,
        RawToken::Throw,
        RawToken::Throws,
        RawToken::True,
        RawToken::Try,
        RawToken::Void,
        RawToken::While,
        RawToken::LParen,
        RawToken::RParen,
        RawToken::LBrace,
        RawToken::RBrace,
        RawToken::LBracket,
        RawToken::RBracket,
        RawToken::Semi,
        RawToken::Comma,
        RawToken::Dot,
        RawToken::Ellipsis,
        RawToken::At,
        RawToken::ColonColon,
        RawToken::Colon,
        RawToken::Question,
        RawToken::Arrow,
        RawToken::Assign,
        RawToken::EqEq,
        RawToken::NotEq,
        RawToken::Lt,
        RawToken::Gt,
        RawToken::LtEq,
        RawToken::GtEq,
        RawToken::AndAnd,
        RawToken::OrOr,
        RawToken::Bang,
        RawToken::Tilde,
        RawToken::Plus,
        RawToken::Minus,
        RawToken::Star,
        RawToken::Slash,
        RawToken::Percent,
        RawToken::Caret,
        RawToken::Amp,
        RawToken::Pipe,
        RawToken::PlusPlus,
        RawToken::MinusMinus,
        RawToken::Shl,
        RawToken::PlusEq,
        RawToken::MinusEq,
        RawToken::StarEq,
        RawToken::SlashEq,
        RawToken::PercentEq,
        RawToken::AmpEq,
        RawToken::PipeEq,
        RawToken::CaretEq,
        RawToken::ShlEq,
        RawToken::ShrEq,
        RawToken::UshrEq,
    ];

    /// Opaque tag handed to the engine. Offset by one so `0` stays
    /// [`TokenType::NONE`].
    #[inline]
    pub fn token_type(self) -> TokenType {
        TokenType::new(self as u16 + 1)
    }

    /// Inverse of [`token_type`](Self::token_type).
    pub fn from_token_type(ty: TokenType) -> Option<RawToken> {
        let raw = ty.raw().checked_sub(1)?;
        RawToken::ALL.get(usize::from(raw)).copied()
    }

    /// Whether the token closes a delimited group.
    pub fn is_closer(self) -> bool {
        matches!(self, RawToken::RParen | RawToken::RBracket | RawToken::RBrace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_declaration_order() {
        for (i, kind) in RawToken::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i, "{kind:?} out of place in RawToken::ALL");
        }
    }

    #[test]
    fn token_type_roundtrips() {
        for kind in RawToken::ALL {
            assert_eq!(RawToken::from_token_type(kind.token_type()), Some(kind));
        }
        assert_eq!(RawToken::from_token_type(TokenType::NONE), None);
        assert_eq!(RawToken::from_token_type(TokenType::EOF), None);
    }
}
