//! Errors reported by frontends.

use thiserror::Error;

/// Failure to tokenize or parse a source text.
///
/// Positions are 1-based lines and 0-based columns, matching how tokens
/// record their own positions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontendError {
    /// Input the lexer has no rule for.
    #[error("{line}:{column}: unrecognized input `{text}`")]
    Lex {
        line: u32,
        column: u32,
        text: String,
    },
    /// Token sequence the parser cannot structure.
    #[error("{line}:{column}: {message}")]
    Syntax {
        line: u32,
        column: u32,
        message: String,
    },
}
