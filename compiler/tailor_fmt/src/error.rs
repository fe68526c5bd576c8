//! Errors reported by the formatting engine.

use tailor_ir::FrontendError;
use thiserror::Error;

/// Failure to build a corpus, format a document, or diff two documents.
///
/// Approximate nearest-neighbor matches are not errors; they are counted in
/// [`Formatted::misclassified`](crate::Formatted::misclassified).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No exemplars to match against.
    #[error("corpus has no exemplars")]
    EmptyCorpus,

    /// A feature vector does not have one value per schema column.
    #[error("feature vector has {found} columns, schema has {expected}")]
    SchemaMismatch { expected: usize, found: usize },

    /// Documents handed to the diff metric have different real-token counts.
    #[error("documents have {left} and {right} real tokens")]
    TokenCountMismatch { left: usize, right: usize },

    /// Documents handed to the diff metric disagree on a real token.
    #[error("real token {position} differs: `{left}` vs `{right}`")]
    TokenMisalignment {
        position: usize,
        left: String,
        right: String,
    },

    /// The frontend rejected a document.
    #[error(transparent)]
    Frontend(#[from] FrontendError),
}
