//! Feature extraction.
//!
//! Every real token of a document gets one [`FeatureVector`] describing its
//! neighborhood (surrounding token types, enclosing rules, position among
//! siblings). Training documents additionally get one [`Labels`] bundle per
//! real token, read off the whitespace that precedes it.
//!
//! Vectors and label bundles are indexed by real-token position, not by
//! token-stream index: entry `k` describes the `k`-th real token.

mod extract;
mod schema;

pub use extract::{extract_features, extract_labels};
pub use schema::{Feature, FeatureKind, FeatureMetaData, FeatureSchema, FEATURE_COUNT};

use smallvec::SmallVec;

/// One value per schema column. Absent context encodes as `0`.
pub type FeatureVector = SmallVec<[i32; FEATURE_COUNT]>;

/// Formatting decisions observed in front of one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Labels {
    /// Newlines before the token.
    pub inject_newlines: u32,
    /// Any space or tab before the token.
    pub inject_whitespace: bool,
    /// Column of the token when it starts a line, else `0`.
    pub indent: u32,
    /// Steps from the token's parent up to the node it shares with the
    /// previous real token's parent.
    pub levels_to_common_ancestor: u32,
}
