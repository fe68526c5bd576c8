//! Tailor Formatter
//!
//! Learns whitespace conventions from a corpus of files already in the
//! desired style and applies them to new input, changing only the
//! whitespace between tokens.
//!
//! # Architecture
//!
//! 1. **Extract**: every real token gets a feature vector describing its
//!    neighborhood; corpus tokens also get the label bundle observed in
//!    front of them
//! 2. **Classify**: each query token takes the labels of its nearest corpus
//!    exemplar under a cost-weighted categorical distance
//! 3. **Emit**: a single left-to-right pass writes the chosen whitespace and
//!    the original token text
//!
//! The grammar is not part of this crate. Documents come from any
//! [`tailor_ir::Frontend`].
//!
//! # Modules
//!
//! - [`features`]: feature schema, vectors and label extraction
//! - [`distance`]: L0 and weighted L0 distances
//! - [`corpus`]: exemplar pool and nearest-neighbor queries
//! - [`formatter`]: classification and reconstruction
//! - [`emitter`]: output abstraction
//! - [`metrics`]: document-diff quality metric

pub mod config;
pub mod corpus;
pub mod distance;
pub mod document;
pub mod emitter;
mod error;
pub mod features;
pub mod formatter;
pub mod metrics;

pub use config::{FormatConfig, Mode, TAB_WIDTH};
pub use corpus::{Classification, Corpus, Exemplar, Neighbor};
pub use distance::{l0_distance, weighted_l0_distance};
pub use document::InputDocument;
pub use emitter::{Emitter, StringEmitter};
pub use error::FormatError;
pub use features::{
    extract_features, extract_labels, Feature, FeatureKind, FeatureMetaData, FeatureSchema,
    FeatureVector, Labels, FEATURE_COUNT,
};
pub use formatter::{Decision, Formatted, Formatter};
pub use metrics::{doc_diff, whitespace_edit_distance};
