//! Parsed documents with their extracted features.

use tailor_ir::{Frontend, FrontendError, ParseTree, Parsed, TokenStream};

use crate::features::{extract_features, extract_labels, FeatureVector, Labels};

/// A parsed document ready for training or formatting.
///
/// Feature vectors are always present. Label bundles are derived only for
/// training documents; a query document's labels are what the formatter
/// produces, never an input.
#[derive(Clone, Debug)]
pub struct InputDocument {
    pub file_name: String,
    pub tokens: TokenStream,
    pub tree: ParseTree,
    /// One vector per real token.
    pub features: Vec<FeatureVector>,
    /// One bundle per real token, training documents only.
    pub labels: Option<Vec<Labels>>,
}

impl InputDocument {
    /// Wrap frontend output as a query document.
    pub fn query(file_name: impl Into<String>, parsed: Parsed) -> Self {
        let features = extract_features(&parsed.tokens, &parsed.tree);
        InputDocument {
            file_name: file_name.into(),
            tokens: parsed.tokens,
            tree: parsed.tree,
            features,
            labels: None,
        }
    }

    /// Wrap frontend output as a training document, deriving labels from
    /// its whitespace.
    pub fn training(file_name: impl Into<String>, parsed: Parsed) -> Self {
        let mut doc = Self::query(file_name, parsed);
        let labels = extract_labels(&doc.tokens, &doc.tree);
        assert_eq!(
            labels.len(),
            doc.features.len(),
            "feature vectors and labels out of step in {}",
            doc.file_name
        );
        doc.labels = Some(labels);
        doc
    }

    /// Parse `source` with `frontend` as a query document.
    pub fn parse_query(
        file_name: impl Into<String>,
        source: &str,
        frontend: &dyn Frontend,
    ) -> Result<Self, FrontendError> {
        Ok(Self::query(file_name, frontend.parse(source)?))
    }

    /// Parse `source` with `frontend` as a training document.
    pub fn parse_training(
        file_name: impl Into<String>,
        source: &str,
        frontend: &dyn Frontend,
    ) -> Result<Self, FrontendError> {
        Ok(Self::training(file_name, frontend.parse(source)?))
    }

    /// The document text.
    #[inline]
    pub fn source(&self) -> &str {
        self.tokens.source()
    }

    #[inline]
    pub fn is_training(&self) -> bool {
        self.labels.is_some()
    }
}
