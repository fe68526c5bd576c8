//! Single-pass reconstruction.
//!
//! Each real token of a query document is classified against the corpus
//! (in parallel when enabled, since tokens are independent), then the
//! output is emitted strictly left to right: the chosen whitespace, then
//! the token's original text. The document head through the second real
//! token is copied verbatim so file-level boilerplate survives.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::FormatConfig;
use crate::corpus::{Classification, Corpus};
use crate::document::InputDocument;
use crate::emitter::{Emitter, StringEmitter};
use crate::error::FormatError;

/// Real tokens copied verbatim before classification starts.
const PRESERVED_HEAD: usize = 2;

/// The decision made for one token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    /// Token-stream index of the token in the query document.
    pub token_index: usize,
    pub classification: Classification,
}

/// Output of [`Formatter::format`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,
    /// Tokens whose nearest exemplar was not an exact match.
    pub misclassified: usize,
    /// Tokens that went through classification.
    pub classified: usize,
    /// Per-token decisions, in token order.
    pub decisions: Vec<Decision>,
}

impl Formatted {
    fn unchanged(source: &str) -> Self {
        Formatted {
            text: source.to_string(),
            misclassified: 0,
            classified: 0,
            decisions: Vec::new(),
        }
    }
}

/// Reformats query documents against a trained corpus.
pub struct Formatter<'c> {
    corpus: &'c Corpus,
    config: FormatConfig,
}

impl<'c> Formatter<'c> {
    pub fn new(corpus: &'c Corpus, config: FormatConfig) -> Self {
        Formatter { corpus, config }
    }

    #[inline]
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Rewrite the whitespace of `doc` in the corpus style.
    ///
    /// Token text and order are never changed. Documents with fewer than
    /// three real tokens are returned unchanged.
    pub fn format(&self, doc: &InputDocument) -> Result<Formatted, FormatError> {
        if self.corpus.is_empty() {
            return Err(FormatError::EmptyCorpus);
        }
        for vector in &doc.features {
            self.corpus.check_schema(vector)?;
        }

        let real = doc.tokens.real_indices();
        if real.len() <= PRESERVED_HEAD {
            debug!(file = %doc.file_name, tokens = real.len(), "too short to format");
            return Ok(Formatted::unchanged(doc.source()));
        }

        let queries = &doc.features[PRESERVED_HEAD..];
        let mode = self.config.mode;
        let classifications: Vec<Classification> = if self.config.parallel && queries.len() > 1 {
            queries
                .par_iter()
                .map(|q| self.corpus.classify(q, mode))
                .collect::<Result<_, _>>()?
        } else {
            queries
                .iter()
                .map(|q| self.corpus.classify(q, mode))
                .collect::<Result<_, _>>()?
        };

        let mut emitter = StringEmitter::with_capacity(doc.source().len() + doc.source().len() / 4);
        emitter.emit(doc.tokens.text_through(real[PRESERVED_HEAD - 1]));

        let mut decisions = Vec::with_capacity(classifications.len());
        let mut misclassified = 0;
        for (&token_index, classification) in real[PRESERVED_HEAD..].iter().zip(classifications) {
            let labels = classification.labels;
            if labels.inject_newlines > 0 {
                emitter.emit_newlines(labels.inject_newlines as usize);
                emitter.emit_indent(labels.indent as usize);
            } else if labels.inject_whitespace {
                emitter.emit_space();
            }
            emitter.emit(doc.tokens.text(token_index));

            if !classification.is_exact() {
                misclassified += 1;
            }
            trace!(
                token = token_index,
                exemplar = classification.exemplar,
                distance = classification.distance,
                newlines = labels.inject_newlines,
                indent = labels.indent,
                space = labels.inject_whitespace,
                "classified"
            );
            decisions.push(Decision {
                token_index,
                classification,
            });
        }

        debug!(
            file = %doc.file_name,
            classified = decisions.len(),
            misclassified,
            "formatted document"
        );
        Ok(Formatted {
            text: emitter.output(),
            misclassified,
            classified: decisions.len(),
            decisions,
        })
    }
}

#[cfg(test)]
mod tests;
