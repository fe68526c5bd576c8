//! `tailor features`: dump the corpus exemplar pool as CSV.

use std::fs::File;
use std::io::BufWriter;

use tailor_fmt::{Corpus, FeatureSchema};
use tailor_lexer::BraceFrontend;

use super::options::FeaturesOptions;
use crate::loader::load_corpus;
use crate::CliError;

/// Sizes of the pool that was written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeaturesSummary {
    pub documents: usize,
    pub exemplars: usize,
}

/// Build the corpus and write its exemplars to `options.out`.
pub fn write_features(options: &FeaturesOptions) -> Result<FeaturesSummary, CliError> {
    let frontend = BraceFrontend::new();
    let documents = load_corpus(
        &options.corpus_dir,
        &options.ext,
        &frontend,
        options.tab_width,
        options.parallel,
        |_| {},
    )?;
    let corpus = Corpus::build(FeatureSchema::global().clone(), &documents, options.parallel)?;

    let write_error = |source: std::io::Error| CliError::Write {
        path: options.out.clone(),
        source,
    };
    let file = File::create(&options.out).map_err(write_error)?;
    corpus.write_csv(BufWriter::new(file)).map_err(write_error)?;

    Ok(FeaturesSummary {
        documents: corpus.documents().len(),
        exemplars: corpus.len(),
    })
}

/// Run `tailor features` and report what was written.
pub fn run_features(options: &FeaturesOptions) -> Result<(), CliError> {
    let summary = write_features(options)?;
    eprintln!(
        "wrote {} exemplars from {} files to {}",
        summary.exemplars,
        summary.documents,
        options.out.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests;
