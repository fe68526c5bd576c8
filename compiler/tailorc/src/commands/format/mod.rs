//! `tailor format`: reformat one file in the style of a corpus.

use std::fs;
use std::path::PathBuf;

use tailor_fmt::{doc_diff, Corpus, Decision, FeatureSchema, FormatError, Formatter, InputDocument};
use tailor_ir::Frontend;
use tailor_lexer::BraceFrontend;

use super::options::FormatOptions;
use crate::loader::{load_corpus, load_document};
use crate::CliError;

/// What a format run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct FormatReport {
    pub text: String,
    pub misclassified: usize,
    pub classified: usize,
    /// Document-diff score of the output against the input, with `--compare`.
    pub score: Option<f64>,
    /// Corpus files that loaded, in corpus order.
    pub corpus_files: Vec<PathBuf>,
    /// One line per classified token, with `--show-tokens`.
    pub token_lines: Vec<String>,
}

/// Train on the corpus directory and format the target file.
///
/// Corpus files that fail to load are skipped; the target failing to load
/// is an error.
pub fn format_file(options: &FormatOptions) -> Result<FormatReport, CliError> {
    let frontend = BraceFrontend::new();
    let config = options.config();

    let mut corpus_files = Vec::new();
    let documents = load_corpus(
        &options.corpus_dir,
        &options.ext,
        &frontend,
        config.tab_width,
        config.parallel,
        |path| corpus_files.push(path.to_path_buf()),
    )?;
    let corpus = Corpus::build(FeatureSchema::global().clone(), &documents, config.parallel)?;

    let target = load_document(&options.file, &frontend, config.tab_width, false)?;
    let formatted = Formatter::new(&corpus, config).format(&target)?;

    let score = if options.compare {
        let output = frontend
            .tokenize(&formatted.text)
            .map_err(FormatError::from)?;
        Some(doc_diff(&output, &target.tokens)?)
    } else {
        None
    };

    let token_lines = if options.show_tokens {
        formatted
            .decisions
            .iter()
            .map(|decision| describe_decision(&frontend, &corpus, &target, decision))
            .collect()
    } else {
        Vec::new()
    };

    Ok(FormatReport {
        text: formatted.text,
        misclassified: formatted.misclassified,
        classified: formatted.classified,
        score,
        corpus_files,
        token_lines,
    })
}

/// `line:column Kind 'text' -> labels (distance d, file#token)`
fn describe_decision(
    frontend: &dyn Frontend,
    corpus: &Corpus,
    doc: &InputDocument,
    decision: &Decision,
) -> String {
    let Some(token) = doc.tokens.get(decision.token_index) else {
        return format!("<token {} out of range>", decision.token_index);
    };
    let labels = decision.classification.labels;
    let source = corpus
        .exemplar(decision.classification.exemplar)
        .map_or_else(
            || "?".to_string(),
            |ex| format!("{}#{}", corpus.document_name(ex), ex.token_index),
        );
    format!(
        "{}:{} {} '{}' -> newlines={} space={} indent={} levels={} (distance {}, {})",
        token.line,
        token.column,
        frontend.token_name(token.ty),
        doc.tokens.token_text(token),
        labels.inject_newlines,
        labels.inject_whitespace,
        labels.indent,
        labels.levels_to_common_ancestor,
        decision.classification.distance,
        source,
    )
}

/// Run `tailor format` and print the results.
pub fn run_format(options: &FormatOptions) -> Result<(), CliError> {
    let report = format_file(options)?;

    if options.show_files {
        for path in &report.corpus_files {
            eprintln!("{}", path.display());
        }
    }
    for line in &report.token_lines {
        eprintln!("{line}");
    }

    match &options.output {
        Some(path) => fs::write(path, &report.text).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?,
        None => print!("{}", report.text),
    }

    eprintln!("misclassified: {}", report.misclassified);
    if let Some(score) = report.score {
        eprintln!("diff score: {score:.4}");
    }
    Ok(())
}
