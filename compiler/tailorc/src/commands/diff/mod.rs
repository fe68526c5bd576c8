//! `tailor diff`: whitespace divergence of two token-aligned files.

use tailor_fmt::{doc_diff, FormatError};
use tailor_ir::Frontend;
use tailor_lexer::BraceFrontend;

use super::options::DiffOptions;
use crate::loader::read_normalized;
use crate::CliError;

/// Document-diff score of `options.a` against `options.b`.
///
/// Both files are normalized the same way corpus files are before their
/// tokens are compared.
pub fn diff_files(options: &DiffOptions) -> Result<f64, CliError> {
    let frontend = BraceFrontend::new();
    let a = read_normalized(&options.a, &frontend, options.tab_width)?;
    let b = read_normalized(&options.b, &frontend, options.tab_width)?;
    let a = frontend.tokenize(&a).map_err(FormatError::from)?;
    let b = frontend.tokenize(&b).map_err(FormatError::from)?;
    Ok(doc_diff(&a, &b)?)
}

/// Run `tailor diff` and print the score.
pub fn run_diff(options: &DiffOptions) -> Result<(), CliError> {
    let score = diff_files(options)?;
    println!("{score:.4}");
    Ok(())
}
