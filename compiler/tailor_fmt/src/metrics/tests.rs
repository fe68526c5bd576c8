#![allow(clippy::unwrap_used)]

use tailor_ir::Frontend;
use tailor_lexer::BraceFrontend;

use super::*;

fn tokens(source: &str) -> TokenStream {
    BraceFrontend::new().tokenize(source).unwrap()
}

fn diff(a: &str, b: &str) -> f64 {
    doc_diff(&tokens(a), &tokens(b)).unwrap()
}

#[test]
fn whitespace_runs() {
    assert_eq!(whitespace_edit_distance("\n  ", "\n   "), 1);
    assert_eq!(whitespace_edit_distance("\n\n ", " "), 2);
    assert_eq!(whitespace_edit_distance("", ""), 0);
    assert_eq!(whitespace_edit_distance(" \n", "\n "), 0);
}

#[test]
fn identical_documents_score_zero() {
    let source = "class A {\n    int x;\n}\n";
    assert!(diff(source, source).abs() < f64::EPSILON);
}

#[test]
fn documents_without_whitespace_score_zero() {
    assert!(diff("a;b;", "a;b;").abs() < f64::EPSILON);
}

#[test]
fn score_is_normalized_by_larger_whitespace_total() {
    // `b` gets " " vs "  ": one space apart; totals 1 and 2.
    let score = diff("a; b;", "a;  b;");
    assert!((score - 0.5).abs() < 1e-9, "{score}");

    // `x` gets "\n    " vs "\n  ": two spaces apart; totals 6 and 4.
    let score = diff("{\n    x;\n}", "{\n  x;\n}");
    assert!((score - 2.0 / 6.0).abs() < 1e-9, "{score}");
}

#[test]
fn trailing_whitespace_is_ignored() {
    assert!(diff("a;\n", "a;\n\n\n").abs() < f64::EPSILON);
}

#[test]
fn score_is_clamped_to_one() {
    // `b` gets " " vs "\n": one space and one newline apart, but the
    // larger total is 1.
    let score = diff("a; b;", "a;\nb;");
    assert!((score - 1.0).abs() < f64::EPSILON, "{score}");
}

#[test]
fn token_count_mismatch() {
    let err = doc_diff(&tokens("a;"), &tokens("a; b;")).unwrap_err();
    assert_eq!(err, FormatError::TokenCountMismatch { left: 2, right: 4 });
}

#[test]
fn token_misalignment() {
    let err = doc_diff(&tokens("a = b;"), &tokens("a = c;")).unwrap_err();
    assert_eq!(
        err,
        FormatError::TokenMisalignment {
            position: 2,
            left: "b".to_string(),
            right: "c".to_string()
        }
    );
}
