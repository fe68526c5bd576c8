//! Property-based tests for formatting and the document-diff metric.
//!
//! Inputs are a fixed token sequence with random whitespace between tokens,
//! so every generated document parses and is token-aligned with the corpus
//! member it was derived from.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use tailor_fmt::{doc_diff, Corpus, FeatureSchema, FormatConfig, Formatter, InputDocument};
use tailor_ir::{Frontend, TokenStream};
use tailor_lexer::BraceFrontend;

const CORPUS: &str = "\
class Shape {
    int sides;

    int area(int w, int h) {
        if (w > h) {
            return w * h;
        }
        return sides;
    }
}
";

/// Token texts of `CORPUS` shuffled into a different class body.
const WORDS: &[&str] = &[
    "class", "Box", "{", "int", "area", "(", "int", "w", ")", "{", "if", "(", "w", ">", "1", ")",
    "{", "return", "w", ";", "}", "return", "w", "*", "w", ";", "}", "int", "sides", ";", "}",
];

fn separator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![" ", "  ", "\n", "\n    ", "\n\n  ", " \n\t"])
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(separator(), WORDS.len()).prop_map(|seps| {
        let mut out = String::new();
        for (word, sep) in WORDS.iter().zip(seps) {
            out.push_str(word);
            out.push_str(sep);
        }
        out
    })
}

fn corpus() -> Corpus {
    let doc = InputDocument::parse_training("shape.java", CORPUS, &BraceFrontend::new())
        .expect("corpus parses");
    Corpus::build(FeatureSchema::standard(), &[doc], false).expect("corpus builds")
}

fn format(corpus: &Corpus, source: &str) -> String {
    let doc = InputDocument::parse_query("q.java", source, &BraceFrontend::new())
        .expect("query parses");
    Formatter::new(corpus, FormatConfig::default().sequential())
        .format(&doc)
        .expect("formats")
        .text
}

fn tokens(source: &str) -> TokenStream {
    BraceFrontend::new().tokenize(source).expect("tokenizes")
}

fn real_texts(source: &str) -> Vec<String> {
    let stream = tokens(source);
    stream
        .real_indices()
        .into_iter()
        .map(|i| stream.text(i).to_string())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn formatting_preserves_tokens(source in document()) {
        let corpus = corpus();
        let formatted = format(&corpus, &source);
        prop_assert_eq!(real_texts(&formatted), real_texts(&source));
    }

    #[test]
    fn formatting_is_idempotent(source in document()) {
        let corpus = corpus();
        let once = format(&corpus, &source);
        let twice = format(&corpus, &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn doc_diff_is_zero_on_self(source in document()) {
        let stream = tokens(&source);
        let score = doc_diff(&stream, &stream).unwrap();
        prop_assert!(score.abs() < f64::EPSILON);
    }

    #[test]
    fn doc_diff_is_bounded(a in document(), b in document()) {
        let score = doc_diff(&tokens(&a), &tokens(&b)).unwrap();
        prop_assert!((0.0..=1.0).contains(&score), "score {}", score);
    }

    #[test]
    fn formatted_output_stays_aligned(source in document()) {
        let corpus = corpus();
        let formatted = format(&corpus, &source);
        let score = doc_diff(&tokens(&source), &tokens(&formatted)).unwrap();
        prop_assert!((0.0..=1.0).contains(&score), "score {}", score);
    }
}
