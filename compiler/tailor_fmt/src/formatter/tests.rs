#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use tailor_lexer::BraceFrontend;

use super::*;
use crate::config::Mode;
use crate::features::FeatureSchema;

fn training(source: &str) -> InputDocument {
    InputDocument::parse_training("corpus", source, &BraceFrontend::new()).unwrap()
}

fn query(source: &str) -> InputDocument {
    InputDocument::parse_query("query", source, &BraceFrontend::new()).unwrap()
}

fn corpus(sources: &[&str]) -> Corpus {
    let docs: Vec<_> = sources.iter().map(|s| training(s)).collect();
    Corpus::build(FeatureSchema::standard(), &docs, false).unwrap()
}

#[test]
fn extra_space_before_semicolon_is_removed() {
    let corpus = corpus(&["x = a;\n"]);
    let formatter = Formatter::new(&corpus, FormatConfig::default());
    let out = formatter.format(&query("x = a ;\n")).unwrap();
    assert_eq!(out.text, "x = a;\n");
    assert_eq!(out.misclassified, 0);
    // a ; EOF
    assert_eq!(out.classified, 3);
}

#[test]
fn head_is_preserved_verbatim() {
    let corpus = corpus(&["x = a;\n"]);
    let formatter = Formatter::new(&corpus, FormatConfig::default());
    let out = formatter.format(&query("x   =a;")).unwrap();
    assert_eq!(out.text, "x   = a;\n");
}

#[test]
fn short_documents_are_returned_unchanged() {
    let corpus = corpus(&["x = a;\n"]);
    let formatter = Formatter::new(&corpus, FormatConfig::default());
    for source in ["", "x  ", "\n\nx\n"] {
        let out = formatter.format(&query(source)).unwrap();
        assert_eq!(out.text, source);
        assert_eq!(out.classified, 0);
    }
}

#[test]
fn approximate_matches_are_counted_not_fatal() {
    let corpus = corpus(&["x = a;\n"]);
    let formatter = Formatter::new(&corpus, FormatConfig::default());
    let out = formatter.format(&query("x = b + c;\n")).unwrap();
    assert_eq!(out.classified, 5);
    assert!(out.misclassified > 0);
    assert!(out.misclassified <= out.classified);
    let words: Vec<&str> = out.text.split_whitespace().collect();
    assert_eq!(words.concat(), "x=b+c;");
}

#[test]
fn decisions_follow_token_order() {
    let corpus = corpus(&["class A {\n    int x;\n}\n"]);
    let formatter = Formatter::new(&corpus, FormatConfig::default());
    let doc = query("class B { int y; }");
    let out = formatter.format(&doc).unwrap();
    assert_eq!(out.decisions.len(), out.classified);
    assert!(out
        .decisions
        .windows(2)
        .all(|w| w[0].token_index < w[1].token_index));
    let real = doc.tokens.real_indices();
    assert_eq!(out.decisions[0].token_index, real[2]);
}

#[test]
fn parallel_and_sequential_agree() {
    let corpus = corpus(&[
        "class A {\n    int x;\n\n    void f() {\n        g(x, 1);\n    }\n}\n",
        "if (a) {\n    b();\n} else {\n    c();\n}\n",
    ]);
    let doc = query("class C{int z;void h(){k(z,2);}}\nif(a){b();}\n");
    let parallel = Formatter::new(&corpus, FormatConfig::default())
        .format(&doc)
        .unwrap();
    let sequential = Formatter::new(&corpus, FormatConfig::default().sequential())
        .format(&doc)
        .unwrap();
    assert_eq!(parallel, sequential);
}

#[test]
fn vote_mode_formats_too() {
    let corpus = corpus(&["x = a;\n", "y = b;\n", "z = c;\n"]);
    let config = FormatConfig::default().mode(Mode::Vote { k: 3 });
    let out = Formatter::new(&corpus, config)
        .format(&query("x=a ;"))
        .unwrap();
    assert_eq!(out.text, "x= a;\n");
}

#[test]
fn schema_mismatch_aborts_before_classification() {
    let corpus = corpus(&["x = a;\n"]);
    let mut doc = query("x = a;\n");
    doc.features[4].push(7);
    let err = Formatter::new(&corpus, FormatConfig::default())
        .format(&doc)
        .unwrap_err();
    assert_eq!(
        err,
        FormatError::SchemaMismatch {
            expected: 12,
            found: 13
        }
    );
}

#[test]
fn deeply_nested_query_keeps_its_tokens() {
    let depth = 3_000;
    let source = format!("x = {}a{};\n", "(".repeat(depth), ")".repeat(depth));
    let corpus = corpus(&["x = f((a));\n"]);
    let out = Formatter::new(&corpus, FormatConfig::default())
        .format(&query(&source))
        .unwrap();
    let words: String = out.text.split_whitespace().collect();
    assert_eq!(words, source.split_whitespace().collect::<String>());
    assert_eq!(out.classified, 2 * depth + 3);
}
