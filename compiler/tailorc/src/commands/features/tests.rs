#![allow(clippy::unwrap_used)]

use std::fs;

use pretty_assertions::assert_eq;
use tailor_fmt::FormatError;
use tempfile::TempDir;

use super::*;

fn options(dir: &TempDir) -> FeaturesOptions {
    FeaturesOptions {
        corpus_dir: dir.path().join("corpus"),
        out: dir.path().join("features.csv"),
        ext: "java".to_string(),
        tab_width: 4,
        parallel: false,
    }
}

#[test]
fn csv_header_names_every_column() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("corpus")).unwrap();
    fs::write(dir.path().join("corpus/x.java"), "x = a;\n").unwrap();

    let summary = write_features(&options(&dir)).unwrap();
    // x = a ; EOF
    assert_eq!(
        summary,
        FeaturesSummary {
            documents: 1,
            exemplars: 5,
        }
    );
    let csv = fs::read_to_string(dir.path().join("features.csv")).unwrap();
    let header = csv.lines().next().unwrap();
    assert!(header.starts_with("prev2_token, prev_token, token, next_token"));
    assert!(header.ends_with("child_index, depth"));
}

#[test]
fn empty_corpus_writes_nothing() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("corpus")).unwrap();
    let err = write_features(&options(&dir)).unwrap_err();
    assert!(matches!(err, CliError::Format(FormatError::EmptyCorpus)), "{err:?}");
    assert!(!dir.path().join("features.csv").exists());
}
