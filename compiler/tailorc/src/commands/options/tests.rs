#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tailor_fmt::{FormatConfig, Mode};

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn format_defaults() {
    let options = FormatOptions::parse(&args(&["corpus", "A.java"])).unwrap();
    assert_eq!(
        options,
        FormatOptions {
            corpus_dir: PathBuf::from("corpus"),
            file: PathBuf::from("A.java"),
            ext: "java".to_string(),
            tab_width: 4,
            vote: None,
            parallel: true,
            show_tokens: false,
            show_files: false,
            compare: false,
            output: None,
        }
    );
    assert_eq!(options.config(), FormatConfig::default());
}

#[test]
fn format_flags_anywhere() {
    let options = FormatOptions::parse(&args(&[
        "--show-files",
        "corpus",
        "-o",
        "out.java",
        "--ext=.cs",
        "A.cs",
        "--tab-width=2",
        "--vote=3",
        "--no-parallel",
        "--show-tokens",
        "--compare",
    ]))
    .unwrap();
    assert_eq!(options.corpus_dir, PathBuf::from("corpus"));
    assert_eq!(options.file, PathBuf::from("A.cs"));
    assert_eq!(options.ext, "cs");
    assert_eq!(options.output, Some(PathBuf::from("out.java")));
    assert!(options.show_files && options.show_tokens && options.compare);

    let config = options.config();
    assert_eq!(config.tab_width, 2);
    assert_eq!(config.mode, Mode::Vote { k: 3 });
    assert!(!config.parallel);
}

#[test]
fn format_usage_errors() {
    for bad in [
        &["corpus"][..],
        &["corpus", "a", "b"],
        &["corpus", "a", "--vote=0"],
        &["corpus", "a", "--vote=many"],
        &["corpus", "a", "--tab-width=0"],
        &["corpus", "a", "--ext="],
        &["corpus", "a", "--bogus"],
        &["corpus", "a", "-o"],
    ] {
        let err = FormatOptions::parse(&args(bad)).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)), "{bad:?} gave {err:?}");
    }
}

#[test]
fn usage_messages_name_the_problem() {
    let err = FormatOptions::parse(&args(&["c", "a", "--tab-width=x"])).unwrap_err();
    assert_eq!(err.to_string(), "invalid value 'x' for --tab-width");
    let err = DiffOptions::parse(&args(&["a"])).unwrap_err();
    assert_eq!(err.to_string(), "tailor diff expects <a> <b>, got 1 path(s)");
}

#[test]
fn diff_options() {
    let options = DiffOptions::parse(&args(&["a.java", "--tab-width=8", "b.java"])).unwrap();
    assert_eq!(
        options,
        DiffOptions {
            a: PathBuf::from("a.java"),
            b: PathBuf::from("b.java"),
            tab_width: 8,
        }
    );
    assert!(DiffOptions::parse(&args(&["a", "b", "--compare"])).is_err());
}

#[test]
fn features_options() {
    let options =
        FeaturesOptions::parse(&args(&["corpus", "out.csv", "--ext=cs", "--no-parallel"])).unwrap();
    assert_eq!(
        options,
        FeaturesOptions {
            corpus_dir: PathBuf::from("corpus"),
            out: PathBuf::from("out.csv"),
            ext: "cs".to_string(),
            tab_width: 4,
            parallel: false,
        }
    );
    assert!(FeaturesOptions::parse(&args(&["corpus"])).is_err());
}
