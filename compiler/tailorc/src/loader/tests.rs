#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tailor_lexer::BraceFrontend;
use tempfile::TempDir;

use super::*;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn relative_names(root: &Path, files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn collects_matching_files_sorted() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "b.java", "b;");
    write(root, "a.java", "a;");
    write(root, "nested/c.java", "c;");
    write(root, "notes.txt", "ignored");

    let files = collect_files(root, "java").unwrap();
    assert_eq!(
        relative_names(root, &files),
        vec!["a.java", "b.java", "nested/c.java"]
    );
}

#[test]
fn skips_hidden_and_target() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "keep.java", "k;");
    write(root, ".hidden/x.java", "x;");
    write(root, ".y.java", "y;");
    write(root, "target/z.java", "z;");

    let files = collect_files(root, "java").unwrap();
    assert_eq!(relative_names(root, &files), vec!["keep.java"]);
}

#[test]
fn honors_ignore_file() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(
        root,
        IGNORE_FILE,
        "# generated sources\ngenerated/**\nskip.java\n*.tmp.java\n",
    );
    write(root, "keep.java", "k;");
    write(root, "skip.java", "s;");
    write(root, "scratch.tmp.java", "t;");
    write(root, "generated/deep/g.java", "g;");
    write(root, "sub/skip.java", "s;");

    let files = collect_files(root, "java").unwrap();
    assert_eq!(relative_names(root, &files), vec!["keep.java"]);
}

#[test]
fn ignore_patterns_parse_lines() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), IGNORE_FILE, "  a.java \n\n# note\nb/**\n");
    assert_eq!(load_ignore_patterns(dir.path()), vec!["a.java", "b/**"]);
}

#[test]
fn pattern_matching() {
    let root = Path::new("/corpus");
    let patterns = |p: &str| vec![p.to_string()];
    assert!(is_ignored(&root.join("gen/a/b.java"), root, &patterns("gen/**")));
    assert!(is_ignored(&root.join("x.tmp.java"), root, &patterns("*.tmp.java")));
    assert!(!is_ignored(&root.join("d/x.tmp.java"), root, &patterns("*.tmp.java")));
    assert!(is_ignored(&root.join("d/old"), root, &patterns("d")));
    assert!(is_ignored(&root.join("d/old/f.java"), root, &patterns("d/old")));
    assert!(!is_ignored(&root.join("dd/f.java"), root, &patterns("d")));
    assert!(!is_ignored(Path::new("/elsewhere/f.java"), root, &patterns("f.java")));
}

#[test]
fn missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = collect_files(&dir.path().join("nope"), "java").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn normalization_expands_tabs_and_drops_comment_lines() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.java", "class A {\n\t// field\n\tint x;\n}\n");
    let text = read_normalized(&dir.path().join("a.java"), &BraceFrontend::new(), 4).unwrap();
    assert_eq!(text, "class A {\n    int x;\n}\n");
}

#[test]
fn normalization_rewrites_crlf() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.java", "class A {\r\n\tint x;\r\n}\r\n");
    let text = read_normalized(&dir.path().join("a.java"), &BraceFrontend::new(), 4).unwrap();
    assert_eq!(text, "class A {\n    int x;\n}\n");
}

#[test]
fn training_documents_carry_labels() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.java", "x = a;\n");
    let path = dir.path().join("a.java");
    let frontend = BraceFrontend::new();
    let training = load_document(&path, &frontend, 4, true).unwrap();
    let query = load_document(&path, &frontend, 4, false).unwrap();
    assert!(training.is_training());
    assert!(!query.is_training());
    assert_eq!(training.file_name, path.display().to_string());
}

#[test]
fn corpus_skips_unparseable_files() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "a.java", "x = a;\n");
    write(root, "b.java", "class B {\n");
    write(root, "c.java", "y = b;\n");

    let mut seen = Vec::new();
    let docs = load_corpus(root, "java", &BraceFrontend::new(), 4, true, |p| {
        seen.push(p.to_path_buf());
    })
    .unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(relative_names(root, &seen), vec!["a.java", "c.java"]);
    assert!(docs[0].file_name.ends_with("a.java"));
    assert!(docs[1].file_name.ends_with("c.java"));
}

#[test]
fn parse_errors_name_the_file() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "bad.java", "f(;\n");
    let err = load_document(&dir.path().join("bad.java"), &BraceFrontend::new(), 4, false)
        .unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(err.to_string().contains("bad.java"));
}
