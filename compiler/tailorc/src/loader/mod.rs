//! Reading source files into documents.
//!
//! Every file goes through the same pipeline before the engine sees it:
//! read, normalize line endings, expand tabs, tokenize, rebuild the text
//! without comments (merging the whitespace a comment line leaves behind),
//! then parse the rebuilt text. Corpus directories are walked recursively and loaded in parallel;
//! files are sorted by path so the exemplar order does not depend on the
//! file system.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tailor_fmt::InputDocument;
use tailor_ir::{Frontend, FrontendError};
use tailor_lexer::{expand_tabs, merge_split_whitespace, normalize_newlines};
use thiserror::Error;
use tracing::{debug, warn};

/// Per-directory ignore file for corpus traversal.
pub const IGNORE_FILE: &str = ".tailorignore";

/// Failure to load one file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: FrontendError,
    },
}

/// Read `path` and normalize it: `\n` line endings, tabs expanded,
/// comments removed.
pub fn read_normalized(
    path: &Path,
    frontend: &dyn Frontend,
    tab_width: usize,
) -> Result<String, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let expanded = expand_tabs(&normalize_newlines(&raw), tab_width);
    let tokens = frontend
        .tokenize(&expanded)
        .map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(merge_split_whitespace(&tokens))
}

/// Load `path` as a document; training documents get label bundles.
pub fn load_document(
    path: &Path,
    frontend: &dyn Frontend,
    tab_width: usize,
    training: bool,
) -> Result<InputDocument, LoadError> {
    let source = read_normalized(path, frontend, tab_width)?;
    let parsed = frontend.parse(&source).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path.display().to_string();
    Ok(if training {
        InputDocument::training(name, parsed)
    } else {
        InputDocument::query(name, parsed)
    })
}

/// Load every corpus file under `root` with extension `ext`.
///
/// Files that fail to load are skipped with a warning. `on_file` is called
/// with each path that loaded, in corpus order.
pub fn load_corpus(
    root: &Path,
    ext: &str,
    frontend: &dyn Frontend,
    tab_width: usize,
    parallel: bool,
    mut on_file: impl FnMut(&Path),
) -> Result<Vec<InputDocument>, LoadError> {
    let files = collect_files(root, ext)?;
    let load = |path: &PathBuf| load_document(path, frontend, tab_width, true);
    let results: Vec<Result<InputDocument, LoadError>> = if parallel && files.len() > 1 {
        files.par_iter().map(load).collect()
    } else {
        files.iter().map(load).collect()
    };

    let mut documents = Vec::with_capacity(results.len());
    for (path, result) in files.iter().zip(results) {
        match result {
            Ok(doc) => {
                on_file(path);
                documents.push(doc);
            }
            Err(e) => warn!("skipping corpus file: {e}"),
        }
    }
    debug!(
        root = %root.display(),
        files = files.len(),
        loaded = documents.len(),
        "loaded corpus"
    );
    Ok(documents)
}

/// All files under `root` with extension `ext`, sorted by path.
///
/// Hidden entries, `target` directories and paths matched by the root's
/// ignore file are skipped. Unreadable subdirectories are skipped with a
/// warning; an unreadable root is an error.
pub fn collect_files(root: &Path, ext: &str) -> Result<Vec<PathBuf>, LoadError> {
    fs::read_dir(root).map_err(|source| LoadError::Io {
        path: root.to_path_buf(),
        source,
    })?;
    let patterns = load_ignore_patterns(root);
    let mut files = Vec::new();
    visit_files(root, root, ext, &patterns, &mut files);
    files.sort();
    Ok(files)
}

fn visit_files(dir: &Path, root: &Path, ext: &str, patterns: &[String], files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("cannot read directory '{}': {e}", dir.display());
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') || name == "target" {
                continue;
            }
        }
        if is_ignored(&path, root, patterns) {
            continue;
        }

        if path.is_dir() {
            visit_files(&path, root, ext, patterns, files);
        } else if path.extension().is_some_and(|e| e == ext) {
            files.push(path);
        }
    }
}

/// Patterns from the ignore file in `root`: one per line, `#` comments.
pub fn load_ignore_patterns(root: &Path) -> Vec<String> {
    let Ok(content) = fs::read_to_string(root.join(IGNORE_FILE)) else {
        return Vec::new();
    };
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Whether `path` (under `root`) matches any ignore pattern.
///
/// `**` matches across directories, `*` within one path segment, and a
/// plain pattern matches a relative path, a directory prefix or a file name.
pub fn is_ignored(path: &Path, root: &Path, patterns: &[String]) -> bool {
    let Ok(relative) = path.strip_prefix(root) else {
        return false;
    };
    let relative = relative.to_string_lossy().replace('\\', "/");
    patterns.iter().any(|pattern| matches_pattern(&relative, path, pattern))
}

fn matches_pattern(relative: &str, path: &Path, pattern: &str) -> bool {
    if let Some((prefix, suffix)) = pattern.split_once("**") {
        let prefix = prefix.trim_end_matches('/');
        let suffix = suffix.trim_start_matches('/');
        let matches_prefix = prefix.is_empty() || relative.starts_with(prefix);
        let matches_suffix = suffix.is_empty() || relative.ends_with(suffix);
        return matches_prefix && matches_suffix;
    }

    if let Some((prefix, suffix)) = pattern.split_once('*') {
        return relative.len() >= prefix.len() + suffix.len()
            && relative.starts_with(prefix)
            && relative.ends_with(suffix)
            && !relative[prefix.len()..relative.len() - suffix.len()].contains('/');
    }

    relative == pattern
        || relative
            .strip_prefix(pattern)
            .is_some_and(|rest| rest.starts_with('/'))
        || path.file_name().and_then(|n| n.to_str()) == Some(pattern)
}

#[cfg(test)]
mod tests;
