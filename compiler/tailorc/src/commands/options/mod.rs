//! Argument parsing for the commands.
//!
//! Flags take the `--flag=value` form; `-o` reads its value from the next
//! argument. Positional arguments are taken in order.

#![allow(
    clippy::struct_excessive_bools,
    reason = "debug toggles are plain CLI switches"
)]

use std::path::PathBuf;
use std::str::FromStr;

use tailor_fmt::{FormatConfig, Mode, TAB_WIDTH};

use crate::CliError;

/// Corpus file extension used when `--ext` is not given.
pub const DEFAULT_EXTENSION: &str = "java";

/// Options of `tailor format`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    pub corpus_dir: PathBuf,
    pub file: PathBuf,
    /// Extension of corpus files, without the dot.
    pub ext: String,
    pub tab_width: usize,
    /// `Some(k)` selects majority voting among the `k` nearest exemplars.
    pub vote: Option<usize>,
    pub parallel: bool,
    /// Print every classification decision to stderr.
    pub show_tokens: bool,
    /// Print the corpus files that were loaded to stderr.
    pub show_files: bool,
    /// Report the document-diff score of the output against the input.
    pub compare: bool,
    /// Write the output here instead of stdout.
    pub output: Option<PathBuf>,
}

impl FormatOptions {
    /// Parse the arguments following `format`.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut positional = Vec::new();
        let mut ext = DEFAULT_EXTENSION.to_string();
        let mut tab_width = TAB_WIDTH;
        let mut vote = None;
        let mut parallel = true;
        let mut show_tokens = false;
        let mut show_files = false;
        let mut compare = false;
        let mut output = None;

        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            if arg == "-o" {
                let Some(path) = args.get(i + 1) else {
                    return Err(CliError::usage("-o needs a path"));
                };
                output = Some(PathBuf::from(path));
                i += 2;
                continue;
            }
            if let Some(value) = arg.strip_prefix("--ext=") {
                ext = parse_extension(value)?;
            } else if let Some(value) = arg.strip_prefix("--tab-width=") {
                tab_width = parse_tab_width(value)?;
            } else if let Some(value) = arg.strip_prefix("--vote=") {
                let k: usize = parse_value("--vote", value)?;
                if k == 0 {
                    return Err(CliError::usage("--vote needs at least one neighbor"));
                }
                vote = Some(k);
            } else if arg == "--no-parallel" {
                parallel = false;
            } else if arg == "--show-tokens" {
                show_tokens = true;
            } else if arg == "--show-files" {
                show_files = true;
            } else if arg == "--compare" {
                compare = true;
            } else if arg.starts_with('-') {
                return Err(unknown_option(arg));
            } else {
                positional.push(PathBuf::from(arg));
            }
            i += 1;
        }

        let [corpus_dir, file] = take_positional(positional, "format", "<corpus-dir> <file>")?;
        Ok(FormatOptions {
            corpus_dir,
            file,
            ext,
            tab_width,
            vote,
            parallel,
            show_tokens,
            show_files,
            compare,
            output,
        })
    }

    /// Engine configuration selected by these options.
    pub fn config(&self) -> FormatConfig {
        let mode = self.vote.map_or(Mode::Nearest, |k| Mode::Vote { k });
        let config = FormatConfig::with_tab_width(self.tab_width).mode(mode);
        if self.parallel {
            config
        } else {
            config.sequential()
        }
    }
}

/// Options of `tailor diff`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffOptions {
    pub a: PathBuf,
    pub b: PathBuf,
    pub tab_width: usize,
}

impl DiffOptions {
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut positional = Vec::new();
        let mut tab_width = TAB_WIDTH;
        for arg in args {
            if let Some(value) = arg.strip_prefix("--tab-width=") {
                tab_width = parse_tab_width(value)?;
            } else if arg.starts_with('-') {
                return Err(unknown_option(arg));
            } else {
                positional.push(PathBuf::from(arg));
            }
        }
        let [a, b] = take_positional(positional, "diff", "<a> <b>")?;
        Ok(DiffOptions { a, b, tab_width })
    }
}

/// Options of `tailor features`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeaturesOptions {
    pub corpus_dir: PathBuf,
    pub out: PathBuf,
    pub ext: String,
    pub tab_width: usize,
    pub parallel: bool,
}

impl FeaturesOptions {
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut positional = Vec::new();
        let mut ext = DEFAULT_EXTENSION.to_string();
        let mut tab_width = TAB_WIDTH;
        let mut parallel = true;
        for arg in args {
            if let Some(value) = arg.strip_prefix("--ext=") {
                ext = parse_extension(value)?;
            } else if let Some(value) = arg.strip_prefix("--tab-width=") {
                tab_width = parse_tab_width(value)?;
            } else if arg == "--no-parallel" {
                parallel = false;
            } else if arg.starts_with('-') {
                return Err(unknown_option(arg));
            } else {
                positional.push(PathBuf::from(arg));
            }
        }
        let [corpus_dir, out] = take_positional(positional, "features", "<corpus-dir> <out.csv>")?;
        Ok(FeaturesOptions {
            corpus_dir,
            out,
            ext,
            tab_width,
            parallel,
        })
    }
}

fn parse_value<T: FromStr>(flag: &str, value: &str) -> Result<T, CliError> {
    value
        .parse()
        .map_err(|_| CliError::usage(format!("invalid value '{value}' for {flag}")))
}

fn parse_tab_width(value: &str) -> Result<usize, CliError> {
    let width: usize = parse_value("--tab-width", value)?;
    if width == 0 {
        return Err(CliError::usage("--tab-width must be positive"));
    }
    Ok(width)
}

fn parse_extension(value: &str) -> Result<String, CliError> {
    let ext = value.trim_start_matches('.');
    if ext.is_empty() {
        return Err(CliError::usage("--ext needs an extension"));
    }
    Ok(ext.to_string())
}

fn unknown_option(arg: &str) -> CliError {
    CliError::usage(format!("unknown option: {arg}"))
}

/// Exactly `N` positional arguments, or a usage error naming `expected`.
fn take_positional<const N: usize>(
    positional: Vec<PathBuf>,
    command: &str,
    expected: &str,
) -> Result<[PathBuf; N], CliError> {
    let found = positional.len();
    positional.try_into().map_err(|_| {
        CliError::usage(format!(
            "tailor {command} expects {expected}, got {found} path(s)"
        ))
    })
}

#[cfg(test)]
mod tests;
