//! Command implementations.
//!
//! Each command has an options struct parsed from the raw argument list
//! and a `run_*` entry point that prints its results. The work itself lives
//! in functions that return values, so the commands can be tested without
//! capturing output.

mod diff;
mod features;
mod format;
mod options;

pub use diff::{diff_files, run_diff};
pub use features::{run_features, write_features, FeaturesSummary};
pub use format::{format_file, run_format, FormatReport};
pub use options::{DiffOptions, FeaturesOptions, FormatOptions, DEFAULT_EXTENSION};
