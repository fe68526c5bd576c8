//! Tailor command-line driver.
//!
//! Loads a corpus directory and a target file through the reference
//! frontend, then runs the engine in `tailor_fmt`:
//!
//! - `format`: reformat a file in the corpus style
//! - `diff`: whitespace divergence score of two token-aligned files
//! - `features`: dump the corpus exemplar pool as CSV

pub mod commands;
mod error;
pub mod loader;

pub use error::CliError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical tracing subscriber on stderr.
///
/// The filter comes from `TAILOR_LOG`, falling back to `RUST_LOG`. Nothing
/// is installed when neither is set, so logging costs nothing by default.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("TAILOR_LOG")
            .or_else(|_| EnvFilter::try_from_default_env());
        if let Ok(filter) = filter {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(filter)
                .init();
        }
    });
}
