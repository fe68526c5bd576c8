//! Formatting configuration.

/// Tab stop used to expand tabs before tokenizing.
pub const TAB_WIDTH: usize = 4;

/// How a query token's label bundle is chosen from the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Copy the labels of the single nearest exemplar.
    #[default]
    Nearest,
    /// Majority vote over whole label bundles of the `k` nearest exemplars.
    Vote { k: usize },
}

/// Configuration for training and formatting runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Tab stop for tab expansion of corpus and query text.
    /// Defaults to 4.
    pub tab_width: usize,

    /// Classification mode. Defaults to [`Mode::Nearest`].
    pub mode: Mode,

    /// Run extraction and classification on the rayon pool.
    /// Output is identical either way.
    pub parallel: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            tab_width: TAB_WIDTH,
            mode: Mode::Nearest,
            parallel: true,
        }
    }
}

impl FormatConfig {
    /// Create a config with the given tab width.
    pub fn with_tab_width(tab_width: usize) -> Self {
        Self {
            tab_width,
            ..Default::default()
        }
    }

    /// Same config, different classification mode.
    #[must_use]
    pub fn mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    /// Same config, forced sequential.
    #[must_use]
    pub fn sequential(self) -> Self {
        Self {
            parallel: false,
            ..self
        }
    }
}
