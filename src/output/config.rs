//! Output configuration types

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

/// Console presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Indented listing, directories before files
    #[default]
    #[value(name = "default")]
    Indented,
    /// ASCII tree with `|--` connectors, sorted by name
    Tree,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indented => f.write_str("default"),
            Self::Tree => f.write_str("tree"),
        }
    }
}

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub mode: Mode,
    pub use_color: bool,
    /// Also write a plain-text export here.
    pub output_file: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Indented,
            use_color: true,
            output_file: None,
        }
    }
}
