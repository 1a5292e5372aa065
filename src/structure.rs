//! Print the package structure of a root directory and optionally export it.

use std::path::{Path, PathBuf};

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::error::Result;
use crate::output::{ConnectorFormatter, IndentedFormatter, Mode, OutputConfig, export_structure};
use crate::tree::{SortOrder, TreeWalker, WalkerConfig};

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The tree was printed, and exported if an output file was given.
    Rendered { exported: Option<PathBuf> },
    /// The root was missing or not a directory; nothing was walked.
    InvalidRoot,
}

/// Print to stdout, coloring according to `output.use_color`.
pub fn print_package_structure(
    root: &Path,
    walker: &WalkerConfig,
    output: &OutputConfig,
) -> Result<Outcome> {
    let choice = if output.use_color {
        ColorChoice::AlwaysAnsi
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_package_structure(&mut stdout, root, walker, output)
}

/// Render the console view of `root` into `out`, then run the export.
///
/// An invalid root prints a message and returns [`Outcome::InvalidRoot`]
/// without walking anything or creating the export file.
pub fn write_package_structure<W: WriteColor>(
    out: &mut W,
    root: &Path,
    walker: &WalkerConfig,
    output: &OutputConfig,
) -> Result<Outcome> {
    if !root.is_dir() {
        writeln!(out, "❌ Root directory does not exist: {}", root.display())?;
        return Ok(Outcome::InvalidRoot);
    }

    tracing::debug!(root = %root.display(), mode = %output.mode, "rendering package structure");

    writeln!(out)?;
    writeln!(out, "📂 Package Structure ({}):", root.display())?;

    match output.mode {
        Mode::Tree => {
            writeln!(out, "|-- ROOT")?;
            let mut sink = ConnectorFormatter::new(out);
            TreeWalker::new(walker, SortOrder::Lexicographic).walk(root, 1, &mut sink)?;
        }
        Mode::Indented => {
            writeln!(out, "📁 ROOT")?;
            let mut sink = IndentedFormatter::new(out);
            TreeWalker::new(walker, SortOrder::DirectoriesFirst).walk(root, 1, &mut sink)?;
        }
    }

    let exported = match &output.output_file {
        Some(path) => {
            export_structure(path, output.mode, root, walker)?;
            writeln!(out)?;
            writeln!(out, "✅ Structure exported to {}", path.display())?;
            Some(path.clone())
        }
        None => None,
    };
    out.flush()?;

    Ok(Outcome::Rendered { exported })
}
