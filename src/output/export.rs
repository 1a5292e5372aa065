//! Plain-text export of the package structure
//!
//! The export has no colors, glyphs or connectors:
//!
//! ```text
//! Package Structure:
//! ROOT (<root>)
//!   <dir>/
//!     <nested file>
//!   <file>
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::tree::{SortOrder, TreeSink, TreeWalker, WalkerConfig};

use super::config::Mode;

pub const EXPORT_HEADER: &str = "Package Structure:";

/// Two spaces per level, `name/` for directories.
pub struct ExportWriter<W: Write> {
    out: W,
}

impl<W: Write> ExportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write the header lines and walk `root` starting one level deep.
    pub fn write_structure(&mut self, root: &Path, config: &WalkerConfig) -> io::Result<()> {
        writeln!(self.out, "{}", EXPORT_HEADER)?;
        writeln!(self.out, "ROOT ({})", root.display())?;
        TreeWalker::new(config, SortOrder::Lexicographic).walk(root, 1, self)?;
        self.out.flush()
    }
}

impl<W: Write> TreeSink for ExportWriter<W> {
    fn dir(&mut self, name: &str, depth: usize) -> io::Result<()> {
        writeln!(self.out, "{}{}/", "  ".repeat(depth), name)
    }

    fn file(&mut self, name: &str, depth: usize) -> io::Result<()> {
        writeln!(self.out, "{}{}", "  ".repeat(depth), name)
    }
}

/// Export the structure under `root` to `output_file`.
///
/// The layout is the same for every mode. Failing to open or write the
/// file is fatal; unreadable subtrees are left out.
pub fn export_structure(
    output_file: &Path,
    mode: Mode,
    root: &Path,
    config: &WalkerConfig,
) -> Result<()> {
    tracing::debug!(%mode, path = %output_file.display(), "exporting package structure");

    let file = File::create(output_file).map_err(|source| Error::ExportCreate {
        path: output_file.to_path_buf(),
        source,
    })?;

    let mut writer = ExportWriter::new(BufWriter::new(file));
    writer
        .write_structure(root, config)
        .map_err(|source| Error::ExportWrite {
            path: output_file.to_path_buf(),
            source,
        })
}
