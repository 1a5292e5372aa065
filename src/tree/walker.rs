//! TreeWalker - depth-first walk that streams entries into a sink

use std::io;
use std::path::Path;

use super::config::WalkerConfig;
use super::traversal::{DirVisit, EntryKind, SkippedDir, SortOrder, visit_dir};

/// Callback for streaming output - receives each printed entry with its depth.
pub trait TreeSink {
    fn dir(&mut self, name: &str, depth: usize) -> io::Result<()>;

    fn file(&mut self, name: &str, depth: usize) -> io::Result<()>;

    /// Called when a subtree could not be listed. The walk always continues.
    fn skipped(&mut self, skip: &SkippedDir) {
        tracing::debug!(path = %skip.path.display(), reason = %skip.reason, "skipping subtree");
    }
}

/// Depth-first walker. Holds no state between walks.
pub struct TreeWalker<'a> {
    config: &'a WalkerConfig,
    order: SortOrder,
}

impl<'a> TreeWalker<'a> {
    pub fn new(config: &'a WalkerConfig, order: SortOrder) -> Self {
        Self { config, order }
    }

    /// Walk the children of `root`, reporting them at `depth` and below.
    ///
    /// Only sink write errors are returned; listing failures go to
    /// [`TreeSink::skipped`].
    pub fn walk<S: TreeSink + ?Sized>(&self, root: &Path, depth: usize, sink: &mut S) -> io::Result<()> {
        let mut entries = match visit_dir(root) {
            DirVisit::Listed(entries) => entries,
            DirVisit::Skipped(skip) => {
                sink.skipped(&skip);
                return Ok(());
            }
        };

        self.order.sort(&mut entries);

        for entry in entries {
            if self.config.exclude.is_excluded(&entry.name) {
                tracing::trace!(name = %entry.name, "excluded");
                continue;
            }

            match entry.kind {
                EntryKind::Directory => {
                    sink.dir(&entry.name, depth)?;
                    self.walk(&entry.path, depth + 1, sink)?;
                }
                EntryKind::File | EntryKind::Other => {
                    if self.config.pattern.matches(&entry.name) {
                        sink.file(&entry.name, depth)?;
                    }
                }
            }
        }

        Ok(())
    }
}
