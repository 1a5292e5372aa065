//! Directory visits shared by every renderer.
//!
//! Listing a directory either yields its entries or a [`SkippedDir`] saying
//! why the subtree was not walked. Nothing is cached: each renderer lists
//! the filesystem again.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Whether an entry is descended into or matched against the file pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// A regular file.
    File,
    /// Neither a directory nor a regular file (broken symlink, FIFO, socket).
    /// Pattern-matched like a file, but sorted with directories.
    Other,
}

/// A single child of a listed directory.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Entry {
    /// Build an entry, asking the filesystem what it is.
    /// Symlinks are followed.
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());
        let kind = if path.is_dir() {
            EntryKind::Directory
        } else if path.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };
        Self { name, path, kind }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Why a directory could not be listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    PermissionDenied,
    NotFound,
    NotADirectory,
    Other(String),
}

impl SkipReason {
    fn from_io(error: &io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::NotADirectory => Self::NotADirectory,
            _ => Self::Other(error.to_string()),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PermissionDenied => f.write_str("permission denied"),
            Self::NotFound => f.write_str("not found"),
            Self::NotADirectory => f.write_str("not a directory"),
            Self::Other(message) => f.write_str(message),
        }
    }
}

/// A subtree that was left out of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDir {
    pub path: PathBuf,
    pub reason: SkipReason,
}

impl SkippedDir {
    pub fn new(path: impl Into<PathBuf>, error: &io::Error) -> Self {
        Self {
            path: path.into(),
            reason: SkipReason::from_io(error),
        }
    }
}

impl fmt::Display for SkippedDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}

/// Outcome of listing one directory.
#[derive(Debug)]
pub enum DirVisit {
    Listed(Vec<Entry>),
    Skipped(SkippedDir),
}

/// Order in which siblings are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Everything that is not a regular file first, then regular files;
    /// otherwise the listing order is kept.
    DirectoriesFirst,
    /// Full lexicographic order by base name, files and directories mixed.
    Lexicographic,
}

impl SortOrder {
    pub fn sort(self, entries: &mut [Entry]) {
        match self {
            // sort_by_key is stable, so ties keep the platform listing order
            Self::DirectoriesFirst => entries.sort_by_key(|e| e.is_file()),
            Self::Lexicographic => entries.sort_by(|a, b| a.name.cmp(&b.name)),
        }
    }
}

/// List the immediate children of `path` in filesystem order.
///
/// Entries that disappear while the listing is read are dropped.
pub fn visit_dir(path: &Path) -> DirVisit {
    let read = match std::fs::read_dir(path) {
        Ok(r) => r,
        Err(e) => return DirVisit::Skipped(SkippedDir::new(path, &e)),
    };

    let entries = read
        .filter_map(|e| e.ok())
        .map(|e| Entry::from_path(e.path()))
        .collect();
    DirVisit::Listed(entries)
}
