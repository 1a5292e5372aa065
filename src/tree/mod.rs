//! Directory tree walking logic
//!
//! Every renderer runs its own depth-first walk through [`TreeWalker`],
//! which lists each directory fresh, applies the exclusion set and file
//! pattern, and streams the survivors into a [`TreeSink`].

mod config;
mod filter;
mod traversal;
mod walker;

pub use config::{DEFAULT_EXCLUDES, DEFAULT_PATTERN, WalkerConfig};
pub use filter::{ExclusionSet, PatternFilter};
pub use traversal::{DirVisit, Entry, EntryKind, SkipReason, SkippedDir, SortOrder, visit_dir};
pub use walker::{TreeSink, TreeWalker};
