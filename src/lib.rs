//! pkgtree - print the package structure of a project, filtered by file pattern

pub mod error;
pub mod output;
pub mod structure;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{Mode, OutputConfig, export_structure};
pub use structure::{Outcome, print_package_structure, write_package_structure};
pub use tree::{DEFAULT_EXCLUDES, DEFAULT_PATTERN, WalkerConfig};
