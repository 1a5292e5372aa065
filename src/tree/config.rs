//! Configuration types for tree walkers

use super::filter::{ExclusionSet, PatternFilter};
use crate::error::Result;

/// File pattern used when none is given.
pub const DEFAULT_PATTERN: &str = "*.java";

/// Build output, VCS and dependency folders skipped unless overridden.
pub const DEFAULT_EXCLUDES: &[&str] = &["target", "build", ".git", "node_modules"];

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Applied to file base names only; directories are always shown.
    pub pattern: PatternFilter,
    /// Base names skipped (and not descended into) at every level.
    pub exclude: ExclusionSet,
}

impl WalkerConfig {
    /// Build a config from a wildcard pattern and a list of excluded names.
    pub fn new<I, S>(pattern: &str, exclude: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            pattern: PatternFilter::new(pattern)?,
            exclude: exclude.into_iter().collect(),
        })
    }
}
