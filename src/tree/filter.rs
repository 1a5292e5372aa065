//! Name-based filtering for tree walking

use std::collections::HashSet;

use regex::Regex;

use super::config::{DEFAULT_EXCLUDES, DEFAULT_PATTERN};
use crate::error::{Error, Result};

/// Shell-style wildcard matched against file base names.
///
/// Follows `fnmatch` rules: every string is a usable pattern, `*` and `**`
/// both match any run of characters (including `/`), `?` matches one
/// character, `[...]`/`[!...]` are sets, and an unclosed `[` is literal.
#[derive(Debug, Clone)]
pub struct PatternFilter {
    raw: String,
    regex: Regex,
}

impl PatternFilter {
    /// Compile a wildcard such as `*.java`.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&translate(pattern)).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            raw: pattern.to_string(),
            regex,
        })
    }

    /// Check a base name against the pattern.
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Default for PatternFilter {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN).expect("DEFAULT_PATTERN is a valid wildcard")
    }
}

/// Translate a wildcard into an anchored regex.
fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::from("(?s)^");
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                while i < chars.len() && chars[i] == '*' {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => out.push('.'),
            '[' => {
                // `]` right after `[` or `[!` is a member, not the end
                let mut j = i;
                if j < chars.len() && chars[j] == '!' {
                    j += 1;
                }
                if j < chars.len() && chars[j] == ']' {
                    j += 1;
                }
                while j < chars.len() && chars[j] != ']' {
                    j += 1;
                }
                if j >= chars.len() {
                    out.push_str(r"\[");
                } else {
                    out.push_str(&translate_set(&chars[i..j]));
                    i = j + 1;
                }
            }
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    out.push('$');
    out
}

/// Translate the inside of a `[...]` set. Reversed ranges match nothing.
fn translate_set(set: &[char]) -> String {
    let (negated, set) = match set.first() {
        Some('!') => (true, &set[1..]),
        _ => (false, set),
    };

    let escape = |c: char| regex::escape(c.encode_utf8(&mut [0; 4]));
    let mut items = String::new();
    let mut i = 0;
    while i < set.len() {
        if i + 2 < set.len() && set[i + 1] == '-' {
            let (lo, hi) = (set[i], set[i + 2]);
            if lo <= hi {
                items.push_str(&format!("{}-{}", escape(lo), escape(hi)));
            }
            i += 3;
        } else {
            items.push_str(&escape(set[i]));
            i += 1;
        }
    }

    match (items.is_empty(), negated) {
        (true, true) => ".".to_string(),
        (true, false) => "[^\\s\\S]".to_string(),
        (false, true) => format!("[^{}]", items),
        (false, false) => format!("[{}]", items),
    }
}

/// Base names that are never printed nor descended into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet(HashSet<String>);

impl ExclusionSet {
    /// An exclusion set that only skips `.` and `..`.
    pub fn empty() -> Self {
        Self(HashSet::new())
    }

    /// `.` and `..` are always excluded.
    pub fn is_excluded(&self, name: &str) -> bool {
        name == "." || name == ".." || self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        DEFAULT_EXCLUDES.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_matching() {
        let filter = PatternFilter::new("*.java").unwrap();
        assert!(filter.matches("Main.java"));
        assert!(filter.matches(".hidden.java"));
        assert!(!filter.matches("Main.kt"));
        assert!(!filter.matches("Main.JAVA"));

        let filter = PatternFilter::new("Test?.java").unwrap();
        assert!(filter.matches("Test1.java"));
        assert!(!filter.matches("Test12.java"));

        let filter = PatternFilter::new("[ab]*").unwrap();
        assert!(filter.matches("alpha"));
        assert!(!filter.matches("gamma"));
    }

    #[test]
    fn test_unclosed_bracket_is_literal() {
        let filter = PatternFilter::new("[abc").unwrap();
        assert!(filter.matches("[abc"));
        assert!(!filter.matches("a"));

        let filter = PatternFilter::new("Main[.java").unwrap();
        assert!(filter.matches("Main[.java"));
    }

    #[test]
    fn test_double_star_acts_like_star() {
        let filter = PatternFilter::new("Test**.java").unwrap();
        assert!(filter.matches("TestFoo.java"));
        assert!(filter.matches("Test.java"));
        assert!(!filter.matches("MyTest.java"));
    }

    #[test]
    fn test_sets_and_negation() {
        let filter = PatternFilter::new("[!a]*.java").unwrap();
        assert!(filter.matches("Main.java"));
        assert!(!filter.matches("app.java"));

        let filter = PatternFilter::new("[]x]").unwrap();
        assert!(filter.matches("]"));
        assert!(filter.matches("x"));

        // `-` at either end is literal, reversed ranges match nothing
        let filter = PatternFilter::new("[-z]").unwrap();
        assert!(filter.matches("-"));
        let filter = PatternFilter::new("[z-a]").unwrap();
        assert!(!filter.matches("m"));
        let filter = PatternFilter::new("[!z-a]").unwrap();
        assert!(filter.matches("m"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let filter = PatternFilter::new("a+b(1).java").unwrap();
        assert!(filter.matches("a+b(1).java"));
        assert!(!filter.matches("aab1.java"));

        let filter = PatternFilter::new("[&&x]").unwrap();
        assert!(filter.matches("&"));
        assert!(filter.matches("x"));
    }

    #[test]
    fn test_exclusion_is_exact_match() {
        let set: ExclusionSet = ["build"].into_iter().collect();
        assert!(set.is_excluded("build"));
        assert!(!set.is_excluded("builds"));
        assert!(!set.is_excluded("Build"));
    }

    #[test]
    fn test_dot_entries_always_excluded() {
        let set = ExclusionSet::empty();
        assert!(set.is_empty());
        assert!(set.is_excluded("."));
        assert!(set.is_excluded(".."));
        assert!(!set.is_excluded(".git"));
    }

    #[test]
    fn test_default_exclusions() {
        let set = ExclusionSet::default();
        assert_eq!(set.len(), DEFAULT_EXCLUDES.len());
        assert!(set.is_excluded("node_modules"));
    }
}
