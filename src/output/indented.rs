//! Indented listing: folders before files, four spaces per level

use std::io;

use termcolor::WriteColor;

use crate::tree::TreeSink;

use super::utils::{DIR_COLOR, FILE_COLOR, write_line};

const INDENT_WIDTH: usize = 4;

/// Streams `📁`/`📄` lines to a color-capable writer.
pub struct IndentedFormatter<'a, W: WriteColor> {
    out: &'a mut W,
}

impl<'a, W: WriteColor> IndentedFormatter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out }
    }
}

impl<W: WriteColor> TreeSink for IndentedFormatter<'_, W> {
    fn dir(&mut self, name: &str, depth: usize) -> io::Result<()> {
        let indent = " ".repeat(depth * INDENT_WIDTH);
        write_line(self.out, &indent, &format!("📁 {}", name), DIR_COLOR)
    }

    fn file(&mut self, name: &str, depth: usize) -> io::Result<()> {
        // files sit two columns deeper than their sibling folders
        let indent = format!("{}  ", " ".repeat(depth * INDENT_WIDTH));
        write_line(self.out, &indent, &format!("📄 {}", name), FILE_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{SortOrder, TreeWalker, WalkerConfig};
    use std::fs;
    use tempfile::TempDir;
    use termcolor::{Ansi, NoColor};

    fn sample_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.java"), "").unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/c.java"), "").unwrap();
        dir
    }

    #[test]
    fn test_indented_plain() {
        let dir = sample_tree();
        let config = WalkerConfig::new("*.java", Vec::<String>::new()).unwrap();
        let mut out = NoColor::new(Vec::new());
        TreeWalker::new(&config, SortOrder::DirectoriesFirst)
            .walk(dir.path(), 1, &mut IndentedFormatter::new(&mut out))
            .unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "    📁 sub\n          📄 c.java\n      📄 a.java\n");
    }

    #[test]
    fn test_indented_colored() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("pkg")).unwrap();
        let config = WalkerConfig::default();
        let mut out = Ansi::new(Vec::new());
        TreeWalker::new(&config, SortOrder::DirectoriesFirst)
            .walk(dir.path(), 0, &mut IndentedFormatter::new(&mut out))
            .unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "\x1b[34m📁 pkg\x1b[0m\n");
    }
}
