//! Connector tree: `|-- ` branches sorted by name

use std::io;

use termcolor::WriteColor;

use crate::tree::TreeSink;

use super::utils::{DIR_COLOR, FILE_COLOR, write_line};

/// Prefix for an entry at `depth`: one `|   ` per ancestor level, then `|-- `.
pub fn connector_prefix(depth: usize) -> String {
    format!("{}|-- ", "|   ".repeat(depth))
}

pub struct ConnectorFormatter<'a, W: WriteColor> {
    out: &'a mut W,
}

impl<'a, W: WriteColor> ConnectorFormatter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out }
    }
}

impl<W: WriteColor> TreeSink for ConnectorFormatter<'_, W> {
    fn dir(&mut self, name: &str, depth: usize) -> io::Result<()> {
        write_line(self.out, &connector_prefix(depth), &format!("{}/", name), DIR_COLOR)
    }

    fn file(&mut self, name: &str, depth: usize) -> io::Result<()> {
        write_line(self.out, &connector_prefix(depth), name, FILE_COLOR)
    }
}
