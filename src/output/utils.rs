//! Shared helpers for the console formatters

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

pub const DIR_COLOR: Color = Color::Blue;
pub const FILE_COLOR: Color = Color::Green;

/// Write `text` wrapped in a foreground color, then reset.
///
/// On an ANSI writer this emits exactly `ESC[<code>m<text>ESC[0m`; on a
/// non-color writer only `text` is written.
pub fn write_colored<W: WriteColor + ?Sized>(out: &mut W, text: &str, color: Color) -> io::Result<()> {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color)).set_reset(false);
    out.set_color(&spec)?;
    write!(out, "{}", text)?;
    out.reset()
}

/// Write a colored line preceded by plain `indent`.
pub fn write_line<W: WriteColor + ?Sized>(
    out: &mut W,
    indent: &str,
    text: &str,
    color: Color,
) -> io::Result<()> {
    write!(out, "{}", indent)?;
    write_colored(out, text, color)?;
    writeln!(out)
}
