//! Room rendering: rule lines and the fixed-column word wrapper.

use std::io::{self, Write};

use colored::Colorize;
use pw_story::Room;

/// Character used for the horizontal rules framing a room.
const RULE_CHAR: char = '-';

/// A horizontal rule of `width` columns.
pub fn rule(width: usize) -> String {
    RULE_CHAR.to_string().repeat(width)
}

/// Wrap `text` to lines of at most `width` columns.
///
/// Breaks prefer whitespace. At the column boundary a whitespace
/// character becomes the line break, a non-alphanumeric character stays
/// on the current line and breaks after itself, a word that just started
/// moves to the next line whole, and anything else breaks mid-word with
/// an inserted hyphen. Embedded newlines pass through and reset the
/// column count.
pub fn wrap(width: usize, text: &str) -> String {
    let mut out = String::new();
    let mut column = 0;
    let mut prev = '\0';

    for c in text.chars() {
        if c == '\n' {
            out.push('\n');
            column = 0;
            prev = c;
            continue;
        }
        if column + 1 == width {
            if c.is_whitespace() {
                out.push('\n');
                column = 0;
            } else if !c.is_alphanumeric() {
                out.push(c);
                out.push('\n');
                column = 0;
            } else if prev.is_whitespace() {
                out.push('\n');
                out.push(c);
                column = 1;
            } else {
                out.push('-');
                out.push('\n');
                out.push(c);
                column = 1;
            }
        } else {
            out.push(c);
            column += 1;
        }
        prev = c;
    }
    out
}

/// Write a room's title and description between horizontal rules.
pub fn display_room<W: Write>(writer: &mut W, room: &Room, width: usize) -> io::Result<()> {
    writeln!(writer, "{}", rule(width))?;
    writeln!(writer, "{}", wrap(width, &room.title).bold())?;
    writeln!(writer)?;
    writeln!(writer, "{}", wrap(width, &room.description))?;
    writeln!(writer, "{}", rule(width))?;
    Ok(())
}
