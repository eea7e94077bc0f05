//! Console prompting helpers.
//!
//! All prompts are generic over reader and writer so tests can drive them
//! with in-memory buffers. `None` always means end of input.

use std::io::{self, BufRead, Write};

/// Prompt for a line and return it trimmed.
pub fn prompt_string<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a line and return its first non-whitespace character,
/// lowercased; `'\0'` when the line holds none.
pub fn prompt_char<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<Option<char>> {
    let Some(line) = prompt_string(reader, writer, prompt)? else {
        return Ok(None);
    };
    Ok(Some(
        line.chars().next().map_or('\0', |c| c.to_ascii_lowercase()),
    ))
}

/// Prompt for an integer in `[min, max]`, re-prompting with
/// `Invalid value.` until one arrives.
pub fn prompt_int<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    min: i64,
    max: i64,
) -> io::Result<Option<i64>> {
    loop {
        let Some(line) = prompt_string(reader, writer, prompt)? else {
            return Ok(None);
        };
        match line.parse::<i64>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(Some(value)),
            _ => writeln!(writer, "Invalid value.")?,
        }
    }
}
