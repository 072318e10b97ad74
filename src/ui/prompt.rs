//! Interactive prompts. Generic over reader/writer so they can be driven
//! from tests with in-memory buffers.

use crate::errors::{AppError, AppResult};
use crate::models::hours::HoursEntry;
use std::io::{BufRead, Write};

pub const HOURS_PROMPT: &str = "Enter hours worked (or 'done' to finish): ";
pub const INVALID_HOURS: &str = "Invalid input. Please enter a valid number of hours.";

/// One answer to the hours prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoursInput {
    Entry(HoursEntry),
    Done,
}

/// Read one line; `None` at end of input.
///
/// Bytes that are not UTF-8 are replaced rather than failing the read, so a
/// garbled line is just another invalid answer.
pub fn read_line<R: BufRead>(input: &mut R) -> AppResult<Option<String>> {
    let mut buf = Vec::new();
    let n = input.read_until(b'\n', &mut buf)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
}

/// Ask for hours until a valid entry or `done` arrives.
///
/// Malformed and negative values are reported and asked again; end of input
/// counts as `done`.
pub fn prompt_hours<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> AppResult<HoursInput> {
    loop {
        write!(out, "{HOURS_PROMPT}")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            return Ok(HoursInput::Done);
        };

        if line.eq_ignore_ascii_case("done") {
            return Ok(HoursInput::Done);
        }

        match HoursEntry::parse(&line) {
            Ok(entry) => return Ok(HoursInput::Entry(entry)),
            Err(AppError::InvalidHours(_)) => writeln!(out, "{INVALID_HOURS}")?,
            Err(e) => return Err(e),
        }
    }
}

/// Yes/no question, default No.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> AppResult<bool> {
    write!(out, "{question} [y/N]: ")?;
    out.flush()?;

    let answer = read_line(input)?.unwrap_or_default().to_lowercase();
    Ok(matches!(answer.as_str(), "y" | "yes"))
}

/// [`confirm`] on the real terminal.
pub fn ask_confirmation(question: &str) -> AppResult<bool> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    confirm(&mut stdin.lock(), &mut stdout.lock(), question)
}
