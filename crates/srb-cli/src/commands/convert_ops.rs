use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Cyrillic,
    Latin,
    Ascii,
}

impl Direction {
    pub fn convert(self, text: &str) -> String {
        match self {
            Direction::Cyrillic => srb_core::to_cyrillic(text),
            Direction::Latin => srb_core::to_latin(text),
            Direction::Ascii => srb_core::to_ascii_latin(text),
        }
    }
}

/// Convert `text`, or every line of stdin when no text is given.
pub fn convert_cmd(direction: Direction, text: Option<&str>) -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    match text {
        Some(text) => writeln!(out, "{}", direction.convert(text))?,
        None => {
            let lines = convert_lines(direction, io::stdin().lock(), &mut out)?;
            debug!(lines, ?direction, "converted stdin");
        }
    }
    Ok(())
}

/// Convert line by line. Each line is converted on its own, so line breaks
/// never reach the word splitter.
pub fn convert_lines<R: BufRead, W: Write>(
    direction: Direction,
    reader: R,
    writer: &mut W,
) -> Result<usize, CliError> {
    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        writeln!(writer, "{}", direction.convert(&line))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
