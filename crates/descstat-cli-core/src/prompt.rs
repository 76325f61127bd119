//! Interactive prompts.
//!
//! Generic over the reader and writer so they can be driven from tests.

use std::io::{BufRead, Write};

use anyhow::Context;

use crate::ingest::parse_number_line;

/// Prints `message` and a `> ` prompt, then reads one trimmed line.
pub fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
) -> anyhow::Result<String> {
    writeln!(writer, "{}", message)?;
    write!(writer, "> ")?;
    writer.flush()?;
    let mut line = String::new();
    let read = reader.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        anyhow::bail!("input closed while waiting for: {}", message);
    }
    Ok(line.trim().to_string())
}

/// Asks for the values of `label` on one line and parses them.
pub fn prompt_numbers<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> anyhow::Result<Vec<f64>> {
    writeln!(writer)?;
    writeln!(writer, "Enter the values of {} separated by spaces.", label)?;
    let line = prompt_line(reader, writer, "Example: 30 35 40 32.5 28")?;
    parse_number_line(&line).with_context(|| format!("invalid values for {}", label))
}
