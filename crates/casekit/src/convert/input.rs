use std::io::BufRead;

use crate::prelude::*;

const STDIN_MARKER: &str = "-";

/// Resolve the sentences to convert.
///
/// `TEXT` arguments are joined with single spaces into one sentence. With no
/// arguments, or a lone `-`, every non-blank line of `reader` is a sentence of
/// its own. An interactive terminal is never read from.
pub fn collect(text: &[String], reader: impl BufRead, interactive: bool) -> Result<Vec<String>> {
    if !reads_stdin(text) {
        return Ok(vec![text.join(" ")]);
    }

    if interactive {
        return Err(Error::NoInput.into());
    }

    log::debug!("Reading sentences from stdin");
    let lines = read_lines(reader).context("Failed to read from stdin")?;

    if lines.is_empty() {
        return Err(Error::NoInput.into());
    }

    Ok(lines)
}

fn reads_stdin(text: &[String]) -> bool {
    match text {
        [] => true,
        [only] => only == STDIN_MARKER,
        _ => false,
    }
}

fn read_lines(reader: impl BufRead) -> std::io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}
