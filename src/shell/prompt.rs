//! Line-based prompting
//!
//! All user input goes through one helper so the REPL can be driven by any
//! BufRead/Write pair, stdin/stdout in production and in-memory buffers in
//! tests.

use std::io::{self, BufRead, Write};

/// Prints a prompt and reads one line of input
///
/// Returns Ok(None) on end of input. The trailing line terminator is
/// stripped; interior whitespace is preserved since file names may
/// contain spaces.
pub fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    let bytes_read = reader.read_line(&mut line)?;
    if bytes_read == 0 {
        return Ok(None);
    }

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }

    Ok(Some(line))
}
