//! Line-oriented prompting
//!
//! The prompter is generic over its reader and writer so scripted sessions can run
//! against in-memory buffers.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::console::ConsoleError;

/// Prints prompts and reads one line of input per prompt
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over an input and an output
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` and read the answer without its line ending
    ///
    /// Invalid UTF-8 is replaced rather than reported as an I/O error.
    pub fn ask(&mut self, label: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        // Bytes that are not UTF-8 become U+FFFD and fail validation downstream
        Ok(String::from_utf8_lossy(&line)
            .trim_end_matches(|c| c == '\n' || c == '\r')
            .to_string())
    }

    /// Print `label` and parse the answer as a number
    pub fn ask_number<T: FromStr>(&mut self, label: &str, field: &str) -> Result<T, ConsoleError> {
        let raw = self.ask(label)?;
        raw.trim().parse().map_err(|_| ConsoleError::InvalidNumber {
            field: field.to_string(),
            value: raw,
        })
    }

    /// Print one line
    pub fn say(&mut self, text: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// The underlying writer
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Give back the reader and the writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
