//! Interactive prompting for missing command-line values

use std::io::{self, BufRead, Write};

/// Reads whitespace-delimited tokens from `input`, printing a prompt to
/// `output` before each one
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: Vec<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: Vec::new(),
        }
    }

    /// Print `prompt` and return the next token
    ///
    /// Tokens left over from a previously read line are consumed first.
    /// Fails with [`io::ErrorKind::UnexpectedEof`] if input ends first.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended before a value was entered",
                ));
            }
            self.pending = line.split_whitespace().rev().map(String::from).collect();
        }

        // pending holds the line's tokens in reverse order
        Ok(self.pending.pop().unwrap_or_default())
    }

    /// Release the output writer
    pub fn into_output(self) -> W {
        self.output
    }
}
