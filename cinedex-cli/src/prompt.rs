//! Line-oriented console prompts.
//!
//! Generic over the reader and writer so the menu can be driven by scripted
//! input in tests.

use std::io::{self, BufRead, Write};

use crate::CliError;

pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line. `None` at end of input.
    ///
    /// A line that is not valid UTF-8 is consumed whole and reported as an
    /// `InvalidData` error, so the next call starts on the following line.
    pub(crate) fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8(raw)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "input is not valid UTF-8"))?;
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`Prompter::ask`], but end of input is an error.
    pub(crate) fn line(&mut self, prompt: &str) -> Result<String, CliError> {
        self.ask(prompt)?.ok_or(CliError::EndOfInput)
    }

    /// Read a line, substituting `default` for an empty answer.
    pub(crate) fn line_or_default(&mut self, prompt: &str, default: &str) -> Result<String, CliError> {
        let answer = self.line(prompt)?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Ask a yes/no question. Only "y" or "yes" (any case) count as yes.
    pub(crate) fn confirm(&mut self, prompt: &str) -> Result<bool, CliError> {
        let answer = self.line(prompt)?;
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    /// Writer for tables and the menu banner.
    pub(crate) fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
#[path = "tests/prompt_tests.rs"]
mod tests;
