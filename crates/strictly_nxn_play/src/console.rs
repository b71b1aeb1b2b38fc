//! Line-oriented terminal input and output.

use anyhow::{Result, bail};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{BufRead, Write};
use tracing::debug;

/// Prompts on `output` and reads answers from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and output stream.
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Writes text as-is.
    pub fn print(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Writes a `==>` prompt line.
    pub fn prompt(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "==> {message}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Clears the terminal, unless disabled.
    pub fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Input closed");
        }
        Ok(line.trim().to_lowercase())
    }

    /// Reads answers until one matches `options`, re-prompting with
    /// `error_message` otherwise.
    pub fn ask<S: AsRef<str>>(&mut self, error_message: &str, options: &[S]) -> Result<String> {
        loop {
            let answer = self.read_line()?;
            if options.iter().any(|o| o.as_ref() == answer) {
                return Ok(answer);
            }
            debug!(%answer, "Rejected input");
            self.prompt(error_message)?;
        }
    }

    /// Waits for the Enter key.
    pub fn wait_for_enter(&mut self) -> Result<()> {
        self.read_line().map(|_| ())
    }

    /// Returns the output stream.
    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}
