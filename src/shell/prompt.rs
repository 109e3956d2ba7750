//! Line-based terminal I/O
//!
//! Reads from any `BufRead` and writes to any `Write`, so the whole shell can
//! be driven from a script in tests.

use crate::core::is_quit_token;
use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Prompt/response channel to the player
pub struct Prompter<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Print `prompt` and read one trimmed line
    ///
    /// Returns `None` at end of input. Bytes that aren't UTF-8 are replaced,
    /// so a mis-encoded line is just another invalid entry.
    ///
    /// # Errors
    /// Returns an error if the terminal can't be read or written.
    pub fn get_user_input(&mut self, prompt: &str) -> Result<Option<String>> {
        self.read_after(&format!("{prompt}: "))
    }

    fn read_after(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush().context("failed to flush output")?;

        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("failed to read input")?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Wait for Enter so the screen can be read before it is cleared
    ///
    /// Returns `false` at end of input or on the quit token.
    ///
    /// # Errors
    /// Returns an error if the terminal can't be read or written.
    pub fn pause(&mut self, prompt: &str) -> Result<bool> {
        Ok(self
            .read_after(prompt)?
            .is_some_and(|line| !is_quit_token(&line)))
    }

    /// Like [`Prompter::get_user_input`], but the quit token also gives `None`
    ///
    /// # Errors
    /// Returns an error if the terminal can't be read or written.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(self
            .get_user_input(prompt)?
            .filter(|line| !is_quit_token(line)))
    }

    /// Write one line of output
    ///
    /// # Errors
    /// Returns an error if the output can't be written.
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}").context("failed to write output")
    }

    /// Wipe the screen and home the cursor, unless clearing is turned off
    ///
    /// # Errors
    /// Returns an error if the output can't be written.
    pub fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}
