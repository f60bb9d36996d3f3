//! Whitespace-token input and prompt output.
//!
//! Input is read a line at a time but consumed as tokens, so answers may be
//! typed one per line or several on one line (`Ah Kd BTN 0 n ...`).

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum InputError {
    #[error("unexpected end of input")]
    Eof,
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<char>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, pending: VecDeque::new() }
    }

    /// Write a prompt without a trailing newline and flush it.
    pub fn prompt(&mut self, text: &str) -> Result<(), InputError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write a full line and flush it.
    pub fn say(&mut self, text: &str) -> Result<(), InputError> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Next run of non-whitespace characters.
    pub fn read_token(&mut self) -> Result<String, InputError> {
        self.skip_whitespace()?;
        let mut token = String::new();
        while let Some(&c) = self.pending.front() {
            if c.is_whitespace() {
                break;
            }
            token.push(c);
            self.pending.pop_front();
        }
        Ok(token)
    }

    /// Next non-whitespace character; the rest of its token stays buffered.
    pub fn read_char(&mut self) -> Result<char, InputError> {
        self.skip_whitespace()?;
        self.pending.pop_front().ok_or(InputError::Eof)
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn skip_whitespace(&mut self) -> Result<(), InputError> {
        loop {
            while let Some(c) = self.pending.front() {
                if !c.is_whitespace() {
                    return Ok(());
                }
                self.pending.pop_front();
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(InputError::Eof);
            }
            self.pending.extend(line.chars());
        }
    }
}
