//! Reading shots typed by a human.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;

/// Why a line of input could not be read as a target.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("enter 2 coordinates in range 1..6")]
    WrongCount,
    #[error("coordinates must be numbers")]
    NotANumber,
}

/// Parse a `row col` line, both one-based, into a zero-based [`Coordinate`].
///
/// Only the shape of the input is checked here; values off the board are
/// accepted and left for the board to reject.
pub fn parse_target(line: &str) -> Result<Coordinate, InputError> {
    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::WrongCount);
    };
    Ok(Coordinate::new(parse_index(row)? - 1, parse_index(col)? - 1))
}

fn parse_index(token: &str) -> Result<i32, InputError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber);
    }
    // All digits, so the only failure left is overflow: far off the board either way.
    Ok(token.parse().unwrap_or(i32::MAX))
}

/// Interactive source of targets: prompts on `output` and reads lines from
/// `input` until one parses.
pub struct ConsoleInput {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
    buf: String,
}

impl ConsoleInput {
    pub fn new(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
            buf: String::new(),
        }
    }

    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout())
    }

    /// Prompt until a well-formed target is entered. Fails with
    /// [`io::ErrorKind::UnexpectedEof`] when input runs out.
    pub fn read_target(&mut self) -> io::Result<Coordinate> {
        loop {
            write!(self.output, "Your move (row col, 1..{BOARD_SIZE}): ")?;
            self.output.flush()?;
            self.buf.clear();
            if self.input.read_line(&mut self.buf)? == 0 {
                writeln!(self.output)?;
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed",
                ));
            }
            match parse_target(&self.buf) {
                Ok(target) => return Ok(target),
                Err(e) => writeln!(self.output, " {e}!")?,
            }
        }
    }
}
