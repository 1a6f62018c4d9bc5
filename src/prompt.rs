use crate::ledger::{Amount, DECIMAL_PRECISION};

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream ended while we were waiting for an answer.
    #[error("input closed")]
    InputClosed,

    #[error("invalid menu choice {0:?}")]
    InvalidMenuChoice(String),

    #[error("malformed amount {0:?}")]
    MalformedAmount(String),
}

/// A line-oriented conversation over any input and output, so that the whole
/// ATM can be driven from a `Cursor` in tests just like from a terminal.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one full line.
    pub fn say(&mut self, line: impl Display) -> Result<(), Error> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print `label` and read the answer on the same line.
    ///
    /// Only the line terminator is removed: ids and PINs are compared exactly
    /// as typed. Bytes that aren't valid UTF-8 are replaced with U+FFFD, so
    /// such an answer never matches an id, a PIN, a menu option or an amount.
    pub fn ask(&mut self, label: &str) -> Result<String, Error> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(Error::InputClosed);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Keep asking until the answer is a number.
    ///
    /// Whether the number makes sense as an amount (e.g. is positive) is for
    /// the account to decide.
    pub fn ask_amount(&mut self, label: &str) -> Result<Amount, Error> {
        loop {
            let answer = self.ask(label)?;
            match parse_amount(&answer) {
                Ok(amount) => return Ok(amount),
                Err(err) => {
                    tracing::debug!(%err, "rejected amount");
                    self.say(format_args!(
                        "Error: '{}' is not a valid amount. Please try again.",
                        answer.trim()
                    ))?;
                }
            }
        }
    }
}

/// Parse a raw decimal, without any currency symbol, rounded to the ledger's
/// precision.
pub fn parse_amount(text: &str) -> Result<Amount, Error> {
    let text = text.trim();
    Amount::from_str(text)
        .map(|amount| amount.round_dp(DECIMAL_PRECISION))
        .map_err(|_| Error::MalformedAmount(text.to_string()))
}
