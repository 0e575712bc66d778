use std::{
    error,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader},
    ops::Range,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub mod fft;

pub use fft::{phase, Fft};

/// Number of phases applied to the input signal.
pub const PHASE_COUNT: usize = 100;
/// Number of times the input line is repeated to form the real signal.
pub const REPEAT_COUNT: usize = 10000;
/// Number of leading digits which encode the message offset.
pub const OFFSET_DIGITS: usize = 7;
/// Number of digits in the message.
pub const MESSAGE_LEN: usize = 8;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    EmptyInput,
    UnterminatedLine,
    EmptySignal,
    InvalidDigitChar(char),
    SignalTooShort(usize, usize),
    OffsetOutOfRange(usize, usize),
    WrongSignalLen(usize, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::EmptyInput => write!(f, "No input line, expect one line of digits."),
            Error::UnterminatedLine => {
                write!(f, "Input line isn't terminated by a newline.")
            }
            Error::EmptySignal => write!(f, "Given empty signal, expect at least one digit."),
            Error::InvalidDigitChar(c) => write!(
                f,
                "Invalid character({}) found in signal, only digits are expected.",
                c
            ),
            Error::SignalTooShort(given_len, expected_len) => write!(
                f,
                "Signal is too short({}), expect at least {} digits.",
                given_len, expected_len
            ),
            Error::OffsetOutOfRange(offset, signal_len) => write!(
                f,
                "Message at offset({}) exceeds signal of length {}.",
                offset, signal_len
            ),
            Error::WrongSignalLen(given_len, expected_len) => write!(
                f,
                "Given signal in wrong length({}), expected {}.",
                given_len, expected_len
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    /// Read the signal from this file instead of standard input.
    pub input_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    digits: Vec<u32>,
}

impl TryFrom<&str> for Signal {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(Error::EmptySignal);
        }

        let digits = value
            .chars()
            .map(|c| c.to_digit(10).ok_or(Error::InvalidDigitChar(c)))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { digits })
    }
}

impl Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in &self.digits {
            write!(f, "{}", d)?;
        }

        Ok(())
    }
}

impl Signal {
    pub fn new(digits: Vec<u32>) -> Self {
        Self { digits }
    }

    pub fn digits(&self) -> &[u32] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn repeat(&self, count: usize) -> Self {
        Self {
            digits: self.digits.repeat(count),
        }
    }

    /// The message offset, encoded in the leading digits of signal.
    pub fn offset(&self) -> std::result::Result<usize, Error> {
        if self.len() < OFFSET_DIGITS {
            return Err(Error::SignalTooShort(self.len(), OFFSET_DIGITS));
        }

        Ok(self
            .digits
            .iter()
            .take(OFFSET_DIGITS)
            .fold(0, |acc, d| acc * 10 + (*d as usize)))
    }

    pub fn message_range(&self, offset: usize) -> std::result::Result<Range<usize>, Error> {
        match offset.checked_add(MESSAGE_LEN) {
            Some(end) if end <= self.len() => Ok(offset..end),
            _ => Err(Error::OffsetOutOfRange(offset, self.len())),
        }
    }

    pub fn message(&self, offset: usize) -> std::result::Result<String, Error> {
        let range = self.message_range(offset)?;
        Ok(Self::new(self.digits[range].to_vec()).to_string())
    }
}

/// Read signal from the first line of given reader, the line must end with a newline.
pub fn read_signal_from<R: BufRead>(mut reader: R) -> std::result::Result<Signal, Error> {
    let mut line = String::new();
    let read_n = reader.read_line(&mut line).map_err(Error::IOError)?;
    if read_n == 0 {
        return Err(Error::EmptyInput);
    }
    if !line.ends_with('\n') {
        return Err(Error::UnterminatedLine);
    }

    Signal::try_from(line.trim_end())
}

pub fn read_signal(path: Option<&Path>) -> Result<Signal> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open given file({}).", path.display()))?;
            read_signal_from(BufReader::new(file))
                .with_context(|| format!("Failed to read signal from given file({}).", path.display()))
        }
        None => read_signal_from(io::stdin().lock())
            .context("Failed to read signal from standard input."),
    }
}

#[test]
fn test_parse_signal() {
    let signal = Signal::try_from("12345678").unwrap();
    assert_eq!(signal.digits(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(signal.to_string(), "12345678");
}

#[test]
fn test_parse_invalid_signal() {
    assert!(matches!(
        Signal::try_from("12a4"),
        Err(Error::InvalidDigitChar('a'))
    ));
    assert!(matches!(Signal::try_from(""), Err(Error::EmptySignal)));
}

#[test]
fn test_repeat_signal() {
    let signal = Signal::try_from("03036732577212944063491565474664").unwrap();
    let repeated = signal.repeat(REPEAT_COUNT);
    assert_eq!(repeated.len(), REPEAT_COUNT * signal.len());
    assert_eq!(repeated.digits()[signal.len()..(signal.len() * 2)], *signal.digits());
    assert_eq!(repeated.offset().unwrap(), signal.offset().unwrap());
    assert_eq!(repeated.offset().unwrap(), 303673);
}

#[test]
fn test_offset_of_short_signal() {
    let signal = Signal::try_from("123").unwrap();
    assert!(matches!(signal.offset(), Err(Error::SignalTooShort(3, 7))));
    // Repetition supplies the missing leading digits.
    assert_eq!(signal.repeat(3).offset().unwrap(), 1231231);
}

#[test]
fn test_message() {
    let signal = Signal::try_from("9876543210000000012").unwrap();
    assert_eq!(signal.message(0).unwrap(), "98765432");
    assert_eq!(signal.message(9).unwrap(), "00000000");
    assert_eq!(signal.message(10).unwrap(), "00000001");
    assert_eq!(signal.message(11).unwrap(), "00000012");
    assert!(matches!(
        signal.message(12),
        Err(Error::OffsetOutOfRange(12, 19))
    ));
    assert!(matches!(
        signal.message(usize::MAX),
        Err(Error::OffsetOutOfRange(usize::MAX, 19))
    ));
}

#[test]
fn test_read_signal_from() {
    let signal = read_signal_from("12345678  \r\n".as_bytes()).unwrap();
    assert_eq!(signal.to_string(), "12345678");

    let signal = read_signal_from("5678\n1234\n".as_bytes()).unwrap();
    assert_eq!(signal.to_string(), "5678");
}

#[test]
fn test_read_signal_from_bad_input() {
    assert!(matches!(
        read_signal_from("".as_bytes()),
        Err(Error::EmptyInput)
    ));
    assert!(matches!(
        read_signal_from("1234".as_bytes()),
        Err(Error::UnterminatedLine)
    ));
    assert!(matches!(
        read_signal_from("\n".as_bytes()),
        Err(Error::EmptySignal)
    ));
}
