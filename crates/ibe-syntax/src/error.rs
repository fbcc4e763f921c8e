//! Error handling types shared by the IBE toolchain.
//!
//! [`Error`] is the common currency for anything that can be reported to a
//! user: a message plus an optional source location. The lexer produces it
//! directly; grammar violations (see [`crate::violation`]) are converted into
//! it for rendering.
//!
//! # Examples
//!
//! ```rust
//! use ibe_syntax::error::{error_at, Error, Result};
//!
//! let located: Result<()> = error_at(3, 7, "Unexpected character '?'");
//! assert_eq!(located.unwrap_err().to_string(), "Unexpected character '?' at 3:7");
//! assert_eq!(Error::new("plain").to_string(), "plain");
//! ```

use std::fmt;

/// An error with an optional source location.
///
/// # Fields
///
/// - `msg`: Human-readable error description
/// - `line`: Optional 1-based line number in source file
/// - `col`: Optional 1-based column number in source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// Human-readable error message
    pub msg: String,

    /// Optional line number in source file (1-based)
    pub line: Option<usize>,

    /// Optional column number in source file (1-based)
    pub col: Option<usize>,
}

impl Error {
    /// Creates a new error with the given message and no location.
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            line: None,
            col: None,
        }
    }

    /// Creates a new error located at `line`:`col`.
    ///
    /// ```rust
    /// use ibe_syntax::Error;
    ///
    /// let error = Error::with_span("Unexpected ':'", 5, 12);
    /// assert_eq!(error.to_string(), "Unexpected ':' at 5:12");
    /// ```
    pub fn with_span(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            msg: msg.into(),
            line: Some(line),
            col: Some(col),
        }
    }

    /// The `(line, col)` pair, when both are known.
    pub fn span(&self) -> Option<(usize, usize)> {
        match (self.line, self.col) {
            (Some(l), Some(c)) => Some((l, c)),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(l), Some(c)) = (self.line, self.col) {
            write!(f, "{} at {}:{}", self.msg, l, c)
        } else {
            write!(f, "{}", self.msg)
        }
    }
}

impl std::error::Error for Error {}

/// A specialized `Result` type for IBE operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Shorthand for `Err(Error::with_span(msg, line, col))`.
pub fn error_at<T>(line: usize, col: usize, msg: impl Into<String>) -> Result<T> {
    Err(Error::with_span(msg, line, col))
}
