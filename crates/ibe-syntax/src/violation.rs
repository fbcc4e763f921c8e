//! Grammar violations.
//!
//! A [`Violation`] records the first place a token stream stopped matching
//! the grammar: what the active rule wanted ([`Expected`]) and the token it
//! actually saw, or `None` when the stream had already run out.

use std::fmt;

use thiserror::Error;

use crate::error::Error as Diagnostic;
use crate::token::{Token, TokenKind};

/// What a rule was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A literal keyword or punctuation such as `Begin`, `;` or `)`.
    Lexeme(&'static str),
    /// Any token of the given category.
    Kind(TokenKind),
    /// Something that can start an expression.
    Operand,
    /// Nothing at all: only raised for tokens after `End` in strict mode.
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Lexeme(text) => write!(f, "'{}'", text),
            Expected::Kind(kind) => write!(f, "{}", kind),
            Expected::Operand => f.write_str("operand"),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// The token stream diverged from the grammar.
///
/// ```rust
/// use ibe_syntax::{Expected, Token, TokenKind, Violation};
///
/// let v = Violation::new(Expected::Lexeme(";"), Some(&Token::new(TokenKind::Keyword, "Begin")));
/// assert_eq!(v.to_string(), "Expected ';', found keyword 'Begin'");
///
/// let v = Violation::new(Expected::Kind(TokenKind::Ident), None);
/// assert_eq!(v.to_string(), "Expected identifier, found end of input");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Expected {expected}, found {}", describe_found(.found))]
pub struct Violation {
    /// What the failing rule required at this point.
    pub expected: Expected,
    /// The token under the cursor, `None` once the stream is exhausted.
    pub found: Option<Token>,
}

fn describe_found(found: &Option<Token>) -> String {
    match found {
        Some(token) => token.to_string(),
        None => "end of input".to_string(),
    }
}

impl Violation {
    pub fn new(expected: Expected, found: Option<&Token>) -> Self {
        Self {
            expected,
            found: found.cloned(),
        }
    }

    /// Converts into a located [`Diagnostic`](crate::Error), using the
    /// observed token's position when it has one.
    pub fn to_error(&self) -> Diagnostic {
        match self.found.as_ref().and_then(Token::position) {
            Some((line, col)) => Diagnostic::with_span(self.to_string(), line, col),
            None => Diagnostic::new(self.to_string()),
        }
    }
}

impl From<Violation> for Diagnostic {
    fn from(v: Violation) -> Self {
        v.to_error()
    }
}
