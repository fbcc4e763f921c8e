//! Entry points: run the rule set from `program` and hand back the outcome.

use ibe_syntax::{Expected, Token, Violation};

use crate::cursor::Cursor;
use crate::rules::Rules;

/// Knobs for a validation run.
///
/// ```rust
/// use ibe_validator::Options;
///
/// let opts = Options::new().strict_end(true);
/// assert!(opts.is_strict_end());
/// assert!(!Options::default().is_strict_end());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    strict_end: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject any token that follows the closing `End`. Off by default,
    /// in which case trailing tokens are never looked at.
    pub fn strict_end(mut self, on: bool) -> Self {
        self.strict_end = on;
        self
    }

    pub fn is_strict_end(&self) -> bool {
        self.strict_end
    }
}

/// Validates one token sequence against the grammar.
///
/// The validator only borrows the tokens; running it has no effect other
/// than log output.
pub struct Validator<'a> {
    tokens: &'a [Token],
    options: Options,
}

impl<'a> Validator<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            options: Options::default(),
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Walks the tokens from the `program` rule.
    ///
    /// Returns the first [`Violation`] encountered; nothing after it is
    /// examined.
    pub fn run(&self) -> Result<(), Violation> {
        let mut rules = Rules::new(Cursor::new(self.tokens));
        let outcome = rules.program().and_then(|()| {
            if !self.options.is_strict_end() {
                return Ok(());
            }
            match rules.cursor().remaining().first() {
                Some(extra) => Err(Violation::new(Expected::EndOfInput, Some(extra))),
                None => Ok(()),
            }
        });
        match &outcome {
            Ok(()) => tracing::debug!("token stream accepted"),
            Err(v) => tracing::debug!(
                position = rules.cursor().position(),
                exhausted = rules.cursor().is_exhausted(),
                violation = %v,
                "token stream rejected"
            ),
        }
        outcome
    }
}

/// Validates `tokens` with default [`Options`].
///
/// ```rust
/// use ibe_syntax::{Expected, Token, TokenKind};
///
/// let tokens = vec![
///     Token::new(TokenKind::Keyword, "Integer"),
///     Token::new(TokenKind::Ident, "x"),
///     Token::new(TokenKind::Keyword, "Begin"),
/// ];
/// let violation = ibe_validator::validate(&tokens).unwrap_err();
/// assert_eq!(violation.expected, Expected::Lexeme(";"));
/// ```
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn validate(tokens: &[Token]) -> Result<(), Violation> {
    Validator::new(tokens).run()
}
