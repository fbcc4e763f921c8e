//! Forward-only, single-lookahead cursor over a token slice.

use ibe_syntax::Token;

/// Tracks the current position in an immutable token sequence.
///
/// The position only ever moves forward. Once it steps past the last token
/// the cursor is exhausted and [`current`](Cursor::current) yields `None`
/// from then on.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Positions the cursor on the first token.
    pub fn new(tokens: &'a [Token]) -> Self {
        if tokens.is_empty() {
            tracing::warn!("next token not found");
        }
        Self { tokens, pos: 0 }
    }

    /// The token under the cursor, or `None` once exhausted.
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Steps onto the next token.
    ///
    /// Stepping past the end is not an error by itself: the cursor becomes
    /// exhausted and a warning is logged. Whichever rule looks at the
    /// cursor next will report the missing token.
    pub fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        } else {
            self.pos = self.tokens.len();
            tracing::warn!(position = self.pos, "next token not found");
        }
    }

    /// Index of the current token; equals the sequence length once exhausted.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Tokens strictly after the current one.
    pub fn remaining(&self) -> &'a [Token] {
        self.tokens.get(self.pos + 1..).unwrap_or(&[])
    }
}
