//! One procedure per nonterminal.
//!
//! ```text
//! program    := "Integer" varList "Begin" assignList "End"
//! varList    := identifier delimiter ( varList )?
//! assignList := identifier ":=" [ "-" ] expr { op expr } ";" ( assignList )?
//! expr       := "(" [ "-" ] expr { op expr } ")" | identifier | constant | op expr
//! ```
//!
//! Every rule expects the cursor on its first token and leaves it just past
//! the last token it consumed. The `expect_*` helpers only inspect the
//! current token; advancing is always the caller's move.

use ibe_syntax::{lexeme, Expected, Token, TokenKind, Violation};

use crate::cursor::Cursor;

pub(crate) type RuleResult<T = ()> = Result<T, Violation>;

pub(crate) struct Rules<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Rules<'a> {
    pub(crate) fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    pub(crate) fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    pub(crate) fn program(&mut self) -> RuleResult {
        tracing::trace!("program");
        self.expect_keyword(lexeme::INTEGER)?;
        self.cursor.advance();
        self.var_list()?;
        // step over the ';' that closed the declarations
        self.cursor.advance();
        self.expect_keyword(lexeme::BEGIN)?;
        self.cursor.advance();
        self.assign_list()?;
        // `End` is terminal: nothing after it is consumed
        self.expect_keyword(lexeme::END)?;
        Ok(())
    }

    /// Declarations separated by any delimiter and closed by `;`. The `;`
    /// itself is left under the cursor.
    fn var_list(&mut self) -> RuleResult {
        loop {
            tracing::trace!(position = self.cursor.position(), "var_list");
            self.expect_ident()?;
            self.cursor.advance();
            let delim = self.expect_delimiter()?;
            if delim.text == lexeme::SEMICOLON {
                return Ok(());
            }
            self.cursor.advance();
        }
    }

    /// Assignments run until the token after a `;` is not an identifier.
    fn assign_list(&mut self) -> RuleResult {
        loop {
            tracing::trace!(position = self.cursor.position(), "assign_list");
            self.expect_ident()?;
            self.cursor.advance();
            self.expect_assign()?;
            self.cursor.advance();
            self.skip_unary_minus();
            // a trailing operator is consumed by expr's prefix alternative
            loop {
                self.expr()?;
                if !self.at_operator() {
                    break;
                }
            }
            self.expect_lexeme(TokenKind::Delim, lexeme::SEMICOLON)?;
            self.cursor.advance();
            if !self.at(TokenKind::Ident) {
                return Ok(());
            }
        }
    }

    /// One expression, walked without recursion.
    ///
    /// `depth` counts the parentheses still open. Prefix operators and `(`
    /// (with its optional `-`) are consumed until an operand is reached; after
    /// the operand each open group either continues with `op operand` or is
    /// closed by `)`. At depth zero the expression ends after its operand.
    fn expr(&mut self) -> RuleResult {
        let mut depth = 0usize;
        loop {
            match self.cursor.current() {
                Some(tok) if tok.is_lexeme(TokenKind::Delim, lexeme::LEFT_PAREN) => {
                    self.cursor.advance();
                    self.skip_unary_minus();
                    depth += 1;
                    continue;
                }
                Some(tok) if tok.kind.is_operator() => {
                    self.cursor.advance();
                    continue;
                }
                Some(tok) if tok.is(TokenKind::Ident) || tok.is(TokenKind::Const) => {
                    self.cursor.advance();
                }
                other => return Err(Violation::new(Expected::Operand, other)),
            }

            loop {
                if depth == 0 {
                    return Ok(());
                }
                if self.at_operator() {
                    self.cursor.advance();
                    break;
                }
                self.expect_lexeme(TokenKind::Delim, lexeme::RIGHT_PAREN)?;
                self.cursor.advance();
                depth -= 1;
            }
        }
    }

    fn skip_unary_minus(&mut self) {
        if self.at_lexeme(TokenKind::OperLow, lexeme::MINUS) {
            self.cursor.advance();
        }
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.cursor.current().is_some_and(|t| t.is(kind))
    }

    fn at_lexeme(&self, kind: TokenKind, text: &str) -> bool {
        self.cursor.current().is_some_and(|t| t.is_lexeme(kind, text))
    }

    fn at_operator(&self) -> bool {
        self.cursor.current().is_some_and(|t| t.kind.is_operator())
    }

    fn expect(&self, expected: Expected, matches: impl Fn(&Token) -> bool) -> RuleResult<&'a Token> {
        match self.cursor.current() {
            Some(tok) if matches(tok) => Ok(tok),
            other => Err(Violation::new(expected, other)),
        }
    }

    fn expect_keyword(&self, word: &'static str) -> RuleResult<&'a Token> {
        self.expect_lexeme(TokenKind::Keyword, word)
    }

    fn expect_lexeme(&self, kind: TokenKind, text: &'static str) -> RuleResult<&'a Token> {
        self.expect(Expected::Lexeme(text), |t| t.is_lexeme(kind, text))
    }

    fn expect_ident(&self) -> RuleResult<&'a Token> {
        self.expect(Expected::Kind(TokenKind::Ident), |t| t.is(TokenKind::Ident))
    }

    fn expect_assign(&self) -> RuleResult<&'a Token> {
        self.expect(Expected::Lexeme(lexeme::ASSIGN), |t| t.is(TokenKind::Assign))
    }

    /// Names `;` instead of the delimiter category when a keyword is found.
    fn expect_delimiter(&self) -> RuleResult<&'a Token> {
        match self.cursor.current() {
            Some(tok) if tok.is(TokenKind::Delim) => Ok(tok),
            Some(tok) if tok.is(TokenKind::Keyword) => {
                Err(Violation::new(Expected::Lexeme(lexeme::SEMICOLON), Some(tok)))
            }
            other => Err(Violation::new(Expected::Kind(TokenKind::Delim), other)),
        }
    }
}
