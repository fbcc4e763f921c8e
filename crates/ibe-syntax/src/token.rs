//! Token definitions for the IBE language.
//!
//! Tokens are the classified lexical units a validator walks over. They are
//! produced by a lexical analyzer (the reference one lives in `ibe-lexer`, but
//! any producer will do, including a JSON token file) and are never created or
//! altered by the validator itself.
//!
//! # Token Categories
//!
//! Every token belongs to exactly one [`TokenKind`]:
//!
//! - **Keywords**: `Integer`, `Begin`, `End`
//! - **Identifiers**: variable names (`x`, `total_1`)
//! - **Delimiters**: `,` `;` `(` `)`
//! - **Assignment**: `:=`
//! - **Constants**: unsigned integer literals (`42`)
//! - **Low-precedence operators**: `+` `-`
//! - **High-precedence operators**: `*` `/`
//!
//! The kind alone is not always enough: the grammar also distinguishes
//! keywords and delimiters by their literal [`text`](Token::text).
//!
//! # Examples
//!
//! ```rust
//! use ibe_syntax::{Token, TokenKind};
//!
//! let kw = Token::new(TokenKind::Keyword, "Integer");
//! assert!(kw.is_lexeme(TokenKind::Keyword, "Integer"));
//!
//! let semi = Token::at(TokenKind::Delim, ";", 1, 10);
//! assert_eq!(semi.to_string(), "delimiter ';'");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Literal lexemes the grammar matches on.
pub mod lexeme {
    /// Opens the declaration section.
    pub const INTEGER: &str = "Integer";
    /// Opens the assignment block.
    pub const BEGIN: &str = "Begin";
    /// Terminates the program.
    pub const END: &str = "End";
    pub const SEMICOLON: &str = ";";
    pub const ASSIGN: &str = ":=";
    pub const MINUS: &str = "-";
    pub const LEFT_PAREN: &str = "(";
    pub const RIGHT_PAREN: &str = ")";

    /// All reserved words of the language.
    pub const KEYWORDS: [&str; 3] = [INTEGER, BEGIN, END];
}

/// The category of a token.
///
/// Serialized by variant name (`"Keyword"`, `"Ident"`, ...). The short
/// upper-case names used by older token dumps (`KWORD`, `IDENT`, `DELIM`,
/// `ASGN`, `CONST`, `OPERL`, `OPERH`) are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// A reserved word: `Integer`, `Begin` or `End`
    #[serde(alias = "KWORD")]
    Keyword,

    /// A variable name
    #[serde(alias = "IDENT")]
    Ident,

    /// One of `,` `;` `(` `)`
    #[serde(alias = "DELIM")]
    Delim,

    /// The assignment operator `:=`
    #[serde(alias = "ASGN")]
    Assign,

    /// An integer literal
    #[serde(alias = "CONST")]
    Const,

    /// Additive operators `+` and `-`
    #[serde(alias = "OPERL")]
    OperLow,

    /// Multiplicative operators `*` and `/`
    #[serde(alias = "OPERH")]
    OperHigh,
}

impl TokenKind {
    /// Whether this kind is a binary operator of either precedence level.
    pub fn is_operator(self) -> bool {
        matches!(self, TokenKind::OperLow | TokenKind::OperHigh)
    }

    /// Human-readable name used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Ident => "identifier",
            TokenKind::Delim => "delimiter",
            TokenKind::Assign => "assignment operator",
            TokenKind::Const => "constant",
            TokenKind::OperLow => "low-precedence operator",
            TokenKind::OperHigh => "high-precedence operator",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A classified lexeme with its source location.
///
/// # Fields
///
/// - `kind`: the token category
/// - `text`: the literal lexeme as it appeared in the source
/// - `line`: 1-based line number, `0` when unknown
/// - `col`: 1-based column number, `0` when unknown
///
/// Positions only feed diagnostics; matching never looks at them. Tokens read
/// from a JSON dump may omit them entirely.
///
/// ```rust
/// use ibe_syntax::{Token, TokenKind};
///
/// let tokens: Vec<Token> = serde_json::from_str(
///     r#"[{"kind": "KWORD", "text": "Integer"}, {"kind": "Ident", "text": "x", "line": 1, "col": 9}]"#,
/// ).unwrap();
/// assert_eq!(tokens[0].kind, TokenKind::Keyword);
/// assert_eq!(tokens[0].position(), None);
/// assert_eq!(tokens[1].position(), Some((1, 9)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Category of this token
    pub kind: TokenKind,

    /// Literal lexeme
    pub text: String,

    /// Line number in the source file (1-based)
    #[serde(default)]
    pub line: usize,

    /// Column number in the source file (1-based)
    #[serde(default)]
    pub col: usize,
}

impl Token {
    /// Creates a token without position information.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self::at(kind, text, 0, 0)
    }

    /// Creates a token located at `line`:`col` in its source.
    pub fn at(kind: TokenKind, text: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            col,
        }
    }

    /// Whether the token is of the given category.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Whether the token is of the given category and spells exactly `text`.
    pub fn is_lexeme(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    /// The `(line, col)` pair, if the token came from located source text.
    pub fn position(&self) -> Option<(usize, usize)> {
        if self.line > 0 && self.col > 0 {
            Some((self.line, self.col))
        } else {
            None
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text)
    }
}
