//! IBE lexer: converts source text into tokens.
use ibe_syntax::error::{error_at, Result};
use ibe_syntax::token::{lexeme, Token, TokenKind};

/// Streaming character scanner that produces tokens with positions.
pub struct Lexer {
    src: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    /// Create a new lexer over the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            src: input.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src.get(self.pos).copied()
    }
    fn peek_next(&self) -> Option<char> {
        self.src.get(self.pos + 1).copied()
    }
    fn advance(&mut self) -> Option<char> {
        let ch = self.src.get(self.pos).copied();
        if let Some(c) = ch {
            self.pos += 1;
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        ch
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else if c == '/' && self.peek_next() == Some('/') {
                while let Some(c2) = self.peek() {
                    self.advance();
                    if c2 == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn read_while(&mut self, keep: impl Fn(char) -> bool) -> String {
        let mut s = String::new();
        while let Some(c) = self.peek() {
            if keep(c) {
                s.push(c);
                self.advance();
            } else {
                break;
            }
        }
        s
    }

    /// Tokenize the entire input.
    ///
    /// Unlike a parser-facing lexer there is no end-of-file token: the
    /// grammar's own `End` keyword terminates a program.
    #[tracing::instrument(skip_all, fields(source_len = self.src.len()))]
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let line = self.line;
            let col = self.col;
            let tk = match self.peek() {
                None => break,
                Some(c @ (',' | ';' | '(' | ')')) => {
                    self.advance();
                    Token::at(TokenKind::Delim, c, line, col)
                }
                Some(c @ ('+' | '-')) => {
                    self.advance();
                    Token::at(TokenKind::OperLow, c, line, col)
                }
                Some(c @ ('*' | '/')) => {
                    self.advance();
                    Token::at(TokenKind::OperHigh, c, line, col)
                }
                Some(':') => {
                    if self.peek_next() == Some('=') {
                        self.advance();
                        self.advance();
                        Token::at(TokenKind::Assign, lexeme::ASSIGN, line, col)
                    } else {
                        return error_at(line, col, "Unexpected ':' (did you mean ':='?)");
                    }
                }
                Some(c) if c.is_ascii_digit() => {
                    let digits = self.read_while(|c| c.is_ascii_digit());
                    Token::at(TokenKind::Const, digits, line, col)
                }
                Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                    let word = self.read_while(|c| c.is_ascii_alphanumeric() || c == '_');
                    let kind = if lexeme::KEYWORDS.contains(&word.as_str()) {
                        TokenKind::Keyword
                    } else {
                        TokenKind::Ident
                    };
                    Token::at(kind, word, line, col)
                }
                Some(other) => {
                    return error_at(line, col, format!("Unexpected character '{}'", other));
                }
            };
            tokens.push(tk);
        }
        tracing::debug!(count = tokens.len(), "tokenized source");
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(input)
            .tokenize()
            .expect("Lexing should succeed")
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("Integer Begin End integer Ending _x1"),
            vec![
                (TokenKind::Keyword, "Integer".to_string()),
                (TokenKind::Keyword, "Begin".to_string()),
                (TokenKind::Keyword, "End".to_string()),
                (TokenKind::Ident, "integer".to_string()),
                (TokenKind::Ident, "Ending".to_string()),
                (TokenKind::Ident, "_x1".to_string()),
            ]
        );
    }

    #[test]
    fn test_operators_and_delimiters() {
        let got: Vec<TokenKind> = kinds("x:=(1+2)*3-4/y, ;").into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            got,
            vec![
                TokenKind::Ident,
                TokenKind::Assign,
                TokenKind::Delim,
                TokenKind::Const,
                TokenKind::OperLow,
                TokenKind::Const,
                TokenKind::Delim,
                TokenKind::OperHigh,
                TokenKind::Const,
                TokenKind::OperLow,
                TokenKind::Const,
                TokenKind::OperHigh,
                TokenKind::Ident,
                TokenKind::Delim,
                TokenKind::Delim,
            ]
        );
    }

    #[test]
    fn test_positions() {
        let tokens = Lexer::new("Integer x;\n  Begin").tokenize().unwrap();
        assert_eq!(tokens[0].position(), Some((1, 1)));
        assert_eq!(tokens[1].position(), Some((1, 9)));
        assert_eq!(tokens[2].position(), Some((1, 10)));
        assert_eq!(tokens[3].position(), Some((2, 3)));
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("// header\nx // trailing\n"),
            vec![(TokenKind::Ident, "x".to_string())]
        );
    }

    #[test]
    fn test_lex_errors() {
        let err = Lexer::new("x : 1").tokenize().unwrap_err();
        assert_eq!(err.span(), Some((1, 3)));
        assert!(err.msg.contains(":="));

        let err = Lexer::new("Begin\n  x # 1").tokenize().unwrap_err();
        assert_eq!(err.to_string(), "Unexpected character '#' at 2:5");
    }

    #[test]
    fn test_empty_input() {
        assert!(Lexer::new("  \n\t").tokenize().unwrap().is_empty());
    }
}
