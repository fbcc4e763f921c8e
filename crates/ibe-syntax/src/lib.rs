pub mod error;
pub mod token;
pub mod violation;

pub use error::*;
pub use token::*;
pub use violation::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_matching() {
        let tok = Token::new(TokenKind::Delim, ";");
        assert!(tok.is(TokenKind::Delim));
        assert!(tok.is_lexeme(TokenKind::Delim, lexeme::SEMICOLON));
        assert!(!tok.is_lexeme(TokenKind::Delim, ","));
        assert!(!tok.is_lexeme(TokenKind::Keyword, lexeme::SEMICOLON));
    }

    #[test]
    fn test_operator_kinds() {
        assert!(TokenKind::OperLow.is_operator());
        assert!(TokenKind::OperHigh.is_operator());
        assert!(!TokenKind::Assign.is_operator());
        assert!(!TokenKind::Delim.is_operator());
    }

    #[test]
    fn test_violation_messages() {
        let found = Token::at(TokenKind::Delim, ";", 2, 8);
        let v = Violation::new(Expected::Lexeme(lexeme::RIGHT_PAREN), Some(&found));
        assert_eq!(v.to_string(), "Expected ')', found delimiter ';'");

        let v = Violation::new(Expected::Operand, Some(&found));
        assert_eq!(v.to_string(), "Expected operand, found delimiter ';'");

        let v = Violation::new(Expected::Kind(TokenKind::Delim), None);
        assert_eq!(v.to_string(), "Expected delimiter, found end of input");
    }

    #[test]
    fn test_violation_to_error_keeps_position() {
        let found = Token::at(TokenKind::Keyword, "Begin", 3, 1);
        let err = Violation::new(Expected::Lexeme(lexeme::SEMICOLON), Some(&found)).to_error();
        assert_eq!(err.span(), Some((3, 1)));
        assert_eq!(err.to_string(), "Expected ';', found keyword 'Begin' at 3:1");

        let unlocated = Token::new(TokenKind::Keyword, "Begin");
        let err: Error = Violation::new(Expected::Lexeme(lexeme::SEMICOLON), Some(&unlocated)).into();
        assert_eq!(err.span(), None);
    }

    #[test]
    fn test_token_json_aliases() {
        let tokens: Vec<Token> = serde_json::from_str(
            r#"[{"kind": "ASGN", "text": ":="}, {"kind": "OperHigh", "text": "*", "line": 4, "col": 2}]"#,
        )
        .expect("valid token json");
        assert_eq!(tokens[0], Token::new(TokenKind::Assign, ":="));
        assert_eq!(tokens[1], Token::at(TokenKind::OperHigh, "*", 4, 2));
    }
}
