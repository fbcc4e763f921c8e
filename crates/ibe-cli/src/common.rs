use owo_colors::OwoColorize;

use ibe_syntax::{lexeme, Expected, TokenKind, Violation};

pub fn provide_error_suggestions(v: &Violation) {
    let found_kind = v.found.as_ref().map(|t| t.kind);

    match v.expected {
        // Declaration section
        Expected::Lexeme(lexeme::INTEGER) => {
            eprintln!("{}", "💡 Help: A program starts with its variable declarations.".yellow());
            eprintln!("    {}", "Example: Integer a, b;".bright_black());
        }
        Expected::Lexeme(lexeme::SEMICOLON) if found_kind == Some(TokenKind::Keyword) => {
            eprintln!("{}", "💡 Help: Close the declaration list with ';' before 'Begin'.".yellow());
            eprintln!("    {}", "Example: Integer a, b; Begin ... End".bright_black());
        }
        Expected::Kind(TokenKind::Delim) => {
            eprintln!("{}", "💡 Help: Separate declared variables with ',' and end the list with ';'.".yellow());
        }

        // Assignment block
        Expected::Lexeme(lexeme::BEGIN) => {
            eprintln!("{}", "💡 Help: Assignments must be wrapped in 'Begin' ... 'End'.".yellow());
        }
        Expected::Kind(TokenKind::Ident) if found_kind == Some(TokenKind::Keyword) => {
            eprintln!("{}", "💡 Help: The block between 'Begin' and 'End' needs at least one assignment.".yellow());
            eprintln!("    {}", "Example: Begin a := 1; End".bright_black());
        }
        Expected::Kind(TokenKind::Ident) => {
            eprintln!("{}", "💡 Help: Expected a variable name.".yellow());
        }
        Expected::Lexeme(lexeme::ASSIGN) => {
            eprintln!("{}", "💡 Help: Assignments use ':=', not '='.".yellow());
            eprintln!("    {}", "Example: a := b + 1;".bright_black());
        }
        Expected::Lexeme(lexeme::SEMICOLON) => {
            eprintln!("{}", "💡 Help: Every assignment ends with ';'.".yellow());
            if found_kind == Some(TokenKind::Delim) {
                eprintln!("    {}", "Check if parentheses are balanced".bright_black());
            }
        }
        Expected::Lexeme(lexeme::END) => {
            eprintln!("{}", "💡 Help: Did you forget the closing 'End' keyword?".yellow());
        }

        // Expressions
        Expected::Lexeme(lexeme::RIGHT_PAREN) => {
            eprintln!("{}", "💡 Help: Check if parentheses are balanced.".yellow());
        }
        Expected::Operand => {
            eprintln!("{}", "💡 Help: An operator or ':=' must be followed by a value.".yellow());
            eprintln!("    {}", "Operands are variables, integer constants or parenthesized expressions".bright_black());
        }

        Expected::EndOfInput => {
            eprintln!("{}", "💡 Help: Nothing may follow the closing 'End'.".yellow());
            eprintln!("    {}", "Drop --strict (or unset IBE_STRICT) to ignore trailing tokens".bright_black());
        }

        _ => {}
    }
}
