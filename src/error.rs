//! Error type for the one-shot [`parse_source`](crate::parse_source) pipeline
//!
//! Lexing and parsing keep their own error types; [`SyntaxError`] wraps
//! whichever stage failed so callers can use `?` across both.

use crate::parser::ast::SourceLocation;
use crate::parser::lexer::LexError;
use crate::parser::parse::ParseError;
use thiserror::Error;

/// Failure from either stage of the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    pub fn location(&self) -> SourceLocation {
        match self {
            SyntaxError::Lex(err) => err.location(),
            SyntaxError::Parse(err) => err.location(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_source;

    #[test]
    fn test_lex_failure_wrapped() {
        let err = parse_source("1 % 2").unwrap_err();

        assert!(matches!(err, SyntaxError::Lex(LexError::UnexpectedCharacter { ch: '%', .. })));
        assert_eq!(err.location().offset, 2);
        assert_eq!(err.to_string(), "unexpected character '%' at 1:3");
    }

    #[test]
    fn test_parse_failure_wrapped() {
        let err = parse_source("1 +").unwrap_err();

        assert!(matches!(err, SyntaxError::Parse(ParseError::UnexpectedToken { .. })));
        assert_eq!(err.location().offset, 3);
    }
}
