//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, configuration, cursor helpers, and the main parse
//! entry point.
//!
//! # Parser Architecture
//!
//! - This module: Parser struct, helper methods, and coordination
//! - `expressions`: precedence table walk and primary expressions
//!
//! # Implementation
//!
//! Parser methods are split across files using `impl Parser` blocks, so the
//! expression grammar lives next to its own tests while sharing the cursor
//! state defined here.

use crate::parser::ast::*;
use crate::parser::lexer::{Token, TokenKind};
use thiserror::Error;
use tracing::debug;

/// Default limit on nested primaries and operator folds.
///
/// Each level costs a few stack frames, so the limit keeps pathological
/// input such as `((((...))))` from overflowing the call stack.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A primary expression was expected but `found` is neither a number
    /// nor `(`
    #[error("unexpected token: {found} at {location}")]
    UnexpectedToken {
        found: TokenKind,
        lexeme: String,
        location: SourceLocation,
    },

    /// A parenthesized expression was not followed by `)`
    #[error("expected closing parenthesis, found {found} at {location}")]
    MissingClosingParen {
        found: TokenKind,
        lexeme: String,
        location: SourceLocation,
    },

    /// Tokens remain after a complete expression
    #[error("unexpected trailing input: {found} at {location}")]
    TrailingInput {
        found: TokenKind,
        lexeme: String,
        location: SourceLocation,
    },

    /// Nesting exceeded [`ParserConfig::max_depth`]
    #[error("expression nested deeper than {limit} levels at {location}")]
    NestingTooDeep {
        limit: usize,
        location: SourceLocation,
    },
}

impl ParseError {
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::UnexpectedToken { location, .. }
            | ParseError::MissingClosingParen { location, .. }
            | ParseError::TrailingInput { location, .. }
            | ParseError::NestingTooDeep { location, .. } => *location,
        }
    }

    /// Kind of the offending token, if the error is about one
    pub fn found(&self) -> Option<TokenKind> {
        match self {
            ParseError::UnexpectedToken { found, .. }
            | ParseError::MissingClosingParen { found, .. }
            | ParseError::TrailingInput { found, .. } => Some(*found),
            ParseError::NestingTooDeep { .. } => None,
        }
    }
}

/// Parsing policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting of primaries and operator folds
    pub max_depth: usize,
    /// Stop after the first complete expression instead of requiring `Eof`
    pub allow_trailing_tokens: bool,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_trailing_tokens: false,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_trailing_tokens(mut self) -> Self {
        self.allow_trailing_tokens = true;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Recursive descent parser for arithmetic expressions
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    pub(crate) depth: usize,
    pub(crate) config: ParserConfig,
    /// Returned whenever the cursor runs past the sequence
    eof: Token,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    pub fn with_config(tokens: Vec<Token>, config: ParserConfig) -> Self {
        let eof = match tokens.last() {
            Some(last) if last.is_eof() => last.clone(),
            Some(last) => {
                // Caller-built sequence without a terminator: place Eof
                // right after the last token.
                let loc = last.location();
                let width = last.lexeme().chars().count();
                Token::eof(SourceLocation::new(
                    loc.offset + width,
                    loc.line,
                    loc.column + width,
                ))
            }
            None => Token::eof(SourceLocation::start()),
        };

        Self {
            tokens,
            position: 0,
            depth: 0,
            config,
            eof,
        }
    }

    /// Parse one expression and apply the trailing-token policy
    pub fn parse(&mut self) -> Result<Expression, ParseError> {
        let expr = self.parse_expression()?;

        if !self.config.allow_trailing_tokens && !self.is_at_end() {
            let token = self.peek();
            return Err(ParseError::TrailingInput {
                found: token.kind(),
                lexeme: token.lexeme().to_string(),
                location: token.location(),
            });
        }

        debug!(
            consumed = self.position,
            depth = expr.depth(),
            leaves = expr.leaf_count(),
            "parsed expression"
        );

        Ok(expr)
    }

    /// Index of the next unconsumed token
    pub fn position(&self) -> usize {
        self.position
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&self.eof)
    }

    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.peek().kind()
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Return the current token and move past it
    pub(crate) fn consume(&mut self) -> Token {
        let token = self.peek().clone();
        self.position += 1;
        token
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    /// Run `f` one nesting level deeper, failing once the configured limit
    /// is reached
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.config.max_depth,
                location: self.current_location(),
            });
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

/// Parse a full token sequence with the default configuration
pub fn parse(tokens: Vec<Token>) -> Result<Expression, ParseError> {
    Parser::new(tokens).parse()
}

pub fn parse_with_config(tokens: Vec<Token>, config: ParserConfig) -> Result<Expression, ParseError> {
    Parser::with_config(tokens, config).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::lex;

    #[test]
    fn test_parse_single_number() {
        let expr = parse(lex("42").unwrap()).unwrap();

        assert_eq!(expr.as_number().map(Token::lexeme), Some("42"));
    }

    #[test]
    fn test_trailing_rparen_rejected() {
        let err = parse(lex("2 + 3)").unwrap()).unwrap_err();

        assert_eq!(
            err,
            ParseError::TrailingInput {
                found: TokenKind::RParen,
                lexeme: ")".to_string(),
                location: SourceLocation::new(5, 1, 6),
            }
        );
    }

    #[test]
    fn test_trailing_tokens_allowed() {
        let tokens = lex("2 + 3) * 4").unwrap();
        let mut parser = Parser::with_config(tokens, ParserConfig::new().with_trailing_tokens());
        let expr = parser.parse().unwrap();

        assert_eq!(expr.leaf_count(), 2);
        assert_eq!(parser.position(), 3);
        assert_eq!(parser.peek_kind(), TokenKind::RParen);
    }

    #[test]
    fn test_trailing_number_rejected() {
        let err = parse(lex("1 2").unwrap()).unwrap_err();
        assert_eq!(err.found(), Some(TokenKind::Number));
        assert_eq!(err.location().offset, 2);
    }

    #[test]
    fn test_empty_sequence_uses_synthesized_eof() {
        let err = parse(Vec::new()).unwrap_err();

        assert_eq!(err.found(), Some(TokenKind::Eof));
        assert_eq!(err.location(), SourceLocation::start());
    }

    #[test]
    fn test_unterminated_sequence_uses_synthesized_eof() {
        let mut tokens = lex("12 +").unwrap();
        tokens.pop();

        let err = parse(tokens).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                found: TokenKind::Eof,
                lexeme: String::new(),
                location: SourceLocation::new(4, 1, 5),
            }
        );
    }

    #[test]
    fn test_missing_eof_still_parses_complete_expression() {
        let mut tokens = lex("7 * 6").unwrap();
        tokens.pop();

        let expr = parse(tokens).unwrap();
        assert_eq!(expr.leaf_count(), 2);
    }

    #[test]
    fn test_config_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!config.allow_trailing_tokens);
        assert_eq!(config.with_max_depth(3).max_depth, 3);
    }

    #[test]
    fn test_error_display() {
        let err = parse(lex("").unwrap()).unwrap_err();
        assert_eq!(err.to_string(), "unexpected token: end of input at 1:1");

        let err = parse(lex("(1").unwrap()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected closing parenthesis, found end of input at 1:3"
        );
    }
}
