//! Expression parsing implementation
//!
//! Binary operators are folded with precedence climbing; primaries (number
//! literals and parenthesized expressions) use plain recursive descent.
//!
//! ```text
//! expression := primary (binaryOp)*
//! primary    := NUMBER | '(' expression ')'
//! ```
//!
//! Binding power comes from [`TokenKind::precedence`]: `*` and `/` bind at
//! 40, `+` and `-` at 20. Operators of equal precedence fold left to right.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::parse::{ParseError, Parser};
use tracing::trace;

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_primary()?;

        while self.peek_kind().is_binary_operator() {
            let op = self.consume();
            left = self.parse_binary_op(left, op)?;
        }

        Ok(left)
    }

    /// Build `left op right`, first folding any tighter-binding operators
    /// that follow into `right`.
    ///
    /// An operator of equal precedence is left for the caller's loop, which
    /// is what makes `8 - 3 - 2` parse as `(8 - 3) - 2`.
    fn parse_binary_op(&mut self, left: Expression, op: Token) -> Result<Expression, ParseError> {
        self.nested(|parser| {
            let current_precedence = op.kind().precedence().unwrap_or(0);
            let mut right = parser.parse_primary()?;

            while parser
                .peek_kind()
                .precedence()
                .is_some_and(|next| next > current_precedence)
            {
                let next_op = parser.consume();
                right = parser.parse_binary_op(right, next_op)?;
            }

            trace!(op = %op.kind(), precedence = current_precedence, "folded binary operator");
            Ok(Expression::binary(left, op, right))
        })
    }

    /// Parse a number literal or a parenthesized expression
    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        match self.peek_kind() {
            TokenKind::LParen => self.nested(|parser| {
                parser.consume();
                let expr = parser.parse_expression()?;

                if !parser.check(TokenKind::RParen) {
                    let token = parser.peek();
                    return Err(ParseError::MissingClosingParen {
                        found: token.kind(),
                        lexeme: token.lexeme().to_string(),
                        location: token.location(),
                    });
                }
                parser.consume();

                Ok(expr)
            }),

            TokenKind::Number => Ok(Expression::number(self.consume())),

            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Mul
            | TokenKind::Div
            | TokenKind::RParen
            | TokenKind::Eof => {
                let token = self.peek();
                Err(ParseError::UnexpectedToken {
                    found: token.kind(),
                    lexeme: token.lexeme().to_string(),
                    location: token.location(),
                })
            }
        }
    }
}
