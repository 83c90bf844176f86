//! # Introduction
//!
//! exprtree turns integer arithmetic written as text into a tree that an
//! evaluator or printer can walk.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST
//! ```
//!
//! 1. [`parser::lexer`] — scans the source into [`Token`]s ending in a single
//!    [`TokenKind::Eof`].
//! 2. [`parser::parse`] / [`parser::expressions`] — recursive descent with
//!    precedence climbing builds an [`Expression`].
//! 3. [`error`] — [`SyntaxError`] joins both stages for [`parse_source`].
//!
//! ## Example
//!
//! ```
//! use exprtree::{parse_source, TokenKind};
//!
//! let expr = parse_source("2 + 3 * 4").unwrap();
//! let (left, op, right) = expr.as_binary_op().unwrap();
//!
//! assert_eq!(op.kind(), TokenKind::Plus);
//! assert_eq!(left.as_number().unwrap().lexeme(), "2");
//! assert!(right.is_binary_op());
//! ```
//!
//! Diagnostics are emitted through [`tracing`]; install a subscriber to see
//! them.

pub mod error;
pub mod parser;

pub use error::SyntaxError;
pub use parser::ast::{Expression, SourceLocation};
pub use parser::lexer::{lex, LexError, Lexer, Token, TokenKind};
pub use parser::parse::{parse, parse_with_config, ParseError, Parser, ParserConfig, DEFAULT_MAX_DEPTH};

/// Lex and parse `source` with the default [`ParserConfig`]
pub fn parse_source(source: &str) -> Result<Expression, SyntaxError> {
    let tokens = lex(source)?;
    Ok(parse(tokens)?)
}
