//! Arithmetic expression parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser state, errors and configuration (tokens → AST)
//! - [`expressions`]: Precedence climbing over binary operators
//! - [`ast`]: AST node definitions
//!
//! # Supported Grammar
//!
//! - Non-negative integer literals of any length
//! - Binary `+ - * /`, left-associative, `*` and `/` binding tighter
//! - Parentheses for grouping
//! - No unary operators, decimals or identifiers
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for binary operators.
//! No external parser generator dependencies.

pub mod ast;
pub mod expressions;
pub mod lexer;
pub mod parse;
