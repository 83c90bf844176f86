//! Lexer (tokenizer) for arithmetic expressions
//!
//! Converts raw source text into a flat [`Token`] sequence consumed by the
//! parser. The sequence always ends with exactly one [`TokenKind::Eof`].
//! Integers only: a number is a maximal run of ASCII digits with no sign,
//! decimal point or exponent.

use super::ast::SourceLocation;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// All token kinds produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    Number,

    // Arithmetic
    Plus,  // +
    Minus, // -
    Mul,   // *
    Div,   // /

    // Punctuation
    LParen, // (
    RParen, // )

    // End of input
    Eof,
}

impl TokenKind {
    /// Binding power of a binary operator; `None` for every other kind.
    ///
    /// Higher binds tighter. Both levels associate to the left.
    pub fn precedence(self) -> Option<u8> {
        match self {
            TokenKind::Mul | TokenKind::Div => Some(40),
            TokenKind::Plus | TokenKind::Minus => Some(20),
            TokenKind::Number | TokenKind::LParen | TokenKind::RParen | TokenKind::Eof => None,
        }
    }

    pub fn is_binary_operator(self) -> bool {
        self.precedence().is_some()
    }

    /// Kind of a single-character operator or parenthesis
    fn from_punct(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Mul),
            '/' => Some(TokenKind::Div),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Mul => write!(f, "'*'"),
            TokenKind::Div => write!(f, "'/'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A single lexed token.
///
/// Carries its [`SourceLocation`] so that parse errors can report an
/// accurate position without a separate token→location table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// End-of-input marker at `location`
    pub fn eof(location: SourceLocation) -> Self {
        Self::new(TokenKind::Eof, String::new(), location)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Exact source text of the token; empty for [`TokenKind::Eof`]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Number => write!(f, "number {}", self.lexeme),
            kind => write!(f, "{}", kind),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character outside every recognized class
    #[error("unexpected character '{ch}' at {location}")]
    UnexpectedCharacter { ch: char, location: SourceLocation },
}

impl LexError {
    pub fn location(&self) -> SourceLocation {
        match self {
            LexError::UnexpectedCharacter { location, .. } => *location,
        }
    }
}

/// Lexer for arithmetic expressions
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
                continue;
            }

            let loc = self.current_location();

            if ch.is_ascii_digit() {
                tokens.push(self.number_literal(loc));
                continue;
            }

            let kind = TokenKind::from_punct(ch)
                .ok_or(LexError::UnexpectedCharacter { ch, location: loc })?;
            self.advance();
            tokens.push(Token::new(kind, ch, loc));
        }

        tokens.push(Token::eof(self.current_location()));
        debug!(tokens = tokens.len(), chars = self.input.len(), "lexed source");

        Ok(tokens)
    }

    /// Maximal run of ASCII digits starting at the cursor
    fn number_literal(&mut self, loc: SourceLocation) -> Token {
        let mut digits = String::new();

        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            digits.push(ch);
            self.advance();
        }

        Token::new(TokenKind::Number, digits, loc)
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.position, self.line, self.column)
    }
}

/// Tokenize `source` in one call
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}
