// AST (Abstract Syntax Tree) definitions for arithmetic expressions

use super::lexer::{Token, TokenKind};

/// Source location information for error reporting
///
/// `offset` counts characters (not bytes) from the start of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Location of the first character of a source text
    pub fn start() -> Self {
        Self::new(0, 1, 1)
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A parsed arithmetic expression.
///
/// The tree is strictly nested: every child is owned by exactly one parent
/// and all leaves are [`Expression::Number`]. Parentheses from the source do
/// not appear as nodes; they only shape the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Integer literal; `value.kind()` is always [`TokenKind::Number`]
    Number { value: Token },

    /// `left op right`, where `op` is one of `+ - * /`
    BinaryOp {
        left: Box<Expression>,
        op: Token,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn number(value: Token) -> Self {
        debug_assert_eq!(value.kind(), TokenKind::Number);
        Expression::Number { value }
    }

    pub fn binary(left: Expression, op: Token, right: Expression) -> Self {
        debug_assert!(op.kind().is_binary_operator());
        Expression::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Expression::Number { .. })
    }

    pub fn is_binary_op(&self) -> bool {
        matches!(self, Expression::BinaryOp { .. })
    }

    /// The literal token, if this is a leaf
    pub fn as_number(&self) -> Option<&Token> {
        match self {
            Expression::Number { value } => Some(value),
            Expression::BinaryOp { .. } => None,
        }
    }

    /// `(left, op, right)`, if this is an operator node
    pub fn as_binary_op(&self) -> Option<(&Expression, &Token, &Expression)> {
        match self {
            Expression::Number { .. } => None,
            Expression::BinaryOp { left, op, right } => Some((left, op, right)),
        }
    }

    /// Location of the leftmost token covered by this expression.
    ///
    /// For an expression that started with `(`, this is the first number
    /// inside the parentheses.
    pub fn location(&self) -> SourceLocation {
        match self {
            Expression::Number { value } => value.location(),
            Expression::BinaryOp { left, .. } => left.location(),
        }
    }

    /// Number of nodes on the longest root-to-leaf path (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        match self {
            Expression::Number { .. } => 1,
            Expression::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Number of [`Expression::Number`] leaves
    pub fn leaf_count(&self) -> usize {
        match self {
            Expression::Number { .. } => 1,
            Expression::BinaryOp { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(lexeme: &str, offset: usize) -> Expression {
        Expression::number(Token::new(
            TokenKind::Number,
            lexeme,
            SourceLocation::new(offset, 1, offset + 1),
        ))
    }

    fn op(kind: TokenKind, lexeme: &str, offset: usize) -> Token {
        Token::new(kind, lexeme, SourceLocation::new(offset, 1, offset + 1))
    }

    #[test]
    fn test_leaf_accessors() {
        let leaf = num("42", 0);
        assert!(leaf.is_number());
        assert!(!leaf.is_binary_op());
        assert_eq!(leaf.as_number().map(Token::lexeme), Some("42"));
        assert!(leaf.as_binary_op().is_none());
        assert_eq!(leaf.depth(), 1);
        assert_eq!(leaf.leaf_count(), 1);
    }

    #[test]
    fn test_binary_accessors() {
        // 1 + 2 * 3
        let tree = Expression::binary(
            num("1", 0),
            op(TokenKind::Plus, "+", 2),
            Expression::binary(num("2", 4), op(TokenKind::Mul, "*", 6), num("3", 8)),
        );

        let (left, op, right) = tree.as_binary_op().expect("Expected binary op");
        assert_eq!(left.as_number().map(Token::lexeme), Some("1"));
        assert_eq!(op.kind(), TokenKind::Plus);
        assert!(right.is_binary_op());
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.location().offset, 0);
    }

    #[test]
    fn test_location_display() {
        assert_eq!(SourceLocation::new(7, 2, 3).to_string(), "2:3");
        assert_eq!(SourceLocation::start(), SourceLocation::new(0, 1, 1));
    }
}
