use crate::{
    lexer::tokens::{Literal, Token},
    Span,
};

use super::ast::Expr;

// LITERALS

/// Literal Expression
/// Represents a boolean, number, string or nil literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    value: Literal,
    span: Span,
}

impl LiteralExpr {
    pub fn new(value: Literal, span: Span) -> Self {
        LiteralExpr { value, span }
    }

    pub fn value(&self) -> &Literal {
        &self.value
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Variable Expression
/// Represents a reference to a variable by name. Resolution is left to the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    name: Token,
}

impl VariableExpr {
    pub fn new(name: Token) -> Self {
        VariableExpr { name }
    }

    pub fn name(&self) -> &Token {
        &self.name
    }

    pub fn get_span(&self) -> &Span {
        &self.name.span
    }
}

// COMPLEX

/// Unary Expression
/// Represents a prefix `+` or `-` applied to an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    operator: Token,
    right: Box<Expr>,
    span: Span,
}

impl UnaryExpr {
    pub fn new(operator: Token, right: Expr) -> Self {
        UnaryExpr {
            span: operator.span.to(right.get_span()),
            operator,
            right: Box::new(right),
        }
    }

    pub fn operator(&self) -> &Token {
        &self.operator
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Binary Expression
/// Represents an arithmetic, comparison or equality operation between two expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    left: Box<Expr>,
    operator: Token,
    right: Box<Expr>,
    span: Span,
}

impl BinaryExpr {
    pub fn new(left: Expr, operator: Token, right: Expr) -> Self {
        BinaryExpr {
            span: left.get_span().to(right.get_span()),
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn left(&self) -> &Expr {
        &self.left
    }

    pub fn operator(&self) -> &Token {
        &self.operator
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }
}
