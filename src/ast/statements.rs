use std::slice::Iter;

use crate::{lexer::tokens::Token, Span};

use super::ast::{Expr, Stmt};

/// An expression evaluated for its side effects only.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    expression: Expr,
    span: Span,
}

impl ExpressionStmt {
    pub fn new(expression: Expr, span: Span) -> Self {
        ExpressionStmt { expression, span }
    }

    pub fn expression(&self) -> &Expr {
        &self.expression
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    expression: Expr,
    span: Span,
}

impl PrintStmt {
    pub fn new(expression: Expr, span: Span) -> Self {
        PrintStmt { expression, span }
    }

    pub fn expression(&self) -> &Expr {
        &self.expression
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Variable declaration.
///
/// A missing initializer is left as `None`; the evaluator binds nil in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct VarStmt {
    name: Token,
    initializer: Option<Expr>,
    span: Span,
}

impl VarStmt {
    pub fn new(name: Token, initializer: Option<Expr>, span: Span) -> Self {
        VarStmt {
            name,
            initializer,
            span,
        }
    }

    pub fn name(&self) -> &Token {
        &self.name
    }

    pub fn initializer(&self) -> Option<&Expr> {
        self.initializer.as_ref()
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    condition: Expr,
    then_branch: Box<Stmt>,
    else_branch: Option<Box<Stmt>>,
    span: Span,
}

impl IfStmt {
    pub fn new(condition: Expr, then_branch: Stmt, else_branch: Option<Stmt>, span: Span) -> Self {
        IfStmt {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
            span,
        }
    }

    pub fn condition(&self) -> &Expr {
        &self.condition
    }

    pub fn then_branch(&self) -> &Stmt {
        &self.then_branch
    }

    pub fn else_branch(&self) -> Option<&Stmt> {
        self.else_branch.as_deref()
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }
}

/// A braced sequence of statements. Marks a scope boundary for the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    body: Vec<Stmt>,
    span: Span,
}

impl BlockStmt {
    pub fn new(body: Vec<Stmt>, span: Span) -> Self {
        BlockStmt { body, span }
    }

    pub fn statements(&self) -> &[Stmt] {
        &self.body
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }
}
