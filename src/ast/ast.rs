use crate::{
    lexer::tokens::{Literal, Token},
    Span,
};

use super::{
    expressions::{BinaryExpr, LiteralExpr, UnaryExpr, VariableExpr},
    statements::{BlockStmt, ExpressionStmt, IfStmt, PrintStmt, VarStmt},
};

/// Statement Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    ExpressionStmt,
    PrintStmt,
    VarStmt,
    IfStmt,
    BlockStmt,
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Literal,
    Unary,
    Binary,
    Variable,
}

/// Expression node.
///
/// Every variant owns its operands exclusively; a tree is never shared or
/// mutated once the parser hands it out.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Variable(VariableExpr),
}

impl Expr {
    pub fn literal(value: Literal, span: Span) -> Self {
        Expr::Literal(LiteralExpr::new(value, span))
    }

    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary(UnaryExpr::new(operator, right))
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary(BinaryExpr::new(left, operator, right))
    }

    pub fn variable(name: Token) -> Self {
        Expr::Variable(VariableExpr::new(name))
    }

    /// Returns the expression type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Literal(_) => ExprType::Literal,
            Expr::Unary(_) => ExprType::Unary,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Variable(_) => ExprType::Variable,
        }
    }

    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Literal(expr) => expr.get_span(),
            Expr::Unary(expr) => expr.get_span(),
            Expr::Binary(expr) => expr.get_span(),
            Expr::Variable(expr) => expr.get_span(),
        }
    }

    /// Calls the handler of `visitor` matching this node's variant.
    pub fn accept<V: ExprVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Literal(expr) => visitor.visit_literal_expr(expr),
            Expr::Unary(expr) => visitor.visit_unary_expr(expr),
            Expr::Binary(expr) => visitor.visit_binary_expr(expr),
            Expr::Variable(expr) => visitor.visit_variable_expr(expr),
        }
    }
}

/// Statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    Print(PrintStmt),
    Var(VarStmt),
    If(IfStmt),
    Block(BlockStmt),
}

impl Stmt {
    pub fn expression(expression: Expr, span: Span) -> Self {
        Stmt::Expression(ExpressionStmt::new(expression, span))
    }

    pub fn print(expression: Expr, span: Span) -> Self {
        Stmt::Print(PrintStmt::new(expression, span))
    }

    pub fn var(name: Token, initializer: Option<Expr>, span: Span) -> Self {
        Stmt::Var(VarStmt::new(name, initializer, span))
    }

    pub fn if_stmt(condition: Expr, then_branch: Stmt, else_branch: Option<Stmt>, span: Span) -> Self {
        Stmt::If(IfStmt::new(condition, then_branch, else_branch, span))
    }

    pub fn block(statements: Vec<Stmt>, span: Span) -> Self {
        Stmt::Block(BlockStmt::new(statements, span))
    }

    /// Returns the type of the statement.
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Expression(_) => StmtType::ExpressionStmt,
            Stmt::Print(_) => StmtType::PrintStmt,
            Stmt::Var(_) => StmtType::VarStmt,
            Stmt::If(_) => StmtType::IfStmt,
            Stmt::Block(_) => StmtType::BlockStmt,
        }
    }

    /// Returns the span of the statement.
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Expression(stmt) => stmt.get_span(),
            Stmt::Print(stmt) => stmt.get_span(),
            Stmt::Var(stmt) => stmt.get_span(),
            Stmt::If(stmt) => stmt.get_span(),
            Stmt::Block(stmt) => stmt.get_span(),
        }
    }

    /// Calls the handler of `visitor` matching this node's variant.
    pub fn accept<V: StmtVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Stmt::Expression(stmt) => visitor.visit_expression_stmt(stmt),
            Stmt::Print(stmt) => visitor.visit_print_stmt(stmt),
            Stmt::Var(stmt) => visitor.visit_var_stmt(stmt),
            Stmt::If(stmt) => visitor.visit_if_stmt(stmt),
            Stmt::Block(stmt) => visitor.visit_block_stmt(stmt),
        }
    }
}

/// Expression Visitor
///
/// One handler per expression variant. Evaluators, printers and analyzers
/// implement this outside the AST and pick their own `Output`.
pub trait ExprVisitor {
    type Output;

    fn visit_literal_expr(&mut self, expr: &LiteralExpr) -> Self::Output;
    fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> Self::Output;
    fn visit_binary_expr(&mut self, expr: &BinaryExpr) -> Self::Output;
    fn visit_variable_expr(&mut self, expr: &VariableExpr) -> Self::Output;
}

/// Statement Visitor
///
/// One handler per statement variant.
pub trait StmtVisitor {
    type Output;

    fn visit_expression_stmt(&mut self, stmt: &ExpressionStmt) -> Self::Output;
    fn visit_print_stmt(&mut self, stmt: &PrintStmt) -> Self::Output;
    fn visit_var_stmt(&mut self, stmt: &VarStmt) -> Self::Output;
    fn visit_if_stmt(&mut self, stmt: &IfStmt) -> Self::Output;
    fn visit_block_stmt(&mut self, stmt: &BlockStmt) -> Self::Output;
}
