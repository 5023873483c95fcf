use crate::{
    ast::ast::Stmt,
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::expr::parse_expr,
};

use super::parser::Parser;

/// declaration := varDecl | statement
pub fn parse_declaration(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Var | TokenKind::Let => parse_var_decl_stmt(parser),
        _ => parse_stmt(parser),
    }
}

/// Dispatches on the current token. New statement forms go before the
/// expression-statement fallthrough.
pub fn parse_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Print => parse_print_stmt(parser),
        TokenKind::If => parse_if_stmt(parser),
        TokenKind::OpenCurly => parse_block_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_var_decl_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    let keyword = match parser.match_any(&[TokenKind::Var, TokenKind::Let]) {
        Some(keyword) => keyword,
        None => parser.expect(TokenKind::Var, "Expect 'var' or 'let'.")?,
    };

    let name = parser.expect(TokenKind::Identifier, "Expect variable name.")?;

    let initializer = if parser.match_kind(TokenKind::Assignment) {
        Some(parse_expr(parser)?)
    } else {
        None
    };

    let end = parser.expect(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;

    Ok(Stmt::var(name.clone(), initializer, keyword.span.to(&end.span)))
}

pub fn parse_print_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    let keyword = parser.expect(TokenKind::Print, "Expect 'print'.")?;

    let value = parse_expr(parser)?;
    let end = parser.expect(TokenKind::Semicolon, "Expect ';' after value.")?;

    Ok(Stmt::print(value, keyword.span.to(&end.span)))
}

pub fn parse_if_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    let keyword = parser.expect(TokenKind::If, "Expect 'if'.")?;

    let condition = parse_expr(parser)?;
    // The then-branch is consumed in full first, so `else` binds to the nearest `if`
    let then_branch = parse_stmt(parser)?;

    let else_branch = if parser.match_kind(TokenKind::Else) {
        Some(parse_stmt(parser)?)
    } else {
        None
    };

    let last = else_branch.as_ref().unwrap_or(&then_branch);
    let span = keyword.span.to(last.get_span());

    Ok(Stmt::if_stmt(condition, then_branch, else_branch, span))
}

pub fn parse_block_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    let open = parser.expect(TokenKind::OpenCurly, "Expect '{'.")?;

    let mut statements = Vec::new();
    while !parser.check(TokenKind::CloseCurly) && !parser.is_at_end() {
        statements.push(parse_declaration(parser)?);
    }

    let close = parser.expect(TokenKind::CloseCurly, "Expect '}' after block.")?;

    Ok(Stmt::block(statements, open.span.to(&close.span)))
}

pub fn parse_expression_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    let expression = parse_expr(parser)?;
    let end = parser.expect(TokenKind::Semicolon, "Expect ';' after expression.")?;

    let span = expression.get_span().to(&end.span);
    Ok(Stmt::expression(expression, span))
}
