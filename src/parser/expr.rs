//! Expression grammar, lowest precedence first.
//!
//! ```text
//! expression  := equality
//! equality    := comparison ( ("!=" | "==") comparison )*
//! comparison  := term ( (">" | ">=" | "<" | "<=") term )*
//! term        := factor ( ("+" | "-") factor )*
//! factor      := unary ( ("*" | "/") unary )*
//! unary       := ("+" | "-") unary | primary
//! primary     := "false" | "true" | "nil" | NUMBER | STRING | IDENTIFIER
//!              | "(" expression ")"
//! ```

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Literal, Token, TokenKind},
};

use super::parser::Parser;

pub type OperandHandler<'a> = fn(&mut Parser<'a>) -> Result<Expr, Error>;

pub fn parse_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    parse_equality_expr(parser)
}

/// Parses one left-associative precedence level.
///
/// Each operator found folds the expression so far into the left operand
/// of a new binary node.
fn parse_binary_level<'a>(
    parser: &mut Parser<'a>,
    operators: &[TokenKind],
    operand: OperandHandler<'a>,
) -> Result<Expr, Error> {
    let mut left = operand(parser)?;

    while let Some(operator) = parser.match_any(operators) {
        let right = operand(parser)?;
        left = Expr::binary(left, operator.clone(), right);
    }

    Ok(left)
}

pub fn parse_equality_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    parse_binary_level(
        parser,
        &[TokenKind::NotEquals, TokenKind::Equals],
        parse_comparison_expr,
    )
}

pub fn parse_comparison_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    parse_binary_level(
        parser,
        &[
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::Less,
            TokenKind::LessEquals,
        ],
        parse_term_expr,
    )
}

pub fn parse_term_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    parse_binary_level(parser, &[TokenKind::Plus, TokenKind::Dash], parse_factor_expr)
}

pub fn parse_factor_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    parse_binary_level(parser, &[TokenKind::Star, TokenKind::Slash], parse_unary_expr)
}

pub fn parse_unary_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    if let Some(operator) = parser.match_any(&[TokenKind::Plus, TokenKind::Dash]) {
        let right = parse_unary_expr(parser)?;
        return Ok(Expr::unary(operator.clone(), right));
    }

    parse_primary_expr(parser)
}

pub fn parse_primary_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let Some(token) = parser.peek().filter(|token| token.kind != TokenKind::EOF) else {
        return Err(unexpected_token(parser));
    };

    let expr = match token.kind {
        TokenKind::False => Expr::literal(Literal::Boolean(false), token.span.clone()),
        TokenKind::True => Expr::literal(Literal::Boolean(true), token.span.clone()),
        TokenKind::Nil => Expr::literal(Literal::Nil, token.span.clone()),
        TokenKind::Number | TokenKind::String => {
            Expr::literal(literal_value(token)?, token.span.clone())
        }
        TokenKind::Identifier => Expr::variable(token.clone()),
        TokenKind::OpenParen => return parse_grouping_expr(parser),
        _ => return Err(unexpected_token(parser)),
    };

    parser.advance();
    Ok(expr)
}

/// Grouping yields the inner expression; the closing `)` is required.
pub fn parse_grouping_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen, "Expect '('.")?;
    let expr = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen, "Expect ')' after expression.")?;

    Ok(expr)
}

/// Value of a `Number` or `String` token.
///
/// Tokens from other producers may come without a parsed literal, in which
/// case the lexeme is converted here.
fn literal_value(token: &Token) -> Result<Literal, Error> {
    if let Some(literal) = &token.literal {
        return Ok(literal.clone());
    }

    match token.kind {
        TokenKind::Number => token.value.parse().map(Literal::Number).map_err(|_| {
            Error::new(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            )
        }),
        _ => Ok(Literal::String(token.value.clone())),
    }
}

fn unexpected_token(parser: &Parser<'_>) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            token: parser.current_lexeme(),
        },
        parser.get_position(),
    )
}
