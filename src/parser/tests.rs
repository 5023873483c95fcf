//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs including:
//! - Operator precedence and associativity
//! - Variable declarations
//! - Control flow statements and blocks
//! - Syntax errors
//! - The token cursor primitives

use std::sync::Arc;

use crate::{
    ast::{ast::Stmt, tests::SexprPrinter},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::parser::{parse, Parser};

fn tokens(source: &str) -> Vec<Token> {
    tokenize(source.to_string(), Some("test.lm".to_string())).unwrap()
}

fn parse_source(source: &str) -> Result<Vec<Stmt>, Error> {
    parse(&tokens(source))
}

fn sexprs(source: &str) -> Vec<String> {
    SexprPrinter::program(&parse_source(source).unwrap())
}

fn parse_error(source: &str) -> ErrorImpl {
    parse_source(source).unwrap_err().get_internal_error().clone()
}

fn expected(kind: TokenKind, token: &str, message: &str) -> ErrorImpl {
    ErrorImpl::ExpectedToken {
        expected: kind,
        token: token.to_string(),
        message: message.to_string(),
    }
}

#[test]
fn test_parse_multiplication_binds_tighter_than_addition() {
    assert_eq!(sexprs("1 + 2 * 3;"), ["(expr (+ 1 (* 2 3)))"]);
    assert_eq!(sexprs("1 * 2 + 3;"), ["(expr (+ (* 1 2) 3))"]);
}

#[test]
fn test_parse_subtraction_is_left_associative() {
    assert_eq!(sexprs("1 - 2 - 3;"), ["(expr (- (- 1 2) 3))"]);
    assert_eq!(sexprs("8 / 4 / 2;"), ["(expr (/ (/ 8 4) 2))"]);
}

#[test]
fn test_parse_grouping_overrides_precedence() {
    assert_eq!(sexprs("(1 + 2) * 3;"), ["(expr (* (+ 1 2) 3))"]);
    assert_eq!(sexprs("((1));"), ["(expr 1)"]);
}

#[test]
fn test_parse_comparison_and_equality_levels() {
    assert_eq!(sexprs("1 < 2 == true;"), ["(expr (== (< 1 2) true))"]);
    assert_eq!(sexprs("a != b >= c + 1;"), ["(expr (!= a (>= b (+ c 1))))"]);
    assert_eq!(sexprs("1 <= 2 > 0;"), ["(expr (> (<= 1 2) 0))"]);
}

#[test]
fn test_parse_unary_is_right_recursive() {
    assert_eq!(sexprs("- -1;"), ["(expr (- (- 1)))"]);
    assert_eq!(sexprs("+x * -y;"), ["(expr (* (+ x) (- y)))"]);
    assert_eq!(sexprs("-(1 + 2);"), ["(expr (- (+ 1 2)))"]);
}

#[test]
fn test_parse_literals() {
    assert_eq!(
        sexprs(r#"print nil; print "hi"; print false; print true; print 2.5;"#),
        [
            "(print nil)",
            "(print \"hi\")",
            "(print false)",
            "(print true)",
            "(print 2.5)"
        ]
    );
}

#[test]
fn test_parse_variable_declarations() {
    assert_eq!(
        sexprs("var a; let b = 1 + 2; var c = a;"),
        ["(var a)", "(var b (+ 1 2))", "(var c a)"]
    );
}

#[test]
fn test_parse_var_declaration_without_name() {
    assert_eq!(
        parse_error("var = 1;"),
        expected(TokenKind::Identifier, "=", "Expect variable name.")
    );
}

#[test]
fn test_parse_var_declaration_without_semicolon() {
    assert_eq!(
        parse_error("var a = 1"),
        expected(TokenKind::Semicolon, "EOF", "Expect ';' after variable declaration.")
    );
}

#[test]
fn test_parse_if_statement() {
    assert_eq!(sexprs("if x > 0 print x;"), ["(if (> x 0) (print x))"]);
}

#[test]
fn test_parse_if_else_statement() {
    assert_eq!(
        sexprs("if x { print 1; } else { print 2; }"),
        ["(if x (block (print 1)) (block (print 2)))"]
    );
}

#[test]
fn test_parse_else_if_chain() {
    assert_eq!(
        sexprs("if a print 1; else if b print 2; else print 3;"),
        ["(if a (print 1) (if b (print 2) (print 3)))"]
    );
}

#[test]
fn test_parse_dangling_else_binds_to_nearest_if() {
    let program = parse_source("if a if b print 1; else print 2;").unwrap();

    assert_eq!(program.len(), 1);
    let Stmt::If(outer) = &program[0] else {
        panic!("expected if statement");
    };
    assert!(outer.else_branch().is_none());

    let Stmt::If(inner) = outer.then_branch() else {
        panic!("expected nested if statement");
    };
    assert_eq!(SexprPrinter::stmt(inner.else_branch().unwrap()), "(print 2)");
}

#[test]
fn test_parse_nested_blocks() {
    assert_eq!(
        sexprs("{ var a = 1; { print a; } } {}"),
        ["(block (var a 1) (block (print a)))", "(block)"]
    );
}

#[test]
fn test_parse_block_without_closing_brace() {
    assert_eq!(
        parse_error("{ print 1;"),
        expected(TokenKind::CloseCurly, "EOF", "Expect '}' after block.")
    );
}

#[test]
fn test_parse_missing_semicolon_after_print() {
    let result = parse_source("print 1");

    assert!(result.is_err());
    assert_eq!(
        result.unwrap_err().get_internal_error(),
        &expected(TokenKind::Semicolon, "EOF", "Expect ';' after value.")
    );
}

#[test]
fn test_parse_missing_semicolon_after_expression() {
    assert_eq!(
        parse_error("1 + 2 print 3;"),
        expected(TokenKind::Semicolon, "print", "Expect ';' after expression.")
    );
}

#[test]
fn test_parse_bare_semicolon_is_unexpected() {
    assert_eq!(
        parse_error(";"),
        ErrorImpl::UnexpectedToken {
            token: ";".to_string()
        }
    );
}

#[test]
fn test_parse_dangling_operator_reports_position() {
    let error = parse_source("print 1 +;").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 9);
    assert_eq!(*error.get_position().1, "test.lm");
}

#[test]
fn test_parse_missing_operand_at_end_of_input() {
    assert_eq!(
        parse_error("print 1 *"),
        ErrorImpl::UnexpectedToken {
            token: "EOF".to_string()
        }
    );
}

#[test]
fn test_parse_stray_else_is_unexpected() {
    assert_eq!(
        parse_error("else print 1;"),
        ErrorImpl::UnexpectedToken {
            token: "else".to_string()
        }
    );
}

#[test]
fn test_parse_missing_closing_paren_is_fatal() {
    let missing = expected(TokenKind::CloseParen, ";", "Expect ')' after expression.");

    assert_eq!(parse_error("print (1 + 2;"), missing);
    assert_eq!(parse_error("print -(1;"), missing);
    assert_eq!(parse_error("print 2 * (1;"), missing);
}

#[test]
fn test_parse_aborts_without_partial_program() {
    // The first two statements are valid, the error still discards them
    assert!(parse_source("print 1; print 2; print ;").is_err());
}

#[test]
fn test_parse_empty_program() {
    assert!(parse_source("").unwrap().is_empty());
    assert!(parse(&[]).unwrap().is_empty());
}

#[test]
fn test_parse_without_eof_token() {
    let mut toks = tokens("print 1;");
    toks.pop();

    assert_eq!(SexprPrinter::program(&parse(&toks).unwrap()), ["(print 1)"]);
}

#[test]
fn test_parse_error_past_end_of_tokens() {
    let mut toks = tokens("print 1");
    toks.pop();

    let error = parse(&toks).unwrap_err();
    assert_eq!(
        error.get_internal_error(),
        &expected(TokenKind::Semicolon, "EOF", "Expect ';' after value.")
    );
    // End of the last real token
    assert_eq!(error.get_position().0, 7);
}

#[test]
fn test_parse_is_idempotent() {
    let toks = tokens("var a = 1; if a < 2 { print -a * (3 + 4); } else print \"no\";");

    let first = parse(&toks).unwrap();
    let second = parse(&toks).unwrap();

    assert_eq!(first, second);
    assert_eq!(SexprPrinter::program(&first), SexprPrinter::program(&second));
}

#[test]
fn test_parse_statement_spans() {
    let program = parse_source("print 1 + 2;\n{ 3; }").unwrap();

    assert_eq!(program[0].get_span().start.0, 0);
    assert_eq!(program[0].get_span().end.0, 12);
    assert_eq!(program[1].get_span().start.0, 13);
    assert_eq!(program[1].get_span().end.0, 19);
}

fn span(start: u32, end: u32) -> Span {
    let file = Arc::new("manual".to_string());
    Span {
        start: Position(start, Arc::clone(&file)),
        end: Position(end, file),
    }
}

#[test]
fn test_parse_tokens_without_literal_values() {
    let toks = vec![
        Token::new(TokenKind::Print, "print", span(0, 5)),
        Token::new(TokenKind::Number, "4", span(6, 7)),
        Token::new(TokenKind::Plus, "+", span(8, 9)),
        Token::new(TokenKind::String, "s", span(10, 13)),
        Token::new(TokenKind::Semicolon, ";", span(13, 14)),
        Token::new(TokenKind::EOF, "EOF", span(14, 14)),
    ];

    assert_eq!(SexprPrinter::program(&parse(&toks).unwrap()), ["(print (+ 4 \"s\"))"]);
}

#[test]
fn test_parse_invalid_number_lexeme() {
    let toks = vec![
        Token::new(TokenKind::Number, "4x", span(0, 2)),
        Token::new(TokenKind::Semicolon, ";", span(2, 3)),
    ];

    let error = parse(&toks).unwrap_err();
    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_parse_unknown_token() {
    let toks = vec![
        Token::new(TokenKind::Unknown, "$", span(0, 1)),
        Token::new(TokenKind::EOF, "EOF", span(1, 1)),
    ];

    assert_eq!(
        parse(&toks).unwrap_err().get_internal_error(),
        &ErrorImpl::UnexpectedToken {
            token: "$".to_string()
        }
    );
}

#[test]
fn test_cursor_primitives() {
    let toks = tokens("print x;");
    let mut parser = Parser::new(&toks);

    assert!(parser.check(TokenKind::Print));
    assert!(!parser.match_kind(TokenKind::If));
    assert_eq!(parser.peek().map(|t| t.kind), Some(TokenKind::Print));
    assert!(parser.match_kind(TokenKind::Print));
    assert_eq!(parser.previous().map(|t| t.value.as_str()), Some("print"));
    assert_eq!(parser.advance().map(|t| t.value.as_str()), Some("x"));
    assert!(parser.expect(TokenKind::Semicolon, "Expect ';'.").is_ok());

    // Exhausted: sitting on EOF, nothing more is consumed
    assert!(parser.is_at_end());
    assert!(!parser.check(TokenKind::EOF));
    assert_eq!(parser.current_token_kind(), TokenKind::EOF);
    assert!(parser.advance().is_none());
    assert_eq!(parser.peek().map(|t| t.kind), Some(TokenKind::EOF));
}

#[test]
fn test_cursor_match_any_returns_operator() {
    let toks = tokens("* 2");
    let mut parser = Parser::new(&toks);

    assert!(parser.match_any(&[TokenKind::Plus, TokenKind::Dash]).is_none());
    let operator = parser.match_any(&[TokenKind::Slash, TokenKind::Star]).unwrap();
    assert_eq!(operator.kind, TokenKind::Star);
    assert_eq!(parser.current_token_kind(), TokenKind::Number);
}

#[test]
fn test_parser_instance_parse() {
    let toks = tokens("print 1; print 2;");
    let mut parser = Parser::new(&toks);

    assert_eq!(parser.parse().unwrap().len(), 2);
    assert!(parser.is_at_end());
}
