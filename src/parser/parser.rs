//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct: a cursor over a borrowed
//! token slice with the primitives the grammar functions in `stmt` and
//! `expr` are written against.
//!
//! The cursor only ever moves forward. A parse either consumes the whole
//! token sequence or stops at the first error.

use tracing::{debug, trace};

use crate::{
    ast::ast::Stmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::stmt::parse_declaration;

/// The main parser structure that maintains parsing state.
///
/// This struct borrows the token stream and tracks the current position
/// in it. Tokens are never modified; the position is the only mutable state.
pub struct Parser<'a> {
    /// The list of tokens to parse
    tokens: &'a [Token],
    /// Current position in the token stream
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser instance positioned at the first token.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns true once the position is past the last token or on `EOF`.
    pub fn is_at_end(&self) -> bool {
        match self.tokens.get(self.pos) {
            Some(token) => token.kind == TokenKind::EOF,
            None => true,
        }
    }

    /// Returns the current token without advancing.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the most recently consumed token.
    pub fn previous(&self) -> Option<&'a Token> {
        self.pos.checked_sub(1).and_then(|pos| self.tokens.get(pos))
    }

    /// Returns the kind of the current token, `EOF` once the stream is exhausted.
    pub fn current_token_kind(&self) -> TokenKind {
        if self.is_at_end() {
            TokenKind::EOF
        } else {
            self.tokens[self.pos].kind
        }
    }

    /// Consumes the current token and returns it, unless the stream is exhausted.
    pub fn advance(&mut self) -> Option<&'a Token> {
        if self.is_at_end() {
            return None;
        }

        self.pos += 1;
        self.previous()
    }

    /// Checks whether the current token is of the given kind.
    pub fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.tokens[self.pos].kind == kind
    }

    /// Consumes the current token if it is of the given kind.
    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes and returns the current token if it is any of `kinds`.
    pub fn match_any(&mut self, kinds: &[TokenKind]) -> Option<&'a Token> {
        if kinds.iter().any(|kind| self.check(*kind)) {
            self.advance()
        } else {
            None
        }
    }

    /// Consumes a required token.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The kind that must be at the current position
    /// * `message` - Diagnostic carried by the error when it is missing
    ///
    /// # Returns
    ///
    /// Returns the consumed token, or an `ExpectedToken` error.
    pub fn expect(&mut self, expected_kind: TokenKind, message: &str) -> Result<&'a Token, Error> {
        if self.check(expected_kind) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }

        Err(Error::new(
            ErrorImpl::ExpectedToken {
                expected: expected_kind,
                token: self.current_lexeme(),
                message: String::from(message),
            },
            self.get_position(),
        ))
    }

    /// Returns the lexeme of the current token, `EOF` once past the end.
    pub fn current_lexeme(&self) -> String {
        self.peek()
            .map(|token| token.value.clone())
            .unwrap_or_else(|| String::from("EOF"))
    }

    /// Returns the current position in the source file.
    ///
    /// Past the end of the slice this is the end of the last token.
    pub fn get_position(&self) -> Position {
        match self.tokens.get(self.pos) {
            Some(token) => token.span.start.clone(),
            None => self
                .tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(Position::null),
        }
    }

    /// Parses declarations until the token stream is exhausted.
    ///
    /// Aborts on the first error; no partial program is returned.
    pub fn parse(&mut self) -> Result<Vec<Stmt>, Error> {
        let mut statements = vec![];

        while !self.is_at_end() {
            match parse_declaration(self) {
                Ok(stmt) => {
                    trace!(kind = ?stmt.get_stmt_type(), "parsed statement");
                    statements.push(stmt);
                }
                Err(error) => {
                    debug!(%error, "parse aborted");
                    return Err(error);
                }
            }
        }

        debug!(statements = statements.len(), "parsed program");
        Ok(statements)
    }
}

/// Parses a stream of tokens into a program.
///
/// This is the main entry point for parsing. It creates a parser over the
/// slice and parses every declaration until `EOF` or the end of the slice.
///
/// # Arguments
///
/// * `tokens` - Tokens to parse, normally terminated by `EOF`
///
/// # Returns
///
/// The top-level statements in source order, or the first syntax error.
#[tracing::instrument(level = "trace", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Vec<Stmt>, Error> {
    Parser::new(tokens).parse()
}
