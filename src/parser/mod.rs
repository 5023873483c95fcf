//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! token sequence into a list of statements. It handles:
//!
//! - Statement parsing (variable declarations, print, if/else, blocks)
//! - Expression parsing by precedence climbing (equality down to primary)
//! - Fail-fast error reporting on the first syntax error
//!
//! Each precedence level parses operands at the next tighter level and
//! folds operators to the left, so associativity and precedence follow
//! from the call structure alone.

pub mod expr;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
