//! Error types and error handling for the front end.
//!
//! This module defines the error type shared by the lexer and the parser.
//! It includes:
//!
//! - An error structure with source position information
//! - Specific error variants for tokenizing and parsing failures
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
