/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Node enums, type discriminants and the visitor traits
/// - expressions: Payloads of the expression variants
/// - statements: Payloads of the statement variants
pub mod ast;
pub mod expressions;
pub mod statements;
