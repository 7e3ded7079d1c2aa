/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The statement enum and its helpers
/// - expressions: Definitions for the expression kinds
/// - statements: Definitions for blocks and the statement kinds
pub mod ast;
pub mod expressions;
pub mod statements;
