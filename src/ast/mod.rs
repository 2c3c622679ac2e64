/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Expr` node enum and its helpers
/// - display: The textual form printed by the driver
/// - operators: Binary operators and their source symbols
pub mod ast;
pub mod display;
pub mod operators;
