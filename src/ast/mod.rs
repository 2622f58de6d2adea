/// Syntax tree module
/// Contains the concrete syntax tree produced by the parser
///
/// Submodules:
/// - ast: Node definitions, traversal and rendering
pub mod ast;
