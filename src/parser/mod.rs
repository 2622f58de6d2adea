//! Parser module for building the concrete syntax tree.
//!
//! This module contains the predictive recursive-descent parser that turns a
//! token sequence into a tree of `ast::ast::Node`. It handles:
//!
//! - The assignment statement `IDENT := <disjunction> ;`
//! - Left-associative `or`/`xor` and `and` chains, `and` binding tighter
//! - Parenthesized and negated atoms, identifiers and literals
//!
//! One token of lookahead, no backtracking; the first unmet expectation
//! aborts the parse.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
