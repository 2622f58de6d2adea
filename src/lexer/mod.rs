//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a sequence of tokens for parsing. It handles:
//!
//! - Tokenization using an ordered table of regex patterns
//! - Recognition of keywords, constants, hex and Roman literals, identifiers
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
