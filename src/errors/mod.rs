//! Error types and error handling for the scanner and parser.
//!
//! This module defines the error types used by both phases. It includes:
//!
//! - Error structures with source position information
//! - Lexical and syntax error variants
//! - Helpful suggestions for error display

pub mod errors;
